//! 8x8 monochrome sprites, and conversion from the usual row-per-byte layout
//! to the column-per-byte layout our display driver expects.

pub const W: usize = 8;
pub const H: usize = 8;

/// One byte per row, top to bottom. Bit `i` of a row (counting from the LSB)
/// is the dot in column `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite(pub [u8; H]);

impl Sprite {
    /// Convert from horizontal to vertical layout: byte `col` of the output
    /// holds column `col` of the input, one bit per row.
    ///
    /// Both the source row and the destination bit are indexed by `7 - row`.
    /// Existing converted data depends on this exact mapping.
    pub fn rotate(self) -> Self {
        let rows = self.0;
        let mut out = [0u8; W];
        for col in 0..W {
            let mut val = 0;
            for row in 0..H {
                let bit = rows[7 - row] >> col & 1;
                val |= bit << (7 - row);
            }
            out[col] = val;
        }
        Self(out)
    }

    pub fn bytes(self) -> [u8; H] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::*;

    #[test_case([0x80; 8], [0, 0, 0, 0, 0, 0, 0, 0xff]; "left column")]
    #[test_case([0x01; 8], [0xff, 0, 0, 0, 0, 0, 0, 0]; "right column")]
    #[test_case([0xff, 0, 0, 0, 0, 0, 0, 0], [0x01; 8]; "top row")]
    #[test_case([0, 0, 0, 0, 0, 0, 0, 0xff], [0x80; 8]; "bottom row")]
    #[test_case(
        [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80],
        [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80];
        "diagonal"
    )]
    #[test_case(
        [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01],
        [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];
        "anti-diagonal"
    )]
    #[test_case(
        [0x3c, 0x42, 0x81, 0x81, 0xff, 0x81, 0x81, 0x00],
        [0x7c, 0x12, 0x11, 0x11, 0x11, 0x11, 0x12, 0x7c];
        "letter a"
    )]
    #[test_case([0; 8], [0; 8]; "blank")]
    #[test_case([0xff; 8], [0xff; 8]; "solid")]
    fn rotate(input: [u8; 8], expected: [u8; 8]) {
        let actual = Sprite(input).rotate();
        assert_eq!(Sprite(expected), actual);
    }

    proptest! {
        #[test]
        fn rotate_matches_plain_transpose(rows in any::<[u8; 8]>()) {
            let rotated = Sprite(rows).rotate().bytes();
            for r in 0..H {
                for c in 0..W {
                    let src = rows[r] >> c & 1;
                    let dst = rotated[c] >> r & 1;
                    prop_assert_eq!(src, dst, "row {}, col {}", r, c);
                }
            }
        }

        #[test]
        fn rotate_twice_is_identity(rows in any::<[u8; 8]>()) {
            let sprite = Sprite(rows);
            prop_assert_eq!(sprite, sprite.rotate().rotate());
        }
    }

    #[test]
    fn rotate_single_bits() {
        for r in 0..H {
            for c in 0..W {
                let mut rows = [0; H];
                rows[r] = 1 << c;
                let mut expected = [0; W];
                expected[c] = 1 << r;
                assert_eq!(Sprite(expected), Sprite(rows).rotate());
            }
        }
    }
}
