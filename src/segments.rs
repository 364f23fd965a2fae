//! Segment patterns for the digits 0-9.
//!
//! Patterns are polarity-neutral: a set bit means "lit". Bit 0 is segment A, bit 6 is
//! segment G and bit 7 is the decimal point.
//!
//! ```text
//!    AAAA
//!   F    B
//!   F    B
//!    GGGG
//!   E    C
//!   E    C
//!    DDDD  DP
//! ```

use crate::{Error, Result};

/// The number of segment lines: A-G plus the decimal point.
pub const SEGMENT_COUNT: usize = 8;

/// A set of lit segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    /// Segment A of the 7-segment display.
    pub const SEG_A: u8 = 0b_0000_0001;
    /// Segment B of the 7-segment display.
    pub const SEG_B: u8 = 0b_0000_0010;
    /// Segment C of the 7-segment display.
    pub const SEG_C: u8 = 0b_0000_0100;
    /// Segment D of the 7-segment display.
    pub const SEG_D: u8 = 0b_0000_1000;
    /// Segment E of the 7-segment display.
    pub const SEG_E: u8 = 0b_0001_0000;
    /// Segment F of the 7-segment display.
    pub const SEG_F: u8 = 0b_0010_0000;
    /// Segment G of the 7-segment display.
    pub const SEG_G: u8 = 0b_0100_0000;
    /// Decimal point. Never set by [`Segments::from_digit`].
    pub const DECIMAL: u8 = 0b_1000_0000;

    /// Segments in segment-pin order: A through G, then the decimal point.
    pub const PIN_ORDER: [u8; SEGMENT_COUNT] = [
        Self::SEG_A,
        Self::SEG_B,
        Self::SEG_C,
        Self::SEG_D,
        Self::SEG_E,
        Self::SEG_F,
        Self::SEG_G,
        Self::DECIMAL,
    ];

    /// Segments for the digits 0-9.
    pub const DIGITS: [u8; 10] = [
        Self::SEG_A | Self::SEG_B | Self::SEG_C | Self::SEG_D | Self::SEG_E | Self::SEG_F, // 0
        Self::SEG_B | Self::SEG_C,                                                        // 1
        Self::SEG_A | Self::SEG_B | Self::SEG_D | Self::SEG_E | Self::SEG_G,              // 2
        Self::SEG_A | Self::SEG_B | Self::SEG_C | Self::SEG_D | Self::SEG_G,              // 3
        Self::SEG_B | Self::SEG_C | Self::SEG_F | Self::SEG_G,                            // 4
        Self::SEG_A | Self::SEG_C | Self::SEG_D | Self::SEG_F | Self::SEG_G,              // 5
        Self::SEG_A | Self::SEG_C | Self::SEG_D | Self::SEG_E | Self::SEG_F | Self::SEG_G, // 6
        Self::SEG_A | Self::SEG_B | Self::SEG_C,                                          // 7
        Self::SEG_A
            | Self::SEG_B
            | Self::SEG_C
            | Self::SEG_D
            | Self::SEG_E
            | Self::SEG_F
            | Self::SEG_G, // 8
        // 9 has no bottom bar
        Self::SEG_A | Self::SEG_B | Self::SEG_C | Self::SEG_F | Self::SEG_G,
    ];

    /// Looks up the pattern for `digit`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigitValue`] if `digit` is not in `0..=9`.
    pub fn from_digit(digit: u8) -> Result<Self> {
        Self::DIGITS
            .get(usize::from(digit))
            .map(|&bits| Self(bits))
            .ok_or(Error::InvalidDigitValue(digit))
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every segment in the `segment` mask (e.g. [`Segments::SEG_A`]) is lit.
    #[must_use]
    pub const fn is_lit(self, segment: u8) -> bool {
        self.0 & segment == segment
    }

    /// The lit state of every segment line, in [`Segments::PIN_ORDER`].
    pub fn lit_states(self) -> impl Iterator<Item = bool> {
        Self::PIN_ORDER
            .into_iter()
            .map(move |segment| self.is_lit(segment))
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit() {
        assert_eq!(Segments::from_digit(0).map(Segments::bits).ok(), Some(0b_0011_1111));
        assert_eq!(Segments::from_digit(1).map(Segments::bits).ok(), Some(0b_0000_0110));
        assert_eq!(Segments::from_digit(8).map(Segments::bits).ok(), Some(0b_0111_1111));
        assert_eq!(Segments::from_digit(9).map(Segments::bits).ok(), Some(0b_0110_0111));
    }

    #[test]
    fn test_from_digit_rejects_out_of_range() {
        assert!(matches!(
            Segments::from_digit(10),
            Err(Error::InvalidDigitValue(10))
        ));
        assert!(matches!(
            Segments::from_digit(255),
            Err(Error::InvalidDigitValue(255))
        ));
    }

    #[test]
    fn test_digits_never_light_decimal() {
        for digit in 0..=9 {
            let segments = Segments::from_digit(digit).expect("digit in range");
            assert!(
                !segments.is_lit(Segments::DECIMAL),
                "digit {digit} lights the decimal point"
            );
        }
    }

    #[test]
    fn test_lit_states_order() {
        // '7' is A, B and C; the decimal point comes last
        let segments = Segments::from_digit(7).expect("digit in range");
        let mut states = [true; SEGMENT_COUNT];
        for (state, lit) in states.iter_mut().zip(segments.lit_states()) {
            *state = lit;
        }
        assert_eq!(
            states,
            [true, true, true, false, false, false, false, false]
        );
    }

    #[test]
    fn test_is_lit_masks() {
        let four = Segments::from_digit(4).expect("digit in range");
        assert!(four.is_lit(Segments::SEG_B | Segments::SEG_C));
        assert!(!four.is_lit(Segments::SEG_A));
        assert!(!four.is_lit(Segments::SEG_A | Segments::SEG_B));
    }
}
