//! Decomposes a number into the values of the individual display digits.

/// The most digits a display can have.
pub const MAX_DIGIT_COUNT: usize = 4;
pub(crate) const MAX_DIGIT_COUNT_U8: u8 = MAX_DIGIT_COUNT as u8;

/// The base-10 digits of a value, least significant first.
///
/// Digit 1 is the ones place, digit 4 the thousands place. Places above the
/// thousands are dropped, so 12345 shows as 2345.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitValues([u8; MAX_DIGIT_COUNT]);

impl DigitValues {
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        Self([
            place(value, 1),
            place(value, 10),
            place(value, 100),
            place(value, 1000),
        ])
    }

    /// `(digit_index, digit_value)` pairs in refresh order: digit 4 first, digit 1 last.
    pub fn refresh_order(self) -> impl Iterator<Item = (u8, u8)> {
        (1..=MAX_DIGIT_COUNT_U8).rev().zip(self.0.into_iter().rev())
    }

    #[must_use]
    pub const fn as_array(&self) -> &[u8; MAX_DIGIT_COUNT] {
        &self.0
    }
}

#[expect(
    clippy::integer_division_remainder_used,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "Divisors are non-zero powers of ten and the remainder is always below 10"
)]
const fn place(value: u32, divisor: u32) -> u8 {
    (value / divisor % 10) as u8
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit() {
        assert_eq!(DigitValues::from_value(7).as_array(), &[7, 0, 0, 0]);
        assert_eq!(DigitValues::from_value(0).as_array(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_two_digits() {
        assert_eq!(DigitValues::from_value(42).as_array(), &[2, 4, 0, 0]);
    }

    #[test]
    fn test_three_digits_with_inner_zero() {
        assert_eq!(DigitValues::from_value(305).as_array(), &[5, 0, 3, 0]);
    }

    #[test]
    fn test_four_digits() {
        assert_eq!(DigitValues::from_value(1234).as_array(), &[4, 3, 2, 1]);
        assert_eq!(DigitValues::from_value(9999).as_array(), &[9, 9, 9, 9]);
    }

    #[test]
    fn test_overflow_drops_high_places() {
        assert_eq!(DigitValues::from_value(12_345).as_array(), &[5, 4, 3, 2]);
        assert_eq!(DigitValues::from_value(u32::MAX).as_array(), &[5, 9, 2, 7]);
    }

    #[test]
    fn test_refresh_order_most_significant_first() {
        let digits = DigitValues::from_value(1234);
        let mut order = [(0, 0); MAX_DIGIT_COUNT];
        for (slot, pair) in order.iter_mut().zip(digits.refresh_order()) {
            *slot = pair;
        }
        assert_eq!(order, [(4, 1), (3, 2), (2, 3), (1, 4)]);
    }
}
