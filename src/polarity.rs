//! Wiring polarity of a 7-segment display and the logical-to-electrical level translation.
//!
//! Every pin write in this crate goes through [`Polarity::segment_level`] or
//! [`Polarity::digit_level`]; nothing else decides whether a line is driven high or low.

use embedded_hal::digital::PinState;

/// How the LEDs of the display are wired.
///
/// | Polarity        | Segment lit | Segment off | Digit selected | Digit deselected |
/// |-----------------|-------------|-------------|----------------|------------------|
/// | `CommonAnode`   | Low         | High        | High           | Low              |
/// | `CommonCathode` | High        | Low         | Low            | High             |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Segment lines idle high and are pulled low to light; digit lines are driven high to select.
    CommonAnode,
    /// Segment lines idle low and are driven high to light; digit lines are pulled low to select.
    #[default]
    CommonCathode,
}

impl Polarity {
    /// Converts the `is_anode` flag used by most display datasheets.
    #[must_use]
    pub const fn from_is_anode(is_anode: bool) -> Self {
        if is_anode {
            Self::CommonAnode
        } else {
            Self::CommonCathode
        }
    }

    #[must_use]
    pub const fn is_anode(self) -> bool {
        matches!(self, Self::CommonAnode)
    }

    /// The level that lights (`lit == true`) or darkens a segment line.
    #[must_use]
    pub const fn segment_level(self, lit: bool) -> PinState {
        level(!self.is_anode(), lit)
    }

    /// The level that selects (`selected == true`) or deselects a digit line.
    #[must_use]
    pub const fn digit_level(self, selected: bool) -> PinState {
        level(self.is_anode(), selected)
    }
}

const fn level(active_high: bool, active: bool) -> PinState {
    if active_high == active {
        PinState::High
    } else {
        PinState::Low
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn test_common_anode_levels() {
        let polarity = Polarity::CommonAnode;
        assert_eq!(polarity.segment_level(true), PinState::Low);
        assert_eq!(polarity.segment_level(false), PinState::High);
        assert_eq!(polarity.digit_level(true), PinState::High);
        assert_eq!(polarity.digit_level(false), PinState::Low);
    }

    #[test]
    fn test_common_cathode_levels() {
        let polarity = Polarity::CommonCathode;
        assert_eq!(polarity.segment_level(true), PinState::High);
        assert_eq!(polarity.segment_level(false), PinState::Low);
        assert_eq!(polarity.digit_level(true), PinState::Low);
        assert_eq!(polarity.digit_level(false), PinState::High);
    }

    #[test]
    fn test_is_anode_flag() {
        assert_eq!(Polarity::from_is_anode(true), Polarity::CommonAnode);
        assert_eq!(Polarity::from_is_anode(false), Polarity::CommonCathode);
        assert!(Polarity::CommonAnode.is_anode());
        assert!(!Polarity::CommonCathode.is_anode());
    }
}
