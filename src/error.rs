use core::convert::Infallible;

use derive_more::derive::{Display, Error};

use crate::gpio::PinId;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
#[expect(missing_docs, reason = "The variants are self-explanatory.")]
#[derive(Debug, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // `#[error(not(source))]` below tells `derive_more` that `embassy_executor::SpawnError` does
    // not implement Rust's `core::error::Error` trait.
    #[cfg(feature = "rp")]
    #[display("{_0:?}")]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    #[display("GPIO hardware unavailable")]
    HardwareUnavailable,

    #[display("GPIO pin {_0} is unavailable or already in use")]
    PinUnavailable(#[error(not(source))] PinId),

    #[display("Digit count {_0} is out of range (1..=4)")]
    DigitCountOutOfRange(#[error(not(source))] u8),

    #[display("Digit pins are already configured")]
    DigitsAlreadyConfigured,

    #[display("Invalid digit value {_0} (expected 0..=9)")]
    InvalidDigitValue(#[error(not(source))] u8),

    #[display("Error setting output state")]
    CannotSetOutputState,
}

impl From<Infallible> for Error {
    fn from(_: Infallible) -> Self {
        Self::CannotSetOutputState
    }
}

#[cfg(feature = "rp")]
impl From<embassy_executor::SpawnError> for Error {
    fn from(err: embassy_executor::SpawnError) -> Self {
        Self::TaskSpawn(err)
    }
}
