use core::fmt::Debug;

use crate::channel::InvalidChannel;

/// A specialized [`Result`](core::result::Result) whose error type is [`Error`].
///
/// `E` is the I2C transport's error type.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Errors returned by the servo controllers.
///
/// Nothing is retried. A transport failure aborts the remaining writes of the
/// current call, which can leave a channel's OFF-low and OFF-high bytes out of step
/// until the next successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The channel index was 16 or more. No bus traffic was issued.
    #[display("{}", InvalidChannel(*_0))]
    InvalidChannel(u8),
    /// An I2C transaction failed (absent device, NACK, arbitration loss, ...).
    #[display("I2C transport error: {_0:?}")]
    Transport(E),
}

impl<E: Debug> core::error::Error for Error<E> {}

impl<E> From<InvalidChannel> for Error<E> {
    fn from(InvalidChannel(index): InvalidChannel) -> Self {
        Self::InvalidChannel(index)
    }
}
