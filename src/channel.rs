//! The sixteen PWM outputs and their register blocks.
//!
//! See [`Channel`].

use crate::register::{SERVO_REG_BASE, SERVO_REG_STRIDE};

/// Number of PWM outputs on the chip.
pub const CHANNEL_COUNT: u8 = 16;

/// One of the chip's 16 PWM outputs, numbered 0 through 15.
///
/// Channel `n` owns the four registers starting at `0x08 + 4 * n`:
/// ON-low, ON-high, OFF-low, OFF-high. A `Channel` can only hold a valid index,
/// so every register address it yields is in range and the wrapping math below
/// never wraps.
///
/// # Example
///
/// ```rust
/// use i2c_servo16::Channel;
///
/// let channel = Channel::new(3).expect("3 is a valid channel");
/// assert_eq!(channel.off_low_register(), 0x08 + 4 * 3 + 2);
/// assert!(Channel::new(16).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel(u8);

/// Returned when converting an out-of-range index into a [`Channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("invalid servo channel {_0} (expected 0..=15)")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidChannel(pub u8);

impl core::error::Error for InvalidChannel {}

impl Channel {
    /// Every channel in ascending order.
    pub const ALL: [Self; CHANNEL_COUNT as usize] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
        Self(10),
        Self(11),
        Self(12),
        Self(13),
        Self(14),
        Self(15),
    ];

    /// The channel with this index, or `None` if `index` is 16 or more.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < CHANNEL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Zero-based channel index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// ON-low register of this channel.
    #[must_use]
    pub const fn on_low_register(self) -> u8 {
        SERVO_REG_BASE.wrapping_add(self.0.wrapping_mul(SERVO_REG_STRIDE))
    }

    /// ON-high register of this channel.
    #[must_use]
    pub const fn on_high_register(self) -> u8 {
        self.on_low_register().wrapping_add(1)
    }

    /// OFF-low register of this channel.
    #[must_use]
    pub const fn off_low_register(self) -> u8 {
        self.on_low_register().wrapping_add(2)
    }

    /// OFF-high register of this channel.
    #[must_use]
    pub const fn off_high_register(self) -> u8 {
        self.on_low_register().wrapping_add(3)
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(InvalidChannel(index))
    }
}

impl From<Channel> for u8 {
    fn from(channel: Channel) -> Self {
        channel.0
    }
}
