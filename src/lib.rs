//! Drive hobby servos through a 16-channel PCA9685-class PWM controller over I2C.
//!
//! The crate turns an angle in degrees into the chip's 12-bit PWM off-count and
//! writes it to one of the sixteen channels. The first command also runs the chip's
//! one-time setup: oscillator prescale for a 50 Hz frame, every channel parked at
//! 90°, then the oscillator restarted.
//!
//! Start with [`Servo16`] for blocking code, [`SharedServo16`] when several
//! callers share one chip, or [`Servo16Async`] for `async` HALs.
//!
//! # Example
//!
//! ```rust,no_run
//! use i2c_servo16::{Servo16, Servo16Config};
//! # fn example<I2C, D>(i2c: I2C, delay: D) -> i2c_servo16::Result<(), I2C::Error>
//! # where
//! #     I2C: embedded_hal::i2c::I2c,
//! #     D: embedded_hal::delay::DelayNs,
//! # {
//! let mut servos = Servo16::new(i2c, delay, Servo16Config::default());
//!
//! servos.set_servo_angle(0, 0)?; // first call initializes the chip
//! servos.set_servo_angle(15, 180.0)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Glossary
//!
//! - **Frame:** one complete 50 Hz PWM cycle (20 ms), divided into 4096 ticks.
//! - **Off-count:** the tick within a frame at which a channel's output goes low.
//!   Every channel goes high at tick 0, so the off-count is the pulse width in ticks.
//! - **Prescale:** the chip register dividing the internal oscillator down to the
//!   frame rate. Written once, while the oscillator is asleep.
//! - **Channel:** one of the 16 PWM outputs, numbered 0 through 15.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod asynch;
pub mod channel;
pub mod config;
mod error;
pub mod plan;
pub mod pulse;
pub mod register;
pub mod servo16;
pub mod shared;

pub use crate::asynch::{Servo16Async, SharedServo16Async};
pub use crate::channel::Channel;
pub use crate::config::{OscillatorClock, Servo16Config};
pub use crate::error::{Error, Result};
pub use crate::pulse::OffCount;
pub use crate::register::DEVICE_ADDRESS;
pub use crate::servo16::Servo16;
pub use crate::shared::SharedServo16;
