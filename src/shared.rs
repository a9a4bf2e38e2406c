//! A servo controller that several callers can share.
//!
//! See [`SharedServo16`] for usage.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::Result;
use crate::config::Servo16Config;
use crate::servo16::Servo16;

/// A [`Servo16`] behind an `embassy-sync` blocking mutex, usable through `&self`.
///
/// `M` picks the raw mutex: `CriticalSectionRawMutex` when callers run in several
/// contexts or threads, `ThreadModeRawMutex` or `NoopRawMutex` when they all run
/// on one executor.
///
/// Each call holds the lock for its whole duration: the "initialized yet?" check,
/// the setup sequence if it runs, and both bytes of the channel write. Two callers
/// racing to issue the first command therefore see exactly one setup sequence, and
/// one caller's OFF-low/OFF-high pair is never split by another's.
///
/// The settle delay runs inside the lock. With `CriticalSectionRawMutex` that means
/// interrupts stay blocked for the delay on single-core targets; keep it short or use
/// [`Servo16Async`](crate::Servo16Async) when other tasks must keep running.
///
/// # Example
///
/// ```rust,no_run
/// use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
/// use i2c_servo16::{Servo16Config, SharedServo16};
/// # fn example<I2C, D>(i2c: I2C, delay: D) -> i2c_servo16::Result<(), I2C::Error>
/// # where
/// #     I2C: embedded_hal::i2c::I2c,
/// #     D: embedded_hal::delay::DelayNs,
/// # {
/// let servos: SharedServo16<CriticalSectionRawMutex, _, _> =
///     SharedServo16::new(i2c, delay, Servo16Config::default());
/// let servos = &servos; // hand out shared references
///
/// servos.set_servo_angle(2, 30)?;
/// servos.set_servo_angle(3, 150)?;
/// # Ok(())
/// # }
/// ```
pub struct SharedServo16<M: RawMutex, I2C, D> {
    servo16: Mutex<M, RefCell<Servo16<I2C, D>>>,
}

impl<M, I2C, D> SharedServo16<M, I2C, D>
where
    M: RawMutex,
    I2C: I2c,
    D: DelayNs,
{
    /// Create a shared controller. No bus traffic happens until the first command.
    #[must_use]
    pub const fn new(i2c: I2C, delay: D, config: Servo16Config) -> Self {
        Self {
            servo16: Mutex::new(RefCell::new(Servo16::new(i2c, delay, config))),
        }
    }

    /// Run the chip setup sequence unless it already completed.
    ///
    /// # Errors
    ///
    /// See [`Servo16::initialize`].
    pub fn initialize(&self) -> Result<(), I2C::Error> {
        self.with_servo16(Servo16::initialize)
    }

    /// Move the servo on `channel` (0..=15) to `degrees`.
    ///
    /// See the [struct-level example](Self) for usage.
    ///
    /// # Errors
    ///
    /// See [`Servo16::set_servo_angle`].
    pub fn set_servo_angle(&self, channel: u8, degrees: impl Into<f64>) -> Result<(), I2C::Error> {
        let degrees = degrees.into();
        self.with_servo16(|servo16| servo16.set_servo_angle(channel, degrees))
    }

    /// Whether the setup sequence has completed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.with_servo16(|servo16| servo16.is_initialized())
    }

    fn with_servo16<R>(&self, f: impl FnOnce(&mut Servo16<I2C, D>) -> R) -> R {
        self.servo16.lock(|servo16| f(&mut servo16.borrow_mut()))
    }
}
