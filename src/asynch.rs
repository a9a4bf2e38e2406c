//! Async counterparts of [`Servo16`](crate::Servo16) and
//! [`SharedServo16`](crate::SharedServo16) for `embedded-hal-async` HALs.
//!
//! Same setup sequence, same write order, same errors. Each `.await` completes only
//! once its I2C transaction has finished or failed.
//!
//! # Example
//!
//! ```rust,no_run
//! use i2c_servo16::{Servo16Async, Servo16Config};
//! # async fn example<I2C, D>(i2c: I2C, delay: D) -> i2c_servo16::Result<(), I2C::Error>
//! # where
//! #     I2C: embedded_hal_async::i2c::I2c,
//! #     D: embedded_hal_async::delay::DelayNs,
//! # {
//! let mut servos = Servo16Async::new(i2c, delay, Servo16Config::default());
//!
//! servos.set_servo_angle(4, 90).await?;
//! # Ok(())
//! # }
//! ```

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::channel::Channel;
use crate::config::Servo16Config;
use crate::plan::{Step, angle_plan, init_plan};
use crate::pulse::OffCount;
use crate::register::DEVICE_ADDRESS;
use crate::{Error, Result};

/// A device abstraction for a PCA9685-class servo controller on an async I2C bus.
///
/// See the [module-level example](self) for usage.
pub struct Servo16Async<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Servo16Config,
    initialized: bool,
}

impl<I2C, D> Servo16Async<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a controller. No bus traffic happens until the first command.
    #[must_use]
    pub const fn new(i2c: I2C, delay: D, config: Servo16Config) -> Self {
        Self {
            i2c,
            delay,
            config,
            initialized: false,
        }
    }

    /// Run the chip setup sequence unless it already completed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if any setup write fails; the next call starts over.
    pub async fn initialize(&mut self) -> Result<(), I2C::Error> {
        if self.initialized {
            return Ok(());
        }
        info!(
            "Servo16Async: initializing (prescale={=u8:#x})",
            self.config.prescale()
        );
        let plan = init_plan(&self.config);
        if let Err(err) = self.run(&plan).await {
            warn!("Servo16Async: initialization aborted");
            return Err(err);
        }
        self.initialized = true;
        info!("Servo16Async: initialized");
        Ok(())
    }

    /// Move the servo on `channel` (0..=15) to `degrees`, initializing first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannel`] for `channel >= 16` before touching the bus,
    /// or [`Error::Transport`] if a write fails.
    pub async fn set_servo_angle(
        &mut self,
        channel: u8,
        degrees: impl Into<f64>,
    ) -> Result<(), I2C::Error> {
        let channel = Channel::try_from(channel)?;
        let degrees = degrees.into();
        self.initialize().await?;
        let off_count = OffCount::from_degrees(degrees);
        debug!(
            "Servo16Async: channel {} -> {} deg (off_count={})",
            channel.index(),
            degrees,
            off_count.value()
        );
        let plan = angle_plan(&self.config, channel, off_count);
        self.run(&plan).await
    }

    /// Whether the setup sequence has completed.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    async fn run(&mut self, steps: &[Step]) -> Result<(), I2C::Error> {
        for step in steps {
            match *step {
                Step::Write { register, value } => {
                    trace!("Servo16Async: write {=u8:#x} <- {=u8:#x}", register, value);
                    self.i2c
                        .write(DEVICE_ADDRESS, &[register, value])
                        .await
                        .map_err(Error::Transport)?;
                }
                Step::Delay { ms } => self.delay.delay_ms(ms).await,
            }
        }
        Ok(())
    }
}

/// A [`Servo16Async`] behind an async mutex, usable through `&self` from many tasks.
///
/// The lock is held across the initialized check, the setup sequence, and the
/// channel write, so concurrent first commands produce one setup sequence. Waiting
/// tasks yield instead of blocking.
///
/// `M` only guards the lock's own state. `NoopRawMutex` is enough when every caller
/// runs on one executor; use `CriticalSectionRawMutex` to share across executors.
///
/// # Example
///
/// ```rust,no_run
/// use embassy_sync::blocking_mutex::raw::NoopRawMutex;
/// use i2c_servo16::{Servo16Config, SharedServo16Async};
/// # async fn example<I2C, D>(i2c: I2C, delay: D) -> i2c_servo16::Result<(), I2C::Error>
/// # where
/// #     I2C: embedded_hal_async::i2c::I2c,
/// #     D: embedded_hal_async::delay::DelayNs,
/// # {
/// let servos: SharedServo16Async<NoopRawMutex, _, _> =
///     SharedServo16Async::new(i2c, delay, Servo16Config::default());
///
/// servos.set_servo_angle(4, 90).await?;
/// # Ok(())
/// # }
/// ```
pub struct SharedServo16Async<M: RawMutex, I2C, D> {
    servo16: Mutex<M, Servo16Async<I2C, D>>,
}

impl<M, I2C, D> SharedServo16Async<M, I2C, D>
where
    M: RawMutex,
    I2C: I2c,
    D: DelayNs,
{
    /// Create a shared controller. No bus traffic happens until the first command.
    #[must_use]
    pub const fn new(i2c: I2C, delay: D, config: Servo16Config) -> Self {
        Self {
            servo16: Mutex::new(Servo16Async::new(i2c, delay, config)),
        }
    }

    /// Run the chip setup sequence unless it already completed.
    ///
    /// # Errors
    ///
    /// See [`Servo16Async::initialize`].
    pub async fn initialize(&self) -> Result<(), I2C::Error> {
        self.servo16.lock().await.initialize().await
    }

    /// Move the servo on `channel` (0..=15) to `degrees`.
    ///
    /// # Errors
    ///
    /// See [`Servo16Async::set_servo_angle`].
    pub async fn set_servo_angle(
        &self,
        channel: u8,
        degrees: impl Into<f64>,
    ) -> Result<(), I2C::Error> {
        let degrees = degrees.into();
        self.servo16
            .lock()
            .await
            .set_servo_angle(channel, degrees)
            .await
    }

    /// Whether the setup sequence has completed.
    pub async fn is_initialized(&self) -> bool {
        self.servo16.lock().await.is_initialized()
    }
}
