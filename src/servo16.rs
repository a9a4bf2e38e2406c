//! A device abstraction for a 16-channel I2C servo controller (blocking).
//!
//! See [`Servo16`] for usage.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::channel::Channel;
use crate::config::Servo16Config;
use crate::plan::{Step, angle_plan, init_plan};
use crate::pulse::OffCount;
use crate::register::DEVICE_ADDRESS;
use crate::{Error, Result};

/// A device abstraction for a PCA9685-class servo controller on a blocking I2C bus.
///
/// The controller owns the bus handle, a delay provider, and its own record of
/// whether the chip has been set up. The first [`set_servo_angle`](Self::set_servo_angle)
/// (or an explicit [`initialize`](Self::initialize)) runs the setup sequence once;
/// later calls only write the channel's OFF registers.
///
/// `&mut self` on every operation keeps callers from interleaving. To share one
/// chip between several owners use [`SharedServo16`](crate::SharedServo16).
///
/// # Example
///
/// ```rust,no_run
/// use i2c_servo16::{Servo16, Servo16Config};
/// # fn example<I2C, D>(i2c: I2C, delay: D) -> i2c_servo16::Result<(), I2C::Error>
/// # where
/// #     I2C: embedded_hal::i2c::I2c,
/// #     D: embedded_hal::delay::DelayNs,
/// # {
/// let mut servos = Servo16::new(i2c, delay, Servo16Config::REVISED_BOARD);
///
/// servos.set_servo_angle(0, 45)?;
/// servos.set_servo_angle(1, 135.5)?;
/// assert!(servos.set_servo_angle(17, 90).is_err()); // only channels 0..=15
/// # Ok(())
/// # }
/// ```
pub struct Servo16<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Servo16Config,
    initialized: bool,
}

impl<I2C, D> Servo16<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a controller. No bus traffic happens until the first command.
    ///
    /// See the [struct-level example](Self) for usage.
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
    /// If a write fails the controller stays uninitialized and the next call starts
    /// the sequence over from the top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if any setup write fails.
    pub fn initialize(&mut self) -> Result<(), I2C::Error> {
        if self.initialized {
            return Ok(());
        }
        info!(
            "Servo16: initializing (prescale={=u8:#x})",
            self.config.prescale()
        );
        self.run(&init_plan(&self.config)).inspect_err(|_| {
            warn!("Servo16: initialization aborted");
        })?;
        self.initialized = true;
        info!("Servo16: initialized");
        Ok(())
    }

    /// Move the servo on `channel` (0..=15) to `degrees`.
    ///
    /// Initializes the chip first if needed. Angles outside 0..=180 are written
    /// unclamped.
    ///
    /// See the [struct-level example](Self) for usage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannel`] for `channel >= 16` before touching the bus,
    /// or [`Error::Transport`] if a write fails.
    pub fn set_servo_angle(
        &mut self,
        channel: u8,
        degrees: impl Into<f64>,
    ) -> Result<(), I2C::Error> {
        let channel = Channel::try_from(channel)?;
        let degrees = degrees.into();
        self.initialize()?;
        let off_count = OffCount::from_degrees(degrees);
        debug!(
            "Servo16: channel {} -> {} deg (off_count={})",
            channel.index(),
            degrees,
            off_count.value()
        );
        self.run(&angle_plan(&self.config, channel, off_count))
    }

    /// Whether the setup sequence has completed.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn run(&mut self, steps: &[Step]) -> Result<(), I2C::Error> {
        for step in steps {
            match *step {
                Step::Write { register, value } => {
                    trace!("Servo16: write {=u8:#x} <- {=u8:#x}", register, value);
                    self.i2c
                        .write(DEVICE_ADDRESS, &[register, value])
                        .map_err(Error::Transport)?;
                }
                Step::Delay { ms } => self.delay.delay_ms(ms),
            }
        }
        Ok(())
    }
}
