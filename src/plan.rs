//! Register traffic as data.
//!
//! Each controller operation is first turned into a short list of [`Step`]s and
//! then executed in order. The blocking and async controllers run the same plans,
//! so write ordering is defined once, here.

use heapless::Vec;

use crate::channel::Channel;
use crate::config::Servo16Config;
use crate::pulse::OffCount;
use crate::register::{
    ALL_LED_OFF_H, ALL_LED_OFF_L, ALL_LED_ON_H, ALL_LED_ON_L, MODE1, MODE1_ASLEEP, MODE1_AWAKE,
    MODE1_RESTART, PRE_SCALE,
};

/// Longest possible initialization plan.
pub const INIT_PLAN_CAPACITY: usize = 11;

/// Longest possible single-channel plan.
pub const ANGLE_PLAN_CAPACITY: usize = 3;

/// Angle every channel is parked at during initialization.
pub const CENTER_DEGREES: f64 = 90.0;

/// One unit of bus work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Write one byte to one register.
    Write {
        /// Register address.
        register: u8,
        /// Byte to store.
        value: u8,
    },
    /// Block for this many milliseconds.
    Delay {
        /// Duration in milliseconds.
        ms: u32,
    },
}

impl Step {
    /// A register write.
    #[must_use]
    pub const fn write(register: u8, value: u8) -> Self {
        Self::Write { register, value }
    }
}

/// Steps of the one-time chip setup.
pub type InitPlan = Vec<Step, INIT_PLAN_CAPACITY>;

/// Steps of one channel update.
pub type AnglePlan = Vec<Step, ANGLE_PLAN_CAPACITY>;

/// The chip setup sequence.
///
/// 1. Soft reset, then hold (only with [`Servo16Config::soft_reset`]).
/// 2. MODE1 = sleep. PRE_SCALE only accepts writes while the oscillator is off.
/// 3. PRE_SCALE, then hold while the oscillator settles.
/// 4. ALL_LED ON-low/high = 0: every pulse starts at tick 0.
/// 5. ALL_LED OFF-low/high = off-count of 90°, so no servo is driven to an end stop
///    by leftover register contents.
/// 6. MODE1 = awake, then hold.
///
/// Holds are left out when the settle delay is `0`.
#[must_use]
pub fn init_plan(config: &Servo16Config) -> InitPlan {
    let settle = settle_step(config);
    let center = OffCount::from_degrees(CENTER_DEGREES);
    [
        config
            .soft_reset
            .then_some(Step::write(MODE1, MODE1_RESTART)),
        settle.filter(|_| config.soft_reset),
        Some(Step::write(MODE1, MODE1_ASLEEP)),
        Some(Step::write(PRE_SCALE, config.prescale())),
        settle,
        Some(Step::write(ALL_LED_ON_L, 0)),
        Some(Step::write(ALL_LED_ON_H, 0)),
        Some(Step::write(ALL_LED_OFF_L, center.low_byte())),
        Some(Step::write(ALL_LED_OFF_H, center.high_byte())),
        Some(Step::write(MODE1, MODE1_AWAKE)),
        settle,
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// OFF-low, then OFF-high, then the settle hold.
///
/// Low goes first: until the high byte lands the channel briefly runs a mixed
/// count, and this order keeps that window to one transaction.
#[must_use]
pub fn angle_plan(config: &Servo16Config, channel: Channel, off_count: OffCount) -> AnglePlan {
    [
        Some(Step::write(channel.off_low_register(), off_count.low_byte())),
        Some(Step::write(channel.off_high_register(), off_count.high_byte())),
        settle_step(config),
    ]
    .into_iter()
    .flatten()
    .collect()
}

const fn settle_step(config: &Servo16Config) -> Option<Step> {
    if config.settle_delay_ms == 0 {
        None
    } else {
        Some(Step::Delay {
            ms: config.settle_delay_ms,
        })
    }
}
