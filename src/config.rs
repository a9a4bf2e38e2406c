//! Chip configuration: oscillator calibration, soft reset, and settle delay.
//!
//! Two board revisions exist. They differ only in the oscillator frequency used to
//! compute the prescale, whether the chip is soft-reset first, and whether writes
//! are followed by a settle delay. The angle-to-pulse mapping is identical on both.

use crate::pulse::{PWM_COUNTER_TICKS, UPDATE_FREQ_HZ};

/// Settle delay used by the revised board (milliseconds).
pub const SETTLE_DELAY_MS_DEFAULT: u32 = 10;

/// Smallest prescale the chip accepts.
const PRESCALE_MIN: u32 = 3;

/// Largest prescale the chip accepts.
const PRESCALE_MAX: u32 = 0xFF;

/// Counter ticks per second at the servo frame rate.
const TICK_RATE_HZ: u32 = PWM_COUNTER_TICKS * UPDATE_FREQ_HZ;

/// The oscillator frequency the prescale is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OscillatorClock {
    /// Datasheet 25 MHz internal oscillator. First board revision; prescale 121 (`0x79`).
    #[default]
    Nominal,
    /// Measured clock, 9% above nominal (27.25 MHz). Revised board; prescale 132 (`0x84`).
    Corrected,
}

impl OscillatorClock {
    /// Oscillator frequency in hertz.
    #[must_use]
    pub const fn hz(self) -> u32 {
        match self {
            Self::Nominal => 25_000_000,
            Self::Corrected => 27_250_000,
        }
    }

    /// Prescale byte for a 50 Hz frame: `floor(hz / (4096 * 50)) - 1`.
    #[must_use]
    pub const fn prescale(self) -> u8 {
        let prescale = match self.hz().checked_div(TICK_RATE_HZ) {
            Some(divider) => divider.saturating_sub(1),
            None => PRESCALE_MAX,
        };
        let clamped = if prescale < PRESCALE_MIN {
            PRESCALE_MIN
        } else if prescale > PRESCALE_MAX {
            PRESCALE_MAX
        } else {
            prescale
        };
        // Clamped to 0..=0xFF, so the low byte is the whole value.
        clamped.to_le_bytes()[0]
    }
}

/// How the controller sets up the chip and paces its writes.
///
/// Use one of the board presets or start from [`Default`] and adjust with the
/// `with_*` methods. All methods are `const`, so a configuration can live in a
/// `const` item.
///
/// # Example
///
/// ```rust
/// use i2c_servo16::{OscillatorClock, Servo16Config};
///
/// const CONFIG: Servo16Config = Servo16Config::ORIGINAL_BOARD
///     .with_oscillator(OscillatorClock::Corrected)
///     .with_settle_delay_ms(5);
///
/// assert_eq!(CONFIG.prescale(), 0x84);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Servo16Config {
    /// Oscillator frequency used to compute the prescale.
    pub oscillator: OscillatorClock,
    /// Write MODE1 = `0x80` (and hold) before the rest of the setup.
    pub soft_reset: bool,
    /// Pause after setup writes and after every channel update. `0` disables it.
    pub settle_delay_ms: u32,
}

impl Servo16Config {
    /// First board revision: nominal clock, no reset, no settle delay.
    pub const ORIGINAL_BOARD: Self = Self {
        oscillator: OscillatorClock::Nominal,
        soft_reset: false,
        settle_delay_ms: 0,
    };

    /// Revised board: corrected clock, soft reset, and 10 ms settle delays.
    pub const REVISED_BOARD: Self = Self {
        oscillator: OscillatorClock::Corrected,
        soft_reset: true,
        settle_delay_ms: SETTLE_DELAY_MS_DEFAULT,
    };

    /// Nominal clock, no soft reset, 10 ms settle delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            oscillator: OscillatorClock::Nominal,
            soft_reset: false,
            settle_delay_ms: SETTLE_DELAY_MS_DEFAULT,
        }
    }

    /// Replace the oscillator calibration.
    #[must_use]
    pub const fn with_oscillator(mut self, oscillator: OscillatorClock) -> Self {
        self.oscillator = oscillator;
        self
    }

    /// Enable or disable the soft reset at the start of setup.
    #[must_use]
    pub const fn with_soft_reset(mut self, soft_reset: bool) -> Self {
        self.soft_reset = soft_reset;
        self
    }

    /// Set the settle delay. `0` disables it.
    #[must_use]
    pub const fn with_settle_delay_ms(mut self, settle_delay_ms: u32) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    /// Prescale byte written during setup.
    #[must_use]
    pub const fn prescale(&self) -> u8 {
        self.oscillator.prescale()
    }
}

impl Default for Servo16Config {
    fn default() -> Self {
        Self::new()
    }
}
