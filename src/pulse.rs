//! Angle to PWM off-count conversion.
//!
//! An angle maps linearly onto a pulse width between [`SERVO_PULSE_MIN_US`] and
//! [`SERVO_PULSE_MAX_US`], and the pulse width maps linearly onto the 4096 ticks of a
//! 20 ms frame. The final value is truncated toward zero, not rounded: 0° is 700 µs,
//! which is 143.36 ticks, which is written as 143.
//!
//! Angles outside 0..=180 are not clamped. They produce pulse widths outside the
//! servo's range and those are written as-is, the same as the vendor firmware does.

/// Degrees covered by the full pulse range.
pub const SERVO_ANGLE_RANGE_DEGREES: u16 = 180;

/// Pulse width for 0° (microseconds).
pub const SERVO_PULSE_MIN_US: u16 = 700;

/// Pulse width for 180° (microseconds).
pub const SERVO_PULSE_MAX_US: u16 = 2_300;

/// PWM frame rate expected by hobby servos.
pub const UPDATE_FREQ_HZ: u32 = 50;

/// Length of one frame (microseconds).
pub const FRAME_PERIOD_US: u32 = 1_000_000 / UPDATE_FREQ_HZ;

/// Ticks per frame (12-bit counter).
pub const PWM_COUNTER_TICKS: u32 = 4_096;

/// Magnitude from which a truncated tick count has all-zero low 16 bits (2^68).
const TICKS_WRAP_BOUND: f64 = 295_147_905_179_352_825_856.0;

/// Re-map `x` from `in_min..in_max` onto `out_min..out_max`, without clamping.
#[must_use]
pub fn linear_map(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (x - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Pulse width in microseconds for an angle in degrees.
#[must_use]
pub fn pulse_width_us(degrees: f64) -> f64 {
    linear_map(
        degrees,
        0.0,
        f64::from(SERVO_ANGLE_RANGE_DEGREES),
        f64::from(SERVO_PULSE_MIN_US),
        f64::from(SERVO_PULSE_MAX_US),
    )
}

/// The tick within a frame at which a channel's output goes low.
///
/// Holds the 16-bit value split across a channel's OFF-low and OFF-high registers.
/// For angles in 0..=180 the value is a 12-bit count between 143 and 471.
///
/// # Example
///
/// ```rust
/// use i2c_servo16::OffCount;
///
/// let center = OffCount::from_degrees(90.0);
/// assert_eq!(center.value(), 307);
/// assert_eq!(center.to_bytes(), [0x33, 0x01]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OffCount(u16);

impl OffCount {
    /// Off-count for a servo angle in degrees.
    ///
    /// The count is truncated toward zero. Counts outside the 16-bit field keep their
    /// low 16 bits (two's complement for negative angles), so the written bytes are
    /// always `count & 0xFF` and `(count >> 8) & 0xFF`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "wrap to the 16-bit register field like the chip's firmware does"
    )]
    pub fn from_degrees(degrees: f64) -> Self {
        let ticks = linear_map(
            pulse_width_us(degrees),
            0.0,
            f64::from(FRAME_PERIOD_US),
            0.0,
            f64::from(PWM_COUNTER_TICKS),
        );
        // At or beyond 2^68 every f64 is a multiple of 2^16. Infinities and NaN
        // also map to 0.
        if (-TICKS_WRAP_BOUND..TICKS_WRAP_BOUND).contains(&ticks) {
            // `as i128` truncates toward zero and is exact below the bound.
            Self(ticks as i128 as u16)
        } else {
            Self(0)
        }
    }

    /// Rebuild a count from its OFF-low and OFF-high register bytes.
    #[must_use]
    pub const fn from_bytes(low: u8, high: u8) -> Self {
        Self(u16::from_le_bytes([low, high]))
    }

    /// Raw 16-bit register value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Byte written to the OFF-low register.
    #[must_use]
    pub const fn low_byte(self) -> u8 {
        self.to_bytes()[0]
    }

    /// Byte written to the OFF-high register.
    #[must_use]
    pub const fn high_byte(self) -> u8 {
        self.to_bytes()[1]
    }

    /// `[low, high]`, in register order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl From<OffCount> for u16 {
    fn from(count: OffCount) -> Self {
        count.0
    }
}
