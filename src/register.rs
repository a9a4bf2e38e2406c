//! PCA9685 register map and MODE1 bit values.
//!
//! Only the registers this driver writes are listed. Addresses match the chip's
//! datasheet and must not change.

/// Fixed 7-bit I2C address of the chip on the servo board.
pub const DEVICE_ADDRESS: u8 = 0x6A;

/// Mode register 1.
pub const MODE1: u8 = 0x00;

/// First per-channel register (channel 0, ON-low).
pub const SERVO_REG_BASE: u8 = 0x08;

/// Bytes per channel block: ON-low, ON-high, OFF-low, OFF-high.
pub const SERVO_REG_STRIDE: u8 = 4;

/// ON-low register shared by every channel.
pub const ALL_LED_ON_L: u8 = 0xFA;
/// ON-high register shared by every channel.
pub const ALL_LED_ON_H: u8 = 0xFB;
/// OFF-low register shared by every channel.
pub const ALL_LED_OFF_L: u8 = 0xFC;
/// OFF-high register shared by every channel.
pub const ALL_LED_OFF_H: u8 = 0xFD;

/// Oscillator prescaler. Writable only while MODE1 has [`MODE1_SLEEP`] set.
pub const PRE_SCALE: u8 = 0xFE;

/// MODE1 restart bit. Writing it alone performs a soft reset.
pub const MODE1_RESTART: u8 = 0x80;
/// MODE1 sleep bit: oscillator off.
pub const MODE1_SLEEP: u8 = 0x10;
/// MODE1 all-call bit: respond to the LED all-call address.
pub const MODE1_ALLCALL: u8 = 0x01;

/// MODE1 value written before the prescale (`0x11`).
pub const MODE1_ASLEEP: u8 = MODE1_SLEEP | MODE1_ALLCALL;
/// MODE1 value that restarts the oscillator after setup (`0x01`).
pub const MODE1_AWAKE: u8 = MODE1_ALLCALL;
