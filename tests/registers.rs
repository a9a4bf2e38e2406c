#![allow(missing_docs)]
//! Host-level tests for channel addressing, the register map, and board presets.

use i2c_servo16::channel::{CHANNEL_COUNT, InvalidChannel};
use i2c_servo16::plan::{Step, angle_plan, init_plan};
use i2c_servo16::register::{
    ALL_LED_OFF_H, ALL_LED_OFF_L, ALL_LED_ON_H, ALL_LED_ON_L, MODE1, MODE1_ASLEEP, MODE1_AWAKE,
    MODE1_RESTART, PRE_SCALE,
};
use i2c_servo16::{Channel, DEVICE_ADDRESS, OffCount, OscillatorClock, Servo16Config};

#[test]
fn device_address_is_0x6a() {
    assert_eq!(DEVICE_ADDRESS, 0x6A);
}

#[test]
fn channel_registers_follow_base_plus_four_n() {
    for channel in Channel::ALL {
        let base = 0x08 + 4 * channel.index();
        assert_eq!(channel.on_low_register(), base);
        assert_eq!(channel.on_high_register(), base + 1);
        assert_eq!(channel.off_low_register(), base + 2);
        assert_eq!(channel.off_high_register(), base + 3);
    }
    let last = Channel::new(15).expect("15 is valid");
    assert_eq!(last.off_low_register(), 0x46);
    assert_eq!(last.off_high_register(), 0x47);
}

#[test]
fn channel_blocks_are_disjoint_and_below_all_led() {
    let mut seen = [false; 256];
    for channel in Channel::ALL {
        for register in [
            channel.on_low_register(),
            channel.on_high_register(),
            channel.off_low_register(),
            channel.off_high_register(),
        ] {
            assert!(!seen[usize::from(register)], "register {register:#x} reused");
            seen[usize::from(register)] = true;
            assert!(register < ALL_LED_ON_L);
        }
    }
}

#[test]
fn all_lists_sixteen_channels_in_order() {
    assert_eq!(Channel::ALL.len(), usize::from(CHANNEL_COUNT));
    for (index, channel) in Channel::ALL.iter().enumerate() {
        assert_eq!(usize::from(channel.index()), index);
    }
}

#[test]
fn channel_rejects_sixteen_and_up() {
    assert!(Channel::new(16).is_none());
    assert_eq!(Channel::try_from(17), Err(InvalidChannel(17)));
    assert_eq!(Channel::try_from(255), Err(InvalidChannel(255)));
    assert_eq!(u8::from(Channel::try_from(9).expect("9 is valid")), 9);
}

#[test]
fn invalid_channel_displays_index() {
    assert_eq!(
        InvalidChannel(17).to_string(),
        "invalid servo channel 17 (expected 0..=15)"
    );
}

#[test]
fn mode1_values_match_board_firmware() {
    assert_eq!(MODE1_ASLEEP, 0x11);
    assert_eq!(MODE1_AWAKE, 0x01);
    assert_eq!(MODE1_RESTART, 0x80);
}

#[test]
fn prescale_for_each_oscillator() {
    assert_eq!(OscillatorClock::Nominal.prescale(), 0x79);
    assert_eq!(OscillatorClock::Corrected.prescale(), 0x84);
    assert_eq!(OscillatorClock::Corrected.hz(), 27_250_000);
}

#[test]
fn presets_differ_only_in_calibration_and_pacing() {
    let original = Servo16Config::ORIGINAL_BOARD;
    let revised = Servo16Config::REVISED_BOARD;
    assert_eq!(original.prescale(), 121);
    assert!(!original.soft_reset);
    assert_eq!(original.settle_delay_ms, 0);
    assert_eq!(revised.prescale(), 132);
    assert!(revised.soft_reset);
    assert_eq!(revised.settle_delay_ms, 10);
}

#[test]
fn default_config_keeps_settle_delay_and_skips_reset() {
    let config = Servo16Config::default();
    assert_eq!(config, Servo16Config::new());
    assert_eq!(config.oscillator, OscillatorClock::Nominal);
    assert!(!config.soft_reset);
    assert_eq!(config.settle_delay_ms, 10);
}

#[test]
fn builder_methods_override_fields() {
    const CONFIG: Servo16Config = Servo16Config::new()
        .with_oscillator(OscillatorClock::Corrected)
        .with_soft_reset(true)
        .with_settle_delay_ms(3);
    assert_eq!(CONFIG.oscillator, OscillatorClock::Corrected);
    assert!(CONFIG.soft_reset);
    assert_eq!(CONFIG.settle_delay_ms, 3);
}

#[test]
fn init_plan_without_pacing() {
    let center = OffCount::from_degrees(90.0);
    let plan = init_plan(&Servo16Config::ORIGINAL_BOARD);
    assert_eq!(
        plan.as_slice(),
        [
            Step::write(MODE1, 0x11),
            Step::write(PRE_SCALE, 0x79),
            Step::write(ALL_LED_ON_L, 0),
            Step::write(ALL_LED_ON_H, 0),
            Step::write(ALL_LED_OFF_L, center.low_byte()),
            Step::write(ALL_LED_OFF_H, center.high_byte()),
            Step::write(MODE1, 0x01),
        ]
    );
}

#[test]
fn init_plan_for_revised_board_resets_and_holds() {
    let plan = init_plan(&Servo16Config::REVISED_BOARD);
    assert_eq!(
        plan.as_slice(),
        [
            Step::write(MODE1, 0x80),
            Step::Delay { ms: 10 },
            Step::write(MODE1, 0x11),
            Step::write(PRE_SCALE, 0x84),
            Step::Delay { ms: 10 },
            Step::write(ALL_LED_ON_L, 0),
            Step::write(ALL_LED_ON_H, 0),
            Step::write(ALL_LED_OFF_L, 0x33),
            Step::write(ALL_LED_OFF_H, 0x01),
            Step::write(MODE1, 0x01),
            Step::Delay { ms: 10 },
        ]
    );
}

#[test]
fn angle_plan_writes_low_then_high_then_settles() {
    let channel = Channel::new(2).expect("2 is valid");
    let count = OffCount::from_degrees(180.0);
    let plan = angle_plan(&Servo16Config::default(), channel, count);
    assert_eq!(
        plan.as_slice(),
        [
            Step::write(0x12, 0xD7),
            Step::write(0x13, 0x01),
            Step::Delay { ms: 10 },
        ]
    );

    let unpaced = angle_plan(&Servo16Config::ORIGINAL_BOARD, channel, count);
    assert_eq!(unpaced.len(), 2);
}
