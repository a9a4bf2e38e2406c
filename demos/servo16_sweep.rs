#![no_std]
#![no_main]

//! Sweep servos on all sixteen channels of an I2C servo board from a Pico.
//!
//! Wiring: board SDA to GPIO 4, SCL to GPIO 5 (I2C0), board powered separately.
//! Two tasks share one controller: one sweeps channels 0..8, the other rocks
//! channels 8..16 between 45° and 135°.

use core::convert::Infallible;
use core::ops::Range;
use core::{future, panic};
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Delay, Timer};
use i2c_servo16::{Servo16Config, SharedServo16};
use static_cell::StaticCell;
use {defmt::info, defmt_rtt as _, panic_probe as _};

type Servos = SharedServo16<CriticalSectionRawMutex, I2c<'static, I2C0, Blocking>, Delay>;
type Result<T> = i2c_servo16::Result<T, i2c::Error>;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    static SERVOS: StaticCell<Servos> = StaticCell::new();
    let servos: &'static Servos =
        SERVOS.init(SharedServo16::new(i2c, Delay, Servo16Config::REVISED_BOARD));

    // Explicit setup so a missing board shows up before any task starts.
    servos.initialize()?;
    info!("servo board ready");

    spawner
        .spawn(rock_task(servos, 8..16))
        .expect("rock task spawns once");

    loop {
        for degrees in (0..=180).step_by(10).chain((0..180).step_by(10).rev()) {
            for channel in 0..8 {
                servos.set_servo_angle(channel, degrees)?;
            }
            Timer::after_millis(100).await;
        }
    }
}

#[embassy_executor::task]
async fn rock_task(servos: &'static Servos, channels: Range<u8>) {
    for degrees in [45, 135].into_iter().cycle() {
        for channel in channels.clone() {
            if let Err(err) = servos.set_servo_angle(channel, degrees) {
                defmt::error!("channel {}: {}", channel, err);
                return future::pending().await;
            }
        }
        Timer::after_millis(800).await;
    }
}
