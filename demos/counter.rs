//! Counts from 0 to 9999 on a 4-digit common-cathode 7-segment display.
//!
//! Wiring: digit enables on GPIO 1-4 from left to right, segments A-G on GPIO 5-11,
//! decimal point on GPIO 12.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use led7seg::{Led7SegDevice, Led7SegStatic, Polarity, Result, rp_gpio};
use panic_probe as _;

const COUNT_DELAY_MS: u64 = 100;
const MAX_VALUE: u32 = 9999;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<core::convert::Infallible> {
    let p = embassy_rp::init(Default::default());
    let mut gpio = rp_gpio!(p, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);

    static LED7SEG_STATIC: Led7SegStatic = Led7SegDevice::new_static();
    let display = Led7SegDevice::new(
        &LED7SEG_STATIC,
        Some(&mut gpio),
        [5, 6, 7, 8, 9, 10, 11, 12],
        Polarity::CommonCathode,
        spawner,
    )?;
    // Digit 1 is the rightmost digit.
    display.configure_digits(&mut gpio, 4, [4, 3, 2, 1])?;

    let mut value: u32 = 0;
    loop {
        display.write_value(value);
        if value.checked_rem(1000) == Some(0) {
            info!("showing {}", value);
        }
        value = if value >= MAX_VALUE { 0 } else { value.wrapping_add(1) };
        Timer::after_millis(COUNT_DELAY_MS).await;
    }
}
