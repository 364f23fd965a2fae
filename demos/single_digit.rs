//! Cycles through 0-9 on a single-digit common-anode display.
//!
//! The common anode goes straight to 3V3; segments A-G on GPIO 5-11, decimal point on GPIO 12.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use led7seg::{Led7SegDevice, Led7SegStatic, Polarity, Result, rp_gpio};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<core::convert::Infallible> {
    let p = embassy_rp::init(Default::default());
    let mut gpio = rp_gpio!(p, [5, 6, 7, 8, 9, 10, 11, 12]);

    static LED7SEG_STATIC: Led7SegStatic = Led7SegDevice::new_static();
    let display = Led7SegDevice::new(
        &LED7SEG_STATIC,
        Some(&mut gpio),
        [5, 6, 7, 8, 9, 10, 11, 12],
        Polarity::CommonAnode,
        spawner,
    )?;

    // Until the first write the refresh task shows "0".
    info!("refresh state: {:?}", display.refresh_state());
    Timer::after_secs(1).await;

    loop {
        for digit in 0..=9 {
            info!("digit {}", digit);
            display.write_value(digit);
            Timer::after_millis(500).await;
        }
    }
}
