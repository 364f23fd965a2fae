//! Compile-only verification for wiring a display through `rp_gpio!`.
//!
//! Run via: `cargo xtask check-all` (compiles this for thumbv6m-none-eabi)

#![no_std]
#![no_main]
#![allow(dead_code, reason = "Compile-time verification only")]

use defmt_rtt as _;
use embassy_executor::Spawner;
use embedded_hal::digital::PinState;
use led7seg::{GpioBank, Led7Seg, Led7SegDevice, Led7SegStatic, Polarity, Result, RpGpio, rp_gpio};
use panic_probe as _;

static LED7SEG_STATIC: Led7SegStatic = Led7SegDevice::new_static();

fn blocking_driver(gpio: &mut RpGpio) -> Result<()> {
    let mut display = Led7Seg::new(
        Some(&mut *gpio),
        [5, 6, 7, 8, 9, 10, 11, 12],
        Polarity::CommonAnode,
    )?;
    display.configure_digits(gpio, 2, [1, 2, 3, 4])?;
    display.write_digit(2, 7)?;
    display.refresh(42)
}

fn double_open_fails(gpio: &mut RpGpio) -> bool {
    gpio.open_output(0, PinState::Low).is_ok() && gpio.open_output(0, PinState::Low).is_err()
}

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());
    let mut gpio = rp_gpio!(p, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    let _ = double_open_fails(&mut gpio);

    let display = Led7SegDevice::new(
        &LED7SEG_STATIC,
        Some(&mut gpio),
        [5, 6, 7, 8, 9, 10, 11, 12],
        Polarity::CommonCathode,
        spawner,
    );
    if let Ok(display) = display {
        display.write_value(1234);
    }
    let mut spare = RpGpio::new();
    let _ = blocking_driver(&mut spare);
    loop {
        cortex_m::asm::wfi();
    }
}
