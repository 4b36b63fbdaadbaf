//! Compile-only verification for the display stack: shared-bus wiring,
//! glyph loading, and full-row painting.

#![cfg(not(feature = "host"))]
#![no_std]
#![no_main]

use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_hal_bus::i2c::AtomicDevice;
use embedded_hal_bus::util::AtomicCell;
use keypad_clock::{ClockSnapshot, Hardware, Screen, TimeStore, ONE_SECOND};
use panic_probe as _;
use time::Weekday;

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let hardware = Hardware::default();
    let i2c_bus = AtomicCell::new(hardware.i2c);
    let mut screen = Screen::new(AtomicDevice::new(&i2c_bus)).await;

    let store = TimeStore::new();
    let reading = ClockSnapshot {
        year: 2026,
        month: 8,
        day: 25,
        weekday: Weekday::Tuesday,
        hour: 14,
        minute: 3,
        second: 27,
        temperature_c: 25.25,
    };

    screen.status("hello from the face").await;
    loop {
        screen.refresh(&reading, &store).await;
        Timer::after(ONE_SECOND).await;
    }
}

#[cfg(not(any(target_arch = "arm", target_arch = "riscv32", target_arch = "riscv64")))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    loop {}
}
