//! Compile-only verification for the keypad scanner: pin claims, task
//! spawn, and key delivery.

#![cfg(not(feature = "host"))]
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use keypad_clock::{Hardware, Keypad, KeypadNotifier, Never, Result};
use panic_probe as _;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    // If it returns, something went wrong.
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

#[expect(clippy::items_after_statements, reason = "Keeps related code together")]
async fn inner_main(spawner: Spawner) -> Result<Never> {
    let hardware = Hardware::default();

    static KEYPAD_NOTIFIER: KeypadNotifier = Keypad::notifier();
    let keypad = Keypad::new(
        hardware.keypad_rows,
        hardware.keypad_columns,
        &KEYPAD_NOTIFIER,
        spawner,
    )?;

    loop {
        let key = keypad.next_key().await;
        info!("pressed: {}", key);
    }
}

#[cfg(not(any(target_arch = "arm", target_arch = "riscv32", target_arch = "riscv64")))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    loop {}
}
