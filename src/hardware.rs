//! Pin claims for the appliance.
//!
//! Wiring, all on the Pico header:
//!
//! * UART0 console on GP0 (TX) / GP1 (RX)
//! * keypad rows strobed on GP2-GP5, columns read on GP6-GP9
//! * active buzzer on GP10
//! * I2C1 on GP14 (SDA) / GP15 (SCL), shared by the display and the clock
//! * onboard LED for the fault heartbeat

use embassy_rp::i2c::{self, Config as I2cConfig};
use embassy_rp::peripherals::{I2C1, PIN_0, PIN_1, UART0};
use embassy_rp::{
    gpio::{self, Level, Pull},
    Peri,
};

use crate::keys::{KEY_COLUMN_COUNT, KEY_ROW_COUNT};

pub struct Hardware {
    pub keypad_rows: [gpio::Output<'static>; KEY_ROW_COUNT],
    pub keypad_columns: [gpio::Input<'static>; KEY_COLUMN_COUNT],
    pub buzzer: gpio::Output<'static>,
    pub led: gpio::Output<'static>,
    pub i2c: i2c::I2c<'static, I2C1, i2c::Blocking>,
    pub uart: Peri<'static, UART0>,
    pub uart_tx: Peri<'static, PIN_0>,
    pub uart_rx: Peri<'static, PIN_1>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        // Rows idle high; a row goes low only while strobed.
        let keypad_rows = [
            gpio::Output::new(peripherals.PIN_2, Level::High),
            gpio::Output::new(peripherals.PIN_3, Level::High),
            gpio::Output::new(peripherals.PIN_4, Level::High),
            gpio::Output::new(peripherals.PIN_5, Level::High),
        ];

        let keypad_columns = [
            gpio::Input::new(peripherals.PIN_6, Pull::Up),
            gpio::Input::new(peripherals.PIN_7, Pull::Up),
            gpio::Input::new(peripherals.PIN_8, Pull::Up),
            gpio::Input::new(peripherals.PIN_9, Pull::Up),
        ];

        let buzzer = gpio::Output::new(peripherals.PIN_10, Level::Low);

        let led = gpio::Output::new(peripherals.PIN_25, Level::Low);

        let i2c = i2c::I2c::new_blocking(
            peripherals.I2C1,
            peripherals.PIN_15,
            peripherals.PIN_14,
            I2cConfig::default(),
        );

        Self {
            keypad_rows,
            keypad_columns,
            buzzer,
            led,
            i2c,
            uart: peripherals.UART0,
            uart_tx: peripherals.PIN_0,
            uart_rx: peripherals.PIN_1,
        }
    }
}
