//! Shared items for the keypad clock appliance.
#![no_std]
#![no_main]

mod alarm;
mod buzzer;
mod char_lcd;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod console;
mod ds3231;
mod edit;
mod error;
mod fields;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod hardware;
#[cfg(any(feature = "pico1", feature = "pico2"))]
mod keypad;
mod keys;
pub mod layout;
mod never;
pub mod rtc_regs;
mod screen;
mod serial_cmd;
mod shared_constants;
mod snapshot;
mod store;

// Re-export commonly used items
pub use alarm::alarm_due;
pub use buzzer::Buzzer;
pub use char_lcd::CharLcd;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use console::{Console, ConsoleNotifier};
pub use ds3231::Ds3231;
pub use edit::{EditKind, EditSession, EditStep, ALARM_RING, DATE_TIME_RING};
pub use error::{Error, Result};
pub use fields::{days_in_month, wrap_decrement, wrap_increment, Field, FieldSpec, FIELD_COUNT};
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use hardware::Hardware;
#[cfg(any(feature = "pico1", feature = "pico2"))]
pub use keypad::{Keypad, KeypadNotifier};
pub use keys::{key_at, Key, KEY_COLUMN_COUNT, KEY_ROW_COUNT};
pub use layout::cursor_position;
pub use never::Never;
pub use rtc_regs::seed_from_unix;
pub use screen::Screen;
pub use serial_cmd::{parse_line, Command, CommandError};
pub use shared_constants::*;
pub use snapshot::{ClockSnapshot, DateTimeFields};
pub use store::TimeStore;
