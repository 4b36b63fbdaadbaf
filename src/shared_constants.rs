use embassy_time::Duration;

// I2C addresses on the shared bus
pub const LCD_I2C_ADDRESS: u8 = 0x27;
pub const RTC_I2C_ADDRESS: u8 = 0x68;

pub const ONE_SECOND: Duration = Duration::from_secs(1);

pub const KEYPAD_SCAN_INTERVAL: Duration = Duration::from_millis(10);
pub const KEYPAD_SETTLE_DELAY: Duration = Duration::from_micros(10);
pub const KEYPAD_DEBOUNCE_DELAY: Duration = Duration::from_millis(10);

pub const ALARM_PULSE_COUNT: usize = 5;
pub const ALARM_PULSE_ON: Duration = Duration::from_millis(100);
pub const ALARM_PULSE_OFF: Duration = Duration::from_millis(100);

pub const HEARTBEAT_ON: Duration = Duration::from_millis(100);
pub const HEARTBEAT_OFF: Duration = Duration::from_millis(900);

pub const CONSOLE_BAUD: u32 = 115_200;
