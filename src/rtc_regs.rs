//! DS3231 register map and codecs.
//!
//! Everything here is pure byte work: packed-BCD conversion, the seven
//! timekeeping registers, the die-temperature registers, and the weekday
//! derivation that keeps the chip's day counter agreeing with the civil
//! date. The bus-facing driver lives in [`crate::ds3231`]; keeping the
//! codecs separate lets the host tests check every register image without
//! an I2C bus in sight.

use time::{Date, Month, OffsetDateTime, Weekday};

use crate::snapshot::DateTimeFields;

/// First of the seven timekeeping registers (seconds, at address zero).
pub const SECONDS_REGISTER: u8 = 0x00;
/// Status register; bit 7 is the oscillator-stop flag.
pub const STATUS_REGISTER: u8 = 0x0F;
/// Upper byte of the die temperature.
pub const TEMPERATURE_REGISTER: u8 = 0x11;
/// Oscillator-stop flag: set while the chip was without power.
pub const OSCILLATOR_STOP_BIT: u8 = 0x80;

/// Pack a value of 0 to 99 as two BCD nibbles.
///
/// ```
/// use keypad_clock::rtc_regs::to_bcd;
///
/// assert_eq!(to_bcd(0), 0x00);
/// assert_eq!(to_bcd(45), 0x45);
/// assert_eq!(to_bcd(59), 0x59);
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "Register values stay below 100, so both nibbles fit."
)]
pub const fn to_bcd(value: u8) -> u8 {
    debug_assert!(value < 100);
    ((value / 10) << 4) | (value % 10)
}

/// Unpack two BCD nibbles back to a value.
///
/// ```
/// use keypad_clock::rtc_regs::from_bcd;
///
/// assert_eq!(from_bcd(0x45), 45);
/// assert_eq!(from_bcd(0x00), 0);
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "A nibble is at most 15, so the product and sum fit in a byte."
)]
pub const fn from_bcd(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

/// Image of the seven timekeeping registers for a push to the chip.
///
/// Hours go out in 24-hour form (bit 6 clear) whatever the face shows. The
/// day-of-week register is derived here from the civil date rather than
/// taken from any caller, and years outside 2000 to 2099 saturate into the
/// chip's single stored century.
#[must_use]
pub fn encode_date_time(fields: &DateTimeFields) -> [u8; 7] {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "The year offset is clamped to two digits first."
    )]
    let year = fields.year.saturating_sub(2000).min(99) as u8;
    [
        to_bcd(fields.second),
        to_bcd(fields.minute),
        to_bcd(fields.hour),
        weekday_register(fields.year, fields.month, fields.day),
        to_bcd(fields.day),
        to_bcd(fields.month),
        to_bcd(year),
    ]
}

/// Fields and weekday from an image of the seven timekeeping registers.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "A two-digit BCD year added to 2000 stays inside u16."
)]
pub fn decode_date_time(registers: &[u8; 7]) -> (DateTimeFields, Weekday) {
    let &[second, minute, hour, weekday, day, month, year] = registers;
    let fields = DateTimeFields {
        year: 2000 + u16::from(from_bcd(year)),
        month: from_bcd(month & 0x1F),
        day: from_bcd(day & 0x3F),
        hour: from_bcd(hour & 0x3F),
        minute: from_bcd(minute & 0x7F),
        second: from_bcd(second & 0x7F),
    };
    (fields, weekday_from_register(weekday))
}

/// Weekday for a civil date, Sunday-based the way the chip is driven here.
///
/// Mid-edit the face can hold a date no calendar has (a day of 31 while the
/// month says April); those read as Sunday instead of failing, since the
/// chip needs some value and the next valid edit corrects it.
#[must_use]
pub fn weekday_for(year: u16, month: u8, day: u8) -> Weekday {
    Month::try_from(month)
        .ok()
        .and_then(|month| Date::from_calendar_date(i32::from(year), month, day).ok())
        .map_or(Weekday::Sunday, |date| date.weekday())
}

/// Day-of-week register value, 1 for Sunday through 7 for Saturday.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "Days from Sunday span 0 to 6, so the offset fits."
)]
pub fn weekday_register(year: u16, month: u8, day: u8) -> u8 {
    weekday_for(year, month, day).number_days_from_sunday() + 1
}

/// Weekday from the chip's day-of-week register, tolerating garbage.
#[must_use]
pub const fn weekday_from_register(value: u8) -> Weekday {
    match value {
        2 => Weekday::Monday,
        3 => Weekday::Tuesday,
        4 => Weekday::Wednesday,
        5 => Weekday::Thursday,
        6 => Weekday::Friday,
        7 => Weekday::Saturday,
        _ => Weekday::Sunday,
    }
}

/// Die temperature from its two registers: a signed whole part and two
/// fraction bits, 0.25 degree steps.
///
/// ```
/// use keypad_clock::rtc_regs::temperature_from_registers;
///
/// assert!((temperature_from_registers(0x19, 0x40) - 25.25).abs() < f32::EPSILON);
/// assert!((temperature_from_registers(0xF6, 0x00) + 10.0).abs() < f32::EPSILON);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_wrap,
    clippy::arithmetic_side_effects,
    reason = "The sign bit is the point: the register is two's complement, and \
              ten bits shifted into an i16 cannot overflow."
)]
pub fn temperature_from_registers(upper: u8, lower: u8) -> f32 {
    let quarters = (i16::from(upper as i8) << 2) | i16::from(lower >> 6);
    f32::from(quarters) * 0.25
}

/// Date-time fields for a Unix timestamp, used to reseed the clock from the
/// build moment after a power loss. An unrepresentable timestamp falls back
/// to the start of the supported century.
#[must_use]
pub fn seed_from_unix(seconds: i64) -> DateTimeFields {
    OffsetDateTime::from_unix_timestamp(seconds).map_or(
        DateTimeFields {
            year: 2000,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        },
        |moment| DateTimeFields {
            year: u16::try_from(moment.year()).unwrap_or(2000),
            month: u8::from(moment.month()),
            day: moment.day(),
            hour: moment.hour(),
            minute: moment.minute(),
            second: moment.second(),
        },
    )
}
