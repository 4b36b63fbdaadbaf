//! Geometry and formatting for the 20x4 character face.
//!
//! The face is fixed:
//!
//! ```text
//! col:  0123456789_123456789
//! row0  08/25/2026       MON
//! row1  02:03:27 PM 25~C 12H
//! row2  Alarm 06:30
//! row3  (status messages)
//! ```
//!
//! where `~` stands for the custom degree glyph. Everything here is plain
//! arithmetic on bytes so the same tables drive the real display and the
//! host-side tests.

use time::Weekday;

use crate::fields::Field;
use crate::snapshot::ClockSnapshot;

pub const FACE_COLUMNS: usize = 20;
pub const FACE_ROWS: usize = 4;

pub const DATE_ROW: u8 = 0;
pub const TIME_ROW: u8 = 1;
pub const ALARM_ROW: u8 = 2;
pub const STATUS_ROW: u8 = 3;

// Start columns of each repaintable region.
pub const MONTH_COLUMN: u8 = 0;
pub const DAY_COLUMN: u8 = 3;
pub const YEAR_COLUMN: u8 = 6;
pub const WEEKDAY_COLUMN: u8 = 17;
pub const HOUR_COLUMN: u8 = 0;
pub const MINUTE_COLUMN: u8 = 3;
pub const SECOND_COLUMN: u8 = 6;
pub const AMPM_COLUMN: u8 = 9;
pub const TEMPERATURE_COLUMN: u8 = 12;
pub const MODE_COLUMN: u8 = 17;
pub const ALARM_HOUR_COLUMN: u8 = 6;
pub const ALARM_MINUTE_COLUMN: u8 = 9;

/// Custom-character slot holding the degree sign.
pub const DEGREE_GLYPH: u8 = 0;

/// 5x8 bitmap for the degree sign, one row per byte.
pub const DEGREE_GLYPH_ROWS: [u8; 8] = [
    0b0_0110,
    0b0_1001,
    0b0_1001,
    0b0_0110,
    0b0_0000,
    0b0_0000,
    0b0_0000,
    0b0_0000,
];

/// The display cell the blinking cursor parks on for each field.
///
/// Returns `(column, row)`. The table is the one the field registry carries,
/// so cursor placement and region repaints can never drift apart.
///
/// ```
/// use keypad_clock::{cursor_position, Field};
///
/// assert_eq!(cursor_position(Field::Month), (1, 0));
/// assert_eq!(cursor_position(Field::AlarmMinute), (10, 2));
/// ```
#[must_use]
pub const fn cursor_position(field: Field) -> (u8, u8) {
    let spec = field.spec();
    (spec.column, spec.row)
}

#[inline]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "The digit of a value below 100 always fits in ASCII."
)]
const fn tens_digit(value: u16) -> u8 {
    debug_assert!(value < 100);
    (value / 10) as u8 + b'0'
}

#[inline]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "A remainder by ten always fits in ASCII."
)]
const fn ones_digit(value: u16) -> u8 {
    (value % 10) as u8 + b'0'
}

/// Zero-padded two-digit cells, `7 -> "07"`.
#[must_use]
pub const fn two_digits(value: u16) -> [u8; 2] {
    [tens_digit(value), ones_digit(value)]
}

/// Four-digit cells for a year, `2026 -> "2026"`.
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "Each extracted digit is below ten."
)]
pub const fn year_digits(year: u16) -> [u8; 4] {
    [
        (year / 1000 % 10) as u8 + b'0',
        (year / 100 % 10) as u8 + b'0',
        tens_digit(year % 100),
        ones_digit(year),
    ]
}

/// A 24-hour value folded onto the 12-hour face: `(display hour, is PM)`.
///
/// ```
/// use keypad_clock::to_12_hour;
///
/// assert_eq!(to_12_hour(0), (12, false));
/// assert_eq!(to_12_hour(12), (12, true));
/// assert_eq!(to_12_hour(23), (11, true));
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "The subtraction only runs for hours above twelve."
)]
pub const fn to_12_hour(hour: u16) -> (u16, bool) {
    if hour == 0 {
        (12, false)
    } else if hour < 12 {
        (hour, false)
    } else if hour == 12 {
        (12, true)
    } else {
        (hour - 12, true)
    }
}

/// Hour digits plus the AM/PM cells for the selected face mode.
///
/// In 24-hour mode the AM/PM cells come back blank.
#[must_use]
pub const fn hour_cells(hour: u16, is_24_hour: bool) -> ([u8; 2], [u8; 2]) {
    if is_24_hour {
        (two_digits(hour), *b"  ")
    } else {
        let (display, is_pm) = to_12_hour(hour);
        (two_digits(display), if is_pm { *b"PM" } else { *b"AM" })
    }
}

/// The face-mode indicator cells, `"24H"` or `"12H"`.
#[must_use]
pub const fn mode_cells(is_24_hour: bool) -> [u8; 3] {
    if is_24_hour { *b"24H" } else { *b"12H" }
}

/// Three-letter weekday cells.
#[must_use]
pub const fn weekday_cells(weekday: Weekday) -> [u8; 3] {
    match weekday {
        Weekday::Monday => *b"MON",
        Weekday::Tuesday => *b"TUE",
        Weekday::Wednesday => *b"WED",
        Weekday::Thursday => *b"THU",
        Weekday::Friday => *b"FRI",
        Weekday::Saturday => *b"SAT",
        Weekday::Sunday => *b"SUN",
    }
}

/// Whole-degree temperature cells ending in the degree glyph and `C`.
///
/// The die sensor spans -40 to +85, wider than two digits; readings outside
/// -9 to 99 clamp so the cells never spill into their neighbors.
#[must_use]
pub fn temperature_cells(celsius: f32) -> [u8; 4] {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Truncation toward zero is the wanted whole-degree reading."
    )]
    let whole = (celsius as i16).clamp(-9, 99);
    let magnitude = whole.unsigned_abs();
    let tens_cell = if whole < 0 {
        b'-'
    } else if magnitude < 10 {
        b' '
    } else {
        tens_digit(magnitude)
    };
    [tens_cell, ones_digit(magnitude), DEGREE_GLYPH, b'C']
}

fn put(cells: &mut [u8; FACE_COLUMNS], at: usize, bytes: &[u8]) {
    for (cell, byte) in cells.iter_mut().skip(at).zip(bytes) {
        *cell = *byte;
    }
}

/// Row 0: `MM/DD/YYYY` plus the weekday name.
#[must_use]
pub fn date_row(snapshot: &ClockSnapshot) -> [u8; FACE_COLUMNS] {
    let mut cells = [b' '; FACE_COLUMNS];
    put(&mut cells, usize::from(MONTH_COLUMN), &two_digits(u16::from(snapshot.month)));
    put(&mut cells, 2, b"/");
    put(&mut cells, usize::from(DAY_COLUMN), &two_digits(u16::from(snapshot.day)));
    put(&mut cells, 5, b"/");
    put(&mut cells, usize::from(YEAR_COLUMN), &year_digits(snapshot.year));
    put(&mut cells, usize::from(WEEKDAY_COLUMN), &weekday_cells(snapshot.weekday));
    cells
}

/// Row 1: `HH:MM:SS`, the AM/PM cells, the temperature, and the mode tag.
#[must_use]
pub fn time_row(snapshot: &ClockSnapshot, is_24_hour: bool) -> [u8; FACE_COLUMNS] {
    let mut cells = [b' '; FACE_COLUMNS];
    let (hour, ampm) = hour_cells(u16::from(snapshot.hour), is_24_hour);
    put(&mut cells, usize::from(HOUR_COLUMN), &hour);
    put(&mut cells, 2, b":");
    put(&mut cells, usize::from(MINUTE_COLUMN), &two_digits(u16::from(snapshot.minute)));
    put(&mut cells, 5, b":");
    put(&mut cells, usize::from(SECOND_COLUMN), &two_digits(u16::from(snapshot.second)));
    put(&mut cells, usize::from(AMPM_COLUMN), &ampm);
    put(&mut cells, usize::from(TEMPERATURE_COLUMN), &temperature_cells(snapshot.temperature_c));
    put(&mut cells, usize::from(MODE_COLUMN), &mode_cells(is_24_hour));
    cells
}

/// Row 2: the `Alarm HH:MM` line.
#[must_use]
pub fn alarm_row(hour: u8, minute: u8) -> [u8; FACE_COLUMNS] {
    let mut cells = [b' '; FACE_COLUMNS];
    put(&mut cells, 0, b"Alarm");
    put(&mut cells, usize::from(ALARM_HOUR_COLUMN), &two_digits(u16::from(hour)));
    put(&mut cells, 8, b":");
    put(&mut cells, usize::from(ALARM_MINUTE_COLUMN), &two_digits(u16::from(minute)));
    cells
}

/// Row 3: a status message, left-aligned and padded to the full row.
#[must_use]
pub fn status_row(text: &str) -> [u8; FACE_COLUMNS] {
    let mut cells = [b' '; FACE_COLUMNS];
    put(&mut cells, 0, text.as_bytes());
    cells
}
