//! Parsing for the line-oriented serial console.
//!
//! Two commands exist, told apart purely by length:
//!
//! * 12 digits `YYMMDDHHMMSS` sets the date-time (`YY` means `20YY`)
//! * 4 digits `HHMM` sets the alarm
//!
//! Validation is upper-bound only, matching the face editor's permissiveness:
//! a day of 31 passes for any month, and a zero month or day passes too. The
//! clock stores whatever it is given.

use derive_more::derive::{Display, Error};

use crate::snapshot::DateTimeFields;

/// A validated console command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Command {
    SetDateTime(DateTimeFields),
    SetAlarm { hour: u8, minute: u8 },
}

/// Why a console line was rejected.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq, defmt::Format)]
pub enum CommandError {
    /// The line is neither a 12-digit date-time nor a 4-digit alarm.
    #[display("expected 12 or 4 digits, got {length} bytes")]
    UnexpectedLength { length: usize },

    /// The line has the right length but holds a non-digit byte.
    #[display("line contains a byte that is not a digit")]
    NotDigits,

    /// One two-digit group is above its ceiling.
    #[display("{part} {value} is out of range")]
    OutOfRange { part: &'static str, value: u8 },
}

/// Parse one console line with its terminator already stripped.
///
/// ```
/// use keypad_clock::{parse_line, Command};
///
/// let command = parse_line(b"260825140300").unwrap();
/// assert!(matches!(command, Command::SetDateTime(fields) if fields.year == 2026));
/// assert_eq!(
///     parse_line(b"0630").unwrap(),
///     Command::SetAlarm { hour: 6, minute: 30 },
/// );
/// assert!(parse_line(b"123").is_err());
/// ```
///
/// # Errors
///
/// Returns a [`CommandError`] naming what was wrong with the line.
pub fn parse_line(line: &[u8]) -> Result<Command, CommandError> {
    match line.len() {
        12 => parse_date_time(line),
        4 => parse_alarm(line),
        length => Err(CommandError::UnexpectedLength { length }),
    }
}

fn parse_date_time(line: &[u8]) -> Result<Command, CommandError> {
    require_digits(line)?;
    let &[y1, y2, mo1, mo2, d1, d2, h1, h2, mi1, mi2, s1, s2] = line else {
        return Err(CommandError::UnexpectedLength { length: line.len() });
    };
    let month = checked("month", pair(mo1, mo2), 12)?;
    let day = checked("day", pair(d1, d2), 31)?;
    let hour = checked("hour", pair(h1, h2), 23)?;
    let minute = checked("minute", pair(mi1, mi2), 59)?;
    let second = checked("second", pair(s1, s2), 59)?;
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "A two-digit year lands between 2000 and 2099."
    )]
    let year = 2000 + u16::from(pair(y1, y2));
    Ok(Command::SetDateTime(DateTimeFields {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }))
}

fn parse_alarm(line: &[u8]) -> Result<Command, CommandError> {
    require_digits(line)?;
    let &[h1, h2, m1, m2] = line else {
        return Err(CommandError::UnexpectedLength { length: line.len() });
    };
    let hour = checked("alarm hour", pair(h1, h2), 23)?;
    let minute = checked("alarm minute", pair(m1, m2), 59)?;
    Ok(Command::SetAlarm { hour, minute })
}

fn require_digits(line: &[u8]) -> Result<(), CommandError> {
    if line.iter().all(u8::is_ascii_digit) {
        Ok(())
    } else {
        Err(CommandError::NotDigits)
    }
}

const fn checked(part: &'static str, value: u8, ceiling: u8) -> Result<u8, CommandError> {
    if value > ceiling {
        Err(CommandError::OutOfRange { part, value })
    } else {
        Ok(value)
    }
}

/// Two ASCII digits to their value. The caller has already checked both
/// bytes are digits.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "Two checked digit bytes combine to at most 99."
)]
const fn pair(tens: u8, ones: u8) -> u8 {
    (tens - b'0') * 10 + (ones - b'0')
}
