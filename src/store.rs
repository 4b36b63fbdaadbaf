//! The working copy of every editable field.
//!
//! A flat array indexed by [`Field`], read and written without any range
//! enforcement. Validation belongs to the editor and the serial parser; the
//! store itself will happily hold a day of 31 in April while an edit is in
//! flight.

use crate::fields::{Field, FIELD_COUNT};
use crate::snapshot::{ClockSnapshot, DateTimeFields};

/// The working copy the editor and the screen read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeStore {
    values: [u16; FIELD_COUNT],
}

impl TimeStore {
    /// A fresh store: date-time fields at their range minimums, everything
    /// else zero. The date-time fields are overwritten from the clock before
    /// anyone reads them; a zero alarm means the alarm time is midnight.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "`Field::index` is the field's discriminant, always in range."
    )]
    pub const fn new() -> Self {
        let mut values = [0; FIELD_COUNT];
        values[Field::Month.index()] = 1;
        values[Field::Day.index()] = 1;
        values[Field::Year.index()] = 2000;
        Self { values }
    }

    /// Raw read. No range checks.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "`Field::index` is the field's discriminant, always in range."
    )]
    pub const fn get(&self, field: Field) -> u16 {
        self.values[field.index()]
    }

    /// Raw write. No range checks.
    #[expect(
        clippy::indexing_slicing,
        reason = "`Field::index` is the field's discriminant, always in range."
    )]
    pub const fn set(&mut self, field: Field, value: u16) {
        self.values[field.index()] = value;
    }

    /// Copy the six clock-backed fields out of a clock reading. The alarm
    /// and face-mode fields are left exactly as they were.
    pub fn load_from(&mut self, snapshot: &ClockSnapshot) {
        self.set(Field::Year, snapshot.year);
        self.set(Field::Month, u16::from(snapshot.month));
        self.set(Field::Day, u16::from(snapshot.day));
        self.set(Field::Hour, u16::from(snapshot.hour));
        self.set(Field::Minute, u16::from(snapshot.minute));
        self.set(Field::Second, u16::from(snapshot.second));
    }

    /// The six clock-backed fields, in a shape ready to push to the clock.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "The editor and parser keep these fields inside u8 range."
    )]
    pub const fn date_time(&self) -> DateTimeFields {
        DateTimeFields {
            year: self.get(Field::Year),
            month: self.get(Field::Month) as u8,
            day: self.get(Field::Day) as u8,
            hour: self.get(Field::Hour) as u8,
            minute: self.get(Field::Minute) as u8,
            second: self.get(Field::Second) as u8,
        }
    }

    /// The alarm time as `(hour, minute)`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "The editor and parser keep the alarm fields inside u8 range."
    )]
    pub const fn alarm_time(&self) -> (u8, u8) {
        (
            self.get(Field::AlarmHour) as u8,
            self.get(Field::AlarmMinute) as u8,
        )
    }

    /// Whether the face is in 24-hour mode.
    #[must_use]
    pub const fn is_24_hour(&self) -> bool {
        self.get(Field::Is24Hour) != 0
    }
}

impl Default for TimeStore {
    fn default() -> Self {
        Self::new()
    }
}
