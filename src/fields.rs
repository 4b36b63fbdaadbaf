//! The registry of editable fields: value ranges, wrap rules, and cursor homes.
//!
//! Every settable value on the face of the clock is a [`Field`]. The registry
//! gives each one a closed range and the display cell its cursor sits on, so
//! the editor, the screen, and the serial console all agree on what a field
//! may hold and where it lives.

/// One editable value on the clock face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Field {
    Month,
    Day,
    Year,
    Hour,
    Minute,
    Second,
    /// Whether a 12-hour reading is an afternoon one. Shown on the face and
    /// kept in the working copy, but the cursor never stops on it; the value
    /// is derived from [`Field::Hour`] whenever the time row repaints.
    IsPm,
    /// `1` for a 24-hour face, `0` for a 12-hour face with an AM/PM cell.
    Is24Hour,
    AlarmHour,
    AlarmMinute,
}

pub const FIELD_COUNT: usize = 10;

/// Static metadata for one field: closed range plus cursor cell.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub min: u16,
    pub max: u16,
    pub column: u8,
    pub row: u8,
}

impl Field {
    /// Every field, in working-copy index order.
    pub const ALL: [Self; FIELD_COUNT] = [
        Self::Month,
        Self::Day,
        Self::Year,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::IsPm,
        Self::Is24Hour,
        Self::AlarmHour,
        Self::AlarmMinute,
    ];

    /// Position of this field in the working copy.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Range and cursor cell for this field.
    ///
    /// `Day`'s `max` here is the October-length 31; use
    /// [`Field::max_given_month`] when the current month is known.
    #[must_use]
    pub const fn spec(self) -> FieldSpec {
        match self {
            Self::Month => FieldSpec { min: 1, max: 12, column: 1, row: 0 },
            Self::Day => FieldSpec { min: 1, max: 31, column: 4, row: 0 },
            Self::Year => FieldSpec { min: 2000, max: 2099, column: 9, row: 0 },
            Self::Hour => FieldSpec { min: 0, max: 23, column: 1, row: 1 },
            Self::Minute => FieldSpec { min: 0, max: 59, column: 4, row: 1 },
            Self::Second => FieldSpec { min: 0, max: 59, column: 7, row: 1 },
            Self::IsPm => FieldSpec { min: 0, max: 1, column: 10, row: 1 },
            Self::Is24Hour => FieldSpec { min: 0, max: 1, column: 17, row: 1 },
            Self::AlarmHour => FieldSpec { min: 0, max: 23, column: 7, row: 2 },
            Self::AlarmMinute => FieldSpec { min: 0, max: 59, column: 10, row: 2 },
        }
    }

    /// Smallest value this field may hold.
    #[must_use]
    pub const fn min(self) -> u16 {
        self.spec().min
    }

    /// Largest value this field may hold, given the current `Month` value.
    ///
    /// Only `Day` depends on the month. The alarm fields always use 24-hour
    /// bounds, whatever face mode is selected.
    ///
    /// ```
    /// use keypad_clock::Field;
    ///
    /// assert_eq!(Field::Day.max_given_month(4), 30);
    /// assert_eq!(Field::Day.max_given_month(2), 28);
    /// assert_eq!(Field::Hour.max_given_month(2), 23);
    /// ```
    #[must_use]
    pub const fn max_given_month(self, month: u16) -> u16 {
        match self {
            Self::Day => days_in_month(month),
            _ => self.spec().max,
        }
    }

    /// Whether the backing clock stores this field. The six clock-backed
    /// fields are pushed to the clock on every edit of one of them; the rest
    /// live only in the working copy.
    #[must_use]
    pub const fn is_clock_backed(self) -> bool {
        matches!(
            self,
            Self::Month | Self::Day | Self::Year | Self::Hour | Self::Minute | Self::Second
        )
    }
}

/// Days in a 1-based month. February is a flat 28; this appliance does no
/// leap-year arithmetic, matching the hardware clock's plainest use.
/// Out-of-range months read as 31 rather than panicking.
///
/// ```
/// use keypad_clock::days_in_month;
///
/// assert_eq!(days_in_month(1), 31);
/// assert_eq!(days_in_month(2), 28);
/// assert_eq!(days_in_month(9), 30);
/// ```
#[must_use]
pub const fn days_in_month(month: u16) -> u16 {
    match month {
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// One step up with wraparound: past `max`, the value lands on `min`.
///
/// A value already above `max` (a day of 31 carried into April) also lands
/// on `min`.
///
/// ```
/// use keypad_clock::wrap_increment;
///
/// assert_eq!(wrap_increment(58, 0, 59), 59);
/// assert_eq!(wrap_increment(59, 0, 59), 0);
/// assert_eq!(wrap_increment(31, 1, 30), 1);
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "`value < max <= u16::MAX`, so the increment cannot overflow."
)]
pub const fn wrap_increment(value: u16, min: u16, max: u16) -> u16 {
    if value >= max { min } else { value + 1 }
}

/// One step down with wraparound: past `min`, the value lands on `max`.
///
/// ```
/// use keypad_clock::wrap_decrement;
///
/// assert_eq!(wrap_decrement(1, 0, 59), 0);
/// assert_eq!(wrap_decrement(0, 0, 59), 59);
/// assert_eq!(wrap_decrement(2000, 2000, 2099), 2099);
/// ```
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    reason = "`value > min >= 0`, so the decrement cannot underflow."
)]
pub const fn wrap_decrement(value: u16, min: u16, max: u16) -> u16 {
    if value <= min { max } else { value - 1 }
}
