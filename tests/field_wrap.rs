//! Host-level tests for the field registry and its wrap rules.

use keypad_clock::{days_in_month, wrap_decrement, wrap_increment, Field};

#[test]
fn every_field_range_matches_the_face() {
    let ranges: [(Field, u16, u16); 10] = [
        (Field::Month, 1, 12),
        (Field::Day, 1, 31),
        (Field::Year, 2000, 2099),
        (Field::Hour, 0, 23),
        (Field::Minute, 0, 59),
        (Field::Second, 0, 59),
        (Field::IsPm, 0, 1),
        (Field::Is24Hour, 0, 1),
        (Field::AlarmHour, 0, 23),
        (Field::AlarmMinute, 0, 59),
    ];
    for (field, min, max) in ranges {
        assert_eq!(field.min(), min, "{field:?} min");
        assert_eq!(field.spec().max, max, "{field:?} max");
    }
}

#[test]
fn month_lengths_follow_the_calendar_with_flat_february() {
    let lengths = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (month, length) in (1..=12).zip(lengths) {
        assert_eq!(days_in_month(month), length, "month {month}");
    }
}

#[test]
fn february_stays_28_even_in_leap_years() {
    // The registry has no year input at all, so 2024's February still
    // reads 28 days.
    assert_eq!(Field::Day.max_given_month(2), 28);
}

#[test]
fn day_ceiling_tracks_the_month() {
    assert_eq!(Field::Day.max_given_month(1), 31);
    assert_eq!(Field::Day.max_given_month(4), 30);
    assert_eq!(Field::Day.max_given_month(12), 31);
}

#[test]
fn day_ceiling_for_garbage_month_reads_31() {
    assert_eq!(Field::Day.max_given_month(0), 31);
    assert_eq!(Field::Day.max_given_month(13), 31);
}

#[test]
fn alarm_fields_use_24_hour_bounds_regardless_of_face_mode() {
    assert_eq!(Field::AlarmHour.max_given_month(6), 23);
    assert_eq!(Field::AlarmHour.min(), 0);
}

#[test]
fn increment_wraps_max_to_min() {
    assert_eq!(wrap_increment(59, 0, 59), 0);
    assert_eq!(wrap_increment(12, 1, 12), 1);
    assert_eq!(wrap_increment(2099, 2000, 2099), 2000);
}

#[test]
fn increment_below_max_just_steps() {
    assert_eq!(wrap_increment(0, 0, 59), 1);
    assert_eq!(wrap_increment(11, 1, 12), 12);
}

#[test]
fn decrement_wraps_min_to_max() {
    assert_eq!(wrap_decrement(0, 0, 59), 59);
    assert_eq!(wrap_decrement(1, 1, 12), 12);
    assert_eq!(wrap_decrement(2000, 2000, 2099), 2099);
}

#[test]
fn decrement_above_min_just_steps() {
    assert_eq!(wrap_decrement(59, 0, 59), 58);
    assert_eq!(wrap_decrement(2, 1, 12), 1);
}

#[test]
fn wrap_handles_a_value_stranded_above_the_ceiling() {
    // A day of 31 left over from January while the month now says April.
    assert_eq!(wrap_increment(31, 1, 30), 1);
    assert_eq!(wrap_decrement(31, 1, 30), 30);
}

#[test]
fn boolean_fields_toggle_under_either_arrow() {
    assert_eq!(wrap_increment(0, 0, 1), 1);
    assert_eq!(wrap_increment(1, 0, 1), 0);
    assert_eq!(wrap_decrement(0, 0, 1), 1);
    assert_eq!(wrap_decrement(1, 0, 1), 0);
}

#[test]
fn clock_backed_split_is_exactly_the_six_date_time_fields() {
    for field in Field::ALL {
        let expected = matches!(
            field,
            Field::Month | Field::Day | Field::Year | Field::Hour | Field::Minute | Field::Second
        );
        assert_eq!(field.is_clock_backed(), expected, "{field:?}");
    }
}
