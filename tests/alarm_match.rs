//! Host-level tests for alarm matching.

use keypad_clock::{alarm_due, ClockSnapshot};
use time::Weekday;

fn reading(hour: u8, minute: u8, second: u8) -> ClockSnapshot {
    ClockSnapshot {
        year: 2026,
        month: 8,
        day: 25,
        weekday: Weekday::Tuesday,
        hour,
        minute,
        second,
        temperature_c: 22.0,
    }
}

#[test]
fn due_exactly_when_hour_and_minute_match() {
    assert!(alarm_due(&reading(6, 30, 0), 6, 30));
    assert!(!alarm_due(&reading(6, 29, 59), 6, 30));
    assert!(!alarm_due(&reading(6, 31, 0), 6, 30));
    assert!(!alarm_due(&reading(7, 30, 0), 6, 30));
}

#[test]
fn a_full_day_of_minutes_fires_only_at_the_alarm() {
    // All 1440 minutes of a day against a 14:03 alarm: due on that one
    // minute and silent on the other 1439.
    for hour in 0..24 {
        for minute in 0..60 {
            assert_eq!(
                alarm_due(&reading(hour, minute, 0), 14, 3),
                (hour, minute) == (14, 3),
                "{hour:02}:{minute:02}"
            );
        }
    }
}

#[test]
fn due_for_the_whole_matching_minute() {
    // The idle loop polls every second and re-fires on each pass; the
    // predicate stays true for all sixty of them.
    for second in 0..60 {
        assert!(alarm_due(&reading(6, 30, second), 6, 30), "second {second}");
    }
}

#[test]
fn seconds_never_enter_into_it() {
    assert!(alarm_due(&reading(23, 59, 59), 23, 59));
}

#[test]
fn a_zero_alarm_means_midnight_not_disarmed() {
    assert!(alarm_due(&reading(0, 0, 30), 0, 0));
    assert!(!alarm_due(&reading(0, 1, 0), 0, 0));
}
