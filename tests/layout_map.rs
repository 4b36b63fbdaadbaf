//! Host-level tests for face geometry and row formatting.

use keypad_clock::layout::{
    alarm_row, date_row, hour_cells, mode_cells, status_row, temperature_cells, time_row,
    to_12_hour, two_digits, weekday_cells, year_digits, FACE_COLUMNS,
};
use keypad_clock::{cursor_position, ClockSnapshot, Field};
use time::Weekday;

fn snapshot() -> ClockSnapshot {
    ClockSnapshot {
        year: 2026,
        month: 8,
        day: 25,
        weekday: Weekday::Tuesday,
        hour: 14,
        minute: 3,
        second: 27,
        temperature_c: 25.25,
    }
}

#[test]
fn cursor_table_matches_the_face() {
    let expected: [(Field, (u8, u8)); 10] = [
        (Field::Month, (1, 0)),
        (Field::Day, (4, 0)),
        (Field::Year, (9, 0)),
        (Field::Hour, (1, 1)),
        (Field::Minute, (4, 1)),
        (Field::Second, (7, 1)),
        (Field::IsPm, (10, 1)),
        (Field::Is24Hour, (17, 1)),
        (Field::AlarmHour, (7, 2)),
        (Field::AlarmMinute, (10, 2)),
    ];
    for (field, position) in expected {
        assert_eq!(cursor_position(field), position, "{field:?}");
    }
}

#[test]
fn every_cursor_home_is_on_the_face() {
    for field in Field::ALL {
        let (column, row) = cursor_position(field);
        assert!(usize::from(column) < FACE_COLUMNS, "{field:?}");
        assert!(row < 3, "{field:?} lives above the status row");
    }
}

#[test]
fn two_digit_cells_are_zero_padded() {
    assert_eq!(&two_digits(0), b"00");
    assert_eq!(&two_digits(7), b"07");
    assert_eq!(&two_digits(59), b"59");
}

#[test]
fn year_cells_spell_all_four_digits() {
    assert_eq!(&year_digits(2026), b"2026");
    assert_eq!(&year_digits(2000), b"2000");
}

#[test]
fn twelve_hour_folding_keeps_noon_and_midnight_at_twelve() {
    assert_eq!(to_12_hour(0), (12, false));
    assert_eq!(to_12_hour(1), (1, false));
    assert_eq!(to_12_hour(11), (11, false));
    assert_eq!(to_12_hour(12), (12, true));
    assert_eq!(to_12_hour(13), (1, true));
    assert_eq!(to_12_hour(23), (11, true));
}

#[test]
fn hour_cells_blank_the_meridiem_in_24_hour_mode() {
    assert_eq!(hour_cells(14, true), (*b"14", *b"  "));
    assert_eq!(hour_cells(0, true), (*b"00", *b"  "));
}

#[test]
fn hour_cells_fold_and_tag_in_12_hour_mode() {
    assert_eq!(hour_cells(14, false), (*b"02", *b"PM"));
    assert_eq!(hour_cells(0, false), (*b"12", *b"AM"));
    assert_eq!(hour_cells(12, false), (*b"12", *b"PM"));
}

#[test]
fn mode_cells_name_the_face_mode() {
    assert_eq!(&mode_cells(true), b"24H");
    assert_eq!(&mode_cells(false), b"12H");
}

#[test]
fn weekday_cells_abbreviate_to_three_letters() {
    assert_eq!(&weekday_cells(Weekday::Monday), b"MON");
    assert_eq!(&weekday_cells(Weekday::Sunday), b"SUN");
}

#[test]
fn temperature_cells_truncate_and_clamp() {
    assert_eq!(temperature_cells(25.25), [b'2', b'5', 0, b'C']);
    assert_eq!(temperature_cells(7.9), [b' ', b'7', 0, b'C']);
    assert_eq!(temperature_cells(-3.0), [b'-', b'3', 0, b'C']);
    assert_eq!(temperature_cells(-40.0), [b'-', b'9', 0, b'C']);
    assert_eq!(temperature_cells(120.0), [b'9', b'9', 0, b'C']);
}

#[test]
fn date_row_renders_the_full_top_line() {
    assert_eq!(&date_row(&snapshot()), b"08/25/2026       TUE");
}

#[test]
fn time_row_renders_both_face_modes() {
    let reading = snapshot();
    assert_eq!(&time_row(&reading, true), b"14:03:27    25\x00C 24H");
    assert_eq!(&time_row(&reading, false), b"02:03:27 PM 25\x00C 12H");
}

#[test]
fn alarm_row_carries_the_label_and_time() {
    assert_eq!(&alarm_row(6, 30), b"Alarm 06:30         ");
}

#[test]
fn status_row_pads_and_truncates_to_the_face_width() {
    assert_eq!(&status_row("CLOCK NOT FOUND"), b"CLOCK NOT FOUND     ");
    let long = status_row("a message far wider than the face is");
    assert_eq!(long.len(), FACE_COLUMNS);
    assert_eq!(&long[..7], &b"a messa"[..]);
}

#[test]
fn rows_are_always_exactly_one_face_wide() {
    let reading = snapshot();
    assert_eq!(date_row(&reading).len(), FACE_COLUMNS);
    assert_eq!(time_row(&reading, true).len(), FACE_COLUMNS);
    assert_eq!(alarm_row(0, 0).len(), FACE_COLUMNS);
}
