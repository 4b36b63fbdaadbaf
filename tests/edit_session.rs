//! Host-level tests driving the edit state machine key by key.

use keypad_clock::{EditKind, EditSession, EditStep, Field, Key, TimeStore};

/// A store loaded the way the idle loop would before a date-time session.
fn store_at(month: u16, day: u16, year: u16, hour: u16, minute: u16, second: u16) -> TimeStore {
    let mut store = TimeStore::new();
    store.set(Field::Month, month);
    store.set(Field::Day, day);
    store.set(Field::Year, year);
    store.set(Field::Hour, hour);
    store.set(Field::Minute, minute);
    store.set(Field::Second, second);
    store
}

#[test]
fn date_time_session_starts_on_month() {
    let session = EditSession::date_time();
    assert_eq!(session.kind(), EditKind::DateTime);
    assert_eq!(session.field(), Field::Month);
}

#[test]
fn alarm_session_starts_on_alarm_hour() {
    let session = EditSession::alarm();
    assert_eq!(session.kind(), EditKind::Alarm);
    assert_eq!(session.field(), Field::AlarmHour);
}

#[test]
fn next_walks_the_date_time_ring_and_skips_am_pm() {
    let mut store = TimeStore::new();
    let mut session = EditSession::date_time();
    let expected = [
        Field::Day,
        Field::Year,
        Field::Hour,
        Field::Minute,
        Field::Second,
        Field::Is24Hour, // straight past IsPm
        Field::Month,    // and around
    ];
    for field in expected {
        assert_eq!(session.apply(Key::Right, &mut store), EditStep::Moved(field));
    }
}

#[test]
fn previous_walks_the_ring_backward_from_month_to_mode() {
    let mut store = TimeStore::new();
    let mut session = EditSession::date_time();
    let expected = [
        Field::Is24Hour,
        Field::Second,
        Field::Minute,
        Field::Hour,
        Field::Year,
        Field::Day,
        Field::Month,
    ];
    for field in expected {
        assert_eq!(session.apply(Key::Left, &mut store), EditStep::Moved(field));
    }
}

#[test]
fn alarm_ring_is_two_fields_round_and_round() {
    let mut store = TimeStore::new();
    let mut session = EditSession::alarm();
    assert_eq!(
        session.apply(Key::Right, &mut store),
        EditStep::Moved(Field::AlarmMinute)
    );
    assert_eq!(
        session.apply(Key::Right, &mut store),
        EditStep::Moved(Field::AlarmHour)
    );
    assert_eq!(
        session.apply(Key::Left, &mut store),
        EditStep::Moved(Field::AlarmMinute)
    );
}

#[test]
fn up_and_down_adjust_the_selected_field_in_the_store() {
    let mut store = store_at(6, 15, 2026, 10, 30, 0);
    let mut session = EditSession::date_time();
    assert_eq!(session.apply(Key::Up, &mut store), EditStep::Adjusted(Field::Month));
    assert_eq!(store.get(Field::Month), 7);
    assert_eq!(session.apply(Key::Down, &mut store), EditStep::Adjusted(Field::Month));
    assert_eq!(store.get(Field::Month), 6);
}

#[test]
fn month_wraps_twelve_to_one_and_back() {
    let mut store = store_at(12, 1, 2026, 0, 0, 0);
    let mut session = EditSession::date_time();
    session.apply(Key::Up, &mut store);
    assert_eq!(store.get(Field::Month), 1);
    session.apply(Key::Down, &mut store);
    assert_eq!(store.get(Field::Month), 12);
}

#[test]
fn day_ceiling_follows_the_month_in_the_store() {
    let mut store = store_at(4, 30, 2026, 0, 0, 0);
    let mut session = EditSession::date_time();
    session.apply(Key::Right, &mut store); // cursor to Day
    session.apply(Key::Up, &mut store);
    assert_eq!(store.get(Field::Day), 1, "April has no day 31");
}

#[test]
fn stranded_day_from_a_longer_month_wraps_on_next_touch() {
    // Day 31 was valid under January; the month was then stepped to April.
    // The stale 31 stays until the day itself is adjusted.
    let mut store = store_at(1, 31, 2026, 0, 0, 0);
    let mut session = EditSession::date_time();
    for _ in 0..3 {
        session.apply(Key::Up, &mut store); // January through April
    }
    assert_eq!(store.get(Field::Month), 4);
    assert_eq!(store.get(Field::Day), 31, "month steps leave the day alone");

    session.apply(Key::Right, &mut store); // cursor to Day
    assert_eq!(session.apply(Key::Up, &mut store), EditStep::Adjusted(Field::Day));
    assert_eq!(store.get(Field::Day), 1);
}

#[test]
fn february_day_ceiling_is_28_whatever_the_year() {
    let mut store = store_at(2, 28, 2024, 0, 0, 0);
    let mut session = EditSession::date_time();
    session.apply(Key::Right, &mut store); // cursor to Day
    session.apply(Key::Up, &mut store);
    assert_eq!(store.get(Field::Day), 1);
}

#[test]
fn mode_field_toggles_under_either_arrow() {
    let mut store = TimeStore::new();
    let mut session = EditSession::date_time();
    session.apply(Key::Left, &mut store); // wrap back to Is24Hour
    assert_eq!(session.field(), Field::Is24Hour);

    assert!(!store.is_24_hour());
    session.apply(Key::Up, &mut store);
    assert!(store.is_24_hour());
    session.apply(Key::Down, &mut store);
    assert!(!store.is_24_hour());
}

#[test]
fn commit_reports_the_session_kind() {
    let mut store = TimeStore::new();
    let mut date_time = EditSession::date_time();
    assert_eq!(
        date_time.apply(Key::TimeSet, &mut store),
        EditStep::Committed(EditKind::DateTime)
    );
    let mut alarm = EditSession::alarm();
    assert_eq!(
        alarm.apply(Key::TimeSet, &mut store),
        EditStep::Committed(EditKind::Alarm)
    );
}

#[test]
fn alarm_key_mid_session_is_ignored_and_changes_nothing() {
    let mut store = store_at(6, 15, 2026, 10, 30, 0);
    let before = store;
    let mut session = EditSession::date_time();
    assert_eq!(session.apply(Key::AlarmEdit, &mut store), EditStep::Ignored);
    assert_eq!(store, before);
    assert_eq!(session.field(), Field::Month, "the cursor did not move");
}

#[test]
fn navigation_never_touches_the_store() {
    let mut store = store_at(6, 15, 2026, 10, 30, 0);
    let before = store;
    let mut session = EditSession::date_time();
    for _ in 0..20 {
        session.apply(Key::Right, &mut store);
        session.apply(Key::Left, &mut store);
    }
    assert_eq!(store, before);
}

#[test]
fn only_the_commit_key_ends_a_session() {
    let mut store = TimeStore::new();
    let mut session = EditSession::date_time();
    for key in [Key::Up, Key::Down, Key::Left, Key::Right, Key::AlarmEdit] {
        assert!(!matches!(
            session.apply(key, &mut store),
            EditStep::Committed(_)
        ));
    }
}

#[test]
fn a_whole_session_sets_a_date_and_time() {
    // Set 07/04/2026 09:00:00 starting from 06/15/2026 08:58:30.
    let mut store = store_at(6, 15, 2026, 8, 58, 30);
    let mut session = EditSession::date_time();

    session.apply(Key::Up, &mut store); // Month 6 -> 7
    session.apply(Key::Right, &mut store); // to Day
    for _ in 0..11 {
        session.apply(Key::Down, &mut store); // Day 15 -> 4
    }
    session.apply(Key::Right, &mut store); // to Year, left at 2026
    session.apply(Key::Right, &mut store); // to Hour
    session.apply(Key::Up, &mut store); // 8 -> 9
    session.apply(Key::Right, &mut store); // to Minute
    session.apply(Key::Down, &mut store);
    session.apply(Key::Down, &mut store); // 58 -> 56... and back up
    session.apply(Key::Up, &mut store);
    session.apply(Key::Up, &mut store);
    session.apply(Key::Up, &mut store);
    session.apply(Key::Up, &mut store); // 56 -> 0 over the top
    session.apply(Key::Right, &mut store); // to Second
    for _ in 0..30 {
        session.apply(Key::Down, &mut store); // 30 -> 0
    }
    let step = session.apply(Key::TimeSet, &mut store);

    assert_eq!(step, EditStep::Committed(EditKind::DateTime));
    let fields = store.date_time();
    assert_eq!(
        (fields.month, fields.day, fields.year), (7, 4, 2026)
    );
    assert_eq!((fields.hour, fields.minute, fields.second), (9, 0, 0));
}

#[test]
fn alarm_session_only_touches_alarm_fields() {
    let mut store = store_at(6, 15, 2026, 10, 30, 45);
    let date_time_before = store.date_time();
    let mut session = EditSession::alarm();

    for _ in 0..7 {
        session.apply(Key::Up, &mut store); // AlarmHour 0 -> 7
    }
    session.apply(Key::Right, &mut store);
    session.apply(Key::Down, &mut store); // AlarmMinute 0 -> 59
    session.apply(Key::TimeSet, &mut store);

    assert_eq!(store.alarm_time(), (7, 59));
    assert_eq!(store.date_time(), date_time_before);
}
