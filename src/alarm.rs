//! Alarm matching.

use crate::snapshot::ClockSnapshot;

/// True while the reading sits inside the alarm minute.
///
/// There is no latch: the idle loop polls this every second, so the buzzer
/// bursts again on every pass through a matching minute. Setting the alarm
/// off-minute is the only way to silence it early.
#[must_use]
pub const fn alarm_due(snapshot: &ClockSnapshot, alarm_hour: u8, alarm_minute: u8) -> bool {
    snapshot.hour == alarm_hour && snapshot.minute == alarm_minute
}
