//! Value types exchanged with the backing clock.

use time::Weekday;

/// One wholesale reading of the backing clock.
///
/// The weekday is whatever the clock's own day-counter holds; the appliance
/// never sets it directly. Temperature comes from the clock die's sensor at
/// 0.25 degree resolution.
#[derive(Clone, Copy, Debug)]
pub struct ClockSnapshot {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub weekday: Weekday,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub temperature_c: f32,
}

/// The six fields the backing clock stores, in a shape ready to push.
///
/// The weekday is deliberately absent. Whoever writes these to the clock
/// derives it from the civil date, so the day-counter can never disagree
/// with the date on the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct DateTimeFields {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}
