//! Active-buzzer output.

use embedded_hal::digital::OutputPin;

use crate::shared_constants::{ALARM_PULSE_COUNT, ALARM_PULSE_OFF, ALARM_PULSE_ON};
use embassy_time::Timer;

/// An active buzzer on one output pin, driven in short bursts.
pub struct Buzzer<Pin> {
    pin: Pin,
}

impl<Pin: OutputPin> Buzzer<Pin> {
    pub const fn new(pin: Pin) -> Self {
        Self { pin }
    }

    /// One alarm burst: five short pulses, then silence.
    ///
    /// The idle loop calls this on every pass through a matching minute, so
    /// the alarm keeps chirping for the whole minute rather than latching.
    pub async fn burst(&mut self) {
        for _ in 0..ALARM_PULSE_COUNT {
            let _ = self.pin.set_high();
            Timer::after(ALARM_PULSE_ON).await;
            let _ = self.pin.set_low();
            Timer::after(ALARM_PULSE_OFF).await;
        }
    }
}
