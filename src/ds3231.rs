//! DS3231 real-time clock over a shared blocking I2C bus.
//!
//! The driver is generic over [`embedded_hal::i2c::I2c`] so it can sit on
//! one arm of a shared bus next to the display. All register work is
//! delegated to [`crate::rtc_regs`]; this type only moves bytes.

use embedded_hal::i2c::I2c;

use crate::rtc_regs::{
    decode_date_time, encode_date_time, temperature_from_registers, OSCILLATOR_STOP_BIT,
    SECONDS_REGISTER, STATUS_REGISTER, TEMPERATURE_REGISTER,
};
use crate::shared_constants::RTC_I2C_ADDRESS;
use crate::snapshot::{ClockSnapshot, DateTimeFields};
use crate::{Error, Result};

/// The clock chip, wholesale reads and wholesale writes only.
pub struct Ds3231<I2cBus> {
    i2c: I2cBus,
}

impl<I2cBus: I2c> Ds3231<I2cBus> {
    pub const fn new(i2c: I2cBus) -> Self {
        Self { i2c }
    }

    /// Presence probe: true when the chip answers on the bus.
    ///
    /// Everything after a successful probe treats the chip as
    /// always-available; later bus failures surface as [`Error::ClockBus`].
    pub fn begin(&mut self) -> bool {
        self.read_register(STATUS_REGISTER).is_ok()
    }

    /// True when the oscillator-stop flag says the kept time is meaningless,
    /// which happens on first power-up and after battery loss.
    ///
    /// # Errors
    ///
    /// [`Error::ClockBus`] when the bus transaction fails.
    pub fn lost_power(&mut self) -> Result<bool> {
        Ok(self.read_register(STATUS_REGISTER)? & OSCILLATOR_STOP_BIT != 0)
    }

    /// One wholesale reading: date, time, weekday, and die temperature.
    ///
    /// # Errors
    ///
    /// [`Error::ClockBus`] when a bus transaction fails.
    pub fn snapshot(&mut self) -> Result<ClockSnapshot> {
        let mut registers = [0; 7];
        self.i2c
            .write_read(RTC_I2C_ADDRESS, &[SECONDS_REGISTER], &mut registers)
            .map_err(|_| Error::ClockBus)?;
        let mut temperature = [0; 2];
        self.i2c
            .write_read(RTC_I2C_ADDRESS, &[TEMPERATURE_REGISTER], &mut temperature)
            .map_err(|_| Error::ClockBus)?;

        let (fields, weekday) = decode_date_time(&registers);
        let [upper, lower] = temperature;
        Ok(ClockSnapshot {
            year: fields.year,
            month: fields.month,
            day: fields.day,
            weekday,
            hour: fields.hour,
            minute: fields.minute,
            second: fields.second,
            temperature_c: temperature_from_registers(upper, lower),
        })
    }

    /// Push the six date-time fields. The chip's day-of-week register is
    /// recomputed from the civil date inside the register image, and the
    /// oscillator-stop flag is cleared so the pushed time counts as good.
    ///
    /// # Errors
    ///
    /// [`Error::ClockBus`] when a bus transaction fails.
    pub fn adjust(&mut self, fields: &DateTimeFields) -> Result<()> {
        let [second, minute, hour, weekday, day, month, year] = encode_date_time(fields);
        self.i2c
            .write(
                RTC_I2C_ADDRESS,
                &[SECONDS_REGISTER, second, minute, hour, weekday, day, month, year],
            )
            .map_err(|_| Error::ClockBus)?;

        let status = self.read_register(STATUS_REGISTER)?;
        self.i2c
            .write(
                RTC_I2C_ADDRESS,
                &[STATUS_REGISTER, status & !OSCILLATOR_STOP_BIT],
            )
            .map_err(|_| Error::ClockBus)?;
        Ok(())
    }

    fn read_register(&mut self, register: u8) -> Result<u8> {
        let mut value = [0; 1];
        self.i2c
            .write_read(RTC_I2C_ADDRESS, &[register], &mut value)
            .map_err(|_| Error::ClockBus)?;
        let [byte] = value;
        Ok(byte)
    }
}
