//! Paints the four fixed face rows and manages the edit cursor.
//!
//! All geometry and formatting come from [`crate::layout`]; this type only
//! decides which cells to touch. The idle loop repaints whole rows from a
//! clock reading. Mid-edit, single-field repaints pull from the working
//! copy instead, so the face always shows what a commit would push.

use embedded_hal::i2c::I2c;

use crate::char_lcd::CharLcd;
use crate::fields::Field;
use crate::layout::{
    alarm_row, cursor_position, date_row, hour_cells, mode_cells, status_row, time_row,
    two_digits, year_digits, ALARM_HOUR_COLUMN, ALARM_MINUTE_COLUMN, ALARM_ROW, AMPM_COLUMN,
    DATE_ROW, DAY_COLUMN, DEGREE_GLYPH, DEGREE_GLYPH_ROWS, HOUR_COLUMN, MINUTE_COLUMN,
    MODE_COLUMN, MONTH_COLUMN, SECOND_COLUMN, STATUS_ROW, TIME_ROW, YEAR_COLUMN,
};
use crate::snapshot::ClockSnapshot;
use crate::store::TimeStore;

/// The 20x4 face.
pub struct Screen<I2cBus> {
    lcd: CharLcd<I2cBus>,
}

impl<I2cBus: I2c> Screen<I2cBus> {
    /// Initialize the display and load the degree glyph.
    pub async fn new(i2c: I2cBus) -> Self {
        let mut lcd = CharLcd::new(i2c).await;
        lcd.create_char(DEGREE_GLYPH, DEGREE_GLYPH_ROWS).await;
        Self { lcd }
    }

    /// Repaint the three live rows from a clock reading.
    pub async fn refresh(&mut self, snapshot: &ClockSnapshot, store: &TimeStore) {
        let is_24_hour = store.is_24_hour();
        let (alarm_hour, alarm_minute) = store.alarm_time();
        self.paint_row(DATE_ROW, &date_row(snapshot)).await;
        self.paint_row(TIME_ROW, &time_row(snapshot, is_24_hour)).await;
        self.paint_row(ALARM_ROW, &alarm_row(alarm_hour, alarm_minute)).await;
    }

    /// Repaint only the alarm row, after an alarm edit or serial alarm set.
    pub async fn refresh_alarm(&mut self, store: &TimeStore) {
        let (alarm_hour, alarm_minute) = store.alarm_time();
        self.paint_row(ALARM_ROW, &alarm_row(alarm_hour, alarm_minute)).await;
    }

    /// Show a message on the status row.
    pub async fn status(&mut self, text: &str) {
        self.paint_row(STATUS_ROW, &status_row(text)).await;
    }

    /// Repaint one edited field's cells from the working copy, then park the
    /// cursor back on the field so the blink stays where the user is.
    pub async fn redraw_field(&mut self, field: Field, store: &TimeStore) {
        match field {
            Field::Month => {
                self.paint_at(DATE_ROW, MONTH_COLUMN, &two_digits(store.get(field))).await;
            }
            Field::Day => {
                self.paint_at(DATE_ROW, DAY_COLUMN, &two_digits(store.get(field))).await;
            }
            Field::Year => {
                self.paint_at(DATE_ROW, YEAR_COLUMN, &year_digits(store.get(field))).await;
            }
            Field::Minute => {
                self.paint_at(TIME_ROW, MINUTE_COLUMN, &two_digits(store.get(field))).await;
            }
            Field::Second => {
                self.paint_at(TIME_ROW, SECOND_COLUMN, &two_digits(store.get(field))).await;
            }
            // The hour cells, the AM/PM cells, and the mode tag move together:
            // an hour stepped past noon flips the AM/PM text, and a mode flip
            // rewrites the hour.
            Field::Hour | Field::IsPm | Field::Is24Hour => {
                let is_24_hour = store.is_24_hour();
                let (hour, ampm) = hour_cells(store.get(Field::Hour), is_24_hour);
                self.paint_at(TIME_ROW, HOUR_COLUMN, &hour).await;
                self.paint_at(TIME_ROW, AMPM_COLUMN, &ampm).await;
                self.paint_at(TIME_ROW, MODE_COLUMN, &mode_cells(is_24_hour)).await;
            }
            Field::AlarmHour => {
                self.paint_at(ALARM_ROW, ALARM_HOUR_COLUMN, &two_digits(store.get(field))).await;
            }
            Field::AlarmMinute => {
                self.paint_at(ALARM_ROW, ALARM_MINUTE_COLUMN, &two_digits(store.get(field)))
                    .await;
            }
        }
        self.place_cursor(field).await;
    }

    /// Park the hardware cursor on a field's cell.
    pub async fn place_cursor(&mut self, field: Field) {
        let (column, row) = cursor_position(field);
        self.lcd.set_cursor(row, column).await;
    }

    /// Start the blinking edit cursor.
    pub async fn edit_cursor_on(&mut self) {
        self.lcd.blink_on().await;
    }

    /// Stop the edit cursor entirely.
    pub async fn edit_cursor_off(&mut self) {
        self.lcd.cursor_off().await;
    }

    async fn paint_row(&mut self, row: u8, cells: &[u8]) {
        self.lcd.set_cursor(row, 0).await;
        self.lcd.print_bytes(cells).await;
    }

    async fn paint_at(&mut self, row: u8, column: u8, cells: &[u8]) {
        self.lcd.set_cursor(row, column).await;
        self.lcd.print_bytes(cells).await;
    }
}
