//! LCD driver for HD44780-compatible displays behind a PCF8574 I2C backpack.
//!
//! Generic over [`embedded_hal::i2c::I2c`] so the display can share one bus
//! with the clock chip. Bus errors are swallowed: a write to a character
//! cell has no useful recovery, and the next repaint repairs the face.

use embassy_time::Timer;
use embedded_hal::i2c::I2c;

use crate::shared_constants::LCD_I2C_ADDRESS;

// PCF8574 pin mapping: P0=RS, P1=RW, P2=E, P3=Backlight, P4-P7=Data
const LCD_BACKLIGHT: u8 = 0x08;
const LCD_ENABLE: u8 = 0x04;
const LCD_RS: u8 = 0x01;

/// Character LCD with I2C interface (HD44780 + PCF8574 backpack).
pub struct CharLcd<I2cBus> {
    i2c: I2cBus,
    address: u8,
}

impl<I2cBus: I2c> CharLcd<I2cBus> {
    /// Create and initialize an LCD at the most common backpack address.
    ///
    /// If the display stays dark, try [`CharLcd::new_with_address`] with
    /// 0x3F, the other address these backpacks ship with.
    pub async fn new(i2c: I2cBus) -> Self {
        Self::new_with_address(i2c, LCD_I2C_ADDRESS).await
    }

    /// Create and initialize an LCD at a custom backpack address.
    pub async fn new_with_address(i2c: I2cBus, address: u8) -> Self {
        let mut lcd = Self { i2c, address };
        lcd.init().await;
        lcd
    }

    #[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
    async fn write_nibble(&mut self, nibble: u8, rs: bool) {
        let rs_bit = if rs { LCD_RS } else { 0 };
        let data = (nibble << 4) | LCD_BACKLIGHT | rs_bit;

        // Write with enable high
        let _ = self.i2c.write(self.address, &[data | LCD_ENABLE]);
        Timer::after_micros(1).await;

        // Write with enable low
        let _ = self.i2c.write(self.address, &[data]);
        Timer::after_micros(50).await;
    }

    async fn write_byte_internal(&mut self, byte: u8, rs: bool) {
        self.write_nibble((byte >> 4) & 0x0F, rs).await;
        self.write_nibble(byte & 0x0F, rs).await;
    }

    async fn init(&mut self) {
        Timer::after_millis(50).await;

        // Initialize in 4-bit mode
        self.write_nibble(0x03, false).await;
        Timer::after_millis(5).await;
        self.write_nibble(0x03, false).await;
        Timer::after_micros(150).await;
        self.write_nibble(0x03, false).await;
        self.write_nibble(0x02, false).await;

        // Function set: 4-bit, 2 lines, 5x8 font
        self.write_byte_internal(0x28, false).await;
        // Display control: display on, cursor off, blink off
        self.write_byte_internal(0x0C, false).await;
        // Clear display
        self.write_byte_internal(0x01, false).await;
        Timer::after_millis(2).await;
        // Entry mode: increment cursor, no shift
        self.write_byte_internal(0x06, false).await;
    }

    /// Set cursor position.
    ///
    /// # Arguments
    /// * `row` - Row number (0-3 on a 20x4 display)
    /// * `col` - Column number (0-19 on a 20x4 display)
    #[expect(clippy::arithmetic_side_effects, reason = "Row/col values are small")]
    pub async fn set_cursor(&mut self, row: u8, col: u8) {
        let address = match row {
            0 => 0x00 + col,  // Line 1
            1 => 0x40 + col,  // Line 2
            2 => 0x14 + col,  // Line 3 (20x4 displays)
            3 => 0x54 + col,  // Line 4 (20x4 displays)
            _ => 0x00,
        };
        self.write_byte_internal(0x80 | address, false).await;
    }

    /// Hide the cursor.
    pub async fn cursor_off(&mut self) {
        self.write_byte_internal(0x0C, false).await;
    }

    /// Enable the blinking block cursor.
    pub async fn blink_on(&mut self) {
        self.write_byte_internal(0x0F, false).await;
    }

    /// Print raw character-cell bytes at the current cursor position.
    ///
    /// Custom-glyph codes below 0x08 pass straight through to the cell.
    pub async fn print_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte_internal(byte, true).await;
        }
    }

    /// Load a 5x8 glyph into one of the eight custom-character slots.
    ///
    /// The glyph shows in a cell by printing the slot number as a byte.
    /// Leaves the cursor parked at home, since programming pattern memory
    /// moves the address pointer away from the display.
    #[expect(clippy::arithmetic_side_effects, reason = "Bit operations")]
    pub async fn create_char(&mut self, slot: u8, pattern: [u8; 8]) {
        // Point at the slot's pattern memory (CGRAM)
        self.write_byte_internal(0x40 | ((slot & 0x07) << 3), false).await;
        for row in pattern {
            self.write_byte_internal(row, true).await;
        }
        // Back to display memory
        self.set_cursor(0, 0).await;
    }
}
