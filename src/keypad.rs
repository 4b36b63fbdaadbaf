//! Matrix-keypad scanner device.
//!
//! Rows are strobed low one at a time; a column reading low during a strobe
//! names the pressed key. The scan task debounces, keeps only press edges
//! (no auto-repeat), and sends decoded [`Key`]s through the notifier.

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Output};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel as EmbassyChannel;
use embassy_time::Timer;

use crate::keys::{key_at, Key, KEY_COLUMN_COUNT, KEY_ROW_COUNT};
use crate::shared_constants::{
    KEYPAD_DEBOUNCE_DELAY, KEYPAD_SCAN_INTERVAL, KEYPAD_SETTLE_DELAY,
};
use crate::Result;

/// Notifier type for the `Keypad` device abstraction.
pub type KeypadNotifier = EmbassyChannel<CriticalSectionRawMutex, Key, 8>;

/// A device abstraction for the 4x4 matrix keypad.
pub struct Keypad<'a> {
    notifier: &'a KeypadNotifier,
}

impl Keypad<'_> {
    /// Create Keypad resources.
    #[must_use]
    pub const fn notifier() -> KeypadNotifier {
        EmbassyChannel::new()
    }

    /// Create a new Keypad device and start its scan task.
    ///
    /// Row pins must start high (not strobed); column pins must be pulled up.
    ///
    /// # Errors
    ///
    /// [`crate::Error::TaskSpawn`] when the scan task cannot be spawned.
    pub fn new(
        rows: [Output<'static>; KEY_ROW_COUNT],
        columns: [Input<'static>; KEY_COLUMN_COUNT],
        notifier: &'static KeypadNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        spawner.spawn(keypad_task(rows, columns, notifier))?;
        Ok(Self { notifier })
    }

    /// Next debounced key press. Waits until one arrives.
    pub async fn next_key(&self) -> Key {
        self.notifier.receive().await
    }
}

#[embassy_executor::task]
async fn keypad_task(
    mut rows: [Output<'static>; KEY_ROW_COUNT],
    columns: [Input<'static>; KEY_COLUMN_COUNT],
    notifier: &'static KeypadNotifier,
) -> ! {
    info!("keypad scan task started");
    let mut last: Option<Key> = None;
    loop {
        Timer::after(KEYPAD_SCAN_INTERVAL).await;

        let pressed = scan(&mut rows, &columns).await;
        if pressed == last {
            continue;
        }

        // A change; let the contacts settle, then believe a steady reading.
        Timer::after(KEYPAD_DEBOUNCE_DELAY).await;
        if scan(&mut rows, &columns).await != pressed {
            continue;
        }

        if let Some(key) = pressed {
            info!("keypad: {}", key);
            notifier.send(key).await;
        }
        last = pressed;
    }
}

/// One full strobe of the pad. Returns the first pressed key found, or
/// `None` for an idle pad or an unassigned position.
async fn scan(
    rows: &mut [Output<'static>; KEY_ROW_COUNT],
    columns: &[Input<'static>; KEY_COLUMN_COUNT],
) -> Option<Key> {
    let mut found = None;
    for (row_index, row) in rows.iter_mut().enumerate() {
        row.set_low();
        Timer::after(KEYPAD_SETTLE_DELAY).await;
        let hit = columns.iter().position(|column| column.is_low());
        row.set_high();
        if let Some(column_index) = hit {
            found = key_at(row_index, column_index);
            break;
        }
    }
    found
}
