//! Key vocabulary for the 4x4 matrix keypad.
//!
//! The pad carries the usual `1..9, *, 0, #, A..D` legend. Only six positions
//! mean anything to this appliance; the rest scan as no key at all.
//!
//! | key | meaning |
//! |-----|------------------------------------------------|
//! | `2` | increment the selected field                   |
//! | `8` | decrement the selected field                   |
//! | `4` | move the cursor to the previous field          |
//! | `6` | move the cursor to the next field              |
//! | `A` | start editing the alarm time                   |
//! | `B` | start editing the date-time, or commit an edit |

/// One decoded press on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Key {
    /// Increment the selected field (the `2` key).
    Up,
    /// Decrement the selected field (the `8` key).
    Down,
    /// Move the cursor to the previous field (the `4` key).
    Left,
    /// Move the cursor to the next field (the `6` key).
    Right,
    /// Start editing the alarm time (the `A` key).
    AlarmEdit,
    /// Start editing the date-time, or commit the active edit (the `B` key).
    TimeSet,
}

pub const KEY_ROW_COUNT: usize = 4;
pub const KEY_COLUMN_COUNT: usize = 4;

/// The pad's wiring, row-major. `None` marks a key this appliance ignores.
const KEY_GRID: [[Option<Key>; KEY_COLUMN_COUNT]; KEY_ROW_COUNT] = [
    [None, Some(Key::Up), None, Some(Key::AlarmEdit)],
    [Some(Key::Left), None, Some(Key::Right), Some(Key::TimeSet)],
    [None, Some(Key::Down), None, None],
    [None, None, None, None],
];

/// Look up the key at a scan position.
///
/// ```
/// use keypad_clock::{key_at, Key};
///
/// assert_eq!(key_at(0, 1), Some(Key::Up));
/// assert_eq!(key_at(3, 0), None); // the `*` key is unassigned
/// assert_eq!(key_at(9, 9), None);
/// ```
#[must_use]
pub fn key_at(row: usize, column: usize) -> Option<Key> {
    KEY_GRID
        .get(row)
        .and_then(|keys| keys.get(column))
        .copied()
        .flatten()
}
