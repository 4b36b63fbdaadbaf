//! The field-editing state machine.
//!
//! A session exists only while an edit is underway; outside one, the
//! appliance just ticks. The session itself owns nothing but a cursor over a
//! fixed ring of fields. Every key produces an [`EditStep`] telling the
//! surrounding loop what side effect to run, which keeps the machine free of
//! display and clock handles and lets the tests drive it to completion on a
//! plain [`TimeStore`].
//!
//! Navigation is cyclic in both directions. Adjustment wraps rather than
//! clamping, with `Day`'s ceiling re-read from the current `Month` on every
//! step. There is no cancel: the only way out of a session is the commit key.

use crate::fields::{wrap_decrement, wrap_increment, Field};
use crate::keys::Key;
use crate::store::TimeStore;

/// Which face value a session is editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum EditKind {
    DateTime,
    Alarm,
}

/// Ring of fields a date-time session walks, in cursor order.
///
/// `IsPm` is deliberately absent: the cell is on the face and the value is in
/// the store, but the cursor skips from `Second` straight to `Is24Hour`.
pub const DATE_TIME_RING: [Field; 7] = [
    Field::Month,
    Field::Day,
    Field::Year,
    Field::Hour,
    Field::Minute,
    Field::Second,
    Field::Is24Hour,
];

/// Ring of fields an alarm session walks.
pub const ALARM_RING: [Field; 2] = [Field::AlarmHour, Field::AlarmMinute];

/// What the surrounding loop must do after one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum EditStep {
    /// The key means nothing mid-session. Nothing changed.
    Ignored,
    /// The cursor moved; park the blinking cursor on this field.
    Moved(Field),
    /// This field's value changed in the store; repaint its region and, for
    /// a clock-backed field, push the working date-time to the clock.
    Adjusted(Field),
    /// The commit key ended the session.
    Committed(EditKind),
}

/// One live editing interaction: a kind, a ring, and a cursor into it.
pub struct EditSession {
    kind: EditKind,
    ring: &'static [Field],
    cursor: usize,
}

impl EditSession {
    /// Start a date-time session with the cursor parked on `Month`.
    ///
    /// The caller reloads the store from the clock first, so the session
    /// starts from what the face is actually showing.
    #[must_use]
    pub const fn date_time() -> Self {
        Self {
            kind: EditKind::DateTime,
            ring: &DATE_TIME_RING,
            cursor: 0,
        }
    }

    /// Start an alarm session with the cursor parked on `AlarmHour`.
    ///
    /// No reload happens here; the alarm lives only in the store.
    #[must_use]
    pub const fn alarm() -> Self {
        Self {
            kind: EditKind::Alarm,
            ring: &ALARM_RING,
            cursor: 0,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EditKind {
        self.kind
    }

    /// The field the cursor is parked on.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "The cursor stays inside the ring by construction."
    )]
    pub const fn field(&self) -> Field {
        self.ring[self.cursor]
    }

    /// Feed one key through the machine.
    pub fn apply(&mut self, key: Key, store: &mut TimeStore) -> EditStep {
        match key {
            Key::Right => self.move_next(),
            Key::Left => self.move_previous(),
            Key::Up => self.adjust(store, wrap_increment),
            Key::Down => self.adjust(store, wrap_decrement),
            Key::TimeSet => EditStep::Committed(self.kind),
            Key::AlarmEdit => EditStep::Ignored,
        }
    }

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "The cursor is always below the ring length."
    )]
    fn move_next(&mut self) -> EditStep {
        self.cursor = if self.cursor + 1 >= self.ring.len() {
            0
        } else {
            self.cursor + 1
        };
        EditStep::Moved(self.field())
    }

    #[expect(
        clippy::arithmetic_side_effects,
        reason = "The ring is never empty and the cursor decrement only runs when nonzero."
    )]
    fn move_previous(&mut self) -> EditStep {
        self.cursor = if self.cursor == 0 {
            self.ring.len() - 1
        } else {
            self.cursor - 1
        };
        EditStep::Moved(self.field())
    }

    fn adjust(&self, store: &mut TimeStore, wrap: fn(u16, u16, u16) -> u16) -> EditStep {
        let field = self.field();
        let ceiling = field.max_given_month(store.get(Field::Month));
        let value = wrap(store.get(field), field.min(), ceiling);
        store.set(field, value);
        EditStep::Adjusted(field)
    }
}
