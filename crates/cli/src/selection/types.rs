//! Type definitions for the interactive selector.
//!
//! The navigation state lives in an explicit [`SelectorSession`] value passed
//! through the render/read loop, never in process-wide state, so multiple
//! logical sessions (e.g. under test) cannot interfere.

/// One selectable entry: a display label and an opaque routing payload.
///
/// Labels need not be unique; payloads should be. Ordering is the order the
/// caller inserted the items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableItem {
    pub label: String,
    pub payload: String,
}

impl SelectableItem {
    #[must_use]
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

/// Result of one selector run. Cancellation is a normal outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Picked(SelectableItem),
    Cancelled,
}

/// In-memory state of one interactive run.
///
/// Invariant: `cursor_index` is always within `[0, items.len() - 1]` for a
/// non-empty item list, and navigation never wraps.
#[derive(Debug)]
pub struct SelectorSession {
    items: Vec<SelectableItem>,
    cursor_index: usize,
}

impl SelectorSession {
    /// Creates a session over a non-empty item list. Callers are expected to
    /// reject empty lists up front, as [`crate::selection::select`] does.
    #[must_use]
    pub fn new(items: Vec<SelectableItem>) -> Self {
        debug_assert!(
            !items.is_empty(),
            "selector session requires at least one item"
        );

        Self {
            items,
            cursor_index: 0,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[SelectableItem] {
        &self.items
    }

    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.cursor_index
    }

    /// The item under the cursor.
    #[must_use]
    pub fn current(&self) -> &SelectableItem {
        &self.items[self.cursor_index]
    }

    /// Moves the cursor up one item, saturating at the first item.
    pub fn move_up(&mut self) {
        self.cursor_index = self.cursor_index.saturating_sub(1);
    }

    /// Moves the cursor down one item, saturating at the last item.
    pub fn move_down(&mut self) {
        if self.cursor_index + 1 < self.items.len() {
            self.cursor_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(labels: &[&str]) -> SelectorSession {
        SelectorSession::new(
            labels
                .iter()
                .map(|label| SelectableItem::new(*label, label.to_lowercase()))
                .collect(),
        )
    }

    #[test]
    fn test_cursor_starts_at_zero() {
        let session = session_with(&["A", "B"]);
        assert_eq!(session.cursor_index(), 0);
        assert_eq!(session.current().label, "A");
    }

    #[test]
    fn test_move_up_saturates_at_first_item() {
        let mut session = session_with(&["A", "B"]);
        session.move_up();
        session.move_up();
        assert_eq!(session.cursor_index(), 0);
    }

    #[test]
    fn test_move_down_saturates_at_last_item() {
        let mut session = session_with(&["A", "B", "C"]);
        for _ in 0..10 {
            session.move_down();
        }
        assert_eq!(session.cursor_index(), 2);
        assert_eq!(session.current().label, "C");
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut session = session_with(&["Only"]);
        session.move_down();
        session.move_up();
        assert_eq!(session.cursor_index(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one item")]
    fn test_empty_session_is_rejected() {
        let _ = SelectorSession::new(Vec::new());
    }

    #[test]
    fn test_duplicate_labels_are_allowed() {
        let mut session = SelectorSession::new(vec![
            SelectableItem::new("claude", "/usr/bin/claude"),
            SelectableItem::new("claude", "/opt/bin/claude"),
        ]);
        session.move_down();
        assert_eq!(session.current().payload, "/opt/bin/claude");
    }
}
