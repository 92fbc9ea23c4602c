//! Raw-mode rendering and the read loop for the interactive selector.

use std::io::{stdin, stdout, Write};

use crossterm::cursor::{self, MoveTo, MoveToNextLine};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::tty::IsTty;
use crossterm::{queue, ExecutableCommand};

use ai_cli_core::error::{Error, Result};

use super::types::{Selection, SelectableItem, SelectorSession};

/// Marker glyph printed in front of the item under the cursor
const CURSOR_MARKER: &str = "❯ ";

const KEY_HINTS: &str = "↑/k up   ↓/j down   enter: select   q/esc: quit";

/// Runs its restore action when dropped, so restoration happens on normal
/// return, `?` propagation and panic unwinding alike.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Guard that puts the terminal back into its pre-selection state. Every
/// restore step is unconditional, so the guard may be constructed before
/// acquisition: a partial acquisition still gets undone.
fn raw_mode_guard() -> RestoreGuard<impl FnMut()> {
    RestoreGuard {
        restore: || {
            let _ = disable_raw_mode();
            let mut stdout = stdout();
            let _ = stdout.execute(cursor::Show);
            let _ = stdout.execute(LeaveAlternateScreen);
        },
    }
}

/// What one key event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Moved,
    Accepted,
    Cancelled,
    Ignored,
}

/// Applies a single key event to the session.
///
/// Pure state transition, separated from the read loop so navigation is
/// testable without a terminal.
pub fn apply_key_event(session: &mut SelectorSession, key_event: &KeyEvent) -> KeyOutcome {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return if key_event.code == KeyCode::Char('c') {
            KeyOutcome::Cancelled
        } else {
            KeyOutcome::Ignored
        };
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            session.move_up();
            KeyOutcome::Moved
        }
        KeyCode::Down | KeyCode::Char('j') => {
            session.move_down();
            KeyOutcome::Moved
        }
        KeyCode::Enter => KeyOutcome::Accepted,
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Cancelled,
        _ => KeyOutcome::Ignored,
    }
}

/// Runs one interactive selection session.
///
/// Shows each item's label on its own line with the cursor line emphasized,
/// and blocks reading one key at a time until the user accepts or cancels.
///
/// # Errors
///
/// Fails with [`Error::EmptySelection`] for an empty item list and
/// [`Error::NotInteractive`] when stdin/stdout are not attached to a
/// terminal. Both are detected before any terminal mutation; once raw mode
/// is entered the only outcomes are `Picked` and `Cancelled`, and the
/// terminal is restored on every exit path.
pub fn select(items: Vec<SelectableItem>, title: &str) -> Result<Selection> {
    if items.is_empty() {
        return Err(Error::EmptySelection);
    }

    if !stdin().is_tty() || !stdout().is_tty() {
        return Err(Error::NotInteractive);
    }

    let mut session = SelectorSession::new(items);

    let mut stdout = stdout();

    // Constructed before the first terminal mutation; when this goes out of
    // scope the terminal is restored, even if acquisition fails partway
    let _raw_mode_guard = raw_mode_guard();
    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    stdout.execute(cursor::Hide)?;

    loop {
        if render(&session, title).is_err() {
            // Can't draw any more; bail out with the guard still restoring
            return Ok(Selection::Cancelled);
        }

        match event::read() {
            Ok(Event::Key(key_event)) => match apply_key_event(&mut session, &key_event) {
                KeyOutcome::Accepted => return Ok(Selection::Picked(session.current().clone())),
                KeyOutcome::Cancelled => return Ok(Selection::Cancelled),
                KeyOutcome::Moved | KeyOutcome::Ignored => {}
            },
            // Resize, focus and mouse events don't affect the session;
            // the next iteration redraws with current dimensions
            Ok(_) => {}
            Err(_) => return Ok(Selection::Cancelled),
        }
    }
}

fn render(session: &SelectorSession, title: &str) -> Result<()> {
    let mut stdout = stdout();

    // In raw mode a bare newline only moves down; MoveToNextLine also
    // returns to column zero, which avoids staircased output
    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        MoveToNextLine(1),
        MoveToNextLine(1),
    )?;

    for (i, item) in session.items().iter().enumerate() {
        if i == session.cursor_index() {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                Print(format!("{CURSOR_MARKER}{}", item.label)),
            )?;
        } else {
            queue!(
                stdout,
                SetAttribute(Attribute::Dim),
                Print(format!("  {}", item.label)),
            )?;
        }

        queue!(stdout, SetAttribute(Attribute::Reset), MoveToNextLine(1))?;
    }

    queue!(
        stdout,
        MoveToNextLine(1),
        SetAttribute(Attribute::Dim),
        Print(KEY_HINTS),
        SetAttribute(Attribute::Reset),
    )?;

    stdout.flush()?;
    Ok(())
}
