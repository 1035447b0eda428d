//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tateti_engine::Position;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Direction),
    /// Mark the cell under the cursor.
    Mark,
    /// Mark the cell with this index (0-8).
    MarkAt(usize),
    /// Take back the last move.
    Undo,
    /// Start a new round, keeping the score.
    NewRound,
    /// Ask to reset board and score.
    RequestResetMatch,
    /// Answer yes to the pending question.
    Confirm,
    /// Answer no to the pending question.
    Cancel,
    /// Switch to the next accent color.
    CycleAccent,
    /// Go back to the default accent color.
    DefaultAccent,
    /// Leave the game.
    Quit,
}

/// Moves cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action.
///
/// While a confirmation is pending only yes/no answers are accepted.
pub fn map_key(key: KeyEvent, confirming: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if confirming {
        return match key.code {
            KeyCode::Char('y' | 'Y') => Some(Action::Confirm),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Mark),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|d| Action::MarkAt(d as usize - 1)),
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('r') => Some(Action::NewRound),
        KeyCode::Char('R') => Some(Action::RequestResetMatch),
        KeyCode::Char('c') => Some(Action::CycleAccent),
        KeyCode::Char('C') => Some(Action::DefaultAccent),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, Direction::Right),
            Position::MiddleRight
        );
    }

    #[test]
    fn test_cursor_moves_one_cell() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digits_mark_cells() {
        assert_eq!(map_key(press(KeyCode::Char('1')), false), Some(Action::MarkAt(0)));
        assert_eq!(map_key(press(KeyCode::Char('9')), false), Some(Action::MarkAt(8)));
        assert_eq!(map_key(press(KeyCode::Char('0')), false), None);
    }

    #[test]
    fn test_enter_and_space_mark() {
        assert_eq!(map_key(press(KeyCode::Enter), false), Some(Action::Mark));
        assert_eq!(map_key(press(KeyCode::Char(' ')), false), Some(Action::Mark));
    }

    #[test]
    fn test_confirmation_accepts_only_answers() {
        assert_eq!(map_key(press(KeyCode::Char('y')), true), Some(Action::Confirm));
        assert_eq!(map_key(press(KeyCode::Esc), true), Some(Action::Cancel));
        assert_eq!(map_key(press(KeyCode::Char('u')), true), None);
        assert_eq!(map_key(press(KeyCode::Char('5')), true), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Char('u'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key, false), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, false), Some(Action::Quit));
        assert_eq!(map_key(key, true), Some(Action::Quit));
    }
}
