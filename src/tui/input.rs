//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tictactoe_core::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the move-list selection.
    Navigate(Direction),
    /// Press whatever is focused: the cell under the cursor or the selected jump control.
    Activate,
    /// Click a cell directly.
    Click(Position),
    /// Jump to the empty board.
    JumpToStart,
    /// Switch focus between the board and the move list.
    ToggleFocus,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action; releases and unbound keys map to `None`.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Home => Some(Action::JumpToStart),
        // 1-9 map to cells 0-8
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map(Action::Click),
        _ => None,
    }
}

/// Moves the board cursor one step, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
