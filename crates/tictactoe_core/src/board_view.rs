//! The board as presented to a player: nine cells and a status line.
//!
//! [`BoardView`] holds nothing of its own. It borrows the current
//! snapshot and the turn, decides whether a click is legal, and hands the
//! proposed next snapshot to whoever owns the history.

use crate::rules::check_winner;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// Text shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Someone holds a full line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Read-only view over one board snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    x_is_next: bool,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` with the given turn.
    pub fn new(board: &'a Board, x_is_next: bool) -> Self {
        Self { board, x_is_next }
    }

    /// The snapshot being shown.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Player whose mark a legal click would place.
    pub fn current_player(&self) -> Player {
        Player::from_turn(self.x_is_next)
    }

    /// Winner on the shown board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.board)
    }

    /// Status line for the shown board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.current_player()),
        }
    }

    /// Proposed snapshot after clicking `pos`.
    ///
    /// Returns `None` when the game on this board is already won or the
    /// square is taken. Neither case is an error; the click is ignored.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn next_board(&self, pos: Position) -> Option<Board> {
        if self.winner().is_some() {
            debug!("Click ignored, board already has a winner");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!("Click ignored, square occupied");
            return None;
        }
        Some(self.board.with_mark(pos, self.current_player()))
    }

    /// Handles a click on `pos`, passing the next snapshot to `on_play`.
    ///
    /// `on_play` is not called for an ignored click. Returns whether it
    /// was called.
    pub fn handle_click<F>(&self, pos: Position, on_play: F) -> bool
    where
        F: FnOnce(Board),
    {
        match self.next_board(pos) {
            Some(next) => {
                on_play(next);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_status_next_player() {
        let board = Board::new();
        assert_eq!(BoardView::new(&board, true).status().to_string(), "Next player: X");
        assert_eq!(BoardView::new(&board, false).status().to_string(), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::O);
        let view = BoardView::new(&board, true);
        assert_eq!(view.status(), Status::Winner(Player::O));
        assert_eq!(view.status().to_string(), "Winner: O");
    }

    #[test]
    fn test_click_places_current_mark() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let view = BoardView::new(&board, false);

        let mut played = None;
        assert!(view.handle_click(Position::TopLeft, |next| played = Some(next)));

        let next = played.expect("callback should fire");
        assert_eq!(next.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert!(board.is_empty(Position::TopLeft));
    }

    #[test]
    fn test_click_occupied_is_ignored() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let view = BoardView::new(&board, false);

        let mut called = false;
        assert!(!view.handle_click(Position::Center, |_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_click_after_win_is_ignored() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        let view = BoardView::new(&board, false);

        assert_eq!(view.next_board(Position::Center), None);
    }
}
