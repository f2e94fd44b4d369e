//! The game controller: sole owner of the history.
//!
//! Two transitions exist. A click goes through the [`BoardView`] rules and,
//! if legal, records a new snapshot. A jump moves the pointer. After each
//! transition that changes state, every subscribed [`GameObserver`] is
//! told about it so the presentation can redraw.

use crate::error::HistoryError;
use crate::{Board, BoardView, History, MoveEntry, Player, Position};
use tracing::{debug, info, instrument};

/// A state change reported to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed and recorded.
    MovePlayed {
        /// Player who placed the mark.
        player: Player,
        /// Square that was filled.
        position: Position,
        /// Index of the new snapshot.
        move_number: usize,
        /// Winner on the new board, if the move completed a line.
        winner: Option<Player>,
    },
    /// The pointer moved to another snapshot.
    Jumped {
        /// Index of the snapshot now current.
        move_number: usize,
    },
}

/// Receives notifications after state-changing transitions.
pub trait GameObserver {
    /// Called once per transition, after the state has changed.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Owns the (history, pointer) pair and applies move and jump intents.
#[derive(Default)]
pub struct GameController {
    history: History,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameController {
    /// Creates a controller at the empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating GameController");
        Self::default()
    }

    /// Registers an observer for future transitions.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// View of the current snapshot.
    pub fn view(&self) -> BoardView<'_> {
        self.history.view()
    }

    /// The snapshot at the pointer.
    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    /// Index of the current snapshot.
    pub fn current_move(&self) -> usize {
        *self.history.current_move()
    }

    /// Whether X places the next mark.
    pub fn x_is_next(&self) -> bool {
        self.history.x_is_next()
    }

    /// Jump controls in history order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.history.entries().collect()
    }

    /// Handles a click on a cell of the current board.
    ///
    /// Returns `true` if a move was recorded. Clicking an occupied square,
    /// or any square once the board has a winner, changes nothing and
    /// notifies no one.
    #[instrument(skip(self), fields(current_move = self.current_move()))]
    pub fn click(&mut self, position: Position) -> bool {
        let view = self.history.view();
        let player = view.current_player();
        let Some(next) = view.next_board(position) else {
            return false;
        };
        self.handle_move(next);

        let event = GameEvent::MovePlayed {
            player,
            position,
            move_number: self.current_move(),
            winner: self.view().winner(),
        };
        info!(?event, "Move played");
        self.emit(&event);
        true
    }

    /// Records `next` after the current snapshot, discarding any snapshots
    /// past the pointer.
    ///
    /// No legality check happens here; [`GameController::click`] is the
    /// checked entry point.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `next` is not a single step from the
    /// current snapshot by the player to move (see [`History::play`]).
    pub fn handle_move(&mut self, next: Board) {
        self.history.play(next);
    }

    /// Points the controller at snapshot `move_number`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] for an index past the last
    /// snapshot; state is unchanged and no observer is notified.
    #[instrument(skip(self), fields(current_move = self.current_move()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), HistoryError> {
        self.history.jump_to(move_number)?;
        debug!("Jumped");
        self.emit(&GameEvent::Jumped { move_number });
        Ok(())
    }

    fn emit(&mut self, event: &GameEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording() -> (GameController, Rc<RefCell<Vec<GameEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut controller = GameController::new();
        controller.subscribe(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));
        (controller, events)
    }

    #[test]
    fn test_click_notifies_once() {
        let (mut controller, events) = recording();

        assert!(controller.click(Position::Center));
        assert_eq!(
            events.borrow().as_slice(),
            [GameEvent::MovePlayed {
                player: Player::X,
                position: Position::Center,
                move_number: 1,
                winner: None,
            }]
        );
    }

    #[test]
    fn test_ignored_click_is_silent() {
        let (mut controller, events) = recording();
        controller.click(Position::Center);
        events.borrow_mut().clear();

        assert!(!controller.click(Position::Center));
        assert!(events.borrow().is_empty());
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn test_jump_notifies() {
        let (mut controller, events) = recording();
        controller.click(Position::Center);

        controller.jump_to(0).expect("in range");
        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::Jumped { move_number: 0 })
        );
        assert!(controller.x_is_next());
    }

    #[test]
    fn test_rejected_jump_is_silent() {
        let (mut controller, events) = recording();

        assert!(controller.jump_to(5).is_err());
        assert!(events.borrow().is_empty());
        assert_eq!(controller.current_move(), 0);
    }

    #[test]
    fn test_winning_move_reports_winner() {
        let (mut controller, events) = recording();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleRight,
            Position::TopRight,
        ] {
            controller.click(pos);
        }

        assert!(matches!(
            events.borrow().last(),
            Some(GameEvent::MovePlayed { winner: Some(Player::X), move_number: 5, .. })
        ));
    }
}
