//! Application state and logic.

use derive_getters::Getters;
use tictactoe_core::{GameController, GameEvent, Position};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use super::input::{Action, Direction, move_cursor};

/// Which control keyboard input is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The nine cells.
    #[default]
    Board,
    /// The list of jump controls.
    Moves,
}

impl Focus {
    /// The other focus.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
///
/// The controller reports transitions through a channel; [`App::drain_events`]
/// turns them into a message and a redraw request.
#[derive(Debug, Getters)]
pub struct App {
    /// Game logic and history.
    controller: GameController,
    /// Cell under the board cursor.
    cursor: Position,
    /// Where key presses go.
    focus: Focus,
    /// Highlighted row in the move list.
    selected_move: usize,
    /// Last thing that happened, shown under the board.
    message: String,
    #[getter(skip)]
    events: mpsc::UnboundedReceiver<GameEvent>,
    #[getter(skip)]
    needs_redraw: bool,
    #[getter(skip)]
    should_quit: bool,
}

impl App {
    /// Creates a new application at the empty board.
    #[instrument]
    pub fn new() -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        let mut controller = GameController::new();
        controller.subscribe(move |event: &GameEvent| {
            // Receiver lives as long as the App, which owns the controller.
            let _ = event_tx.send(event.clone());
        });

        Self {
            controller,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            message: "Use arrows and Enter, or 1-9. Tab switches to the move list.".to_string(),
            events,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests a redraw on the next loop iteration (e.g. after a resize).
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Returns and clears the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Applies one user action, then processes whatever the controller reported.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.needs_redraw = true;
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::Click(position) => {
                self.cursor = position;
                self.needs_redraw = true;
                self.controller.click(position);
            }
            Action::Activate => match self.focus {
                Focus::Board => {
                    self.controller.click(self.cursor);
                }
                Focus::Moves => self.jump_to(self.selected_move),
            },
            Action::JumpToStart => self.jump_to(0),
        }

        self.drain_events();
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::Moves => {
                let last = self.controller.history().len() - 1;
                self.selected_move = match direction {
                    Direction::Up | Direction::Left => self.selected_move.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected_move + 1).min(last),
                };
            }
        }
        self.needs_redraw = true;
    }

    fn jump_to(&mut self, move_number: usize) {
        if let Err(e) = self.controller.jump_to(move_number) {
            warn!(error = %e, "Jump rejected");
            self.message = e.to_string();
            self.needs_redraw = true;
        }
    }

    /// Handles every pending controller notification.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handles a game event from the controller.
    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MovePlayed {
                player,
                position,
                move_number,
                winner,
            } => {
                self.selected_move = move_number;
                self.message = match winner {
                    Some(winner) => format!("{} played {} and wins", player, position),
                    None => format!("{} played {}", player, position),
                };
            }
            GameEvent::Jumped { move_number } => {
                self.selected_move = move_number;
                self.message = if move_number == 0 {
                    "Back at game start".to_string()
                } else {
                    format!("Showing move #{}", move_number)
                };
            }
        }
        self.needs_redraw = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
