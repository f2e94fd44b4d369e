//! Terminal UI: setup, event loop, teardown.

mod app;
mod input;
pub mod ui;

pub use app::{App, Focus};
pub use input::{Action, Direction, action_for, move_cursor};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::{Stream, StreamExt};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};

/// Runs a restore action when dropped.
///
/// Created right after raw mode is enabled, so every later exit (early `?`,
/// loop error, normal quit or panic unwind) puts the terminal back.
pub struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    /// Wraps `restore` so it runs on drop.
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    debug!("Restoring terminal");
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
}

/// Runs the game in the current terminal until the user quits.
pub async fn run() -> Result<()> {
    info!("Entering terminal UI");

    enable_raw_mode()?;
    let _guard = TerminalGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new();
    let mut events = EventStream::new();
    let res = run_app(&mut terminal, &mut app, &mut events).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.controller().history().len() - 1,
        "Leaving terminal UI"
    );

    res
}

/// Draws and dispatches terminal events until [`App::should_quit`] or the
/// event stream ends.
///
/// Redraws only after a controller notification, a navigation change,
/// or a resize.
#[instrument(skip_all)]
pub async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut S,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    loop {
        if app.take_redraw() {
            terminal.draw(|f| ui::draw(f, app))?;
        }

        if app.should_quit() {
            return Ok(());
        }

        match events.next().await {
            Some(Ok(Event::Key(key))) => {
                if let Some(action) = action_for(key) {
                    app.apply(action);
                }
            }
            Some(Ok(Event::Resize(_, _))) => app.request_redraw(),
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e.into()),
            None => {
                debug!("Event stream closed");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::cell::Cell;

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        let restored = Cell::new(0);

        let setup = || -> io::Result<()> {
            let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
            Err::<(), _>(io::Error::other("alternate screen unavailable"))?;
            Ok(())
        };

        assert!(setup().is_err());
        assert_eq!(restored.get(), 1);
    }

    #[tokio::test]
    async fn test_loop_plays_keys_until_quit() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        let mut app = App::new();
        let mut events = futures::stream::iter([
            key(KeyCode::Char('1')),
            key(KeyCode::Char('5')),
            Ok(Event::Resize(100, 30)),
            key(KeyCode::Char('q')),
            key(KeyCode::Char('9')),
        ]);

        run_app(&mut terminal, &mut app, &mut events)
            .await
            .expect("loop ends cleanly");

        assert!(app.should_quit());
        assert_eq!(app.controller().history().len(), 3);
        // Input after quit is never read.
        let board = app.controller().current_board();
        assert!(board.is_empty(tictactoe_core::Position::BottomRight));
    }

    #[tokio::test]
    async fn test_loop_ends_when_stream_closes() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        let mut app = App::new();
        let mut events = futures::stream::iter([key(KeyCode::Char('5'))]);

        run_app(&mut terminal, &mut app, &mut events)
            .await
            .expect("loop ends cleanly");

        assert!(!app.should_quit());
        assert_eq!(app.controller().history().len(), 2);
    }

    #[tokio::test]
    async fn test_loop_propagates_stream_error() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test backend");
        let mut app = App::new();
        let mut events = futures::stream::iter([Err(io::Error::other("tty gone"))]);

        let err = run_app(&mut terminal, &mut app, &mut events).await.unwrap_err();
        assert!(err.to_string().contains("tty gone"));
    }
}
