use super::terminal_guard::TerminationSignal;
use crate::app::App;
use crate::core::InputEvent;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Drives the application until it quits or a termination signal arrives.
/// Events are handled one at a time; a child process blocks the loop entirely.
pub fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    sync_size(app)?;
    let mut dirty = true;

    loop {
        if app.take_redraw_request() {
            // The child owned the screen; size may have changed meanwhile.
            terminal.clear()?;
            sync_size(app)?;
            dirty = true;
        }
        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }
        if app.should_quit() {
            return Ok(None);
        }
        if let Ok(signal) = signals.try_recv() {
            return Ok(Some(signal));
        }
        if !crossterm::event::poll(POLL_INTERVAL)? {
            continue;
        }

        let event = InputEvent::from(crossterm::event::read()?);
        dirty |= app.handle_input(&event);
    }
}

fn sync_size(app: &mut App) -> io::Result<()> {
    let (width, height) = crossterm::terminal::size()?;
    app.handle_input(&InputEvent::Resize(width, height));
    Ok(())
}
