use crate::config::Config;
use crate::submission::SubmissionController;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use tokio::runtime::Handle;

/// Runs the form until the user quits. Blocks the calling thread; requests
/// run on `runtime`.
pub fn run(config: &Config, controller: SubmissionController, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(controller, runtime, events.sender());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    tracing::info!(
        target: "shortener::ui",
        base_url = %config.service.base_url,
        "Form started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app.view()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::SubmissionSettled(intent)) => app.on_submission_settled(intent),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(target: "shortener::ui", "Form closed");
    drop(guard);
    Ok(())
}
