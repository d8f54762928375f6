//! Terminal UI: render loop, screens, and the MVI home feature.

pub mod app;
pub mod events;
pub mod home;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::home::HomeStore;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the render loop until the user quits. Blocks the calling thread;
/// the store keeps working on the tokio runtime.
pub fn run(store: HomeStore) -> io::Result<()> {
    let (mut terminal, _guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(store);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Err(_) => app.on_tick(),
        }
    }

    Ok(())
}
