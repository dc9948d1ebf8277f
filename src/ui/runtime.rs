use crate::catalog::{CatalogApi, CatalogStore};
use crate::config::UiConfig;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_command_worker;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive UI until the user quits.
///
/// Catalog calls run on `runtime`; this thread only draws and handles input.
pub fn run<C: CatalogApi>(
    config: &UiConfig,
    store: CatalogStore<C>,
    runtime: &Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(store.view());
    app.set_command_sender(spawn_command_worker(runtime, store, events.sender()));
    app.request_initialize();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::CatalogSynced(synced)) => app.on_catalog_synced(synced),
            Ok(AppEvent::MutationFinished { mutation, outcome }) => {
                app.on_mutation_finished(mutation, outcome)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}
