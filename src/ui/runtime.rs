use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::UiConfig;
use crate::ui::app::{App, UiCommand};
use crate::ui::controller::ViewStateController;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the terminal front end until the user quits.
///
/// The loop owns all UI state. Preference writes are handed to the controller
/// and come back as published screen state, so drawing never waits on disk.
pub async fn run(controller: &ViewStateController, config: &UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let result = event_loop(&mut terminal, controller, config).await;
    drop(guard);
    settle(controller, result).await
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &ViewStateController,
    config: &UiConfig,
) -> io::Result<()> {
    let mut app = App::new(config);
    let mut events = EventHandler::new();
    let mut state_rx = controller.subscribe();
    let mut tick = tokio::time::interval(Duration::from_millis(config.tick_ms));

    loop {
        let state = state_rx.borrow_and_update().clone();
        terminal.draw(|frame| draw(frame, &app, &state))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => {
                    if let Some(command) = app.on_key(key, &state) {
                        dispatch(controller, command);
                    }
                }
                // Redrawn at the top of the loop.
                Some(AppEvent::Resize(..)) => {}
                None => break,
            },
            changed = state_rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tick.tick() => app.on_tick(Instant::now()),
        }
    }
    Ok(())
}

/// Let queued selections land before the process exits, whatever ended the loop.
async fn settle<T>(controller: &ViewStateController, outcome: T) -> T {
    controller.flush().await;
    outcome
}

fn dispatch(controller: &ViewStateController, command: UiCommand) {
    match command {
        UiCommand::SelectTheme(is_dark) => controller.select_theme(is_dark),
        UiCommand::SelectLayout(is_linear) => controller.select_layout(is_linear),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{PreferenceId, PreferenceStore, SettingsRepository};
    use tempfile::TempDir;

    #[tokio::test]
    async fn queued_selection_lands_even_when_the_loop_fails() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::open(dir.path().join("preferences.toml")).unwrap();
        let repository = SettingsRepository::new(store);
        let controller = ViewStateController::spawn(repository.clone());

        controller.select_theme(true);
        let outcome: io::Result<()> = Err(io::Error::other("draw failed"));
        let err = settle(&controller, outcome).await.unwrap_err();

        assert_eq!(err.to_string(), "draw failed");
        assert!(repository.current(PreferenceId::DarkTheme));
    }
}
