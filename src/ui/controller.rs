//! Joins the theme and layout preferences into one published screen state.
//!
//! Two tasks back the controller:
//! - a writer that applies selection requests one at a time, in call order
//! - a sync loop that folds every observed preference value through
//!   [`EmojiReducer`] and publishes the result
//!
//! Both are aborted when the controller is dropped.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::prefs::{PreferenceId, SettingsRepository, Subscription};
use crate::ui::emoji::{EmojiIntent, EmojiReducer, EmojiScreenState};
use crate::ui::mvi::Reducer;

#[derive(Debug)]
enum ControllerCommand {
    Select { id: PreferenceId, value: bool },
    Flush { done: oneshot::Sender<()> },
}

pub struct ViewStateController {
    commands: mpsc::UnboundedSender<ControllerCommand>,
    state: watch::Receiver<EmojiScreenState>,
    tasks: Vec<JoinHandle<()>>,
}

impl ViewStateController {
    /// Start the controller on the current tokio runtime.
    pub fn spawn(repository: SettingsRepository) -> Self {
        let theme = repository.observe(PreferenceId::DarkTheme);
        let layout = repository.observe(PreferenceId::LinearLayout);
        let initial = EmojiScreenState::from_preferences(theme.current(), layout.current());
        let (state_tx, state_rx) = watch::channel(initial);
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let tasks = vec![
            tokio::spawn(sync_loop(theme, layout, state_tx)),
            tokio::spawn(write_loop(repository, command_rx)),
        ];

        Self {
            commands: command_tx,
            state: state_rx,
            tasks,
        }
    }

    /// Request the dark (`true`) or light theme. Returns immediately.
    pub fn select_theme(&self, is_dark: bool) {
        self.send(ControllerCommand::Select {
            id: PreferenceId::DarkTheme,
            value: is_dark,
        });
    }

    /// Request the linear (`true`) or grid layout. Returns immediately.
    pub fn select_layout(&self, is_linear: bool) {
        self.send(ControllerCommand::Select {
            id: PreferenceId::LinearLayout,
            value: is_linear,
        });
    }

    /// Latest published state.
    pub fn state(&self) -> EmojiScreenState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<EmojiScreenState> {
        self.state.clone()
    }

    /// Wait until every selection requested so far has been written (or failed).
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        self.send(ControllerCommand::Flush { done });
        let _ = wait.await;
    }

    fn send(&self, command: ControllerCommand) {
        if let Err(err) = self.commands.send(command) {
            tracing::warn!(command = ?err.0, "View-state controller stopped, dropping request");
        }
    }
}

impl Drop for ViewStateController {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

async fn write_loop(
    repository: SettingsRepository,
    mut commands: mpsc::UnboundedReceiver<ControllerCommand>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            ControllerCommand::Select { id, value } => {
                // Already logged by the repository; the UI keeps the last good value.
                let _ = repository.update(id, value).await;
            }
            ControllerCommand::Flush { done } => {
                let _ = done.send(());
            }
        }
    }
}

async fn sync_loop(
    mut theme: Subscription,
    mut layout: Subscription,
    state: watch::Sender<EmojiScreenState>,
) {
    loop {
        let intent = tokio::select! {
            Some(value) = theme.next() => EmojiIntent::ThemeObserved(value),
            Some(value) = layout.next() => EmojiIntent::LayoutObserved(value),
            else => break,
        };

        state.send_if_modified(|current| {
            let next = EmojiReducer::reduce(current.clone(), intent);
            if next == *current {
                return false;
            }
            tracing::debug!(?next, "Screen state updated");
            *current = next;
            true
        });
    }
}
