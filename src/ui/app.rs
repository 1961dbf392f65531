use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::UiConfig;
use crate::ui::emoji::{EmojiScreenState, EMOJI_LIST};

/// Preference change requested by a key press, dispatched to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    SelectTheme(bool),
    SelectLayout(bool),
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    shown_at: Instant,
}

/// Presentation-only state: selection, quit flag, transient footer message.
///
/// Preferences are not stored here; they arrive as [`EmojiScreenState`].
pub struct App {
    should_quit: bool,
    selected: usize,
    item_count: usize,
    grid_columns: usize,
    toast: Option<Toast>,
    toast_duration: Duration,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self::with_items(config, EMOJI_LIST.len())
    }

    pub fn with_items(config: &UiConfig, item_count: usize) -> Self {
        Self {
            should_quit: false,
            selected: 0,
            item_count,
            grid_columns: config.grid_columns.max(1) as usize,
            toast: None,
            toast_duration: Duration::from_millis(config.toast_ms),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn grid_columns(&self) -> u16 {
        self.grid_columns as u16
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|t| t.message.as_str())
    }

    /// Drop the footer message once it has been visible long enough.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(toast) = &self.toast {
            if now.duration_since(toast.shown_at) >= self.toast_duration {
                self.toast = None;
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, state: &EmojiScreenState) -> Option<UiCommand> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let step = if state.is_linear_layout {
            1
        } else {
            self.grid_columns
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_quit();
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.request_quit();
                None
            }
            KeyCode::Char('t') => Some(UiCommand::SelectTheme(!state.is_dark_theme)),
            KeyCode::Char('l') => Some(UiCommand::SelectLayout(!state.is_linear_layout)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(step);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_to(self.selected + step);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.move_to(self.selected + 1);
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                None
            }
            KeyCode::End => {
                self.move_to(usize::MAX);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click(state, Instant::now());
                None
            }
            _ => None,
        }
    }

    fn move_to(&mut self, index: usize) {
        self.selected = index.min(self.item_count.saturating_sub(1));
    }

    fn click(&mut self, state: &EmojiScreenState, now: Instant) {
        let Some(emoji) = EMOJI_LIST.get(self.selected) else {
            return;
        };
        let layout = if state.is_linear_layout {
            "Linear"
        } else {
            "Grid"
        };
        tracing::info!(emoji = *emoji, "Clicked {} Layout", layout);
        self.toast = Some(Toast {
            message: "CLICK SMILEY".to_string(),
            shown_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(count: usize) -> App {
        App::with_items(&UiConfig::default(), count)
    }

    #[test]
    fn theme_key_requests_the_opposite_theme() {
        let mut app = app(10);
        let light = EmojiScreenState::from_preferences(false, true);
        assert_eq!(
            app.on_key(key(KeyCode::Char('t')), &light),
            Some(UiCommand::SelectTheme(true))
        );
        let dark = EmojiScreenState::from_preferences(true, true);
        assert_eq!(
            app.on_key(key(KeyCode::Char('t')), &dark),
            Some(UiCommand::SelectTheme(false))
        );
    }

    #[test]
    fn layout_key_requests_the_opposite_layout() {
        let mut app = app(10);
        let linear = EmojiScreenState::default();
        assert_eq!(
            app.on_key(key(KeyCode::Char('l')), &linear),
            Some(UiCommand::SelectLayout(false))
        );
    }

    #[test]
    fn down_moves_by_row_in_grid() {
        let mut app = app(10);
        let grid = EmojiScreenState::from_preferences(false, false);
        app.on_key(key(KeyCode::Down), &grid);
        assert_eq!(app.selected(), 3);
        app.on_key(key(KeyCode::Up), &grid);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn selection_clamps_to_last_item() {
        let mut app = app(4);
        let linear = EmojiScreenState::default();
        for _ in 0..10 {
            app.on_key(key(KeyCode::Down), &linear);
        }
        assert_eq!(app.selected(), 3);
        app.on_key(key(KeyCode::Home), &linear);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn click_shows_toast_until_expired() {
        let mut app = app(10);
        let state = EmojiScreenState::default();
        let now = Instant::now();
        app.click(&state, now);
        assert_eq!(app.toast(), Some("CLICK SMILEY"));

        app.on_tick(now + Duration::from_millis(100));
        assert!(app.toast().is_some());
        app.on_tick(now + Duration::from_secs(5));
        assert!(app.toast().is_none());
    }

    #[test]
    fn quit_keys() {
        let state = EmojiScreenState::default();
        let mut by_letter = app(1);
        by_letter.on_key(key(KeyCode::Char('q')), &state);
        assert!(by_letter.should_quit());

        let mut by_ctrl_c = app(1);
        by_ctrl_c.on_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &state,
        );
        assert!(by_ctrl_c.should_quit());
    }
}
