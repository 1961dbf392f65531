use crate::ui::mvi::UiState;

/// Icon on the layout toggle. It shows the layout the toggle switches *to*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    Grid,
    Linear,
}

impl ToggleIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Grid => "▦",
            Self::Linear => "☰",
        }
    }
}

/// Everything the screen needs to render, derived from the two preferences.
///
/// Only build it through [`EmojiScreenState::from_preferences`] so the toggle
/// metadata can never disagree with `is_linear_layout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiScreenState {
    pub is_dark_theme: bool,
    pub is_linear_layout: bool,
    pub toggle_icon: ToggleIcon,
    pub toggle_content_description: &'static str,
}

impl EmojiScreenState {
    pub fn from_preferences(is_dark_theme: bool, is_linear_layout: bool) -> Self {
        let (toggle_icon, toggle_content_description) = if is_linear_layout {
            (ToggleIcon::Grid, "Grid Layout Toggle")
        } else {
            (ToggleIcon::Linear, "Linear Layout Toggle")
        };
        Self {
            is_dark_theme,
            is_linear_layout,
            toggle_icon,
            toggle_content_description,
        }
    }
}

impl Default for EmojiScreenState {
    fn default() -> Self {
        Self::from_preferences(false, true)
    }
}

impl UiState for EmojiScreenState {}
