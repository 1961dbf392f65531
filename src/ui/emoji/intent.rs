use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiIntent {
    /// The dark theme preference has this value.
    ThemeObserved(bool),
    /// The linear layout preference has this value.
    LayoutObserved(bool),
}

impl Intent for EmojiIntent {}
