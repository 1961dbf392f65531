use crate::ui::emoji::intent::EmojiIntent;
use crate::ui::emoji::state::EmojiScreenState;
use crate::ui::mvi::Reducer;

pub struct EmojiReducer;

impl Reducer for EmojiReducer {
    type State = EmojiScreenState;
    type Intent = EmojiIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EmojiIntent::ThemeObserved(is_dark) => {
                EmojiScreenState::from_preferences(is_dark, state.is_linear_layout)
            }
            EmojiIntent::LayoutObserved(is_linear) => {
                EmojiScreenState::from_preferences(state.is_dark_theme, is_linear)
            }
        }
    }
}
