mod catalog;
mod intent;
mod reducer;
mod state;

pub use catalog::EMOJI_LIST;
pub use intent::EmojiIntent;
pub use reducer::EmojiReducer;
pub use state::{EmojiScreenState, ToggleIcon};
