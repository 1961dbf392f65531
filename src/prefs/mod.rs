//! Persisted boolean preferences exposed as observable streams.

mod error;
mod keys;
mod repository;
mod store;
mod subscription;

pub use error::PrefsError;
pub use keys::PreferenceId;
pub use repository::SettingsRepository;
pub use store::PreferenceStore;
pub use subscription::Subscription;
