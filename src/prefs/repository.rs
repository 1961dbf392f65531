use crate::prefs::error::PrefsError;
use crate::prefs::keys::PreferenceId;
use crate::prefs::store::PreferenceStore;
use crate::prefs::subscription::Subscription;

/// Typed projection of the preference store.
///
/// Holds no cache of its own: every read goes to the store's committed table,
/// so a successful `update` is visible to the next `current` or `observe`.
#[derive(Clone)]
pub struct SettingsRepository {
    store: PreferenceStore,
}

impl SettingsRepository {
    pub fn new(store: PreferenceStore) -> Self {
        Self { store }
    }

    /// Current value, falling back to the preference's default.
    pub fn current(&self, id: PreferenceId) -> bool {
        self.store.get(id.as_str(), id.default_value())
    }

    /// Live stream of the preference, starting with its current value.
    pub fn observe(&self, id: PreferenceId) -> Subscription {
        self.store.watch(id.as_str(), id.default_value())
    }

    /// Persist a new value.
    ///
    /// Failures are logged here; the returned error is informational and the
    /// last committed value stays in effect.
    pub async fn update(&self, id: PreferenceId, value: bool) -> Result<(), PrefsError> {
        match self.store.set(id.as_str(), value).await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::error!(
                    preference = id.label(),
                    requested = id.describe(value),
                    error = %err,
                    "Failed to save preference, keeping last known value"
                );
                Err(err)
            }
        }
    }

    /// Write every preference back to its default.
    pub async fn reset(&self) -> Result<(), PrefsError> {
        for id in PreferenceId::all() {
            self.update(*id, id.default_value()).await?;
        }
        Ok(())
    }
}
