//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::time::Duration;

use emojishelf::prefs::{PreferenceStore, SettingsRepository};
use emojishelf::ui::controller::ViewStateController;
use emojishelf::ui::emoji::EmojiScreenState;
use tempfile::TempDir;

pub const WAIT: Duration = Duration::from_secs(5);

/// Preference file path inside a fresh temp dir.
pub fn temp_prefs_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("preferences.toml");
    (temp_dir, path)
}

pub fn temp_repository() -> (TempDir, SettingsRepository) {
    let (temp_dir, path) = temp_prefs_path();
    let store = PreferenceStore::open(path).expect("Failed to open store");
    (temp_dir, SettingsRepository::new(store))
}

/// Wait until the controller publishes a state matching `expected`.
pub async fn wait_for_state(controller: &ViewStateController, expected: EmojiScreenState) {
    let mut rx = controller.subscribe();
    let reached = tokio::time::timeout(WAIT, async {
        rx.wait_for(|state| *state == expected).await.is_ok()
    })
    .await;
    assert!(
        matches!(reached, Ok(true)),
        "controller never published {:?}, last state {:?}",
        expected,
        controller.state()
    );
}
