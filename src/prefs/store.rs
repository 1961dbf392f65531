//! Durable key-value storage for boolean preferences.
//!
//! The committed table lives in memory behind a lock and mirrors the file on
//! disk. Writers are serialized by an async gate inside the process and by an
//! `fs2` lock file across processes. Under that lock each write re-reads the
//! file, changes only its own key, and replaces the file through a fsynced
//! temp file, so readers only ever see a fully committed table.

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::{Mutex, RwLock};
use tempfile::NamedTempFile;
use tokio::sync::watch;

use crate::prefs::error::PrefsError;
use crate::prefs::subscription::Subscription;

/// Cloneable handle to one preference file.
///
/// Construct once at startup and pass clones to whoever needs it.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    committed: RwLock<toml::Table>,
    // Raw stored value per key; `None` until written. Defaults are applied by
    // each subscription.
    watchers: Mutex<HashMap<String, watch::Sender<Option<bool>>>>,
    write_gate: tokio::sync::Mutex<()>,
}

impl PreferenceStore {
    /// Open the store backed by `path`.
    ///
    /// A missing file is fine (every key reads its default). A file that is
    /// not valid TOML is logged and treated as empty; the next write replaces
    /// it. A file that cannot be read at all is `StorageUnavailable`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let table = read_table(&path)?;
        tracing::debug!(path = %path.display(), entries = table.len(), "Preference store opened");

        Ok(Self {
            inner: Arc::new(StoreInner {
                path,
                committed: RwLock::new(table),
                watchers: Mutex::new(HashMap::new()),
                write_gate: tokio::sync::Mutex::new(()),
            }),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Current committed value for `key`, or `default` if it was never written.
    pub fn get(&self, key: &str, default: bool) -> bool {
        let table = self.inner.committed.read();
        decode(key, table.get(key)).unwrap_or(default)
    }

    /// Persist `value` under `key`.
    ///
    /// Returns once the value is durable on disk. Concurrent calls are applied
    /// one at a time; on failure the previous value stays authoritative and
    /// watchers are not notified. Keys written by other handles to the same
    /// file since this one was opened are kept and become visible here.
    pub async fn set(&self, key: &str, value: bool) -> Result<(), PrefsError> {
        let _gate = self.inner.write_gate.lock().await;

        let path = self.inner.path.clone();
        let entry = key.to_string();
        let (table, previous) =
            tokio::task::spawn_blocking(move || write_merged(&path, &entry, value)).await??;

        *self.inner.committed.write() = table;
        self.publish();

        if previous != Some(toml::Value::Boolean(value)) {
            tracing::info!(key, value, "Preference committed");
        }
        Ok(())
    }

    /// Subscribe to `key`. Every call yields an independent stream, and each
    /// stream reports `default` while the key is unwritten.
    pub fn watch(&self, key: &str, default: bool) -> Subscription {
        let mut watchers = self.inner.watchers.lock();
        let tx = watchers.entry(key.to_string()).or_insert_with(|| {
            let table = self.inner.committed.read();
            watch::channel(decode(key, table.get(key))).0
        });
        tracing::debug!(key, default, "Preference subscriber added");
        Subscription::new(tx.subscribe(), default)
    }

    fn publish(&self) {
        let watchers = self.inner.watchers.lock();
        let table = self.inner.committed.read();
        for (key, tx) in watchers.iter() {
            send_if_changed(tx, decode(key, table.get(key)));
        }
    }
}

fn send_if_changed(tx: &watch::Sender<Option<bool>>, value: Option<bool>) {
    tx.send_if_modified(|current| {
        if *current == value {
            return false;
        }
        *current = value;
        true
    });
}

fn decode(key: &str, value: Option<&toml::Value>) -> Option<bool> {
    match value {
        None => None,
        Some(toml::Value::Boolean(value)) => Some(*value),
        Some(other) => {
            let err = PrefsError::CorruptValue {
                key: key.to_string(),
                found: other.to_string(),
            };
            tracing::warn!(error = %err, "Using default for corrupt preference");
            None
        }
    }
}

fn read_table(path: &Path) -> Result<toml::Table, PrefsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(toml::Table::new()),
        Err(source) => {
            return Err(PrefsError::StorageUnavailable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match toml::from_str::<toml::Table>(&content) {
        Ok(table) => Ok(table),
        Err(e) => {
            let err = PrefsError::CorruptValue {
                key: path.display().to_string(),
                found: e.to_string().trim().to_string(),
            };
            tracing::warn!(error = %err, "Preference file unreadable, falling back to defaults");
            Ok(toml::Table::new())
        }
    }
}

/// Set `key` in the file at `path`, leaving every other entry as found on
/// disk. Returns the table now on disk and the value `key` held before.
fn write_merged(
    path: &Path,
    key: &str,
    value: bool,
) -> Result<(toml::Table, Option<toml::Value>), PrefsError> {
    let unavailable = |source: io::Error| PrefsError::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(unavailable)?;

    // Held from the read until the rename lands; released when `lock` drops.
    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock_path(path))
        .map_err(unavailable)?;
    lock.lock_exclusive().map_err(unavailable)?;

    let mut table = read_table(path)?;
    let previous = table.insert(key.to_string(), toml::Value::Boolean(value));

    let content = toml::to_string(&table)
        .map_err(|e| unavailable(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(unavailable)?;
    tmp.write_all(content.as_bytes()).map_err(unavailable)?;
    tmp.as_file().sync_all().map_err(unavailable)?;
    tmp.persist(path).map_err(|e| unavailable(e.error))?;
    Ok((table, previous))
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("preferences"));
    name.push(".lock");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, PreferenceStore) {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::open(dir.path().join("preferences.toml")).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_file_reads_defaults() {
        let (_dir, store) = temp_store();
        assert!(!store.get("isDarkTheme", false));
        assert!(store.get("isLinearLayout", true));
    }

    #[tokio::test]
    async fn set_is_visible_to_get_and_on_disk() {
        let (_dir, store) = temp_store();
        store.set("isDarkTheme", true).await.unwrap();

        assert!(store.get("isDarkTheme", false));
        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("isDarkTheme = true"));
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "isDarkTheme = = yes").unwrap();

        let store = PreferenceStore::open(&path).unwrap();
        assert!(!store.get("isDarkTheme", false));
    }

    #[test]
    fn non_boolean_value_reads_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "isDarkTheme = \"yes\"\nisLinearLayout = false\n").unwrap();

        let store = PreferenceStore::open(&path).unwrap();
        assert!(!store.get("isDarkTheme", false));
        assert!(!store.get("isLinearLayout", true));
    }

    #[tokio::test]
    async fn unknown_keys_survive_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "fontScale = 2\n").unwrap();

        let store = PreferenceStore::open(&path).unwrap();
        store.set("isLinearLayout", false).await.unwrap();

        let table: toml::Table = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(table.get("fontScale"), Some(&toml::Value::Integer(2)));
        assert_eq!(table.get("isLinearLayout"), Some(&toml::Value::Boolean(false)));
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_value() {
        let (dir, store) = temp_store();
        store.set("isDarkTheme", true).await.unwrap();

        // Replace the file with a directory so the write cannot land.
        fs::remove_file(store.path()).unwrap();
        fs::create_dir(store.path()).unwrap();

        let mut sub = store.watch("isDarkTheme", false);
        assert_eq!(sub.next().await, Some(true));

        let err = store.set("isDarkTheme", false).await.unwrap_err();
        assert!(matches!(err, PrefsError::StorageUnavailable { .. }));
        assert!(store.get("isDarkTheme", false));

        let pending = tokio::time::timeout(Duration::from_millis(100), sub.next()).await;
        assert!(pending.is_err(), "failed write must not notify watchers");
        assert!(sub.current());
        drop(dir);
    }

    #[tokio::test]
    async fn watch_starts_with_current_then_follows_writes() {
        let (_dir, store) = temp_store();
        let mut sub = store.watch("isDarkTheme", false);

        assert_eq!(sub.next().await, Some(false));
        store.set("isDarkTheme", true).await.unwrap();
        let next = tokio::time::timeout(Duration::from_secs(2), sub.next())
            .await
            .unwrap();
        assert_eq!(next, Some(true));
    }

    #[tokio::test]
    async fn rewriting_same_value_does_not_notify() {
        let (_dir, store) = temp_store();
        let mut sub = store.watch("isLinearLayout", true);
        assert_eq!(sub.next().await, Some(true));

        store.set("isLinearLayout", true).await.unwrap();
        let pending = tokio::time::timeout(Duration::from_millis(100), sub.next()).await;
        assert!(pending.is_err());
    }

    #[tokio::test]
    async fn write_keeps_keys_changed_by_another_handle() {
        let (_dir, first) = temp_store();
        let second = PreferenceStore::open(first.path()).unwrap();
        let mut sub = first.watch("isDarkTheme", false);
        assert_eq!(sub.next().await, Some(false));

        second.set("isDarkTheme", true).await.unwrap();
        first.set("isLinearLayout", false).await.unwrap();

        assert!(first.get("isDarkTheme", false));
        let next = tokio::time::timeout(Duration::from_secs(2), sub.next())
            .await
            .unwrap();
        assert_eq!(next, Some(true));
    }

    #[test]
    fn each_subscriber_applies_its_own_default() {
        let (_dir, store) = temp_store();
        let on = store.watch("fontScaled", true);
        let off = store.watch("fontScaled", false);
        assert!(on.current());
        assert!(!off.current());
    }

    #[tokio::test]
    async fn subscribers_with_different_defaults_see_the_same_write() {
        let (_dir, store) = temp_store();
        let mut on = store.watch("isDarkTheme", true);
        let mut off = store.watch("isDarkTheme", false);
        assert_eq!(on.next().await, Some(true));
        assert_eq!(off.next().await, Some(false));

        store.set("isDarkTheme", false).await.unwrap();
        let next = tokio::time::timeout(Duration::from_secs(2), on.next())
            .await
            .unwrap();
        assert_eq!(next, Some(false));
        assert!(!off.current());
    }

    #[test]
    fn lock_file_sits_next_to_target() {
        let path = Path::new("/tmp/prefs/preferences.toml");
        assert_eq!(
            lock_path(path),
            PathBuf::from("/tmp/prefs/preferences.toml.lock")
        );
    }
}
