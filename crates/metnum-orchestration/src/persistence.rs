//! Form persistence (load/save).
//!
//! Saving is best-effort: every operation returns a `Result` and callers
//! log failures with `tracing::warn!` and carry on.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use metnum_core::constants::STORAGE_KEY;
use metnum_core::FormState;

const CONFIG_DIR_NAME: &str = "metnum";

/// Field identifier → last value.
pub type Snapshot = BTreeMap<String, String>;

/// Failure to read or write the saved form.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no se pudo acceder a {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuración guardada inválida: {0}")]
    Format(#[from] serde_json::Error),
}

/// Somewhere a snapshot can be kept between sessions.
pub trait ConfigStore: Send + Sync {
    /// The saved snapshot, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Snapshot>, StoreError>;

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the XDG config directory, falling back to the working
    /// directory when neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(xdg_config_path().unwrap_or_else(cwd_config_path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

/// In-memory store, used when persistence is disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<Snapshot>>,
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        Ok(self.saved.lock().clone())
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        *self.saved.lock() = Some(snapshot.clone());
        Ok(())
    }
}

/// Mirrors a [`FormState`] into a [`ConfigStore`].
#[derive(Clone)]
pub struct ConfigManager {
    store: Arc<dyn ConfigStore>,
}

impl ConfigManager {
    #[must_use]
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Save every field of the form.
    pub fn save(&self, form: &FormState) -> Result<(), StoreError> {
        self.store.save(&form.snapshot())
    }

    /// Restore saved values into the form. Returns how many fields were
    /// restored; zero when nothing was saved.
    pub fn load_into(&self, form: &mut FormState) -> Result<usize, StoreError> {
        let Some(snapshot) = self.store.load()? else {
            return Ok(0);
        };
        let restored = form.restore(&snapshot);
        tracing::info!(restored, "restored saved form values");
        Ok(restored)
    }
}

/// `$XDG_CONFIG_HOME/metnum/<file>`, else `$HOME/.config/metnum/<file>`.
fn xdg_config_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| {
                let mut p = PathBuf::from(home);
                p.push(".config");
                p
            })
        })?;

    Some(config_dir.join(CONFIG_DIR_NAME).join(file_name()))
}

fn cwd_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".{}", file_name()))
}

fn file_name() -> String {
    format!("{STORAGE_KEY}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use metnum_core::form::ids;

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("config.json"));
        let manager = ConfigManager::new(Arc::new(store.clone()));

        let mut form = FormState::new();
        form.set(ids::INTEG_FUNCTION, "cos(x)");
        form.set(ids::DERIV_H, "0.01");
        manager.save(&form).unwrap();
        assert!(store.path().exists());

        let mut fresh = FormState::new();
        assert_eq!(manager.load_into(&mut fresh).unwrap(), form.snapshot().len());
        assert_eq!(fresh, form);
    }

    #[test]
    fn missing_file_restores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::new(Arc::new(FileStore::new(dir.path().join("none.json"))));
        let mut form = FormState::new();
        assert_eq!(manager.load_into(&mut form).unwrap(), 0);
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn corrupt_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let manager = ConfigManager::new(Arc::new(FileStore::new(path)));
        let mut form = FormState::new();
        assert!(matches!(
            manager.load_into(&mut form),
            Err(StoreError::Format(_))
        ));
        assert_eq!(form, FormState::new());
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let store = Arc::new(MemoryStore::default());
        let mut snapshot = Snapshot::new();
        snapshot.insert(ids::INTERP_X.into(), "1, 2".into());
        snapshot.insert("removed-field".into(), "x".into());
        store.save(&snapshot).unwrap();

        let mut form = FormState::new();
        assert_eq!(ConfigManager::new(store).load_into(&mut form).unwrap(), 1);
        assert_eq!(form.get(ids::INTERP_X), "1, 2");
    }

    #[test]
    fn default_file_name() {
        assert_eq!(file_name(), "metodos_numericos_config.json");
        assert!(cwd_config_path().ends_with(".metodos_numericos_config.json"));
    }
}
