//! Session token storage backends.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};

use crate::core::error::{ClientError, Result};

/// Fixed key the token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Where a session token lives between calls.
///
/// A blank token is never reported by `load`.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Token held in process memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.read().clone().filter(|t| !t.trim().is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        Ok(())
    }
}

/// Token persisted in a small JSON key/value file, the way a browser keeps it in
/// local storage. A missing file, or a file without the `token` key, means logged out.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// `<platform config dir>/expense-tracker/session.json`
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "expense-tracker")
            .map(|dirs| dirs.config_dir().join("session.json"))
            .ok_or_else(|| ClientError::Session("could not determine home directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error("read", e)),
        }
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        let Some(contents) = self.read_contents()? else {
            return Ok(Map::new());
        };

        serde_json::from_str(&contents).map_err(|e| {
            ClientError::Session(format!(
                "{} is not valid JSON ({}); delete it or log in again to replace it",
                self.path.display(),
                e
            ))
        })
    }

    /// Entries to build on when writing. A file that is not a JSON object is replaced.
    fn entries_for_write(&self) -> Result<Map<String, Value>> {
        let Some(contents) = self.read_contents()? else {
            return Ok(Map::new());
        };

        Ok(serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Replacing corrupt session file");
            Map::new()
        }))
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error("create directory for", e))?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ClientError::Session(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| self.io_error("write", e))
    }

    fn io_error(&self, action: &str, err: std::io::Error) -> ClientError {
        ClientError::Session(format!("failed to {} {}: {}", action, self.path.display(), err))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        let entries = self.read_entries()?;

        Ok(entries
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string))
    }

    fn save(&self, token: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.entries_for_write()?;
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)?;

        tracing::debug!(path = %self.path.display(), "Session token stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.entries_for_write()?;
        entries.remove(TOKEN_KEY);

        if entries.is_empty() {
            match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(self.io_error("remove", e)),
            }
        } else {
            self.write_entries(&entries)?;
        }

        tracing::debug!(path = %self.path.display(), "Session token cleared");
        Ok(())
    }
}
