use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::secure::SecureString;

/// Errors raised while persisting or clearing session tokens.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to lock session file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Local key-value storage for the access and refresh tokens.
///
/// The access token is read on every outgoing request; both values are
/// removed together on logout.
pub trait TokenStore: Send + Sync {
    /// Store the tokens returned by login or registration.
    ///
    /// The refresh token is only written when present; an earlier one is kept otherwise.
    fn save_tokens(&self, access: &str, refresh: Option<&str>) -> Result<(), SessionError>;

    fn access_token(&self) -> Option<SecureString>;

    fn refresh_token(&self) -> Option<SecureString>;

    /// Remove every stored value.
    fn clear(&self) -> Result<(), SessionError>;

    /// Whether a previous login left an access token behind.
    fn has_session(&self) -> bool {
        self.access_token().is_some_and(|token| !token.is_empty())
    }
}

/// On-disk layout of the session file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

/// Token store backed by a small TOML file.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> StoredTokens {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return StoredTokens::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable session file");
                return StoredTokens::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "corrupt session file ignored");
            StoredTokens::default()
        })
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    /// Exclusive lock on a sibling `.lock` file, held across read-modify-write.
    ///
    /// The session file itself is replaced by rename, so it cannot carry the lock.
    fn lock(&self) -> Result<File, SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let lock_path = self.sibling(".lock");
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| SessionError::Lock {
                path: lock_path.clone(),
                source: e,
            })?;

        file.lock_exclusive().map_err(|e| SessionError::Lock {
            path: lock_path,
            source: e,
        })?;
        Ok(file)
    }

    /// Writes a sibling temp file and renames it over the session file, so
    /// readers see either the old or the new contents and never a partial one.
    fn write(&self, tokens: &StoredTokens) -> Result<(), SessionError> {
        let content = toml::to_string(tokens)?;
        let tmp_path = self.sibling(".tmp");

        let result = File::create(&tmp_path)
            .and_then(|mut file| {
                file.write_all(content.as_bytes())?;
                file.sync_all()
            })
            .and_then(|_| fs::rename(&tmp_path, &self.path));

        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result.map_err(|e| self.io_error(e))
    }
}

impl TokenStore for FileTokenStore {
    fn save_tokens(&self, access: &str, refresh: Option<&str>) -> Result<(), SessionError> {
        let lock = self.lock()?;
        let mut stored = self.read();
        stored.access_token = Some(access.to_string());
        if let Some(refresh) = refresh {
            stored.refresh_token = Some(refresh.to_string());
        }
        let result = self.write(&stored);
        let _ = FileExt::unlock(&lock);
        result?;
        tracing::debug!(path = %self.path.display(), "session tokens saved");
        Ok(())
    }

    fn access_token(&self) -> Option<SecureString> {
        self.read().access_token.map(SecureString::new)
    }

    fn refresh_token(&self) -> Option<SecureString> {
        self.read().refresh_token.map(SecureString::new)
    }

    fn clear(&self) -> Result<(), SessionError> {
        if !self.path.exists() {
            return Ok(());
        }

        let lock = self.lock()?;
        let result = match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        };
        let _ = FileExt::unlock(&lock);
        result
    }
}

/// Process-local token store; nothing survives the process.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: RwLock<StoredTokens>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds an access token.
    pub fn with_access_token(token: &str) -> Self {
        let store = Self::new();
        store.inner.write().access_token = Some(token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn save_tokens(&self, access: &str, refresh: Option<&str>) -> Result<(), SessionError> {
        let mut inner = self.inner.write();
        inner.access_token = Some(access.to_string());
        if let Some(refresh) = refresh {
            inner.refresh_token = Some(refresh.to_string());
        }
        Ok(())
    }

    fn access_token(&self) -> Option<SecureString> {
        self.inner.read().access_token.clone().map(SecureString::new)
    }

    fn refresh_token(&self) -> Option<SecureString> {
        self.inner.read().refresh_token.clone().map(SecureString::new)
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.inner.write() = StoredTokens::default();
        Ok(())
    }
}
