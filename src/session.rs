//! Session storage for the bearer token and the signed-in identity.
//!
//! The session lives under three keys — `token`, `user`, and `role` —
//! behind a small capability interface, so the rest of the client never
//! cares where it is actually kept: in memory for tests and embedding, on
//! disk for the CLI so a login survives between invocations.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

/// Local-storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Local-storage key for the signed-in user object (JSON, stored verbatim).
pub const USER_KEY: &str = "user";
/// Local-storage key for the signed-in role (employee portal).
pub const ROLE_KEY: &str = "role";

/// Capability interface over the session store.
///
/// `clear` is logout: it wipes every key, which sends the caller back to
/// the unauthenticated state.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);

    /// The bearer token, if a session is active.
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySession {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
    }
}

/// File-backed session store: a flat JSON object on disk.
///
/// Writes are best-effort: a failed persist keeps the in-memory value and
/// logs a warning rather than failing the flow that triggered it.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl FileSession {
    /// Open the store at `path`, loading any previously persisted session.
    ///
    /// A missing or unreadable file starts an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(&raw).ok())
            .unwrap_or_default();
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    fn persist(&self, values: &HashMap<String, String>) {
        match serde_json::to_string_pretty(values) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    tracing::warn!("failed to persist session to {}: {err}", self.path.display());
                }
            }
            Err(err) => tracing::warn!("failed to serialize session: {err}"),
        }
    }
}

impl SessionStore for FileSession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
            self.persist(&values);
        }
    }

    fn clear(&self) {
        if let Ok(mut values) = self.values.write() {
            values.clear();
        }
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("failed to remove session file {}: {err}", self.path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_session_roundtrip_and_clear() {
        let session = MemorySession::new();
        assert_eq!(session.token(), None);

        session.set(TOKEN_KEY, "abc123");
        session.set(ROLE_KEY, "admin");
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert_eq!(session.get(ROLE_KEY).as_deref(), Some("admin"));

        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.get(ROLE_KEY), None);
    }

    #[test]
    fn file_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = FileSession::open(&path);
        session.set(TOKEN_KEY, "abc123");
        session.set(USER_KEY, r#"{"fullName":"John Doe"}"#);
        drop(session);

        let reopened = FileSession::open(&path);
        assert_eq!(reopened.token().as_deref(), Some("abc123"));
        assert_eq!(
            reopened.get(USER_KEY).as_deref(),
            Some(r#"{"fullName":"John Doe"}"#)
        );

        reopened.clear();
        assert!(!path.exists());
        assert_eq!(FileSession::open(&path).token(), None);
    }
}
