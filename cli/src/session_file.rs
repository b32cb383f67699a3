//! Session persisted on disk by the login flow.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use stockdesk_shared::{SessionProvider, SessionUser};

/// On-disk layout of the session file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContents {
    /// Signed-in user record.
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,
}

/// [`SessionProvider`] backed by a JSON file. The file is re-read on every
/// access so a logout elsewhere is noticed.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Provider reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> SessionContents {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), "session file unreadable: {err}");
                return SessionContents::default();
            },
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(path = %self.path.display(), "malformed session file: {err}");
            SessionContents::default()
        })
    }
}

impl SessionProvider for SessionFile {
    fn user(&self) -> Option<SessionUser> {
        self.read().user
    }

    fn token(&self) -> Option<String> {
        self.read().token
    }
}
