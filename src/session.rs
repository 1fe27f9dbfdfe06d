//! Session context: the bearer token handed to the API client.
//!
//! The token is read once from the token file when the application shell
//! builds the session, attached to every request, and cleared (in memory
//! and on disk) when the backend answers 401.

use crate::errors::AppResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Session {
    token: RwLock<Option<String>>,
    store: Option<PathBuf>,
}

impl Session {
    /// Session without any persistent store (tests, one-off calls).
    pub fn anonymous() -> Self {
        Self {
            token: RwLock::new(None),
            store: None,
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
            store: None,
        }
    }

    /// Load the token stored at `path`. A missing or blank file means no token.
    pub fn from_store(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let token = match fs::read_to_string(&path) {
            Ok(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Ok(_) => None,
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        debug!(store = %path.display(), has_token = token.is_some(), "session loaded");
        Ok(Self {
            token: RwLock::new(token),
            store: Some(path),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.store.as_deref()
    }

    /// Replace the token and persist it when a store is configured.
    pub fn set_token(&self, token: &str) -> AppResult<()> {
        if let Some(path) = &self.store {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, token.trim())?;
        }
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.trim().to_string());
        }
        Ok(())
    }

    /// Drop the token from memory and from the store.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
        if let Some(path) = &self.store
            && let Err(e) = fs::remove_file(path)
            && e.kind() != io::ErrorKind::NotFound
        {
            warn!(store = %path.display(), error = %e, "failed to remove stored token");
        }
    }
}
