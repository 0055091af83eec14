//! On-disk session state: the bearer token and a mirror of the wishlist.
//!
//! Stored as `session.json` in the session directory. Writes go through a
//! temp file in the same directory and are renamed into place, so an
//! interrupted write never leaves a truncated session behind.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::warn;

use crate::config;
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub token: Option<String>,
    /// Product ids, in the order they were wishlisted.
    #[serde(default)]
    pub wishlist: Vec<String>,
}

pub struct SessionStore {
    /// Directory holding `session.json`.
    pub dir: PathBuf,
    data: SessionData,
}

impl SessionStore {
    /// Open (or create) the session store.
    ///
    /// If `dir` is `None`, uses the platform-appropriate default directory.
    /// A corrupt session file is removed and treated as an empty session.
    pub fn open(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_session_dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(config::SESSION_FILE);

        let data = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt session file, removing");
                    let _ = fs::remove_file(&path);
                    SessionData::default()
                }
            }
        } else {
            SessionData::default()
        };

        Ok(Self { dir, data })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(config::SESSION_FILE)
    }

    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn token(&self) -> Option<&str> {
        self.data.token.as_deref()
    }

    pub fn set_token(&mut self, token: Option<String>) -> Result<()> {
        self.data.token = token;
        self.save()
    }

    pub fn wishlist(&self) -> &[String] {
        &self.data.wishlist
    }

    pub fn is_wishlisted(&self, product_id: &str) -> bool {
        self.data.wishlist.iter().any(|id| id == product_id)
    }

    /// Replace the mirror with the backend's view of the wishlist.
    pub fn replace_wishlist(&mut self, product_ids: Vec<String>) -> Result<()> {
        self.data.wishlist = product_ids;
        self.save()
    }

    /// Add a product to the mirror. Already-present ids are left in place.
    pub fn add_to_wishlist(&mut self, product_id: &str) -> Result<()> {
        if !self.is_wishlisted(product_id) {
            self.data.wishlist.push(product_id.to_string());
            self.save()?;
        }
        Ok(())
    }

    pub fn remove_from_wishlist(&mut self, product_id: &str) -> Result<()> {
        let before = self.data.wishlist.len();
        self.data.wishlist.retain(|id| id != product_id);
        if self.data.wishlist.len() != before {
            self.save()?;
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(serde_json::to_string_pretty(&self.data)?.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.path()).map_err(|e| e.error)?;
        Ok(())
    }

    /// Forget the token and the wishlist mirror, removing the file.
    pub fn clear(&mut self) -> Result<()> {
        self.data = SessionData::default();
        let path = self.path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
