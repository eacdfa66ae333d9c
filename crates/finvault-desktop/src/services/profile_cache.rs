//! Local profile cache
//!
//! A single JSON file holding the last-known user profile so the settings
//! page can render without a store round trip. The cache is advisory; the
//! user store stays authoritative and the file is rewritten after every
//! successful profile save.

use std::path::{Path, PathBuf};

use finvault_core::error::Result;
use finvault_core::models::UserProfile;

const CACHE_FILE_NAME: &str = "profile.json";

/// File-backed cache for the last-known user profile
#[derive(Debug, Clone)]
pub struct ProfileCache {
    path: PathBuf,
}

impl Default for ProfileCache {
    fn default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("finvault");
        Self {
            path: dir.join(CACHE_FILE_NAME),
        }
    }
}

impl ProfileCache {
    /// Create a cache at an explicit path (used by tests)
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached profile, if any
    ///
    /// A missing file means no cache; an unreadable file is treated the
    /// same way after a warning, since the store can always repopulate it.
    pub fn load(&self) -> Option<UserProfile> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!("Failed to read profile cache: {}", error);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(error) => {
                tracing::warn!("Discarding corrupt profile cache: {}", error);
                None
            }
        }
    }

    /// Write the profile to the cache file
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }

    /// Remove the cache file if present
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Priya Singh".to_string(),
            email: "p@x.com".to_string(),
            username: Some("priya99".to_string()),
            bio: None,
        }
    }

    #[test]
    fn test_load_missing_cache() {
        let tmp = tempdir().unwrap();
        let cache = ProfileCache::at(tmp.path().join(CACHE_FILE_NAME));
        assert!(cache.load().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = tempdir().unwrap();
        let cache = ProfileCache::at(tmp.path().join(CACHE_FILE_NAME));

        cache.save(&profile()).unwrap();
        let loaded = cache.load().unwrap();
        assert_eq!(loaded, profile());
    }

    #[test]
    fn test_corrupt_cache_is_discarded() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CACHE_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let cache = ProfileCache::at(path);
        assert!(cache.load().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let tmp = tempdir().unwrap();
        let cache = ProfileCache::at(tmp.path().join(CACHE_FILE_NAME));

        cache.save(&profile()).unwrap();
        cache.clear().unwrap();
        cache.clear().unwrap();
        assert!(cache.load().is_none());
    }
}
