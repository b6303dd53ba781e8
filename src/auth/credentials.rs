use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Credential file name in the data directory
const CREDENTIALS_FILE: &str = "credentials.json";

/// The three values the session layer persists between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKey {
    AccessToken,
    RefreshToken,
    Username,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredCredentials {
    access_token: Option<String>,
    refresh_token: Option<String>,
    username: Option<String>,
}

impl StoredCredentials {
    fn field(&self, key: CredentialKey) -> &Option<String> {
        match key {
            CredentialKey::AccessToken => &self.access_token,
            CredentialKey::RefreshToken => &self.refresh_token,
            CredentialKey::Username => &self.username,
        }
    }

    fn field_mut(&mut self, key: CredentialKey) -> &mut Option<String> {
        match key {
            CredentialKey::AccessToken => &mut self.access_token,
            CredentialKey::RefreshToken => &mut self.refresh_token,
            CredentialKey::Username => &mut self.username,
        }
    }
}

/// Durable storage for the session credential triple.
///
/// Values are pure pass-through strings, persisted to disk so they survive
/// process restarts until explicitly removed. The session manager is the
/// only writer; clones share the same backing file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    data_dir: PathBuf,
}

impl CredentialStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Read a single stored value. A missing or unreadable file reads as absent.
    pub fn get(&self, key: CredentialKey) -> Option<String> {
        self.read().field(key).clone()
    }

    pub fn set(&self, key: CredentialKey, value: &str) -> Result<()> {
        let mut credentials = self.read();
        *credentials.field_mut(key) = Some(value.to_string());
        self.write(&credentials)
    }

    pub fn remove(&self, key: CredentialKey) -> Result<()> {
        let mut credentials = self.read();
        *credentials.field_mut(key) = None;
        self.write(&credentials)
    }

    /// Persist the full triple in one write, as a successful login does.
    pub fn store_login(
        &self,
        access_token: &str,
        refresh_token: &str,
        username: &str,
    ) -> Result<()> {
        self.write(&StoredCredentials {
            access_token: Some(access_token.to_string()),
            refresh_token: Some(refresh_token.to_string()),
            username: Some(username.to_string()),
        })
    }

    /// Remove all three values together. Used by logout and by a failed
    /// session restore.
    pub fn clear(&self) -> Result<()> {
        let path = self.credentials_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove credential file")?;
        }
        Ok(())
    }

    fn read(&self) -> StoredCredentials {
        match std::fs::read_to_string(self.credentials_path()) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                debug!(error = %e, "Unreadable credential file, treating as empty");
                StoredCredentials::default()
            }),
            Err(_) => StoredCredentials::default(),
        }
    }

    fn write(&self, credentials: &StoredCredentials) -> Result<()> {
        let path = self.credentials_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(credentials)?;
        std::fs::write(&path, contents).context("Failed to write credential file")?;
        Ok(())
    }

    fn credentials_path(&self) -> PathBuf {
        self.data_dir.join(CREDENTIALS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, CredentialStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = CredentialStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_get_on_empty_store_returns_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get(CredentialKey::AccessToken), None);
        assert_eq!(store.get(CredentialKey::RefreshToken), None);
        assert_eq!(store.get(CredentialKey::Username), None);
    }

    #[test]
    fn test_set_then_get_roundtrips_a_single_key() {
        let (_dir, store) = temp_store();
        store
            .set(CredentialKey::AccessToken, "tok-123")
            .expect("set");
        assert_eq!(
            store.get(CredentialKey::AccessToken).as_deref(),
            Some("tok-123")
        );
        assert_eq!(store.get(CredentialKey::RefreshToken), None);
    }

    #[test]
    fn test_remove_clears_only_the_requested_key() {
        let (_dir, store) = temp_store();
        store.store_login("a", "r", "guest").expect("store");
        store.remove(CredentialKey::RefreshToken).expect("remove");
        assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("a"));
        assert_eq!(store.get(CredentialKey::RefreshToken), None);
        assert_eq!(store.get(CredentialKey::Username).as_deref(), Some("guest"));
    }

    #[test]
    fn test_store_login_writes_all_three_keys() {
        let (_dir, store) = temp_store();
        store.store_login("a", "r", "guest").expect("store");
        assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("a"));
        assert_eq!(store.get(CredentialKey::RefreshToken).as_deref(), Some("r"));
        assert_eq!(store.get(CredentialKey::Username).as_deref(), Some("guest"));
    }

    #[test]
    fn test_clear_removes_all_three_keys() {
        let (_dir, store) = temp_store();
        store.store_login("a", "r", "guest").expect("store");
        store.clear().expect("clear");
        assert_eq!(store.get(CredentialKey::AccessToken), None);
        assert_eq!(store.get(CredentialKey::RefreshToken), None);
        assert_eq!(store.get(CredentialKey::Username), None);
    }

    #[test]
    fn test_clear_on_empty_store_is_fine() {
        let (_dir, store) = temp_store();
        store.clear().expect("clear");
        store.clear().expect("clear again");
    }

    #[test]
    fn test_values_survive_a_new_store_instance() {
        let (dir, store) = temp_store();
        store.store_login("a", "r", "guest").expect("store");

        let reopened = CredentialStore::new(dir.path().to_path_buf());
        assert_eq!(
            reopened.get(CredentialKey::Username).as_deref(),
            Some("guest")
        );
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join(CREDENTIALS_FILE), "not json").expect("write");
        assert_eq!(store.get(CredentialKey::AccessToken), None);
        // And a write from this state recovers the file
        store.set(CredentialKey::Username, "guest").expect("set");
        assert_eq!(store.get(CredentialKey::Username).as_deref(), Some("guest"));
    }
}
