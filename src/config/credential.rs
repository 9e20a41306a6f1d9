//! config::credential
//!
//! File-backed storage for the logged-in session.
//!
//! # Security
//!
//! The credential file holds the API token in the clear, so it is
//! written with mode `0600` on unix. Error messages never include the
//! token value.

use std::fs;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::AirliftPaths;

/// A stored session: the account name and its API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub name: String,
    pub token: String,
}

/// File-backed store for the credential.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: std::path::PathBuf,
    home: AirliftPaths,
}

impl CredentialStore {
    pub fn new(paths: &AirliftPaths) -> Self {
        Self {
            path: paths.credentials_path(),
            home: paths.clone(),
        }
    }

    /// Whether a credential has been saved.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the saved credential, or `None` when not logged in.
    pub fn load(&self) -> Result<Option<Credential>, ConfigError> {
        if !self.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        let credential = serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        Ok(Some(credential))
    }

    /// Save the credential, replacing any existing one.
    pub fn save(&self, credential: &Credential) -> Result<(), ConfigError> {
        self.home
            .ensure_home()
            .map_err(|source| ConfigError::Write {
                path: self.path.clone(),
                source,
            })?;
        let content =
            serde_json::to_string_pretty(credential).map_err(|err| ConfigError::Parse {
                path: self.path.clone(),
                message: err.to_string(),
            })?;
        fs::write(&self.path, content).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.restrict_permissions()
    }

    /// Remove the stored credential. Succeeds when none exists.
    pub fn delete(&self) -> Result<(), ConfigError> {
        if !self.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })
    }

    #[cfg(unix)]
    fn restrict_permissions(&self) -> Result<(), ConfigError> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|source| {
            ConfigError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(tmp: &TempDir) -> CredentialStore {
        CredentialStore::new(&AirliftPaths::from_dir(tmp.path()))
    }

    #[test]
    fn load_without_save_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        let credential = Credential {
            name: "tester".to_string(),
            token: "tok_123".to_string(),
        };
        store.save(&credential).unwrap();
        assert_eq!(store.load().unwrap(), Some(credential));
    }

    #[test]
    fn delete_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        store.delete().unwrap();
        store
            .save(&Credential {
                name: "tester".to_string(),
                token: "tok_123".to_string(),
            })
            .unwrap();
        store.delete().unwrap();
        assert!(!store.exists());
        store.delete().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn credential_file_is_private() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = TempDir::new().unwrap();
        let store = store_in(&tmp);
        store
            .save(&Credential {
                name: "tester".to_string(),
                token: "tok_123".to_string(),
            })
            .unwrap();
        let mode = std::fs::metadata(tmp.path().join("credentials.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
