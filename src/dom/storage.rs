//! `window.localStorage` behind [`KeyValueStore`].
//!
//! Private browsing modes and disabled storage either hide the storage
//! object or throw on access; both surface as [`StorageError`] and the theme
//! manager carries on without persistence.

use web_sys::{Storage, Window};

use super::error::describe;
use crate::theme::{KeyValueStore, StorageError};

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("localStorage inaccessible: {}", describe(&e));
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Rejected(describe(&e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Rejected(describe(&e)))
    }
}
