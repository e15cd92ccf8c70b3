use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    LocalStorage::set(key, value).map_err(|e| StorageError::Write(format!("{}: {}", key, e)))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

/// Guarda un string tal cual (sin comillas JSON), p.ej. el token
pub fn save_raw_to_storage(key: &str, value: &str) -> Result<(), StorageError> {
    LocalStorage::raw()
        .set_item(key, value)
        .map_err(|_| StorageError::Write(key.to_string()))
}

pub fn load_raw_from_storage(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).ok().flatten()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}
