// ============================================================================
// SESSION REPOSITORY - Persistencia de la sesión detrás de una interfaz
// ============================================================================
// Los viewmodels dependen del trait, nunca de localStorage directamente.
// OJO: el token se guarda en claro en localStorage (sin cifrar).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::models::Session;
use crate::utils::constants::{STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_USER};
use crate::utils::storage::{
    load_from_storage, load_raw_from_storage, remove_from_storage, save_raw_to_storage,
    save_to_storage,
};

pub trait SessionRepository {
    /// Sesión guardada, si existe y se puede decodificar
    fn load(&self) -> Option<Session>;

    /// Guarda la sesión y, si tiene token, también el token bajo su propia clave
    fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Borra sesión y token
    fn clear(&self);

    /// Bearer token para las peticiones autenticadas
    fn token(&self) -> Option<String>;
}

/// Implementación del navegador (localStorage)
#[derive(Clone, Default)]
pub struct LocalStorageSessionRepository;

impl SessionRepository for LocalStorageSessionRepository {
    fn load(&self) -> Option<Session> {
        load_from_storage::<Session>(STORAGE_KEY_USER)
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        save_to_storage(STORAGE_KEY_USER, session)?;
        if let Some(token) = session.token.as_deref() {
            save_raw_to_storage(STORAGE_KEY_AUTH_TOKEN, token)?;
        }
        log::info!("💾 Sesión guardada en localStorage");
        Ok(())
    }

    fn clear(&self) {
        remove_from_storage(STORAGE_KEY_USER);
        remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
        log::info!("🗑️ Sesión eliminada de localStorage");
    }

    fn token(&self) -> Option<String> {
        load_raw_from_storage(STORAGE_KEY_AUTH_TOKEN).filter(|t| !t.is_empty())
    }
}

/// Implementación en memoria con la misma forma clave → valor que localStorage.
/// Los clones comparten el mismo almacén (simula recargar la página).
#[derive(Clone, Default)]
pub struct MemorySessionRepository {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn set_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl SessionRepository for MemorySessionRepository {
    fn load(&self) -> Option<Session> {
        let entries = self.entries.borrow();
        let json = entries.get(STORAGE_KEY_USER)?;
        serde_json::from_str(json).ok()
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)
            .map_err(|e| StorageError::Write(format!("{}: {}", STORAGE_KEY_USER, e)))?;
        self.set_raw(STORAGE_KEY_USER, &json);
        if let Some(token) = session.token.as_deref() {
            self.set_raw(STORAGE_KEY_AUTH_TOKEN, token);
        }
        Ok(())
    }

    fn clear(&self) {
        let mut entries = self.entries.borrow_mut();
        entries.remove(STORAGE_KEY_USER);
        entries.remove(STORAGE_KEY_AUTH_TOKEN);
    }

    fn token(&self) -> Option<String> {
        self.entries
            .borrow()
            .get(STORAGE_KEY_AUTH_TOKEN)
            .filter(|t| !t.is_empty())
            .cloned()
    }
}
