//! Errores de la app: un único tipo etiquetado que se decodifica en el borde de red.

use crate::utils::constants::UNEXPECTED_ERROR_MESSAGE;

/// Categoría del error, sin el mensaje
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AuthRequired,
    Backend,
    Validation,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// No hay token: se comprueba en cliente, nunca llega a la red
    #[error("No token found. Please log in.")]
    AuthRequired,

    /// Fallo HTTP o de red. `status` es `None` si no hubo respuesta.
    #[error("{message}")]
    Backend { status: Option<u16>, message: String },

    /// Error de formulario asociado a un campo
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    /// Respuesta malformada o error no previsto
    #[error("An unexpected error occurred")]
    Unexpected,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::AuthRequired => ErrorKind::AuthRequired,
            ApiError::Backend { .. } => ErrorKind::Backend,
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::Unexpected => ErrorKind::Unexpected,
        }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Mensaje para el usuario (toast + campo `error` del store)
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unexpected => UNEXPECTED_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("Error guardando en localStorage: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_displays_server_message() {
        let err = ApiError::Backend {
            status: Some(400),
            message: "Product not found".to_string(),
        };
        assert_eq!(err.user_message(), "Product not found");
        assert_eq!(err.kind(), ErrorKind::Backend);
    }

    #[test]
    fn auth_required_has_fixed_message() {
        assert_eq!(
            ApiError::AuthRequired.user_message(),
            "No token found. Please log in."
        );
        assert_eq!(ApiError::AuthRequired.kind(), ErrorKind::AuthRequired);
    }

    #[test]
    fn unexpected_uses_generic_message() {
        assert_eq!(ApiError::Unexpected.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn validation_error_keeps_field() {
        let err = ApiError::validation("price", "Price is required");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(err, ApiError::Validation { field: "price", .. }));
        assert_eq!(err.to_string(), "Price is required");
    }
}
