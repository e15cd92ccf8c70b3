use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::FormErrors;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de `/api/auth/register`: `{message}` o `{token, username, email}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Respuesta de `/api/auth/login`. Todo opcional: se valida al construir la sesión.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Cuerpo `{message}` de las mutaciones y de los errores del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Campos obligatorios antes de tocar la red
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "email", &self.email, "Email is required");
        require(&mut errors, "password", &self.password, "Password is required");
        errors.into_result()
    }
}

impl RegisterData {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();
        require(&mut errors, "username", &self.username, "Username is required");
        require(&mut errors, "email", &self.email, "Email is required");
        require(&mut errors, "password", &self.password, "Password is required");
        errors.into_result()
    }
}

fn require(errors: &mut FormErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(ApiError::validation(field, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_tolerates_missing_fields() {
        let response: LoginResponse = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("hi"));
        assert!(response.token.is_none());
    }

    #[test]
    fn message_response_ignores_unknown_fields() {
        let response: MessageResponse =
            serde_json::from_str(r#"{"message":"ok","product":{"_id":"1"}}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[test]
    fn login_requires_email_and_password() {
        let errors = LoginRequest {
            email: "  ".to_string(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn register_requires_username() {
        let data = RegisterData {
            username: String::new(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
        };
        let errors = data.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("username").is_some());
    }
}
