use serde::{Deserialize, Serialize};

/// Usuario autenticado tal y como se guarda en localStorage (`user`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub token: Option<String>,
}

impl Session {
    /// Nombre a mostrar: username si existe, si no el email
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }

    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_the_stored_shape() {
        let json = r#"{"username":"ana","email":"ana@example.com","token":"t0k"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.display_name(), "ana");
        assert!(session.has_token());
    }

    #[test]
    fn missing_username_falls_back_to_email() {
        let json = r#"{"email":"ana@example.com","token":null}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.display_name(), "ana@example.com");
        assert!(!session.has_token());
    }
}
