// ============================================================================
// AUTH VIEWMODEL - register / login / logout / restore
// ============================================================================
// Cada operación emite pending → fulfilled | rejected al store de sesión y
// avisa al usuario con un toast. Sin reintentos.
// ============================================================================

use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterData, RegisterRequest, Session};
use crate::services::{ApiClient, SessionRepository};
use crate::state::{AppState, AuthEvent, LifecycleEvent};

pub struct AuthViewModel {
    api: ApiClient,
    sessions: Rc<dyn SessionRepository>,
    state: AppState,
}

impl AuthViewModel {
    pub fn new(api: ApiClient, sessions: Rc<dyn SessionRepository>, state: AppState) -> Self {
        Self { api, sessions, state }
    }

    /// Registro. No crea sesión: el usuario tiene que hacer login después.
    pub async fn register(&self, data: RegisterData) -> Result<String, ApiError> {
        self.state.auth.dispatch(AuthEvent::Register(LifecycleEvent::Pending));

        let request = RegisterRequest {
            username: data.username,
            email: data.email,
            password: data.password,
        };

        match self.api.register(&request).await {
            Ok(response) => {
                self.state
                    .auth
                    .dispatch(AuthEvent::Register(LifecycleEvent::Fulfilled(())));
                let message = response
                    .message
                    .unwrap_or_else(|| "Registration successful!".to_string());
                log::info!("✅ Registro exitoso: {}", request.email);
                self.state.notify_success(message.clone());
                Ok(message)
            }
            Err(e) => {
                self.reject(AuthEvent::Register(LifecycleEvent::Rejected(e.user_message())), &e);
                Err(e)
            }
        }
    }

    /// Login. La sesión se guarda en el repositorio (en claro) y en memoria.
    pub async fn login(&self, email: String, password: String) -> Result<Session, ApiError> {
        self.state.auth.dispatch(AuthEvent::Login(LifecycleEvent::Pending));

        let request = LoginRequest {
            email: email.clone(),
            password,
        };

        let result = self
            .api
            .login(&request)
            .await
            .and_then(|response| session_from_response(response, &email))
            .and_then(|(session, message)| self.persist(session, message));

        match result {
            Ok((session, message)) => {
                log::info!("✅ Login exitoso: {}", session.display_name());
                self.state
                    .auth
                    .dispatch(AuthEvent::Login(LifecycleEvent::Fulfilled(session.clone())));
                self.state.notify_success(message);
                Ok(session)
            }
            Err(e) => {
                self.reject(AuthEvent::Login(LifecycleEvent::Rejected(e.user_message())), &e);
                Err(e)
            }
        }
    }

    /// Logout: borra memoria y storage. La recarga de página la hace quien llama.
    pub fn logout(&self) {
        log::info!("👋 Logout - limpiando sesión");
        self.sessions.clear();
        self.state.auth.dispatch(AuthEvent::Logout);
    }

    /// Rehidratar la sesión guardada al arrancar la app
    pub fn restore(&self) -> Option<Session> {
        let session = self.sessions.load()?;
        log::info!("✅ Sesión restaurada: {}", session.display_name());
        self.state.auth.dispatch(AuthEvent::Restore(session.clone()));
        Some(session)
    }

    /// Sin sesión guardada no hay token para las peticiones: el login no vale
    fn persist(&self, session: Session, message: String) -> Result<(Session, String), ApiError> {
        if let Err(e) = self.sessions.save(&session) {
            log::error!("❌ {}", e);
            self.sessions.clear();
            return Err(ApiError::Unexpected);
        }
        Ok((session, message))
    }

    fn reject(&self, event: AuthEvent, error: &ApiError) {
        log::error!("❌ Error de autenticación: {}", error);
        self.state.auth.dispatch(event);
        self.state.notify_error(error.user_message());
    }
}

/// Sin token la respuesta no sirve: se trata como fallo genérico
fn session_from_response(
    response: LoginResponse,
    email: &str,
) -> Result<(Session, String), ApiError> {
    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Unexpected)?;
    let session = Session {
        username: response.username,
        email: response.email.unwrap_or_else(|| email.to_string()),
        token: Some(token),
    };
    let message = response
        .message
        .unwrap_or_else(|| "Login successful! Welcome back.".to_string());
    Ok((session, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::models::AuthStatus;
    use crate::services::MemorySessionRepository;
    use crate::state::ToastKind;
    use crate::testing::MockTransport;
    use crate::utils::constants::{STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_USER};

    struct Fixture {
        transport: Rc<MockTransport>,
        repo: MemorySessionRepository,
        state: AppState,
        vm: AuthViewModel,
    }

    fn fixture() -> Fixture {
        let transport = MockTransport::new();
        let repo = MemorySessionRepository::new();
        let state = AppState::new();
        let vm = AuthViewModel::new(
            ApiClient::new("http://localhost:5000", transport.clone()),
            Rc::new(repo.clone()),
            state.clone(),
        );
        Fixture { transport, repo, state, vm }
    }

    #[tokio::test]
    async fn login_persists_session_readable_after_reload() {
        let f = fixture();
        f.transport.respond(
            200,
            r#"{"token":"t0k","username":"ana","email":"ana@example.com","message":"Welcome"}"#,
        );

        let session = f
            .vm
            .login("ana@example.com".to_string(), "secret".to_string())
            .await
            .unwrap();

        assert_eq!(session.token.as_deref(), Some("t0k"));
        assert_eq!(f.state.auth.with(|s| s.status), AuthStatus::Succeeded);

        // "Recarga": estado nuevo, mismo almacén
        let reloaded_state = AppState::new();
        let reloaded = AuthViewModel::new(
            ApiClient::new("http://localhost:5000", MockTransport::new()),
            Rc::new(f.repo.clone()),
            reloaded_state.clone(),
        );
        assert_eq!(reloaded.restore(), Some(session.clone()));
        assert_eq!(reloaded_state.auth.with(|s| s.user.clone()), Some(session));

        let toasts = f.state.toasts.snapshot().toasts;
        assert_eq!(toasts[0].message, "Welcome");
    }

    #[tokio::test]
    async fn login_failure_records_server_message() {
        let f = fixture();
        f.transport.respond(400, r#"{"message":"Invalid credentials"}"#);

        let err = f
            .vm
            .login("ana@example.com".to_string(), "bad".to_string())
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Invalid credentials");
        let auth = f.state.auth.snapshot();
        assert_eq!(auth.status, AuthStatus::Failed);
        assert_eq!(auth.error.as_deref(), Some("Invalid credentials"));
        assert!(auth.user.is_none());
        assert!(!f.repo.contains_key(STORAGE_KEY_USER));
        assert_eq!(f.state.toasts.snapshot().toasts[0].kind, ToastKind::Error);
    }

    #[tokio::test]
    async fn login_without_token_is_generic_failure() {
        let f = fixture();
        f.transport.respond(200, r#"{"message":"ok"}"#);

        let err = f
            .vm
            .login("ana@example.com".to_string(), "secret".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unexpected);
        assert_eq!(
            f.state.auth.with(|s| s.error.clone()).as_deref(),
            Some("An unexpected error occurred")
        );
    }

    #[tokio::test]
    async fn login_falls_back_to_submitted_email_and_default_message() {
        let f = fixture();
        f.transport.respond(200, r#"{"token":"t0k"}"#);

        let session = f
            .vm
            .login("ana@example.com".to_string(), "secret".to_string())
            .await
            .unwrap();

        assert_eq!(session.email, "ana@example.com");
        assert_eq!(session.username, None);
        assert_eq!(
            f.state.toasts.snapshot().toasts[0].message,
            "Login successful! Welcome back."
        );
    }

    #[tokio::test]
    async fn register_succeeds_without_logging_in() {
        let f = fixture();
        f.transport.respond(201, r#"{"message":"User registered"}"#);

        let message = f
            .vm
            .register(RegisterData {
                username: "ana".to_string(),
                email: "ana@example.com".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(message, "User registered");
        let auth = f.state.auth.snapshot();
        assert_eq!(auth.status, AuthStatus::Succeeded);
        assert!(auth.user.is_none());
        assert_eq!(f.repo.load(), None);
    }

    #[tokio::test]
    async fn register_network_failure_uses_generic_message() {
        let f = fixture();
        f.transport.fail("offline");

        let err = f.vm.register(RegisterData::default()).await.unwrap_err();

        assert_eq!(err.user_message(), "An unexpected error occurred");
        assert_eq!(f.state.auth.with(|s| s.status), AuthStatus::Failed);
    }

    #[tokio::test]
    async fn logout_clears_memory_and_storage() {
        let f = fixture();
        f.transport.respond(200, r#"{"token":"t0k","username":"ana","email":"ana@example.com"}"#);
        f.vm
            .login("ana@example.com".to_string(), "secret".to_string())
            .await
            .unwrap();

        f.vm.logout();

        assert!(!f.state.auth.with(|s| s.is_logged_in()));
        assert!(!f.repo.contains_key(STORAGE_KEY_USER));
        assert!(!f.repo.contains_key(STORAGE_KEY_AUTH_TOKEN));
    }

    struct ReadOnlyRepository;

    impl SessionRepository for ReadOnlyRepository {
        fn load(&self) -> Option<Session> {
            None
        }

        fn save(&self, _session: &Session) -> Result<(), StorageError> {
            Err(StorageError::Write("user".to_string()))
        }

        fn clear(&self) {}

        fn token(&self) -> Option<String> {
            None
        }
    }

    #[tokio::test]
    async fn login_fails_when_session_cannot_be_stored() {
        let transport = MockTransport::new();
        let state = AppState::new();
        let vm = AuthViewModel::new(
            ApiClient::new("http://localhost:5000", transport.clone()),
            Rc::new(ReadOnlyRepository),
            state.clone(),
        );
        transport.respond(200, r#"{"token":"t0k","username":"ana","email":"ana@example.com"}"#);

        let err = vm
            .login("ana@example.com".to_string(), "secret".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unexpected);
        let auth = state.auth.snapshot();
        assert!(!auth.is_logged_in());
        assert_eq!(auth.status, AuthStatus::Failed);
        let toasts = state.toasts.snapshot().toasts;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn restore_without_saved_session_is_noop() {
        let f = fixture();
        assert_eq!(f.vm.restore(), None);
        assert!(!f.state.auth.with(|s| s.is_logged_in()));
    }
}
