// ============================================================================
// AUTH STATE - Store de sesión (usuario, estado de la petición, error)
// ============================================================================

use crate::models::{AuthStatus, Session};
use crate::state::reactivity::{LifecycleEvent, Reducer};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthState {
    pub user: Option<Session>,
    pub status: AuthStatus,
    pub error: Option<String>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum AuthEvent {
    Register(LifecycleEvent<()>),
    Login(LifecycleEvent<Session>),
    /// Sesión rehidratada desde el storage al arrancar
    Restore(Session),
    Logout,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status == AuthStatus::Loading
    }

    fn start(&mut self) {
        self.status = AuthStatus::Loading;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.status = AuthStatus::Succeeded;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.status = AuthStatus::Failed;
        self.error = Some(message);
    }
}

impl Reducer for AuthState {
    type Event = AuthEvent;

    fn reduce(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::Register(LifecycleEvent::Pending) | AuthEvent::Login(LifecycleEvent::Pending) => {
                self.start()
            }
            // El registro no crea sesión
            AuthEvent::Register(LifecycleEvent::Fulfilled(())) => self.succeed(),
            AuthEvent::Login(LifecycleEvent::Fulfilled(session)) => {
                self.succeed();
                self.user = Some(session);
            }
            AuthEvent::Register(LifecycleEvent::Rejected(message))
            | AuthEvent::Login(LifecycleEvent::Rejected(message)) => self.fail(message),
            AuthEvent::Restore(session) => self.user = Some(session),
            AuthEvent::Logout => self.user = None,
        }
    }
}
