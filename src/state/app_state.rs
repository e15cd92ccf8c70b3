// ============================================================================
// APP STATE - Todos los stores de la app
// ============================================================================

use crate::state::auth_state::AuthState;
use crate::state::mutation_state::{MutationKind, MutationState};
use crate::state::product_state::ProductListState;
use crate::state::reactivity::Store;
use crate::state::toast_state::{ToastEvent, ToastKind, ToastState};

/// Estado global de la app. Clonar es barato: los stores son handles compartidos.
#[derive(Clone, PartialEq)]
pub struct AppState {
    pub auth: Store<AuthState>,
    pub products: Store<ProductListState>,
    pub creation: Store<MutationState>,
    pub edit: Store<MutationState>,
    pub delete: Store<MutationState>,
    pub toasts: Store<ToastState>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: Store::new(AuthState::default()),
            products: Store::new(ProductListState::default()),
            creation: Store::new(MutationState::default()),
            edit: Store::new(MutationState::default()),
            delete: Store::new(MutationState::default()),
            toasts: Store::new(ToastState::default()),
        }
    }

    pub fn mutation(&self, kind: MutationKind) -> &Store<MutationState> {
        match kind {
            MutationKind::Create => &self.creation,
            MutationKind::Edit => &self.edit,
            MutationKind::Delete => &self.delete,
        }
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.toasts.dispatch(ToastEvent::Push {
            kind: ToastKind::Success,
            message: message.into(),
        });
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.toasts.dispatch(ToastEvent::Push {
            kind: ToastKind::Error,
            message: message.into(),
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
