// ============================================================================
// MUTATION STATE - loading/error independiente para crear, editar y eliminar
// ============================================================================

use crate::state::reactivity::{LifecycleEvent, Reducer};
use crate::utils::constants::UNEXPECTED_ERROR_MESSAGE;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MutationKind {
    Create,
    Edit,
    Delete,
}

impl MutationKind {
    /// Mensaje de éxito si el backend no manda `message`
    pub fn success_message(self) -> &'static str {
        match self {
            MutationKind::Create => "Product created successfully!",
            MutationKind::Edit => "Product updated successfully!",
            MutationKind::Delete => "Product deleted successfully!",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct MutationState {
    pub loading: bool,
    pub error: Option<String>,
}

impl Reducer for MutationState {
    type Event = LifecycleEvent<()>;

    fn reduce(&mut self, event: LifecycleEvent<()>) {
        match event {
            LifecycleEvent::Pending => {
                self.loading = true;
                self.error = None;
            }
            LifecycleEvent::Fulfilled(()) => self.loading = false,
            LifecycleEvent::Rejected(message) => {
                self.loading = false;
                self.error = Some(if message.is_empty() {
                    UNEXPECTED_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
    }
}
