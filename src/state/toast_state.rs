// ============================================================================
// TOAST STATE - Notificaciones transitorias para el usuario
// ============================================================================

use crate::state::reactivity::Reducer;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ToastEvent {
    Push { kind: ToastKind, message: String },
    Dismiss(u32),
}

impl ToastState {
    pub fn last_id(&self) -> Option<u32> {
        self.toasts.last().map(|t| t.id)
    }
}

impl Reducer for ToastState {
    type Event = ToastEvent;

    fn reduce(&mut self, event: ToastEvent) {
        match event {
            ToastEvent::Push { kind, message } => {
                let id = self.next_id;
                self.next_id = self.next_id.wrapping_add(1);
                self.toasts.push(Toast { id, kind, message });
            }
            ToastEvent::Dismiss(id) => self.toasts.retain(|t| t.id != id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut state = ToastState::default();
        state.reduce(ToastEvent::Push {
            kind: ToastKind::Success,
            message: "Product created successfully!".to_string(),
        });
        state.reduce(ToastEvent::Push {
            kind: ToastKind::Error,
            message: "Failed to create product".to_string(),
        });

        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].id, 0);
        assert_eq!(state.last_id(), Some(1));
        assert_eq!(state.toasts[1].kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut state = ToastState::default();
        for message in ["a", "b", "c"] {
            state.reduce(ToastEvent::Push {
                kind: ToastKind::Success,
                message: message.to_string(),
            });
        }

        state.reduce(ToastEvent::Dismiss(1));

        let left: Vec<_> = state.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["a", "c"]);
    }
}
