// ============================================================================
// STATE MODULE - Stores con reducer (Rc<RefCell>) + notificaciones
// ============================================================================

pub mod app_state;
pub mod auth_state;
pub mod mutation_state;
pub mod product_state;
pub mod reactivity;
pub mod toast_state;

pub use app_state::AppState;
pub use auth_state::{AuthEvent, AuthState};
pub use mutation_state::{MutationKind, MutationState};
pub use product_state::{FetchKind, ProductListEvent, ProductListState};
pub use reactivity::{LifecycleEvent, Reducer, Store, SubscriptionId};
pub use toast_state::{Toast, ToastEvent, ToastKind, ToastState};
