// ============================================================================
// APP CONTEXT - Stores + viewmodels compartidos por todo el árbol de Yew
// ============================================================================

use std::rc::Rc;

use crate::services::{ApiClient, LocalStorageSessionRepository, SessionRepository};
use crate::state::AppState;
use crate::viewmodels::{AuthViewModel, DashboardViewModel, ProductViewModel};

#[derive(Clone)]
pub struct AppContext {
    pub state: AppState,
    pub auth: Rc<AuthViewModel>,
    pub products: Rc<ProductViewModel>,
    pub dashboard: Rc<DashboardViewModel>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && Rc::ptr_eq(&self.auth, &other.auth)
            && Rc::ptr_eq(&self.products, &other.products)
    }
}

impl AppContext {
    pub fn new(api: ApiClient, sessions: Rc<dyn SessionRepository>) -> Self {
        let state = AppState::new();
        let auth = Rc::new(AuthViewModel::new(api.clone(), sessions.clone(), state.clone()));
        let products = Rc::new(ProductViewModel::new(api, sessions, state.clone()));
        let dashboard = Rc::new(DashboardViewModel::new(products.clone()));
        Self {
            state,
            auth,
            products,
            dashboard,
        }
    }

    /// Contexto real: backend configurado + localStorage
    pub fn browser() -> Self {
        Self::new(ApiClient::browser(), Rc::new(LocalStorageSessionRepository))
    }
}
