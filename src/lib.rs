// ============================================================================
// PRODUCT DASHBOARD - FRONTEND MVVM (Rust + Yew)
// ============================================================================
// - Models: estructuras compartidas con el backend + formularios
// - Services: SOLO comunicación API y persistencia de sesión
// - State: stores con reducer (Rc<RefCell>) + subscribers
// - ViewModels: acciones asíncronas y coordinación de la vista
// - Hooks / Context / Components: capa Yew
// ============================================================================

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod testing;

pub use components::App;
pub use config::CONFIG;
pub use error::ApiError;
