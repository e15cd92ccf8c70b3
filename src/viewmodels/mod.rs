pub mod auth_viewmodel;
pub mod dashboard_viewmodel;
pub mod product_viewmodel;

pub use auth_viewmodel::AuthViewModel;
pub use dashboard_viewmodel::{DashboardAction, DashboardState, DashboardViewModel, ListDisplay, Pagination};
pub use product_viewmodel::ProductViewModel;
