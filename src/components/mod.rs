pub mod app;
pub mod auth_modal;
pub mod form_field;
pub mod home;
pub mod logout_modal;
pub mod nav_bar;
pub mod pagination;
pub mod product_dashboard;
pub mod product_editor;
pub mod product_filter_form;
pub mod toast_container;

pub use app::{App, Page};
pub use auth_modal::AuthModal;
pub use form_field::FormField;
pub use home::Home;
pub use logout_modal::LogoutModal;
pub use nav_bar::NavBar;
pub use pagination::PaginationBar;
pub use product_dashboard::ProductDashboard;
pub use product_editor::ProductEditor;
pub use product_filter_form::ProductFilterForm;
pub use toast_container::ToastContainer;
