pub mod use_auth;
pub mod use_products;
pub mod use_store;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_products::{use_products, UseProductsHandle};
pub use use_store::{use_app_context, use_store};
