pub mod auth;
pub mod filter;
pub mod product;
pub mod product_form;
pub mod session;

pub use auth::{LoginRequest, LoginResponse, MessageResponse, RegisterData, RegisterRequest, RegisterResponse};
pub use filter::FilterCriteria;
pub use product::Product;
pub use product_form::{FormErrors, FormMode, ProductForm, ProductPayload};
pub use session::{AuthStatus, Session};
