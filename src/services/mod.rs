pub mod api_client;
pub mod http;
pub mod session_repository;

pub use api_client::{ApiClient, Operation};
pub use http::{GlooTransport, HttpTransport};
pub use session_repository::{LocalStorageSessionRepository, MemorySessionRepository, SessionRepository};
