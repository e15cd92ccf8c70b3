// Utils compartidos

pub mod constants;
pub mod events;
pub mod images;
pub mod storage;

pub use constants::*;
pub use images::resolve_image_url;
pub use storage::*;
