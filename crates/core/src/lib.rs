pub mod models;
pub mod router;
pub mod session;

pub use models::*;
pub use router::{normalize_text, route};
pub use session::Session;
