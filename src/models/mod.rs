pub mod analytics;
pub mod auth;

pub use analytics::*;
pub use auth::*;
