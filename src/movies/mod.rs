//! # Movies Module
//!
//! Movie records and their validation rules:
//! - Movie model and its JSON representation
//! - Runtime wire format ("107 mins")
//! - Create and partial-update flows with optimistic version checks

pub mod handlers;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod validators;


// Re-export commonly used items
pub use models::*;
pub use routes::movies_routes;
pub use runtime::Runtime;
