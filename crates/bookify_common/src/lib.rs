// --- File: crates/bookify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;   // Error handling
pub mod logging; // Logging utilities

// Re-export error types for easier access
pub use error::{ApiError, HttpStatusCode};
