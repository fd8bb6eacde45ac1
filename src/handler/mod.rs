//! Request handler module
//!
//! Routes requests to the exam endpoints and builds their JSON bodies.

mod endpoints;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
