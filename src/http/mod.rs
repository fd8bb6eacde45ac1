//! HTTP protocol layer module
//!
//! Response builders shared by every endpoint, decoupled from the exam content.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_405_response, build_413_response, build_error_response, build_json_response,
    build_options_response, with_common_headers, HttpResponse,
};
