//! Utility modules.
//!
//! - [`HttpClient`]: shared HTTP client with explicit timeouts

mod http;

pub use http::HttpClient;
