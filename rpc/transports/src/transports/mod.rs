//! Concrete transports.

mod http;
pub use http::Http;
