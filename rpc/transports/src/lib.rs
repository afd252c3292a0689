//! JSON-RPC transport layer: the request/response envelope, the
//! [`Connection`] abstraction, and the HTTP transport.
//!
//! Timeout, retry and cancellation policy all live with the caller; nothing
//! here blocks or retries on its own.

pub mod common;
pub mod utils;

mod error;
pub use error::TransportError;

mod transport;
pub use transport::Connection;

pub mod transports;
