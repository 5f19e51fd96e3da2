//! # metnum-client
//!
//! Talks to the computation server. [`Transport`] is the seam the
//! controllers depend on; [`HttpTransport`] is the real implementation and
//! [`ApiClient`] adds typed calls on top.

pub mod api;
pub mod transport;

pub use api::{ApiClient, ServerStatus};
pub use transport::{HttpMethod, HttpTransport, Transport};
