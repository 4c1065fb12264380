//! HTTP Adapter Modules
//!
//! HTTPトランスポートの抽象化と実装

pub mod transport;

#[cfg(test)]
pub use transport::MockHttpTransport;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
