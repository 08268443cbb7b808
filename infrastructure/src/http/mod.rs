//! HTTP adapters for the [`JsonTransport`](gravestone_application::JsonTransport) port.

mod reqwest_transport;

pub use reqwest_transport::{DEFAULT_TIMEOUT, ReqwestJsonTransport};
