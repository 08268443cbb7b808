//! Application-level configuration.
//!
//! - [`ApiEndpoints`]: remote API URLs, user agent, redirect handling
//! - [`LookupConfig`]: endpoints plus date and statement selection policy

pub mod endpoints;
pub mod lookup_config;

pub use endpoints::ApiEndpoints;
pub use lookup_config::LookupConfig;
