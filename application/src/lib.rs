//! Application layer for gravestone
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ApiEndpoints, LookupConfig};
pub use ports::{
    json_transport::{JsonRequest, JsonTransport, TransportError},
    progress::{LookupProgressNotifier, NoProgress},
};
pub use use_cases::error::LookupError;
pub use use_cases::extract_claims::ClaimExtractor;
pub use use_cases::lookup_lifespan::LookupLifespanUseCase;
pub use use_cases::resolve_entity::{EntityResolver, ResolvedEntity};
