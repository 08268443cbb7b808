//! Use cases (application services)
//!
//! - [`lookup_lifespan::LookupLifespanUseCase`]: the lookup entry point
//! - [`resolve_entity::EntityResolver`]: name to structured-data item
//! - [`extract_claims::ClaimExtractor`]: item to birth/death dates

pub mod error;
pub mod extract_claims;
pub mod lookup_lifespan;
mod mediawiki;
pub mod resolve_entity;

#[cfg(test)]
mod testing;
