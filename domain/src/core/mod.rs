//! Core domain concepts shared across all subdomains.
//!
//! - [`name::PersonName`]: a validated name to look up
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod name;
