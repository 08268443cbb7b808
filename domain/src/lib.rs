//! Domain layer for gravestone
//!
//! This crate contains the entities and value objects of a lifespan lookup.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A lookup starts from a [`PersonName`], finds the encyclopedia page that
//! matches it ([`PageSearchResult`]), follows that page's link to a
//! structured-data item ([`EntityId`]), and reads the item's birth-date and
//! death-date statements ([`EntityClaims`]). Whenever a sequence offers more
//! than one candidate, a named [`TieBreak`] rule picks exactly one.
//!
//! Point-in-time strings are turned into UTC instants by the
//! [`DateNormalizer`], whose [`ZoneShift`] decides whether the host's
//! timezone offset is applied.

pub mod claims;
pub mod config;
pub mod core;
pub mod entity;
pub mod lifespan;
pub mod selection;
pub mod time;

// Re-export commonly used types
pub use claims::{ClaimStatement, EntityClaims, PropertyId, Rank};
pub use config::OutputFormat;
pub use core::{error::DomainError, name::PersonName};
pub use entity::{EntityId, Page, PageSearchResult};
pub use lifespan::LifespanResult;
pub use selection::{Ranked, TieBreak};
pub use time::{DateNormalizer, ZoneShift, parse_time};
