//! Structured-data claims about an entity.
//!
//! - [`PropertyId`]: the birth-date and death-date property codes
//! - [`EntityClaims`]: property code to ordered statements
//! - [`ClaimStatement`]: one statement, carrying a typed value and a [`Rank`]

mod property;
mod statement;

pub use property::PropertyId;
pub use statement::{ClaimStatement, DataValue, EntityClaims, Rank, Snak};
