//! Errors shared by the lookup use cases.

use crate::ports::json_transport::TransportError;
use gravestone_domain::{DomainError, EntityId};
use thiserror::Error;

/// Errors that can occur during a lifespan lookup.
///
/// A name with no matching page is not an error; the lookup resolves to
/// `None` instead.
#[derive(Error, Debug)]
pub enum LookupError {
    /// A remote call could not be completed or decoded.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The matched page has no structured-data item link.
    #[error("Page '{title}' is not linked to a structured-data item")]
    NotLinked { title: String },

    /// The item has no usable birth-date statement.
    #[error("{entity_id} has no birth date claim")]
    MissingBirthDate { entity_id: EntityId },

    /// Invalid name or unparseable time value.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl LookupError {
    /// Check if this error is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Transport(_))
    }
}
