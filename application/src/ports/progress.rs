//! Progress notification port
//!
//! Defines the interface for reporting progress during a lifespan lookup.

use gravestone_domain::{EntityId, PersonName};

/// Callback for progress updates during a lookup
///
/// Implementations live in the presentation layer. All methods have empty
/// default implementations.
pub trait LookupProgressNotifier: Send + Sync {
    /// Called before the encyclopedia search request
    fn on_resolve_start(&self, _name: &PersonName) {}

    /// Called when a page and its linked item were found
    fn on_resolved(&self, _title: &str, _entity_id: &EntityId) {}

    /// Called before the claims request
    fn on_extract_start(&self, _entity_id: &EntityId) {}

    /// Called once the lookup finished, successfully or not
    fn on_complete(&self, _found: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LookupProgressNotifier for NoProgress {}
