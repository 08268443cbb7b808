//! Lookup behaviour settings.

use super::endpoints::ApiEndpoints;
use gravestone_domain::{TieBreak, ZoneShift};

/// Everything a lookup needs besides the transport.
///
/// | Field | Default |
/// |-------|---------|
/// | `endpoints` | public encyclopedia + structured-data APIs |
/// | `zone_shift` | [`ZoneShift::Local`] |
/// | `claim_selection` | [`TieBreak::First`] |
#[derive(Debug, Clone, Default)]
pub struct LookupConfig {
    pub endpoints: ApiEndpoints,
    pub zone_shift: ZoneShift,
    /// Rule for picking one statement per property
    pub claim_selection: TieBreak,
}

impl LookupConfig {
    pub fn with_endpoints(mut self, endpoints: ApiEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_zone_shift(mut self, shift: ZoneShift) -> Self {
        self.zone_shift = shift;
        self
    }

    pub fn with_claim_selection(mut self, rule: TieBreak) -> Self {
        self.claim_selection = rule;
        self
    }
}
