//! Claim extraction: structured-data item to lifespan.

use super::error::LookupError;
use super::mediawiki;
use super::resolve_entity::ResolvedEntity;
use crate::config::ApiEndpoints;
use crate::ports::json_transport::{JsonTransport, TransportError};
use gravestone_domain::{
    DateNormalizer, EntityClaims, LifespanResult, PropertyId, TieBreak, ZoneShift,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Reads birth and death statements of an item and normalizes their times.
///
/// The birth-date property is required. A missing death-date property, or a
/// death statement without a concrete time, leaves `died` empty.
pub struct ClaimExtractor {
    transport: Arc<dyn JsonTransport>,
    endpoints: ApiEndpoints,
    normalizer: DateNormalizer,
    selection: TieBreak,
}

impl ClaimExtractor {
    pub fn new(transport: Arc<dyn JsonTransport>, endpoints: ApiEndpoints) -> Self {
        Self {
            transport,
            endpoints,
            normalizer: DateNormalizer::default(),
            selection: TieBreak::First,
        }
    }

    pub fn with_zone_shift(mut self, shift: ZoneShift) -> Self {
        self.normalizer = DateNormalizer::new(shift);
        self
    }

    pub fn with_selection(mut self, rule: TieBreak) -> Self {
        self.selection = rule;
        self
    }

    pub async fn extract(&self, entity: &ResolvedEntity) -> Result<LifespanResult, LookupError> {
        let entity_id = &entity.entity_id;
        let request = mediawiki::claims_request(&self.endpoints, entity_id);
        debug!("Fetching claims for {} from {}", entity_id, request.url);

        let response = self.transport.get_json(&request).await?;
        mediawiki::check_response(&response)?;
        let claims = EntityClaims::from_json(response).map_err(TransportError::decode)?;

        debug!(
            "{} has {} properties; {} birth / {} death statements",
            entity_id,
            claims.property_count(),
            claims.statements(PropertyId::DATE_OF_BIRTH).len(),
            claims.statements(PropertyId::DATE_OF_DEATH).len()
        );

        let born_raw = claims
            .time_of(PropertyId::DATE_OF_BIRTH, self.selection)
            .ok_or_else(|| LookupError::MissingBirthDate {
                entity_id: entity_id.clone(),
            })?;
        let died_raw = claims.time_of(PropertyId::DATE_OF_DEATH, self.selection);

        if died_raw.is_none() && claims.contains(PropertyId::DATE_OF_DEATH) {
            debug!("{} has a death statement without a time value", entity_id);
        }

        let born = self.normalizer.normalize_str(born_raw)?;
        let died = self.normalizer.normalize(died_raw)?;

        info!(
            "{}: born {} ({}), died {:?}",
            entity_id,
            born.to_rfc3339(),
            born_raw,
            died_raw
        );

        Ok(LifespanResult::new(
            entity_id.clone(),
            entity.title.clone(),
            born,
            died,
        ))
    }
}
