//! Entity resolution: person name to structured-data item.
//!
//! Issues one page query against the encyclopedia API and follows the first
//! existing page's `wikibase_item` property. The page order is whatever the
//! API delivered; no ranking or disambiguation is attempted.

use super::error::LookupError;
use super::mediawiki;
use crate::config::ApiEndpoints;
use crate::ports::json_transport::{JsonTransport, TransportError};
use gravestone_domain::{EntityId, PageSearchResult, PersonName, TieBreak};
use std::sync::Arc;
use tracing::{debug, info};

/// A page together with the item it links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    pub entity_id: EntityId,
    pub title: String,
}

impl ResolvedEntity {
    pub fn new(entity_id: EntityId, title: impl Into<String>) -> Self {
        Self {
            entity_id,
            title: title.into(),
        }
    }
}

/// Resolves a name to the item linked from its encyclopedia page.
pub struct EntityResolver {
    transport: Arc<dyn JsonTransport>,
    endpoints: ApiEndpoints,
}

impl EntityResolver {
    /// Page selection rule; always the first page delivered.
    pub const PAGE_SELECTION: TieBreak = TieBreak::First;

    pub fn new(transport: Arc<dyn JsonTransport>, endpoints: ApiEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// Resolve `name` to an item.
    ///
    /// Returns `Ok(None)` when no page matches. Fails with
    /// [`LookupError::NotLinked`] when the matched page has no item link.
    pub async fn resolve(&self, name: &PersonName) -> Result<Option<ResolvedEntity>, LookupError> {
        let request = mediawiki::search_request(&self.endpoints, name);
        debug!("Searching pages for '{}' at {}", name, request.url);

        let response = self.transport.get_json(&request).await?;
        mediawiki::check_response(&response)?;
        let pages = PageSearchResult::from_json(response).map_err(TransportError::decode)?;

        let Some(page) = pages.select(Self::PAGE_SELECTION) else {
            info!("No page found for '{}'", name);
            return Ok(None);
        };

        debug!(
            "Selected page '{}' (key {}) out of {} returned",
            page.title,
            page.key,
            pages.pages().len()
        );

        let entity_id = page
            .wikibase_item()
            .and_then(|raw| EntityId::parse(raw).ok())
            .ok_or_else(|| LookupError::NotLinked {
                title: page.title.clone(),
            })?;

        info!("Resolved '{}' to {} via page '{}'", name, entity_id, page.title);
        Ok(Some(ResolvedEntity::new(entity_id, page.title.clone())))
    }
}
