//! Request shapes for the two MediaWiki-style APIs.

use crate::config::ApiEndpoints;
use crate::ports::json_transport::{JsonRequest, TransportError};
use gravestone_domain::{EntityId, PersonName};
use serde_json::Value;
use tracing::warn;

const USER_AGENT: &str = "User-Agent";

/// Page query for a title, asking for the linked item property
pub(crate) fn search_request(endpoints: &ApiEndpoints, name: &PersonName) -> JsonRequest {
    let request = JsonRequest::new(&endpoints.encyclopedia_url)
        .with_query("format", "json")
        .with_query("action", "query")
        .with_query("titles", name.as_str())
        .with_query("prop", "pageprops")
        .with_query("ppprop", "wikibase_item")
        .with_header(USER_AGENT, &endpoints.user_agent);

    if endpoints.follow_redirects {
        request.with_query("redirects", "1")
    } else {
        request
    }
}

/// Claims query for one item
pub(crate) fn claims_request(endpoints: &ApiEndpoints, entity_id: &EntityId) -> JsonRequest {
    JsonRequest::new(&endpoints.data_url)
        .with_query("action", "wbgetclaims")
        .with_query("entity", entity_id.as_str())
        .with_query("format", "json")
        .with_header(USER_AGENT, &endpoints.user_agent)
}

/// Reject responses carrying an `error` object; log `warnings`.
pub(crate) fn check_response(response: &Value) -> Result<(), TransportError> {
    if let Some(warnings) = response.get("warnings") {
        warn!("API returned warnings: {}", warnings);
    }

    match response.get("error") {
        Some(error) => Err(TransportError::Api {
            code: error["code"].as_str().unwrap_or("unknown").to_string(),
            info: error["info"].as_str().unwrap_or("").to_string(),
        }),
        None => Ok(()),
    }
}
