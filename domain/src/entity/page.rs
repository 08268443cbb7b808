//! Encyclopedia page query results.
//!
//! The search API answers a title query with a `query.pages` object keyed by
//! page id. Unknown titles come back as a placeholder page with a negative id
//! and a `missing` flag rather than as an empty object, so both shapes mean
//! "no such person".

use crate::selection::{Ranked, TieBreak};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Page properties requested through `prop=pageprops`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PageProps {
    /// Linked structured-data item, if the page has one
    #[serde(default)]
    pub wikibase_item: Option<String>,
}

/// Metadata of one page in the result set
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    #[serde(skip)]
    pub key: String,
    #[serde(default)]
    pub pageid: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    missing: Option<Value>,
    #[serde(default)]
    invalid: Option<Value>,
    #[serde(default)]
    pub pageprops: Option<PageProps>,
}

impl Page {
    /// Whether the encyclopedia flagged this entry as missing or invalid
    pub fn is_placeholder(&self) -> bool {
        self.missing.is_some() || self.invalid.is_some()
    }

    /// Raw `pageprops.wikibase_item` value, if present
    pub fn wikibase_item(&self) -> Option<&str> {
        self.pageprops
            .as_ref()
            .and_then(|props| props.wikibase_item.as_deref())
    }
}

impl Ranked for Page {}

#[derive(Deserialize)]
struct QueryEnvelope {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Map<String, Value>,
}

/// Ordered page collection returned by a title query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSearchResult {
    pages: Vec<Page>,
}

impl PageSearchResult {
    /// Decode a raw `action=query` response, keeping delivered page order.
    ///
    /// A response without `query.pages` decodes to an empty collection.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let envelope: QueryEnvelope = serde_json::from_value(value)?;
        let pages = envelope
            .query
            .map(|body| body.pages)
            .unwrap_or_default()
            .into_iter()
            .map(|(key, raw)| {
                let mut page: Page = serde_json::from_value(raw)?;
                page.key = key;
                Ok::<_, serde_json::Error>(page)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pages })
    }

    /// All pages, placeholders included
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Pages that exist, in delivered order
    pub fn candidates(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| !page.is_placeholder())
    }

    /// True when no existing page matched
    pub fn is_empty(&self) -> bool {
        self.candidates().next().is_none()
    }

    /// Pick the page the lookup continues with
    pub fn select(&self, rule: TieBreak) -> Option<&Page> {
        rule.pick(self.candidates())
    }
}
