//! Scripted transport and fixtures shared by the use case tests.

use crate::ports::json_transport::{JsonRequest, JsonTransport, TransportError};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses in order and records every request.
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, TransportError>>>,
    requests: Mutex<Vec<JsonRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: Vec<Result<Value, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from(responses)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<JsonRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonTransport for ScriptedTransport {
    async fn get_json(&self, request: &JsonRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("No more responses".to_string())))
    }
}

pub(crate) fn search_hit(title: &str, item: &str) -> Value {
    json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "19013": {
                    "pageid": 19013,
                    "ns": 0,
                    "title": title,
                    "pageprops": { "wikibase_item": item }
                }
            }
        }
    })
}

pub(crate) fn search_miss(title: &str) -> Value {
    json!({
        "batchcomplete": "",
        "query": {
            "pages": {
                "-1": { "ns": 0, "title": title, "missing": "" }
            }
        }
    })
}

pub(crate) fn time_statement(property: &str, time: &str) -> Value {
    json!({
        "mainsnak": {
            "snaktype": "value",
            "property": property,
            "datavalue": {
                "value": {
                    "time": time,
                    "timezone": 0,
                    "before": 0,
                    "after": 0,
                    "precision": 11,
                    "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
                },
                "type": "time"
            },
            "datatype": "time"
        },
        "type": "statement",
        "rank": "normal"
    })
}

/// Claims with P569 statements and, unless `died` is empty, P570 statements.
pub(crate) fn claims(born: &[&str], died: &[&str]) -> Value {
    let mut claims = serde_json::Map::new();
    claims.insert(
        "P569".to_string(),
        Value::Array(born.iter().map(|t| time_statement("P569", t)).collect()),
    );
    if !died.is_empty() {
        claims.insert(
            "P570".to_string(),
            Value::Array(died.iter().map(|t| time_statement("P570", t)).collect()),
        );
    }
    json!({ "claims": claims })
}
