//! Lookup Lifespan use case.
//!
//! The single entry point of a lookup: resolve a name to an item, then read
//! the item's birth and death dates.
//!
//! # Flow
//!
//! 1. Validate the name ([`PersonName`])
//! 2. [`EntityResolver`]: page query; no page ends the lookup with `None`
//! 3. [`ClaimExtractor`]: claims query on the resolved item
//! 4. Return [`LifespanResult`]
//!
//! The two requests run strictly in sequence over one [`JsonTransport`]. Any
//! failure ends the lookup immediately; nothing is retried.
//!
//! # Usage
//!
//! ```ignore
//! use gravestone_application::{LookupConfig, LookupLifespanUseCase};
//!
//! let use_case = LookupLifespanUseCase::new(transport, LookupConfig::default());
//! match use_case.execute("Ada Lovelace").await? {
//!     Some(lifespan) => println!("{} - {:?}", lifespan.born, lifespan.died),
//!     None => println!("not found"),
//! }
//! ```

use super::error::LookupError;
use super::extract_claims::ClaimExtractor;
use super::resolve_entity::EntityResolver;
use crate::config::LookupConfig;
use crate::ports::json_transport::JsonTransport;
use crate::ports::progress::{LookupProgressNotifier, NoProgress};
use gravestone_domain::{LifespanResult, PersonName};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Use case for looking up a person's lifespan.
pub struct LookupLifespanUseCase {
    resolver: EntityResolver,
    extractor: ClaimExtractor,
}

impl LookupLifespanUseCase {
    pub fn new(transport: Arc<dyn JsonTransport>, config: LookupConfig) -> Self {
        let resolver = EntityResolver::new(transport.clone(), config.endpoints.clone());
        let extractor = ClaimExtractor::new(transport, config.endpoints)
            .with_zone_shift(config.zone_shift)
            .with_selection(config.claim_selection);
        Self {
            resolver,
            extractor,
        }
    }

    /// Look up `name` without progress reporting.
    pub async fn execute(&self, name: &str) -> Result<Option<LifespanResult>, LookupError> {
        self.execute_with_progress(name, &NoProgress).await
    }

    /// Look up `name`, reporting each step to `progress`.
    ///
    /// Resolves to `Ok(None)` when no encyclopedia page matches the name.
    pub async fn execute_with_progress(
        &self,
        name: &str,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<Option<LifespanResult>, LookupError> {
        let name = PersonName::try_new(name)?;
        let start = Instant::now();
        info!("Looking up lifespan of '{}'", name);

        let result = self.run(&name, progress).await;
        progress.on_complete(matches!(result, Ok(Some(_))));

        info!(
            "Lookup of '{}' finished in {} ms",
            name,
            start.elapsed().as_millis()
        );
        result
    }

    async fn run(
        &self,
        name: &PersonName,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<Option<LifespanResult>, LookupError> {
        progress.on_resolve_start(name);
        let Some(entity) = self.resolver.resolve(name).await? else {
            return Ok(None);
        };
        progress.on_resolved(&entity.title, &entity.entity_id);

        progress.on_extract_start(&entity.entity_id);
        let lifespan = self.extractor.extract(&entity).await?;
        Ok(Some(lifespan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::json_transport::TransportError;
    use crate::use_cases::testing::{ScriptedTransport, claims, search_hit, search_miss};
    use chrono::{DateTime, Utc};
    use gravestone_domain::{DomainError, EntityId, ZoneShift};
    use serde_json::json;
    use std::sync::Mutex;

    // ==================== Test Helpers ====================

    fn use_case(transport: Arc<ScriptedTransport>, shift: ZoneShift) -> LookupLifespanUseCase {
        LookupLifespanUseCase::new(transport, LookupConfig::default().with_zone_shift(shift))
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl LookupProgressNotifier for RecordingProgress {
        fn on_resolve_start(&self, name: &PersonName) {
            self.events.lock().unwrap().push(format!("resolve:{}", name));
        }

        fn on_resolved(&self, title: &str, entity_id: &EntityId) {
            self.events
                .lock()
                .unwrap()
                .push(format!("resolved:{}:{}", title, entity_id));
        }

        fn on_extract_start(&self, entity_id: &EntityId) {
            self.events.lock().unwrap().push(format!("extract:{}", entity_id));
        }

        fn on_complete(&self, found: bool) {
            self.events.lock().unwrap().push(format!("complete:{}", found));
        }
    }

    // ==================== Scenarios ====================

    #[tokio::test]
    async fn test_ada_lovelace_lifespan() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(search_hit("Ada Lovelace", "Q7259")),
            Ok(claims(&["+1815-12-10T00:00:00Z"], &["+1852-11-27T00:00:00Z"])),
        ]));

        let result = use_case(transport.clone(), ZoneShift::None)
            .execute("Ada Lovelace")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.entity_id.as_str(), "Q7259");
        assert_eq!(result.born, utc("1815-12-10T00:00:00Z"));
        assert_eq!(result.died, Some(utc("1852-11-27T00:00:00Z")));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].query_value("action"), Some("query"));
        assert_eq!(requests[1].query_value("action"), Some("wbgetclaims"));
        assert_eq!(requests[1].query_value("entity"), Some("Q7259"));
    }

    #[tokio::test]
    async fn test_ada_lovelace_with_local_shift_matches_fixed_host_offset() {
        let fixtures = || {
            Arc::new(ScriptedTransport::new(vec![
                Ok(search_hit("Ada Lovelace", "Q7259")),
                Ok(claims(&["+1815-12-10T00:00:00Z"], &["+1852-11-27T00:00:00Z"])),
            ]))
        };

        let shifted = use_case(fixtures(), ZoneShift::fixed_minutes(-300).unwrap())
            .execute("Ada Lovelace")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(shifted.born, utc("1815-12-10T05:00:00Z"));
        assert_eq!(shifted.died, Some(utc("1852-11-27T05:00:00Z")));

        let local = use_case(fixtures(), ZoneShift::Local)
            .execute("Ada Lovelace")
            .await
            .unwrap()
            .unwrap();
        let again = use_case(fixtures(), ZoneShift::Local)
            .execute("Ada Lovelace")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(local, again);
    }

    #[tokio::test]
    async fn test_no_page_resolves_to_none_without_second_call() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(search_miss(
            "Zzyzx Qwertyuiop",
        ))]));

        let result = use_case(transport.clone(), ZoneShift::None)
            .execute("Zzyzx Qwertyuiop")
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_zero_search_results_resolves_to_none() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(
            json!({ "batchcomplete": "", "query": { "pages": {} } }),
        )]));

        let result = use_case(transport, ZoneShift::None)
            .execute("Nobody")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_living_person_has_no_death_date() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(search_hit("Living Person", "Q123")),
            Ok(claims(&["+1970-01-02T00:00:00Z"], &[])),
        ]));

        let result = use_case(transport, ZoneShift::None)
            .execute("Living Person")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.born, utc("1970-01-02T00:00:00Z"));
        assert!(result.died.is_none());
    }

    #[tokio::test]
    async fn test_conflicting_birth_dates_use_first_statement() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(search_hit("Disputed", "Q9")),
            Ok(claims(
                &["+1600-01-01T00:00:00Z", "+1601-06-30T00:00:00Z"],
                &[],
            )),
        ]));

        let result = use_case(transport, ZoneShift::None)
            .execute("Disputed")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.born, utc("1600-01-01T00:00:00Z"));
    }

    #[tokio::test]
    async fn test_transport_failure_on_first_call_skips_second() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Err(TransportError::Connection("network unreachable".to_string())),
            Ok(claims(&["+1815-12-10T00:00:00Z"], &[])),
        ]));

        let err = use_case(transport.clone(), ZoneShift::None)
            .execute("Ada Lovelace")
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_on_second_call() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(search_hit("Ada Lovelace", "Q7259")),
            Err(TransportError::Timeout("30s elapsed".to_string())),
        ]));

        let err = use_case(transport, ZoneShift::None)
            .execute("Ada Lovelace")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Transport(TransportError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_blank_name_fails_before_any_request() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));

        let err = use_case(transport.clone(), ZoneShift::None)
            .execute("   ")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::Domain(DomainError::InvalidName(_))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_multi_title_name_fails_before_any_request() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(search_miss("Zzyzx Nobody")),
            Ok(search_hit("Ada Lovelace", "Q7259")),
        ]));

        let err = use_case(transport.clone(), ZoneShift::None)
            .execute("Zzyzx Nobody|Ada Lovelace")
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::Domain(DomainError::InvalidName(_))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_progress_events_in_order() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok(search_hit("Ada Lovelace", "Q7259")),
            Ok(claims(&["+1815-12-10T00:00:00Z"], &[])),
        ]));
        let progress = RecordingProgress::default();

        use_case(transport, ZoneShift::None)
            .execute_with_progress("Ada Lovelace", &progress)
            .await
            .unwrap();

        assert_eq!(
            progress.events(),
            vec![
                "resolve:Ada Lovelace",
                "resolved:Ada Lovelace:Q7259",
                "extract:Q7259",
                "complete:true",
            ]
        );
    }

    #[tokio::test]
    async fn test_progress_reports_not_found() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(search_miss("Nobody"))]));
        let progress = RecordingProgress::default();

        use_case(transport, ZoneShift::None)
            .execute_with_progress("Nobody", &progress)
            .await
            .unwrap();

        assert_eq!(progress.events(), vec!["resolve:Nobody", "complete:false"]);
    }
}
