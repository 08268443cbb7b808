//! Console output formatter for lifespan results

use colored::Colorize;
use gravestone_domain::LifespanResult;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats lookup results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colors off for the whole process; enabled leaves terminal detection in place.
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a found lifespan as labelled lines
    pub fn format_text(result: &LifespanResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            result.title.bold(),
            format!("({})", result.entity_id).dimmed()
        ));

        output.push_str(&format!(
            "  {} {}\n",
            "Born:".cyan().bold(),
            result.born.format(DATE_FORMAT)
        ));

        match result.died {
            Some(died) => output.push_str(&format!(
                "  {} {}\n",
                "Died:".cyan().bold(),
                died.format(DATE_FORMAT)
            )),
            None => output.push_str(&format!(
                "  {} {}\n",
                "Died:".cyan().bold(),
                "no date recorded".green()
            )),
        }

        output
    }

    /// Format as JSON
    pub fn format_json(result: &LifespanResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Message for a name with no matching page
    pub fn format_not_found(name: &str) -> String {
        format!("{} {}\n", "No page found for".yellow(), name)
    }

    /// JSON body for a name with no matching page
    pub fn format_not_found_json(name: &str) -> String {
        serde_json::to_string_pretty(&serde_json::json!({ "name": name, "found": false }))
            .unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gravestone_domain::EntityId;

    fn ada() -> LifespanResult {
        LifespanResult::new(
            EntityId::parse("Q7259").unwrap(),
            "Ada Lovelace",
            Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).unwrap(),
            Some(Utc.with_ymd_and_hms(1852, 11, 27, 0, 0, 0).unwrap()),
        )
    }

    #[test]
    fn test_format_text() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_text(&ada());
        assert!(text.contains("Ada Lovelace (Q7259)"));
        assert!(text.contains("Born: 1815-12-10"));
        assert!(text.contains("Died: 1852-11-27"));
    }

    #[test]
    fn test_format_text_without_death() {
        colored::control::set_override(false);
        let mut result = ada();
        result.died = None;
        let text = ConsoleFormatter::format_text(&result);
        assert!(text.contains("Died: no date recorded"));
    }

    #[test]
    fn test_format_json() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&ada())).unwrap();
        assert_eq!(value["entity_id"], "Q7259");
        assert_eq!(value["title"], "Ada Lovelace");
        assert!(value["born"].as_str().unwrap().starts_with("1815-12-10T00:00:00"));
    }

    #[test]
    fn test_format_not_found() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_not_found("Nobody"),
            "No page found for Nobody\n"
        );
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_not_found_json("Nobody")).unwrap();
        assert_eq!(value["found"], false);
    }
}
