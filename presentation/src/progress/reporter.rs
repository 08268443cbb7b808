//! Progress reporting for lifespan lookups

use colored::Colorize;
use gravestone_application::LookupProgressNotifier;
use gravestone_domain::{EntityId, PersonName};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Reports lookup progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupProgressNotifier for ProgressReporter {
    fn on_resolve_start(&self, name: &PersonName) {
        self.spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner.set_prefix("Search");
        self.spinner.set_message(format!("looking up {}", name));
    }

    fn on_resolved(&self, title: &str, entity_id: &EntityId) {
        self.spinner
            .set_message(format!("{} {} -> {}", "v".green(), title, entity_id));
    }

    fn on_extract_start(&self, entity_id: &EntityId) {
        self.spinner.set_prefix("Claims");
        self.spinner
            .set_message(format!("reading dates of {}", entity_id));
    }

    fn on_complete(&self, _found: bool) {
        self.spinner.finish_and_clear();
    }
}
