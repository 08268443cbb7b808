//! Infrastructure layer for gravestone
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileApiConfig, FileConfig, FileNormalizationConfig,
    FileOutputConfig, FileOutputFormat, FileSelectionConfig, Severity,
};
pub use http::{DEFAULT_TIMEOUT, ReqwestJsonTransport};
