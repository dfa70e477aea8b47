//! Common types used throughout the pgdata client

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A single result record; its shape depends on the resource
pub type Record = JsonValue;

/// Query parameters for a request. Filters that are not set are absent,
/// never present with an empty value.
pub type QueryParams = HashMap<String, String>;

// ============================================================================
// Output Format
// ============================================================================

/// How the CLI renders fetched records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON record per line
    #[default]
    Json,
    /// A single indented JSON array
    Pretty,
}
