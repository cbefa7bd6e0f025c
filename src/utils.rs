//! Placeholder utilities. This is the "replace with your module" surface
//! that the import-sanity test loads and calls through.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::TemplateError;

static GREETING: Lazy<String> = Lazy::new(|| String::from("Hello"));

/// Add two integers.
pub fn add(left: u64, right: u64) -> u64 {
    left + right
}

/// Format a greeting for `name` using the shared template.
pub fn greet(name: &str) -> String {
    format!("{}, {}!", *GREETING, name)
}

/// Parse a base-10 count, reporting the offending input on failure.
pub fn parse_count(input: &str) -> Result<u64, TemplateError> {
    debug!("parsing count from {input:?}");
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| TemplateError::Parse(input.to_string()))
}
