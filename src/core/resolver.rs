//! Name-pair resolver module.
//!
//! Turns the two name lists into validated rename suggestions: calls the
//! workflow service, repairs and parses the returned text, and rejects
//! suggestions that would escape the source or target roots.

use crate::models::pair::NamePair;
use crate::services::workflow::WorkflowClient;
use crate::utils::json::parse_lenient;
use crate::Result;
use serde::Deserialize;
use std::path::{Component, Path};

/// Capability of resolving name lists into rename suggestions.
///
/// The orchestrator depends on this trait only, so tests can substitute an
/// in-memory implementation for the real HTTP client.
#[allow(async_fn_in_trait)]
pub trait PairResolver {
    /// Resolve source file names and target directory names into name pairs.
    async fn resolve(&self, files: &[String], directories: &[String]) -> Result<Vec<NamePair>>;
}

impl PairResolver for WorkflowClient {
    async fn resolve(&self, files: &[String], directories: &[String]) -> Result<Vec<NamePair>> {
        let text = self.run(files, directories).await?;
        let pairs = parse_suggestions(&text)?;
        tracing::info!(
            "Resolved {} name pairs from {} files and {} directories",
            pairs.len(),
            files.len(),
            directories.len()
        );
        Ok(pairs)
    }
}

/// Expected shape of the suggestion text.
#[derive(Debug, Deserialize)]
struct Suggestions {
    result: Vec<NamePair>,
}

/// Parse the suggestion text into validated name pairs.
///
/// The text is parsed leniently (trailing commas, unquoted keys and similar
/// near-misses are repaired first); anything still malformed is an
/// `AiParse` error carrying the underlying cause. Every pair is then
/// validated; a malformed pair fails the whole run rather than being
/// silently dropped.
pub fn parse_suggestions(text: &str) -> Result<Vec<NamePair>> {
    let suggestions: Suggestions = parse_lenient(text).map_err(|e| {
        tracing::error!("Failed to parse suggestion text: {}", e);
        crate::Error::AiParse(e)
    })?;

    for pair in &suggestions.result {
        validate_pair(pair)?;
    }

    Ok(suggestions.result)
}

/// Reject name pairs that would produce paths outside the configured roots.
///
/// `original_name` must be a bare file name; `new_name` must be a relative
/// path without `.` or `..` components.
fn validate_pair(pair: &NamePair) -> Result<()> {
    if pair.original_name.is_empty() || pair.original_name.contains(['/', '\\']) {
        return Err(crate::Error::UnsafeTargetPath(pair.original_name.clone()));
    }
    if pair.new_name.is_empty() {
        return Err(crate::Error::UnsafeTargetPath(pair.new_name.clone()));
    }

    let new_path = Path::new(&pair.new_name);
    let escapes = new_path.is_absolute()
        || new_path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::CurDir | Component::Prefix(_)));
    if escapes {
        return Err(crate::Error::UnsafeTargetPath(pair.new_name.clone()));
    }

    Ok(())
}
