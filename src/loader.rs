//! Loading of definition files and message catalogs
//!
//! Definition files are JSON arrays of policy/group records; message files
//! are JSON objects mapping message keys to localized strings.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::messages::MessageCatalog;
use crate::model::PolicyNode;

/// Errors that can occur when loading definition or message files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load policy definitions from a JSON file.
pub fn load_policy_definitions(path: &Path) -> Result<Vec<PolicyNode>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    policy_definitions_from_str(&content)
}

/// Parse policy definitions from a JSON string.
pub fn policy_definitions_from_str(content: &str) -> Result<Vec<PolicyNode>, LoadError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a message catalog from a JSON file.
pub fn load_messages(path: &Path) -> Result<MessageCatalog, LoadError> {
    let content = std::fs::read_to_string(path)?;
    messages_from_str(&content)
}

/// Parse a message catalog from a JSON string.
pub fn messages_from_str(content: &str) -> Result<MessageCatalog, LoadError> {
    let map: HashMap<String, String> = serde_json::from_str(content)?;
    Ok(MessageCatalog::from(map))
}
