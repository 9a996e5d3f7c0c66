//! Localized message catalog
//!
//! Display strings for policies, groups and enum items live outside the
//! definition records and are bound by conventional key, e.g.
//! `IDS_POLICY_HOMEPAGELOCATION_CAPTION`. Lookups never fail: a missing key
//! is reported as absent and the enrichment step decides the fallback.

use std::collections::HashMap;

/// A catalog of localized messages.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a message, returning `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    /// Whether the catalog contains a key.
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Insert a message, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<HashMap<String, String>> for MessageCatalog {
    fn from(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }
}

impl<K, V> FromIterator<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Message key for a policy or group caption: `IDS_POLICY_<NAME>_CAPTION`.
pub fn caption_key(name: &str) -> String {
    format!("IDS_POLICY_{}_CAPTION", name.to_uppercase())
}

/// Message key for a policy or group description: `IDS_POLICY_<NAME>_DESC`.
pub fn desc_key(name: &str) -> String {
    format!("IDS_POLICY_{}_DESC", name.to_uppercase())
}

/// Message key for an enum item caption: `IDS_POLICY_ENUM_<NAME>_CAPTION`.
pub fn enum_caption_key(name: &str) -> String {
    format!("IDS_POLICY_ENUM_{}_CAPTION", name.to_uppercase())
}
