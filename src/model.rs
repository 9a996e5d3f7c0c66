//! Policy definition data model
//!
//! Definitions are plain records as they would be deserialized from a
//! structured definition file. They stay read-only for the duration of a
//! generation pass; writers consume the enriched tree built by
//! [`crate::resolve`] instead.

use serde::Deserialize;

/// A top-level entry in a definition list: either a policy group or a
/// standalone policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PolicyNode {
    Group(GroupDef),
    Policy(PolicyDef),
}

impl PolicyNode {
    /// Name of the underlying group or policy.
    pub fn name(&self) -> &str {
        match self {
            PolicyNode::Group(group) => &group.name,
            PolicyNode::Policy(policy) => &policy.name,
        }
    }
}

/// A named container grouping related policies for categorization only.
/// Groups do not nest: children are always leaf policies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupDef {
    pub name: String,
    #[serde(rename = "type")]
    pub tag: GroupTag,
    pub policies: Vec<PolicyDef>,
}

impl GroupDef {
    pub fn new(name: impl Into<String>, policies: Vec<PolicyDef>) -> Self {
        Self {
            name: name.into(),
            tag: GroupTag::Group,
            policies,
        }
    }
}

/// Discriminator enforcing `"type": "group"` on group records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum GroupTag {
    #[serde(rename = "group")]
    Group,
}

/// A single configurable setting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyDef {
    pub name: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    /// Support expressions like `chrome.win:8-`, parsed during enrichment.
    #[serde(default)]
    pub supported_on: Vec<String>,
    /// Choices for the enum policy types; empty otherwise.
    #[serde(default)]
    pub items: Vec<EnumItemDef>,
}

impl PolicyDef {
    pub fn new(name: impl Into<String>, policy_type: PolicyType) -> Self {
        Self {
            name: name.into(),
            policy_type,
            supported_on: vec![],
            items: vec![],
        }
    }

    /// Set the support expressions (builder style).
    pub fn with_supported_on<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_on = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Set the enum items (builder style).
    pub fn with_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = EnumItemDef>,
    {
        self.items = items.into_iter().collect();
        self
    }
}

/// Closed set of leaf policy types. `group` is not a policy type: groups
/// are modeled as [`GroupDef`], so an unknown or misplaced type string is
/// rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PolicyType {
    /// Boolean on/off toggle
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "int")]
    Int,
    /// Enumerated choice stored as an integer
    #[serde(rename = "int-enum")]
    IntEnum,
    /// Enumerated choice stored as a string
    #[serde(rename = "string-enum")]
    StringEnum,
    /// Multi-value list
    #[serde(rename = "list")]
    List,
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Main => "main",
            PolicyType::String => "string",
            PolicyType::Int => "int",
            PolicyType::IntEnum => "int-enum",
            PolicyType::StringEnum => "string-enum",
            PolicyType::List => "list",
        }
    }
}

impl std::fmt::Display for PolicyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One choice of an enumeration policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumItemDef {
    pub name: String,
    pub value: EnumValue,
}

impl EnumItemDef {
    pub fn new(name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Enum item value: integers for `int-enum`, strings for `string-enum`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Int(i64),
    Str(String),
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        EnumValue::Int(value)
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        EnumValue::Int(value.into())
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::Str(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        EnumValue::Str(value)
    }
}

impl std::fmt::Display for EnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnumValue::Int(value) => write!(f, "{}", value),
            EnumValue::Str(value) => write!(f, "{}", value),
        }
    }
}
