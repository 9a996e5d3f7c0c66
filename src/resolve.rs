//! Message enrichment
//!
//! Builds the resolved tree the writers consume: captions and descriptions
//! bound from the catalog and supported-on expressions parsed. The input
//! definitions are left untouched; each generation pass works on a fresh
//! resolved copy.

use crate::messages::{caption_key, desc_key, enum_caption_key, MessageCatalog};
use crate::model::{EnumValue, GroupDef, PolicyDef, PolicyNode, PolicyType};
use crate::support::{self, SupportedOn};
use crate::GenerateError;

/// A policy group with resolved display text. Group captions and
/// descriptions are optional: a group without catalog entries is legal.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGroup {
    pub name: String,
    pub caption: Option<String>,
    pub desc: Option<String>,
    pub policies: Vec<ResolvedPolicy>,
}

/// A leaf policy with resolved display text and parsed support entries.
/// Missing captions and descriptions resolve to the empty string so that
/// partially localized inputs still generate.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPolicy {
    pub name: String,
    pub policy_type: PolicyType,
    pub caption: String,
    pub desc: String,
    pub supported_on: Vec<SupportedOn>,
    pub items: Vec<ResolvedItem>,
}

/// An enum item with its resolved caption.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedItem {
    pub name: String,
    pub value: EnumValue,
    pub caption: String,
}

/// A resolved top-level entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedNode {
    Group(ResolvedGroup),
    Policy(ResolvedPolicy),
}

impl ResolvedNode {
    pub fn name(&self) -> &str {
        match self {
            ResolvedNode::Group(group) => &group.name,
            ResolvedNode::Policy(policy) => &policy.name,
        }
    }
}

/// Resolve every top-level definition against the catalog.
pub fn resolve_nodes(
    messages: &MessageCatalog,
    definitions: &[PolicyNode],
) -> Result<Vec<ResolvedNode>, GenerateError> {
    definitions
        .iter()
        .map(|node| match node {
            PolicyNode::Group(group) => resolve_group(messages, group).map(ResolvedNode::Group),
            PolicyNode::Policy(policy) => resolve_policy(messages, policy).map(ResolvedNode::Policy),
        })
        .collect()
}

fn resolve_group(
    messages: &MessageCatalog,
    group: &GroupDef,
) -> Result<ResolvedGroup, GenerateError> {
    Ok(ResolvedGroup {
        name: group.name.clone(),
        caption: messages.get(&caption_key(&group.name)).map(String::from),
        desc: messages.get(&desc_key(&group.name)).map(String::from),
        policies: group
            .policies
            .iter()
            .map(|policy| resolve_policy(messages, policy))
            .collect::<Result<_, _>>()?,
    })
}

fn resolve_policy(
    messages: &MessageCatalog,
    policy: &PolicyDef,
) -> Result<ResolvedPolicy, GenerateError> {
    let supported_on = policy
        .supported_on
        .iter()
        .map(|expression| {
            support::parse(expression).map_err(|errors| GenerateError::SupportedOn {
                policy: policy.name.clone(),
                expression: expression.clone(),
                errors,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedPolicy {
        name: policy.name.clone(),
        policy_type: policy.policy_type,
        caption: messages
            .get(&caption_key(&policy.name))
            .unwrap_or_default()
            .to_string(),
        desc: messages
            .get(&desc_key(&policy.name))
            .unwrap_or_default()
            .to_string(),
        supported_on,
        items: policy
            .items
            .iter()
            .map(|item| ResolvedItem {
                name: item.name.clone(),
                value: item.value.clone(),
                caption: messages
                    .get(&enum_caption_key(&item.name))
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect(),
    })
}
