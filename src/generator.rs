//! Template generation
//!
//! Walks the resolved definitions and drives a writer through the fixed
//! lifecycle: `init`, `begin_template`, per-entry group/policy calls,
//! `end_template`, `template_text`.

use std::collections::HashSet;

use crate::filter::{is_supported, PlatformFilter};
use crate::messages::MessageCatalog;
use crate::model::PolicyNode;
use crate::resolve::{resolve_nodes, ResolvedGroup, ResolvedNode, ResolvedPolicy};
use crate::writer::TemplateWriter;
use crate::GenerateError;

/// Generates a policy template document by driving a [`TemplateWriter`].
///
/// Construction resolves messages, parses support expressions, validates
/// name uniqueness and sorts every scope by policy name (ascending,
/// case-sensitive) so that output is deterministic and diff-stable
/// regardless of input order. [`Self::template_text`] then runs one
/// emission pass; the generator holds no writer state, so one instance can
/// serve several sequential passes with independent writers.
#[derive(Debug, Clone)]
pub struct PolicyTemplateGenerator {
    nodes: Vec<ResolvedNode>,
}

impl PolicyTemplateGenerator {
    /// Resolve, validate and sort the given definitions.
    pub fn new(
        messages: &MessageCatalog,
        definitions: &[PolicyNode],
    ) -> Result<Self, GenerateError> {
        let mut nodes = resolve_nodes(messages, definitions)?;
        check_duplicate_names(&nodes)?;
        nodes.sort_by(|a, b| a.name().cmp(b.name()));
        for node in &mut nodes {
            if let ResolvedNode::Group(group) = node {
                group.policies.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }
        Ok(Self { nodes })
    }

    /// The resolved, sorted top-level entries of this generator.
    pub fn nodes(&self) -> &[ResolvedNode] {
        &self.nodes
    }

    /// Drive one emission pass and return the writer's document text.
    ///
    /// Unsupported policies are dropped; a group whose filtered child list
    /// is empty produces no `begin_policy_group`/`end_policy_group` calls.
    /// Any writer error aborts the pass with no partial output.
    pub fn template_text(
        &self,
        writer: &mut dyn TemplateWriter,
        platforms: &PlatformFilter,
    ) -> Result<String, GenerateError> {
        writer.init();
        writer.begin_template();
        for node in &self.nodes {
            match node {
                ResolvedNode::Group(group) => emit_group(writer, group, platforms)?,
                ResolvedNode::Policy(policy) => {
                    if is_supported(policy, platforms) {
                        writer.write_policy(policy)?;
                    }
                }
            }
        }
        writer.end_template();
        Ok(writer.template_text())
    }
}

fn emit_group(
    writer: &mut dyn TemplateWriter,
    group: &ResolvedGroup,
    platforms: &PlatformFilter,
) -> Result<(), GenerateError> {
    let surviving: Vec<&ResolvedPolicy> = group
        .policies
        .iter()
        .filter(|policy| is_supported(policy, platforms))
        .collect();
    if surviving.is_empty() {
        return Ok(());
    }

    writer.begin_policy_group(group);
    for policy in surviving {
        writer.write_policy(policy)?;
    }
    writer.end_policy_group();
    Ok(())
}

fn check_duplicate_names(nodes: &[ResolvedNode]) -> Result<(), GenerateError> {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.name()) {
            return Err(GenerateError::DuplicateName {
                name: node.name().to_string(),
                scope: "top level".to_string(),
            });
        }
        if let ResolvedNode::Group(group) = node {
            let mut seen_in_group = HashSet::new();
            for policy in &group.policies {
                if !seen_in_group.insert(policy.name.as_str()) {
                    return Err(GenerateError::DuplicateName {
                        name: policy.name.clone(),
                        scope: format!("group '{}'", group.name),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupDef, PolicyDef, PolicyType};

    #[test]
    fn test_scopes_are_sorted() {
        let messages = MessageCatalog::new();
        let definitions = vec![
            PolicyNode::Policy(PolicyDef::new("zp", PolicyType::String)),
            PolicyNode::Group(GroupDef::new(
                "MiddleGroup",
                vec![
                    PolicyDef::new("beta", PolicyType::String),
                    PolicyDef::new("alpha", PolicyType::String),
                ],
            )),
            PolicyNode::Policy(PolicyDef::new("ap", PolicyType::String)),
        ];

        let generator = PolicyTemplateGenerator::new(&messages, &definitions).unwrap();
        let names: Vec<&str> = generator.nodes().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["MiddleGroup", "ap", "zp"]);

        match &generator.nodes()[0] {
            ResolvedNode::Group(group) => {
                let children: Vec<&str> =
                    group.policies.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(children, vec!["alpha", "beta"]);
            }
            other => panic!("Expected Group, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_top_level_name_rejected() {
        let messages = MessageCatalog::new();
        let definitions = vec![
            PolicyNode::Policy(PolicyDef::new("Policy1", PolicyType::String)),
            PolicyNode::Policy(PolicyDef::new("Policy1", PolicyType::Main)),
        ];

        let result = PolicyTemplateGenerator::new(&messages, &definitions);
        assert!(matches!(
            result,
            Err(GenerateError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_duplicate_name_in_group_rejected() {
        let messages = MessageCatalog::new();
        let definitions = vec![PolicyNode::Group(GroupDef::new(
            "Group1",
            vec![
                PolicyDef::new("Policy1", PolicyType::String),
                PolicyDef::new("Policy1", PolicyType::String),
            ],
        ))];

        let result = PolicyTemplateGenerator::new(&messages, &definitions);
        match result {
            Err(GenerateError::DuplicateName { name, scope }) => {
                assert_eq!(name, "Policy1");
                assert_eq!(scope, "group 'Group1'");
            }
            other => panic!("Expected DuplicateName, got {:?}", other.err()),
        }
    }
}
