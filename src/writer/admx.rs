//! ADMX policy template writer
//!
//! Produces a Windows Group Policy ADMX document: a `policyDefinitions`
//! root holding namespace declarations, a supported-OS definition, a
//! category tree, and one `policy` element per written policy.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::PolicyType;
use crate::resolve::{ResolvedGroup, ResolvedPolicy};

use super::xml::XmlElement;
use super::{TemplateWriter, WriterError};

/// Errors that can occur when loading an ADMX configuration file
#[derive(Debug, Error)]
pub enum AdmxConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration of the emitted ADMX document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdmxConfig {
    /// Logical prefix other documents use to refer to this namespace.
    pub admx_prefix: String,
    /// Namespace of the generated document.
    pub admx_namespace: String,
    /// Group policy class of each policy: `Machine`, `User` or `Both`.
    pub win_group_policy_class: String,
    /// Registry key under which policy values are stored.
    pub win_reg_key_name: String,
    /// Name of the supported-OS definition referenced by every policy.
    pub win_supported_os: String,
    /// Category chain from root to the default parent category. Each level
    /// refers to the previous; policies outside any group attach to the
    /// last level.
    pub win_category_path: Vec<String>,
}

impl Default for AdmxConfig {
    fn default() -> Self {
        Self {
            admx_prefix: "browser".to_string(),
            admx_namespace: "Policies.Browser".to_string(),
            win_group_policy_class: "Both".to_string(),
            win_reg_key_name: r"Software\Policies\Browser".to_string(),
            win_supported_os: "SUPPORTED_WIN7".to_string(),
            win_category_path: vec!["browser".to_string()],
        }
    }
}

impl AdmxConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AdmxConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string. Missing keys fall back to
    /// the defaults.
    pub fn from_str(content: &str) -> Result<Self, AdmxConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Writer realization for the ADMX format.
///
/// `begin_template` builds the static scaffold, group and policy calls
/// accumulate category and policy elements, and `template_text` assembles
/// and serializes the document tree.
#[derive(Debug, Clone)]
pub struct AdmxWriter {
    config: AdmxConfig,
    scaffold: Vec<XmlElement>,
    categories: Vec<XmlElement>,
    policies: Vec<XmlElement>,
    active_group: Option<String>,
}

impl AdmxWriter {
    pub fn new(config: AdmxConfig) -> Self {
        Self {
            config,
            scaffold: vec![],
            categories: vec![],
            policies: vec![],
            active_group: None,
        }
    }

    /// Reference to a named string in the companion ADML file.
    fn adml_string(name: &str) -> String {
        format!("$(string.{})", name)
    }

    /// Reference to a named explanation string in the companion ADML file.
    fn adml_string_explain(name: &str) -> String {
        format!("$(string.{}_Explain)", name)
    }

    /// Reference to a named presentation in the companion ADML file.
    fn adml_presentation(name: &str) -> String {
        format!("$(presentation.{})", name)
    }

    /// Default parent category: the last element of the category path.
    fn default_category(&self) -> &str {
        self.config
            .win_category_path
            .last()
            .map(String::as_str)
            .unwrap_or("")
    }

    fn policy_namespaces(&self) -> XmlElement {
        XmlElement::new("policyNamespaces")
            .child(
                XmlElement::new("target")
                    .attr("prefix", self.config.admx_prefix.as_str())
                    .attr("namespace", self.config.admx_namespace.as_str()),
            )
            .child(
                XmlElement::new("using")
                    .attr("prefix", "windows")
                    .attr("namespace", "Microsoft.Policies.Windows"),
            )
    }

    fn supported_on_definitions(&self) -> XmlElement {
        XmlElement::new("supportedOn").child(
            XmlElement::new("definitions").child(
                XmlElement::new("definition")
                    .attr("name", self.config.win_supported_os.as_str())
                    .attr(
                        "displayName",
                        Self::adml_string(&self.config.win_supported_os),
                    ),
            ),
        )
    }

    fn base_categories(&self) -> Vec<XmlElement> {
        let mut elements = Vec::new();
        let mut parent: Option<&str> = None;
        for name in &self.config.win_category_path {
            let mut category = XmlElement::new("category")
                .attr("name", name.as_str())
                .attr("displayName", Self::adml_string(name));
            if let Some(parent_name) = parent {
                category =
                    category.child(XmlElement::new("parentCategory").attr("ref", parent_name));
            }
            elements.push(category);
            parent = Some(name);
        }
        elements
    }

    fn enum_element(policy: &ResolvedPolicy) -> XmlElement {
        let value_tag = match policy.policy_type {
            PolicyType::IntEnum => "decimal",
            _ => "string",
        };
        let mut enum_elem = XmlElement::new("enum")
            .attr("id", policy.name.as_str())
            .attr("valueName", policy.name.as_str());
        for item in &policy.items {
            enum_elem = enum_elem.child(
                XmlElement::new("item")
                    .attr("displayName", Self::adml_string(&item.name))
                    .child(
                        XmlElement::new("value")
                            .child(XmlElement::new(value_tag).attr("value", item.value.to_string())),
                    ),
            );
        }
        enum_elem
    }
}

impl TemplateWriter for AdmxWriter {
    fn init(&mut self) {}

    fn begin_template(&mut self) {
        self.scaffold = vec![
            self.policy_namespaces(),
            XmlElement::new("resources").attr("minRequiredRevision", "1.0"),
            self.supported_on_definitions(),
        ];
        self.categories = self.base_categories();
        self.policies.clear();
        self.active_group = None;
    }

    fn begin_policy_group(&mut self, group: &ResolvedGroup) {
        let parent_ref = self.default_category().to_string();
        self.categories.push(
            XmlElement::new("category")
                .attr("name", group.name.as_str())
                .attr(
                    "displayName",
                    Self::adml_string(&format!("{}_group", group.name)),
                )
                .child(XmlElement::new("parentCategory").attr("ref", parent_ref)),
        );
        self.active_group = Some(group.name.clone());
    }

    fn write_policy(&mut self, policy: &ResolvedPolicy) -> Result<(), WriterError> {
        let parent_ref = self
            .active_group
            .clone()
            .unwrap_or_else(|| self.default_category().to_string());

        let mut element = XmlElement::new("policy")
            .attr("name", policy.name.as_str())
            .attr("class", self.config.win_group_policy_class.as_str())
            .attr("displayName", Self::adml_string(&policy.name))
            .attr("explainText", Self::adml_string_explain(&policy.name))
            .attr("presentation", Self::adml_presentation(&policy.name))
            .attr("key", self.config.win_reg_key_name.as_str())
            .child(XmlElement::new("parentCategory").attr("ref", parent_ref))
            .child(
                XmlElement::new("supportedOn")
                    .attr("ref", self.config.win_supported_os.as_str()),
            );

        match policy.policy_type {
            PolicyType::Main => {
                element = element
                    .attr("valueName", policy.name.as_str())
                    .child(
                        XmlElement::new("enabledValue")
                            .child(XmlElement::new("decimal").attr("value", "1")),
                    )
                    .child(
                        XmlElement::new("disabledValue")
                            .child(XmlElement::new("decimal").attr("value", "0")),
                    );
            }
            PolicyType::String => {
                element = element.child(
                    XmlElement::new("elements").child(
                        XmlElement::new("text")
                            .attr("id", policy.name.as_str())
                            .attr("valueName", policy.name.as_str()),
                    ),
                );
            }
            PolicyType::IntEnum | PolicyType::StringEnum => {
                element = element
                    .child(XmlElement::new("elements").child(Self::enum_element(policy)));
            }
            PolicyType::List => {
                element = element.child(
                    XmlElement::new("elements").child(
                        XmlElement::new("list")
                            // The id must stay in sync with the corresponding
                            // element of the companion ADML file.
                            .attr("id", format!("{}Desc", policy.name))
                            .attr("valuePrefix", "")
                            .attr(
                                "key",
                                format!("{}\\{}", self.config.win_reg_key_name, policy.name),
                            ),
                    ),
                );
            }
            PolicyType::Int => {
                return Err(WriterError::UnsupportedPolicyType {
                    policy: policy.name.clone(),
                    policy_type: policy.policy_type,
                });
            }
        }

        self.policies.push(element);
        Ok(())
    }

    fn end_policy_group(&mut self) {
        self.active_group = None;
    }

    fn end_template(&mut self) {}

    fn template_text(&self) -> String {
        let mut root = XmlElement::new("policyDefinitions")
            .attr("revision", "1.0")
            .attr("schemaVersion", "1.0");
        for elem in &self.scaffold {
            root = root.child(elem.clone());
        }

        let mut categories = XmlElement::new("categories");
        for category in &self.categories {
            categories = categories.child(category.clone());
        }
        root = root.child(categories);

        let mut policies = XmlElement::new("policies");
        for policy in &self.policies {
            policies = policies.child(policy.clone());
        }
        root = root.child(policies);

        format!("<?xml version=\"1.0\" ?>\n{}", root.to_xml(0))
    }
}
