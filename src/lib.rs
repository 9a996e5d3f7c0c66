//! Policy Templater - platform policy template generation
//!
//! This library turns policy definitions and a localized message catalog
//! into a platform-specific template document by driving a pluggable
//! writer through a fixed callback sequence.
//!
//! # Example
//!
//! ```rust
//! use policy_templater::model::{PolicyDef, PolicyNode, PolicyType};
//! use policy_templater::{generate_template_text, MessageCatalog, PlainWriter, PlatformFilter};
//!
//! let messages = MessageCatalog::from_iter([
//!     ("IDS_POLICY_HOMEPAGELOCATION_CAPTION", "Configure the home page"),
//! ]);
//! let definitions = vec![PolicyNode::Policy(
//!     PolicyDef::new("HomepageLocation", PolicyType::String)
//!         .with_supported_on(["chrome.win:8-"]),
//! )];
//!
//! let mut writer = PlainWriter::new();
//! let text = generate_template_text(
//!     &messages,
//!     &definitions,
//!     &mut writer,
//!     &PlatformFilter::only(["win"]),
//! )
//! .unwrap();
//! assert!(text.contains("HomepageLocation"));
//! assert!(text.contains("Configure the home page"));
//! ```

pub mod error;
pub mod filter;
pub mod generator;
pub mod loader;
pub mod messages;
pub mod model;
pub mod resolve;
pub mod support;
pub mod writer;

pub use error::ParseError;
pub use filter::{is_supported, PlatformFilter};
pub use generator::PolicyTemplateGenerator;
pub use loader::{load_messages, load_policy_definitions, LoadError};
pub use messages::MessageCatalog;
pub use support::{SupportedOn, VersionRange};
pub use writer::{AdmxConfig, AdmxWriter, PlainWriter, TemplateWriter, WriterError};

use thiserror::Error;

use model::PolicyNode;

/// Errors that can abort a generation pass
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A `supported_on` entry failed to parse
    #[error("policy '{policy}': bad supported_on expression '{expression}': {}", format_parse_errors(.errors))]
    SupportedOn {
        policy: String,
        expression: String,
        errors: Vec<ParseError>,
    },

    /// Two entries in one scope share a name
    #[error("duplicate policy name '{name}' at {scope}")]
    DuplicateName { name: String, scope: String },

    /// The writer rejected a policy
    #[error("writer error: {0}")]
    Writer(#[from] WriterError),
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Generate a template document in one call.
///
/// Resolves messages against the definitions, sorts and filters them, and
/// drives `writer` through one full lifecycle pass. This is the main entry
/// point for the library; construct a [`PolicyTemplateGenerator`] directly
/// to run several passes over the same resolved definitions.
pub fn generate_template_text(
    messages: &MessageCatalog,
    definitions: &[PolicyNode],
    writer: &mut dyn TemplateWriter,
    platforms: &PlatformFilter,
) -> Result<String, GenerateError> {
    PolicyTemplateGenerator::new(messages, definitions)?.template_text(writer, platforms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupDef, PolicyDef, PolicyType};

    #[test]
    fn test_generate_plain_listing() {
        let messages = MessageCatalog::from_iter([
            ("IDS_POLICY_PROXY_CAPTION", "Proxy"),
            ("IDS_POLICY_PROXYSERVER_CAPTION", "Address of the proxy"),
        ]);
        let definitions = vec![PolicyNode::Group(GroupDef::new(
            "Proxy",
            vec![PolicyDef::new("ProxyServer", PolicyType::String)
                .with_supported_on(["chrome.win:8-"])],
        ))];

        let mut writer = PlainWriter::new();
        let text = generate_template_text(
            &messages,
            &definitions,
            &mut writer,
            &PlatformFilter::only(["win"]),
        )
        .unwrap();

        assert!(text.contains("group Proxy: Proxy"));
        assert!(text.contains("policy ProxyServer (string): Address of the proxy"));
        assert!(text.contains("supported on: chrome.win:8-"));
    }

    #[test]
    fn test_generate_empty_input() {
        let messages = MessageCatalog::new();
        let mut writer = PlainWriter::new();
        let text =
            generate_template_text(&messages, &[], &mut writer, &PlatformFilter::All).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_generate_bad_expression_fails() {
        let messages = MessageCatalog::new();
        let definitions = vec![PolicyNode::Policy(
            PolicyDef::new("Policy1", PolicyType::String).with_supported_on(["chrome.win"]),
        )];
        let mut writer = PlainWriter::new();
        let result =
            generate_template_text(&messages, &definitions, &mut writer, &PlatformFilter::All);
        assert!(matches!(result, Err(GenerateError::SupportedOn { .. })));
    }
}
