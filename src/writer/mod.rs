//! Writer protocol and concrete realizations
//!
//! A writer receives the generator's fixed call sequence and accumulates a
//! document. Writer instances carry emission-order state, so one instance
//! serves exactly one generation pass.

mod admx;
mod plain;
pub mod xml;

pub use admx::{AdmxConfig, AdmxConfigError, AdmxWriter};
pub use plain::PlainWriter;

use thiserror::Error;

use crate::model::PolicyType;
use crate::resolve::{ResolvedGroup, ResolvedPolicy};

/// Errors raised by writer realizations
#[derive(Debug, Error)]
pub enum WriterError {
    /// The realization has no serialization for this policy type
    #[error("policy '{policy}' has type '{policy_type}', which this writer cannot express")]
    UnsupportedPolicyType {
        policy: String,
        policy_type: PolicyType,
    },
}

/// The callback set driven by [`crate::PolicyTemplateGenerator`].
///
/// Per pass the generator makes exactly one `init`, `begin_template`,
/// `end_template` and `template_text` call, in that relative order, with
/// all group and policy calls strictly between `begin_template` and
/// `end_template`.
pub trait TemplateWriter {
    /// One-time preparation before any output is produced.
    fn init(&mut self);

    /// Open the document and lay down its static scaffold.
    fn begin_template(&mut self);

    /// Open a named group. Subsequent [`Self::write_policy`] calls belong
    /// to it until [`Self::end_policy_group`]. The group record carries its
    /// full sorted child list; the filtered set is defined by the
    /// `write_policy` calls that follow.
    fn begin_policy_group(&mut self, group: &ResolvedGroup);

    /// Serialize one policy into the current group context. Rejecting a
    /// policy type aborts the whole pass.
    fn write_policy(&mut self, policy: &ResolvedPolicy) -> Result<(), WriterError>;

    /// Close the current group and restore the template-level context.
    fn end_policy_group(&mut self);

    /// Close the document.
    fn end_template(&mut self);

    /// The serialized document accumulated by this pass.
    fn template_text(&self) -> String;
}
