//! Plain-text key-value writer
//!
//! A minimal realization for previewing definitions: one line per field,
//! two-space indentation per nesting level. Unlike the ADMX writer it
//! supports every policy type.

use crate::resolve::{ResolvedGroup, ResolvedPolicy};

use super::{TemplateWriter, WriterError};

#[derive(Debug, Clone, Default)]
pub struct PlainWriter {
    lines: Vec<String>,
    depth: usize,
}

impl PlainWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_line(&mut self, text: String) {
        self.lines.push(format!("{}{}", "  ".repeat(self.depth), text));
    }
}

impl TemplateWriter for PlainWriter {
    fn init(&mut self) {}

    fn begin_template(&mut self) {
        self.lines.clear();
        self.depth = 0;
    }

    fn begin_policy_group(&mut self, group: &ResolvedGroup) {
        let caption = group.caption.as_deref().unwrap_or("");
        self.push_line(format!("group {}: {}", group.name, caption));
        self.depth += 1;
    }

    fn write_policy(&mut self, policy: &ResolvedPolicy) -> Result<(), WriterError> {
        self.push_line(format!(
            "policy {} ({}): {}",
            policy.name, policy.policy_type, policy.caption
        ));
        self.depth += 1;
        if !policy.desc.is_empty() {
            self.push_line(format!("desc: {}", policy.desc));
        }
        if !policy.supported_on.is_empty() {
            let entries: Vec<String> = policy
                .supported_on
                .iter()
                .map(|entry| entry.to_string())
                .collect();
            self.push_line(format!("supported on: {}", entries.join(", ")));
        }
        for item in &policy.items {
            self.push_line(format!("item {} = {}: {}", item.name, item.value, item.caption));
        }
        self.depth -= 1;
        Ok(())
    }

    fn end_policy_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn end_template(&mut self) {}

    fn template_text(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
