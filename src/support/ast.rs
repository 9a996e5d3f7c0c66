//! Parsed form of supported-on expressions

use std::fmt;

/// Version bounds of a support expression. `8-` reads "from version 8 on";
/// bounds are carried for display and serialization only and are never
/// compared against a live build version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionRange {
    pub since: Option<u32>,
    pub until: Option<u32>,
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(since) = self.since {
            write!(f, "{}", since)?;
        }
        write!(f, "-")?;
        if let Some(until) = self.until {
            write!(f, "{}", until)?;
        }
        Ok(())
    }
}

/// One parsed `product.platform:range` entry of a `supported_on` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedOn {
    pub product: String,
    pub platform: String,
    pub range: VersionRange,
}

impl fmt::Display for SupportedOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}:{}", self.product, self.platform, self.range)
    }
}
