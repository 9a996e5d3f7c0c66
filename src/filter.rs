//! Platform support filtering
//!
//! Gating is by platform name only: version bounds on support entries are
//! informational and never compared against a live build version.

use crate::resolve::ResolvedPolicy;

/// Target platform selection for a generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformFilter {
    /// Emit every policy regardless of its support annotations.
    All,
    /// Emit only policies supported on at least one named platform.
    Only(Vec<String>),
}

impl PlatformFilter {
    /// Filter to policies supported on at least one of the given platforms.
    pub fn only<I, S>(platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PlatformFilter::Only(platforms.into_iter().map(Into::into).collect())
    }
}

/// Whether a policy applies to the target platforms.
///
/// Under [`PlatformFilter::Only`], a policy with no support entries is
/// never supported.
pub fn is_supported(policy: &ResolvedPolicy, platforms: &PlatformFilter) -> bool {
    match platforms {
        PlatformFilter::All => true,
        PlatformFilter::Only(names) => policy
            .supported_on
            .iter()
            .any(|entry| names.iter().any(|name| name == &entry.platform)),
    }
}
