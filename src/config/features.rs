//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Include the normalized/cleaned shadow fields in every snapshot,
    /// not only at completion
    #[serde(default)]
    pub debug_clean: bool,
}
