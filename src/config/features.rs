//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct FeatureFlags {
    /// Redirect anonymous visitors of `/` to the login page
    #[serde(default)]
    pub require_login_for_list: bool,
}
