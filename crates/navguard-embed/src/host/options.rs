//! Options bundle supplied with `create`.
//!
//! Keys are camelCase as sent by the script side. Unknown keys (layout hints
//! such as `top` and `height`) are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOptions {
    /// Raw value; normalized through `WhitelistSource`.
    pub whitelist: Option<Value>,
    /// Defaults to true when `whitelist` is present.
    pub allow_subdomains: Option<bool>,
    pub headers: Option<BTreeMap<String, String>>,
    pub enable_zoom: Option<bool>,
    pub clear_cache: bool,
    pub user_agent: Option<String>,
    pub auto_resize: Option<bool>,
}

impl CreateOptions {
    pub fn settings(&self) -> ViewSettings {
        ViewSettings {
            enable_zoom: self.enable_zoom.unwrap_or(false),
            clear_cache: self.clear_cache,
            user_agent: self.user_agent.clone(),
            auto_resize: self.auto_resize.unwrap_or(true),
        }
    }
}

/// View settings forwarded to the host as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub enable_zoom: bool,
    pub clear_cache: bool,
    pub user_agent: Option<String>,
    pub auto_resize: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            enable_zoom: false,
            clear_cache: false,
            user_agent: None,
            auto_resize: true,
        }
    }
}
