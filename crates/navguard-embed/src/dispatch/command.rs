//! Commands arriving from the script bridge, and the replies sent back.
//!
//! Wire shape: one JSON object per command, tagged by `action`, e.g.
//! `{"action":"loadUrl","containerId":"main","url":"https://example.com"}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use navguard_core::error::NavGuardError;

use crate::host::CreateOptions;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    Create {
        container_id: String,
        url: String,
        #[serde(default)]
        options: CreateOptions,
    },
    SetWhitelist {
        container_id: String,
        domains: Vec<String>,
        allow_subdomains: bool,
    },
    ClearWhitelist {
        container_id: String,
    },
    LoadUrl {
        container_id: String,
        url: String,
        #[serde(default)]
        headers: Option<BTreeMap<String, String>>,
    },
    /// Navigation attempt reported by the host view.
    Navigate {
        container_id: String,
        url: String,
    },
    Destroy {
        container_id: String,
    },
    Reload {
        container_id: String,
    },
    GoBack {
        container_id: String,
    },
    GoForward {
        container_id: String,
    },
    SetVisible {
        container_id: String,
        visible: bool,
    },
}

impl Command {
    pub fn container_id(&self) -> &str {
        match self {
            Command::Create { container_id, .. }
            | Command::SetWhitelist { container_id, .. }
            | Command::ClearWhitelist { container_id }
            | Command::LoadUrl { container_id, .. }
            | Command::Navigate { container_id, .. }
            | Command::Destroy { container_id }
            | Command::Reload { container_id }
            | Command::GoBack { container_id }
            | Command::GoForward { container_id }
            | Command::SetVisible { container_id, .. } => container_id,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::SetWhitelist { .. } => "setWhitelist",
            Command::ClearWhitelist { .. } => "clearWhitelist",
            Command::LoadUrl { .. } => "loadUrl",
            Command::Navigate { .. } => "navigate",
            Command::Destroy { .. } => "destroy",
            Command::Reload { .. } => "reload",
            Command::GoBack { .. } => "goBack",
            Command::GoForward { .. } => "goForward",
            Command::SetVisible { .. } => "setVisible",
        }
    }
}

/// Reply to one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub message: String,
    /// Set for `navigate` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<bool>,
}

impl Reply {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            code: None,
            message: message.into(),
            allowed: None,
        }
    }

    pub fn navigation(allowed: bool, url: &str) -> Self {
        let message = if allowed {
            format!("Navigation allowed to: {url}")
        } else {
            format!("Navigation blocked by whitelist: {url}")
        };
        Self {
            ok: true,
            code: None,
            message,
            allowed: Some(allowed),
        }
    }

    pub fn from_error(e: &NavGuardError) -> Self {
        Self {
            ok: false,
            code: Some(e.client_code().as_str()),
            message: e.to_string(),
            allowed: None,
        }
    }
}
