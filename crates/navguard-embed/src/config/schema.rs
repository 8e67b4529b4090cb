use serde::Deserialize;

use navguard_core::error::{NavGuardError, Result};
use navguard_core::WhitelistPolicy;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub version: u32,

    #[serde(default)]
    pub defaults: DefaultPolicy,

    #[serde(default)]
    pub denial: DenialMode,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            defaults: DefaultPolicy::default(),
            denial: DenialMode::default(),
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NavGuardError::Unsupported(format!(
                "config version {}",
                self.version
            )));
        }

        self.defaults.validate()?;

        Ok(())
    }
}

/// Whitelist every new session starts with.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultPolicy {
    #[serde(default)]
    pub whitelist: Vec<String>,

    #[serde(default = "default_allow_subdomains")]
    pub allow_subdomains: bool,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self {
            whitelist: Vec::new(),
            allow_subdomains: default_allow_subdomains(),
        }
    }
}

impl DefaultPolicy {
    pub fn validate(&self) -> Result<()> {
        // Runtime input tolerates blank entries; a config file should not.
        if let Some(i) = self.whitelist.iter().position(|d| d.trim().is_empty()) {
            return Err(NavGuardError::BadRequest(format!(
                "defaults.whitelist[{i}] must not be empty"
            )));
        }
        Ok(())
    }

    /// Disabled when no whitelist is configured.
    pub fn initial_policy(&self) -> WhitelistPolicy {
        if self.whitelist.is_empty() {
            WhitelistPolicy::disabled()
        } else {
            WhitelistPolicy::configured(&self.whitelist, self.allow_subdomains)
        }
    }
}

fn default_allow_subdomains() -> bool {
    true
}

/// What a refused initial load or `loadUrl` looks like to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialMode {
    /// Command fails with `NOT_ALLOWED`.
    #[default]
    Reject,
    /// Command succeeds with a "blocked" message; a warning is logged.
    Silent,
}
