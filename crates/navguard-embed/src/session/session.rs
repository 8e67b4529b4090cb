//! One embedded browser surface and the whitelist that guards it.
//!
//! Both call sites go through the same `SharedWhitelist`: `create`/`load_url`
//! before a load, and `on_navigation` for every navigation the host reports.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use navguard_core::error::{NavGuardError, Result};
use navguard_core::{ApplyOutcome, SharedWhitelist, Verdict, WhitelistPolicy, WhitelistSource};

use crate::config::DenialMode;
use crate::host::{CreateOptions, HostSurface, LoadRequest, ViewSettings};
use crate::obs::NavMetrics;

/// Where a URL is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSite {
    InitialLoad,
    LoadUrl,
    Navigation,
}

impl CallSite {
    pub fn as_str(self) -> &'static str {
        match self {
            CallSite::InitialLoad => "initial_load",
            CallSite::LoadUrl => "load_url",
            CallSite::Navigation => "navigation",
        }
    }
}

/// Answer to a host-reported navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Let the navigation continue unmodified.
    Proceed,
    /// Suppress it and keep the current page.
    Cancel,
}

#[derive(Debug, Default)]
struct ViewState {
    active: bool,
    settings: ViewSettings,
}

pub struct EmbedSession {
    container_id: String,
    whitelist: SharedWhitelist,
    surface: Arc<dyn HostSurface>,
    view: Mutex<ViewState>,
    denial: DenialMode,
    metrics: Arc<NavMetrics>,
}

impl EmbedSession {
    pub fn new(
        container_id: String,
        initial: WhitelistPolicy,
        surface: Arc<dyn HostSurface>,
        denial: DenialMode,
        metrics: Arc<NavMetrics>,
    ) -> Self {
        Self {
            container_id,
            whitelist: SharedWhitelist::with_policy(initial),
            surface,
            view: Mutex::new(ViewState::default()),
            denial,
            metrics,
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn whitelist(&self) -> &SharedWhitelist {
        &self.whitelist
    }

    pub async fn is_active(&self) -> bool {
        self.view.lock().await.active
    }

    // --------------------
    // Whitelist configuration
    // --------------------

    pub fn set_whitelist(&self, domains: &[String], allow_subdomains: bool) -> String {
        let n = self.whitelist.configure(domains, allow_subdomains);
        self.metrics.whitelist_updates.inc(&[("kind", "configured")]);
        tracing::debug!(container = %self.container_id, domains = n, allow_subdomains, "whitelist configured");
        format!("Whitelist configured with {n} domains")
    }

    pub fn clear_whitelist(&self) -> String {
        self.whitelist.clear();
        self.metrics.whitelist_updates.inc(&[("kind", "cleared")]);
        tracing::debug!(container = %self.container_id, "whitelist cleared");
        "Whitelist cleared".to_string()
    }

    /// Apply the `whitelist` entry of a create-options bundle.
    pub fn apply_whitelist_option(&self, raw: &serde_json::Value, allow_subdomains: bool) -> ApplyOutcome {
        let source: WhitelistSource = raw.into();
        let outcome = self.whitelist.apply(source, allow_subdomains);
        match outcome {
            ApplyOutcome::Configured(n) => {
                self.metrics.whitelist_updates.inc(&[("kind", "configured")]);
                tracing::debug!(container = %self.container_id, domains = n, "whitelist configured from options");
            }
            ApplyOutcome::Cleared => {
                self.metrics.whitelist_updates.inc(&[("kind", "cleared")]);
                tracing::debug!(container = %self.container_id, "empty whitelist option, whitelist disabled");
            }
            ApplyOutcome::Ignored(kind) => {
                self.metrics.whitelist_updates.inc(&[("kind", "ignored")]);
                tracing::warn!(container = %self.container_id, kind, "whitelist option has unexpected type, keeping previous whitelist");
            }
        }
        outcome
    }

    // --------------------
    // Decisions
    // --------------------

    /// Evaluate `url` for `site`, logging and counting the outcome.
    pub fn check(&self, site: CallSite, url: &str) -> Verdict {
        let verdict = self.whitelist.evaluate(url);
        let outcome = if verdict.is_allowed() { "allowed" } else { "denied" };
        self.metrics.navigation_decisions.inc(&[
            ("call_site", site.as_str()),
            ("outcome", outcome),
            ("reason", verdict.reason()),
        ]);

        if verdict.is_allowed() {
            tracing::debug!(container = %self.container_id, site = site.as_str(), %url, reason = verdict.reason(), "url allowed");
        } else {
            tracing::warn!(container = %self.container_id, site = site.as_str(), %url, reason = verdict.reason(), "url blocked by whitelist");
        }
        verdict
    }

    /// Host-reported navigation attempt (link click, redirect, script).
    pub fn on_navigation(&self, target: &str) -> NavigationDecision {
        if self.check(CallSite::Navigation, target).is_allowed() {
            NavigationDecision::Proceed
        } else {
            NavigationDecision::Cancel
        }
    }

    /// `Ok(None)` to go ahead, `Ok(Some(reply))` when silently blocked.
    fn gate_load(&self, site: CallSite, url: &str) -> Result<Option<String>> {
        if self.check(site, url).is_allowed() {
            return Ok(None);
        }
        match self.denial {
            DenialMode::Reject => Err(NavGuardError::NotAllowed(url.to_string())),
            DenialMode::Silent => Ok(Some(format!("Navigation blocked: {url}"))),
        }
    }

    // --------------------
    // View lifecycle
    // --------------------

    pub async fn create(&self, url: &str, options: CreateOptions) -> Result<String> {
        if let Some(raw) = &options.whitelist {
            self.apply_whitelist_option(raw, options.allow_subdomains.unwrap_or(true));
        }

        // A refused URL leaves any existing view untouched.
        if let Some(blocked) = self.gate_load(CallSite::InitialLoad, url)? {
            return Ok(blocked);
        }

        let mut view = self.view.lock().await;
        if view.active {
            tracing::warn!(container = %self.container_id, "WebView already exists, destroying before creating a new one");
            self.surface.destroy().await?;
            view.active = false;
        }

        let settings = options.settings();
        let req = LoadRequest {
            url: url.to_string(),
            headers: options.headers.unwrap_or_default(),
            settings: settings.clone(),
        };
        self.surface.create(req).await?;
        *view = ViewState { active: true, settings };

        tracing::info!(container = %self.container_id, %url, "WebView created");
        Ok("WebView created successfully".to_string())
    }

    pub async fn load_url(&self, url: &str, headers: Option<BTreeMap<String, String>>) -> Result<String> {
        let view = self.view.lock().await;
        if !view.active {
            return Err(NavGuardError::NotInitialized);
        }

        if let Some(blocked) = self.gate_load(CallSite::LoadUrl, url)? {
            return Ok(blocked);
        }

        let req = LoadRequest {
            url: url.to_string(),
            headers: headers.unwrap_or_default(),
            settings: view.settings.clone(),
        };
        self.surface.load(req).await?;
        Ok(format!("URL loaded: {url}"))
    }

    pub async fn destroy(&self) -> Result<String> {
        let mut view = self.view.lock().await;
        if !view.active {
            return Err(NavGuardError::NoView);
        }
        self.surface.destroy().await?;
        view.active = false;
        tracing::info!(container = %self.container_id, "WebView destroyed");
        Ok("WebView destroyed".to_string())
    }

    pub async fn reload(&self) -> Result<String> {
        let _view = self.active_view().await?;
        self.surface.reload().await?;
        Ok("WebView reloaded".to_string())
    }

    pub async fn go_back(&self) -> Result<String> {
        let _view = self.active_view().await?;
        if !self.surface.can_go_back().await {
            return Err(NavGuardError::NoHistory("back"));
        }
        self.surface.go_back().await?;
        Ok("Navigated back".to_string())
    }

    pub async fn go_forward(&self) -> Result<String> {
        let _view = self.active_view().await?;
        if !self.surface.can_go_forward().await {
            return Err(NavGuardError::NoHistory("forward"));
        }
        self.surface.go_forward().await?;
        Ok("Navigated forward".to_string())
    }

    pub async fn set_visible(&self, visible: bool) -> Result<String> {
        let _view = self.active_view().await?;
        self.surface.set_visible(visible).await?;
        Ok(format!("Visibility changed to: {visible}"))
    }

    /// Lock the view state, failing if no view exists.
    async fn active_view(&self) -> Result<tokio::sync::MutexGuard<'_, ViewState>> {
        let view = self.view.lock().await;
        if !view.active {
            return Err(NavGuardError::NotInitialized);
        }
        Ok(view)
    }
}
