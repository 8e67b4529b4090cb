//! Whitelist snapshot and the navigation decision.
//!
//! Decision rules, in order:
//! - disabled or empty whitelist => allow (an unconfigured session must not
//!   block its own first load);
//! - URL without a parsable host => deny;
//! - any pattern matching the lower-cased host => allow;
//! - otherwise deny.

use url::Url;

use super::pattern::{DomainPattern, MatchKind};

/// Outcome of evaluating one URL, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Whitelist disabled or empty.
    Unrestricted,
    Wildcard(String),
    Exact(String),
    Subdomain(String),
    /// URL malformed or without host.
    NoHost,
    NoMatch { host: String },
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            Verdict::Unrestricted | Verdict::Wildcard(_) | Verdict::Exact(_) | Verdict::Subdomain(_)
        )
    }

    /// Short label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::Unrestricted => "unrestricted",
            Verdict::Wildcard(_) => "wildcard",
            Verdict::Exact(_) => "exact",
            Verdict::Subdomain(_) => "subdomain",
            Verdict::NoHost => "no_host",
            Verdict::NoMatch { .. } => "no_match",
        }
    }
}

/// Immutable whitelist configuration.
/// Build a new one to reconfigure; see `SharedWhitelist` for the swap.
#[derive(Debug, Clone)]
pub struct WhitelistPolicy {
    enabled: bool,
    patterns: Vec<DomainPattern>,
    allow_subdomains: bool,
}

impl Default for WhitelistPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

impl WhitelistPolicy {
    /// Never-configured (or cleared) state.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            patterns: Vec::new(),
            allow_subdomains: true,
        }
    }

    /// Enabled policy over `patterns`. Stays enabled even when `patterns` is
    /// empty; the empty set still allows everything.
    pub fn configured<I, S>(patterns: I, allow_subdomains: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            enabled: true,
            patterns: patterns
                .into_iter()
                .map(|p| DomainPattern::new(p.as_ref()))
                .collect(),
            allow_subdomains,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn patterns(&self) -> &[DomainPattern] {
        &self.patterns
    }

    pub fn allow_subdomains(&self) -> bool {
        self.allow_subdomains
    }

    /// True when every URL passes.
    pub fn is_unrestricted(&self) -> bool {
        !self.enabled || self.patterns.is_empty()
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        self.evaluate(url).is_allowed()
    }

    pub fn evaluate(&self, url: &str) -> Verdict {
        if self.is_unrestricted() {
            return Verdict::Unrestricted;
        }

        let Some(host) = host_of(url) else {
            tracing::debug!(%url, "url has no host, denying");
            return Verdict::NoHost;
        };

        for p in &self.patterns {
            let Some(kind) = p.match_host(&host, self.allow_subdomains) else {
                continue;
            };
            tracing::debug!(%host, pattern = %p, ?kind, "url allowed by whitelist");
            let pattern = p.as_str().to_string();
            return match kind {
                MatchKind::Wildcard => Verdict::Wildcard(pattern),
                MatchKind::Exact => Verdict::Exact(pattern),
                MatchKind::Subdomain => Verdict::Subdomain(pattern),
            };
        }

        tracing::debug!(%host, "url matched no whitelist entry");
        Verdict::NoMatch { host }
    }
}

/// Lower-cased host of an absolute URL, if it has a non-empty one.
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    match parsed.host_str() {
        Some(h) if !h.is_empty() => Some(h.to_lowercase()),
        _ => None,
    }
}
