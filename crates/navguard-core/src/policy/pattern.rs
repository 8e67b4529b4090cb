//! Domain pattern compilation and host matching.
//!
//! `*.example.com` matches `example.com` and every subdomain of it. Any other
//! entry is an exact host; its subdomains match only when the owning policy
//! allows subdomains.

use std::fmt;

use url::Host;

const WILDCARD_PREFIX: &str = "*.";

/// How a host matched a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Wildcard,
    Exact,
    Subdomain,
}

/// A lower-cased whitelist entry. Non-ASCII bases are stored in their
/// ASCII (punycode) form, the form `url` reports hosts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPattern {
    raw: String,
}

impl DomainPattern {
    pub fn new(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let raw = match lowered.strip_prefix(WILDCARD_PREFIX) {
            Some(base) => format!("{WILDCARD_PREFIX}{}", ascii_base(base)),
            None => ascii_base(&lowered),
        };
        Self { raw }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_wildcard(&self) -> bool {
        self.raw.starts_with(WILDCARD_PREFIX)
    }

    /// Base domain for wildcard entries, the entry itself otherwise.
    pub fn base(&self) -> &str {
        self.raw.strip_prefix(WILDCARD_PREFIX).unwrap_or(self.raw.as_str())
    }

    /// Match an already lower-cased host.
    pub fn match_host(&self, host: &str, allow_subdomains: bool) -> Option<MatchKind> {
        let base = self.base();
        if base.is_empty() {
            return None;
        }

        if self.is_wildcard() {
            if host == base || is_subdomain_of(host, base) {
                return Some(MatchKind::Wildcard);
            }
            return None;
        }

        if host == base {
            Some(MatchKind::Exact)
        } else if allow_subdomains && is_subdomain_of(host, base) {
            Some(MatchKind::Subdomain)
        } else {
            None
        }
    }
}

impl fmt::Display for DomainPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// IDNA-encode a non-ASCII base; entries that fail to parse are kept as-is
/// and simply never match.
fn ascii_base(base: &str) -> String {
    if base.is_ascii() {
        return base.to_string();
    }
    match Host::parse(base) {
        Ok(host) => host.to_string(),
        Err(e) => {
            tracing::debug!(%base, error = %e, "whitelist entry is not a valid domain");
            base.to_string()
        }
    }
}

/// `host` ends with `"." + base`.
fn is_subdomain_of(host: &str, base: &str) -> bool {
    host.strip_suffix(base)
        .is_some_and(|rest| rest.ends_with('.'))
}
