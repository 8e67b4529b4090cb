//! Swappable whitelist shared between configuration and navigation paths.
//!
//! Writers build a complete `WhitelistPolicy` and replace the `Arc` in one
//! write; readers clone the `Arc` and evaluate outside the lock.

use std::sync::{Arc, PoisonError, RwLock};

use super::source::WhitelistSource;
use super::whitelist::{Verdict, WhitelistPolicy};

/// Result of applying a `WhitelistSource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Whitelist replaced with this many patterns.
    Configured(usize),
    /// Empty input disabled the whitelist.
    Cleared,
    /// Input shape not understood; previous whitelist kept.
    Ignored(&'static str),
}

/// Per-session whitelist.
#[derive(Debug, Default)]
pub struct SharedWhitelist {
    current: RwLock<Arc<WhitelistPolicy>>,
}

impl SharedWhitelist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: WhitelistPolicy) -> Self {
        Self {
            current: RwLock::new(Arc::new(policy)),
        }
    }

    /// Replace patterns and subdomain mode together. Returns the pattern count.
    pub fn configure<I, S>(&self, patterns: I, allow_subdomains: bool) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let next = WhitelistPolicy::configured(patterns, allow_subdomains);
        let n = next.patterns().len();
        self.swap(next);
        n
    }

    pub fn clear(&self) {
        self.swap(WhitelistPolicy::disabled());
    }

    /// Apply loosely-typed configuration input.
    pub fn apply(&self, source: WhitelistSource, allow_subdomains: bool) -> ApplyOutcome {
        match source {
            WhitelistSource::List(list) | WhitelistSource::EncodedList(list) => {
                ApplyOutcome::Configured(self.configure(list, allow_subdomains))
            }
            WhitelistSource::SingleDomain(domain) => {
                ApplyOutcome::Configured(self.configure([domain], allow_subdomains))
            }
            WhitelistSource::Empty => {
                self.clear();
                ApplyOutcome::Cleared
            }
            WhitelistSource::Unrecognized(kind) => ApplyOutcome::Ignored(kind),
        }
    }

    /// Current snapshot; stays valid across later reconfiguration.
    pub fn snapshot(&self) -> Arc<WhitelistPolicy> {
        // The lock only guards an Arc, so a poisoned lock still holds a whole policy.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        self.snapshot().is_allowed(url)
    }

    pub fn evaluate(&self, url: &str) -> Verdict {
        self.snapshot().evaluate(url)
    }

    fn swap(&self, next: WhitelistPolicy) {
        let next = Arc::new(next);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
    }
}
