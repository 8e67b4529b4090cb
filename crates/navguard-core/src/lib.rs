//! navguard core: the URL whitelist / navigation policy engine.
//!
//! This crate answers one question for an embedded browser surface: may this
//! URL be loaded or navigated to? It carries no runtime or UI dependencies so
//! every navigation decision point in a host can share the same engine.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. The policy check
//! itself never returns an error: malformed URLs degrade to a denial and
//! malformed configuration leaves the previous policy in place.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{NavGuardError, Result};
pub use policy::{
    ApplyOutcome, DomainPattern, SharedWhitelist, Verdict, WhitelistPolicy, WhitelistSource,
};
