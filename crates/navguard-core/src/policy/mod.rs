//! Policy layer (domain patterns, whitelist snapshots, configuration input).
//!
//! Compiles raw whitelist entries into a matching snapshot that every
//! navigation decision point consults. Reconfiguration swaps whole snapshots,
//! so a reader never sees a half-updated whitelist.

pub mod pattern;
pub mod shared;
pub mod source;
pub mod whitelist;

pub use pattern::{DomainPattern, MatchKind};
pub use shared::{ApplyOutcome, SharedWhitelist};
pub use source::WhitelistSource;
pub use whitelist::{host_of, Verdict, WhitelistPolicy};
