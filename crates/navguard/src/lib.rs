//! Top-level facade crate for navguard.
//!
//! Re-exports the policy engine and the embedding layer so users can depend on a single crate.

pub mod core {
    pub use navguard_core::*;
}

pub mod embed {
    pub use navguard_embed::*;
}
