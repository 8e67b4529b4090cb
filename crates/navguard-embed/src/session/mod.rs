//! Embedding sessions (one per container) and their registry.

pub mod registry;
pub mod session;

pub use registry::SessionRegistry;
pub use session::{CallSite, EmbedSession, NavigationDecision};
