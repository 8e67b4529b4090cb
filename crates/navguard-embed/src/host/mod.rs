//! Seam to the host view hierarchy.
//!
//! A host implements `HostSurface` for its native browser view. The session
//! layer decides *whether* to load; the surface only carries out loads the
//! whitelist already accepted.

pub mod logging;
pub mod options;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use navguard_core::error::Result;

pub use logging::{LoggingSurface, LoggingSurfaceFactory};
pub use options::{CreateOptions, ViewSettings};

/// A load the whitelist has already accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: String,
    /// Passed through untouched.
    pub headers: BTreeMap<String, String>,
    pub settings: ViewSettings,
}

/// One native browser view.
#[async_trait]
pub trait HostSurface: Send + Sync {
    /// Create the view and start loading `req.url`.
    async fn create(&self, req: LoadRequest) -> Result<()>;
    async fn load(&self, req: LoadRequest) -> Result<()>;
    async fn destroy(&self) -> Result<()>;
    async fn reload(&self) -> Result<()>;
    async fn can_go_back(&self) -> bool;
    async fn can_go_forward(&self) -> bool;
    async fn go_back(&self) -> Result<()>;
    async fn go_forward(&self) -> Result<()>;
    async fn set_visible(&self, visible: bool) -> Result<()>;
}

/// Builds the surface for a container when its session is created.
pub trait SurfaceFactory: Send + Sync {
    fn surface(&self, container_id: &str) -> Arc<dyn HostSurface>;
}
