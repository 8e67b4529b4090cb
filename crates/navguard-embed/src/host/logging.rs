//! Host surface that only traces what a native view would do.
//!
//! Used by the `navguard-embed` binary to replay command streams without a UI.
//! Keeps a back/forward history so `goBack`/`goForward` behave like a view.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use navguard_core::error::{NavGuardError, Result};

use super::{HostSurface, LoadRequest, SurfaceFactory};

#[derive(Debug, Default)]
struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    fn reset(&mut self, url: String) {
        self.entries = vec![url];
        self.index = 0;
    }

    fn push(&mut self, url: String) {
        if self.entries.is_empty() {
            return self.reset(url);
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }

    fn can_back(&self) -> bool {
        self.index > 0
    }

    fn can_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }
}

pub struct LoggingSurface {
    container_id: String,
    history: Mutex<History>,
}

impl LoggingSurface {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            history: Mutex::new(History::default()),
        }
    }

    fn with_history<T>(&self, f: impl FnOnce(&mut History) -> T) -> T {
        let mut g = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut g)
    }
}

#[async_trait]
impl HostSurface for LoggingSurface {
    async fn create(&self, req: LoadRequest) -> Result<()> {
        tracing::info!(
            container = %self.container_id,
            url = %req.url,
            headers = req.headers.len(),
            zoom = req.settings.enable_zoom,
            auto_resize = req.settings.auto_resize,
            "create view"
        );
        self.with_history(|h| h.reset(req.url));
        Ok(())
    }

    async fn load(&self, req: LoadRequest) -> Result<()> {
        tracing::info!(container = %self.container_id, url = %req.url, "load url");
        self.with_history(|h| h.push(req.url));
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        tracing::info!(container = %self.container_id, "destroy view");
        self.with_history(|h| *h = History::default());
        Ok(())
    }

    async fn reload(&self) -> Result<()> {
        let url = self.with_history(|h| h.current().map(str::to_string));
        tracing::info!(container = %self.container_id, url = ?url, "reload");
        Ok(())
    }

    async fn can_go_back(&self) -> bool {
        self.with_history(|h| h.can_back())
    }

    async fn can_go_forward(&self) -> bool {
        self.with_history(|h| h.can_forward())
    }

    async fn go_back(&self) -> Result<()> {
        self.with_history(|h| {
            if !h.can_back() {
                return Err(NavGuardError::NoHistory("back"));
            }
            h.index -= 1;
            Ok(())
        })?;
        tracing::info!(container = %self.container_id, "go back");
        Ok(())
    }

    async fn go_forward(&self) -> Result<()> {
        self.with_history(|h| {
            if !h.can_forward() {
                return Err(NavGuardError::NoHistory("forward"));
            }
            h.index += 1;
            Ok(())
        })?;
        tracing::info!(container = %self.container_id, "go forward");
        Ok(())
    }

    async fn set_visible(&self, visible: bool) -> Result<()> {
        tracing::info!(container = %self.container_id, visible, "set visible");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSurfaceFactory;

impl SurfaceFactory for LoggingSurfaceFactory {
    fn surface(&self, container_id: &str) -> Arc<dyn HostSurface> {
        Arc::new(LoggingSurface::new(container_id))
    }
}
