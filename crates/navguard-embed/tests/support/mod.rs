//! Recording host surface shared by embed tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use navguard_core::error::Result;
use navguard_embed::config::GuardConfig;
use navguard_embed::dispatch::Dispatcher;
use navguard_embed::host::{HostSurface, LoadRequest, SurfaceFactory};
use navguard_embed::obs::NavMetrics;
use navguard_embed::session::SessionRegistry;

/// What the host was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Create(String),
    Load(String),
    Destroy,
    Reload,
    Back,
    Forward,
    Visible(bool),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Mutex<Vec<HostCall>>,
    pub requests: Mutex<Vec<LoadRequest>>,
    pub history_back: Mutex<bool>,
}

impl RecordingSurface {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, c: HostCall) {
        self.calls.lock().unwrap().push(c);
    }
}

#[async_trait]
impl HostSurface for RecordingSurface {
    async fn create(&self, req: LoadRequest) -> Result<()> {
        self.record(HostCall::Create(req.url.clone()));
        self.requests.lock().unwrap().push(req);
        Ok(())
    }

    async fn load(&self, req: LoadRequest) -> Result<()> {
        self.record(HostCall::Load(req.url.clone()));
        self.requests.lock().unwrap().push(req);
        *self.history_back.lock().unwrap() = true;
        Ok(())
    }

    async fn destroy(&self) -> Result<()> {
        self.record(HostCall::Destroy);
        Ok(())
    }

    async fn reload(&self) -> Result<()> {
        self.record(HostCall::Reload);
        Ok(())
    }

    async fn can_go_back(&self) -> bool {
        *self.history_back.lock().unwrap()
    }

    async fn can_go_forward(&self) -> bool {
        false
    }

    async fn go_back(&self) -> Result<()> {
        self.record(HostCall::Back);
        Ok(())
    }

    async fn go_forward(&self) -> Result<()> {
        self.record(HostCall::Forward);
        Ok(())
    }

    async fn set_visible(&self, visible: bool) -> Result<()> {
        self.record(HostCall::Visible(visible));
        Ok(())
    }
}

/// Hands out one recording surface per container and remembers them.
#[derive(Default)]
pub struct RecordingFactory {
    pub surfaces: Mutex<Vec<(String, Arc<RecordingSurface>)>>,
}

impl RecordingFactory {
    pub fn surface_for(&self, container_id: &str) -> Arc<RecordingSurface> {
        self.surfaces
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(id, _)| id == container_id)
            .map(|(_, s)| Arc::clone(s))
            .expect("no surface for container")
    }
}

impl SurfaceFactory for RecordingFactory {
    fn surface(&self, container_id: &str) -> Arc<dyn HostSurface> {
        let s = Arc::new(RecordingSurface::default());
        self.surfaces
            .lock()
            .unwrap()
            .push((container_id.to_string(), Arc::clone(&s)));
        s
    }
}

pub struct Harness {
    pub factory: Arc<RecordingFactory>,
    pub metrics: Arc<NavMetrics>,
    pub dispatcher: Dispatcher,
}

pub fn harness(cfg: &GuardConfig) -> Harness {
    let factory = Arc::new(RecordingFactory::default());
    let metrics = Arc::new(NavMetrics::default());
    let registry = SessionRegistry::new(cfg, factory.clone(), Arc::clone(&metrics));
    Harness {
        factory,
        metrics,
        dispatcher: Dispatcher::new(Arc::new(registry)),
    }
}
