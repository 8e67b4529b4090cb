use std::sync::Arc;

use dashmap::DashMap;

use crate::config::{DefaultPolicy, DenialMode, GuardConfig};
use crate::host::SurfaceFactory;
use crate::obs::NavMetrics;

use super::session::EmbedSession;

/// Session registry: `container_id -> EmbedSession`.
/// Sessions never share whitelist state.
pub struct SessionRegistry {
    sessions: DashMap<String, Arc<EmbedSession>>,
    surfaces: Arc<dyn SurfaceFactory>,
    defaults: DefaultPolicy,
    denial: DenialMode,
    metrics: Arc<NavMetrics>,
}

impl SessionRegistry {
    pub fn new(cfg: &GuardConfig, surfaces: Arc<dyn SurfaceFactory>, metrics: Arc<NavMetrics>) -> Self {
        Self {
            sessions: DashMap::new(),
            surfaces,
            defaults: cfg.defaults.clone(),
            denial: cfg.denial,
            metrics,
        }
    }

    pub fn get(&self, container_id: &str) -> Option<Arc<EmbedSession>> {
        self.sessions.get(container_id).map(|r| Arc::clone(r.value()))
    }

    /// Existing session, or a new one seeded with the default whitelist.
    pub fn get_or_create(&self, container_id: &str) -> Arc<EmbedSession> {
        let entry = self
            .sessions
            .entry(container_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(container = %container_id, "session started");
                Arc::new(EmbedSession::new(
                    container_id.to_string(),
                    self.defaults.initial_policy(),
                    self.surfaces.surface(container_id),
                    self.denial,
                    Arc::clone(&self.metrics),
                ))
            });
        Arc::clone(entry.value())
    }

    /// End a session; its whitelist goes with it.
    pub fn remove(&self, container_id: &str) -> Option<Arc<EmbedSession>> {
        let removed = self.sessions.remove(container_id).map(|(_, s)| s);
        if removed.is_some() {
            tracing::debug!(container = %container_id, "session ended");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn container_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }
}
