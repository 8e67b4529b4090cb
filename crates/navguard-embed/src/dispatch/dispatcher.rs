use std::sync::Arc;

use navguard_core::error::{NavGuardError, Result};

use crate::session::{EmbedSession, NavigationDecision, SessionRegistry};

use super::command::{Command, Reply};

/// Routes bridge commands to the session owning the container.
pub struct Dispatcher {
    registry: Arc<SessionRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> Arc<SessionRegistry> {
        Arc::clone(&self.registry)
    }

    /// Parse and dispatch one JSON command. Failures become error replies.
    pub async fn dispatch_json(&self, raw: &str) -> Reply {
        let cmd: Command = match serde_json::from_str(raw) {
            Ok(c) => c,
            Err(e) => {
                let err = NavGuardError::BadRequest(format!("invalid command: {e}"));
                tracing::warn!(error = %err, "command rejected");
                return Reply::from_error(&err);
            }
        };

        let action = cmd.action();
        let container = cmd.container_id().to_string();
        match self.dispatch(cmd).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(%container, action, error = %e, "command failed");
                Reply::from_error(&e)
            }
        }
    }

    pub async fn dispatch(&self, cmd: Command) -> Result<Reply> {
        match cmd {
            Command::Create { container_id, url, options } => {
                let session = self.registry.get_or_create(&container_id);
                session.create(&url, options).await.map(Reply::ok)
            }
            Command::SetWhitelist { container_id, domains, allow_subdomains } => {
                let session = self.registry.get_or_create(&container_id);
                Ok(Reply::ok(session.set_whitelist(&domains, allow_subdomains)))
            }
            Command::ClearWhitelist { container_id } => {
                let session = self.registry.get_or_create(&container_id);
                Ok(Reply::ok(session.clear_whitelist()))
            }
            Command::LoadUrl { container_id, url, headers } => {
                let session = self.existing(&container_id, NavGuardError::NotInitialized)?;
                session.load_url(&url, headers).await.map(Reply::ok)
            }
            Command::Navigate { container_id, url } => {
                let session = self.existing(&container_id, NavGuardError::NotInitialized)?;
                let allowed = session.on_navigation(&url) == NavigationDecision::Proceed;
                Ok(Reply::navigation(allowed, &url))
            }
            Command::Destroy { container_id } => {
                let session = self.existing(&container_id, NavGuardError::NoView)?;
                let msg = session.destroy().await?;
                self.registry.remove(&container_id);
                Ok(Reply::ok(msg))
            }
            Command::Reload { container_id } => {
                let session = self.existing(&container_id, NavGuardError::NotInitialized)?;
                session.reload().await.map(Reply::ok)
            }
            Command::GoBack { container_id } => {
                let session = self.existing(&container_id, NavGuardError::NotInitialized)?;
                session.go_back().await.map(Reply::ok)
            }
            Command::GoForward { container_id } => {
                let session = self.existing(&container_id, NavGuardError::NotInitialized)?;
                session.go_forward().await.map(Reply::ok)
            }
            Command::SetVisible { container_id, visible } => {
                let session = self.existing(&container_id, NavGuardError::NotInitialized)?;
                session.set_visible(visible).await.map(Reply::ok)
            }
        }
    }

    fn existing(
        &self,
        container_id: &str,
        missing: NavGuardError,
    ) -> Result<Arc<EmbedSession>> {
        self.registry.get(container_id).ok_or(missing)
    }
}
