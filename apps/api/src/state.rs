use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeService;
use crate::session::SharedSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generative backend. `GeminiClient` in production.
    pub llm: Arc<dyn GenerativeService>,
    /// The one audit session this instance serves.
    pub session: SharedSession,
    pub config: Config,
}
