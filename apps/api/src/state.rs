use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::roles::RoleCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production; a stub in tests.
    pub llm: Arc<dyn TextGenerator>,
    /// Read-only role catalog, loaded once at startup.
    pub roles: Arc<RoleCatalog>,
    pub config: Config,
}
