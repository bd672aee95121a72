use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::resume::session::SessionStore;
use crate::search_client::SearchProvider;
use crate::video_client::VideoSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Text generation backend. Default: Gemini via `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    /// Job and web search backend. Default: SerpApi via `SerpClient`.
    pub search: Arc<dyn SearchProvider>,
    pub videos: Arc<dyn VideoSearch>,
    /// Per-upload resume profiles, in memory only.
    pub sessions: SessionStore,
}
