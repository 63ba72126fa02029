use std::sync::Arc;

use crate::config::Config;
use crate::heatmap::palette::Palette;
use crate::source::CandidateSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Mock fixture or people backend, chosen at startup via USE_MOCK_DATA.
    pub source: Arc<dyn CandidateSource>,
    pub palette: Palette,
}
