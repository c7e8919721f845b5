use std::sync::Arc;

use crate::archive::store::ArchiveStore;
use crate::extraction::extractor::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub archive: ArchiveStore,
    /// Pluggable extraction backend. Production: `OllamaExtractor`.
    pub extractor: Arc<dyn ResumeExtractor>,
}
