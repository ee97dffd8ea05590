use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    models::word::Vocabulary,
    store::{InMemoryScoreStore, ScoreStore},
    utils::template::PageTemplate,
};

#[derive(Clone)]
pub struct AppState {
    pub vocabulary: Arc<Vocabulary>,
    pub scores: Arc<dyn ScoreStore>,
    pub page: Arc<PageTemplate>,
    pub config: Config,
}

impl AppState {
    /// State backed by the in-memory score store and the built-in page template.
    pub fn new(vocabulary: Vocabulary, config: Config) -> Self {
        let scores = Arc::new(InMemoryScoreStore::new(config.session_ttl));
        Self {
            vocabulary: Arc::new(vocabulary),
            scores,
            page: Arc::new(PageTemplate::default()),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<Vocabulary> {
    fn from_ref(state: &AppState) -> Self {
        state.vocabulary.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ScoreStore> {
    fn from_ref(state: &AppState) -> Self {
        state.scores.clone()
    }
}

impl FromRef<AppState> for Arc<PageTemplate> {
    fn from_ref(state: &AppState) -> Self {
        state.page.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
