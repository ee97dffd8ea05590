// src/handlers/page.rs

use std::sync::Arc;

use axum::{
    Extension,
    extract::State,
    response::{Html, IntoResponse},
};

use crate::{
    config::Config,
    error::AppError,
    models::word::Vocabulary,
    store::{ScoreStore, SessionId},
    utils::{html::category_options, template::PageTemplate},
};

/// Renders the quiz page with the session's current score.
pub async fn index(
    State(page): State<Arc<PageTemplate>>,
    State(vocabulary): State<Arc<Vocabulary>>,
    State(scores): State<Arc<dyn ScoreStore>>,
    State(config): State<Config>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    let score = if config.track_score {
        scores.get(&session).await?
    } else {
        0
    };

    let score = score.to_string();
    let categories = category_options(&vocabulary.categories());

    Ok(Html(page.render(&[
        ("score", score.as_str()),
        ("categories", categories.as_str()),
    ])))
}
