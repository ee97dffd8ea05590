// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    models::{
        question::{AnswerRequest, AnswerResponse, Question, QuestionParams, ScoreResponse},
        word::Vocabulary,
    },
    quiz,
    store::{ScoreStore, SessionId},
};

/// Path segment wins over the query string; empty values mean "no filter".
fn resolve_category(path: Option<String>, query: Option<String>) -> Option<String> {
    path.filter(|c| !c.is_empty())
        .or_else(|| query.filter(|c| !c.is_empty()))
}

fn build_question(
    vocabulary: &Vocabulary,
    category: Option<String>,
) -> Result<Json<Question>, AppError> {
    let question = quiz::generate_question(vocabulary, category.as_deref(), &mut rand::thread_rng())
        .inspect_err(|_| {
            tracing::debug!("Question requested for unknown category {:?}", category);
        })?;

    tracing::debug!(
        word = %question.id,
        category = ?category,
        options = question.options.len(),
        "Question issued"
    );

    Ok(Json(question))
}

/// Issues a random question, optionally filtered by `?category=`.
pub async fn get_question(
    State(vocabulary): State<Arc<Vocabulary>>,
    Query(params): Query<QuestionParams>,
) -> Result<impl IntoResponse, AppError> {
    build_question(&vocabulary, resolve_category(None, params.category))
}

/// Issues a random question from the category named in the path.
pub async fn get_category_question(
    State(vocabulary): State<Arc<Vocabulary>>,
    Path(category): Path<String>,
    Query(params): Query<QuestionParams>,
) -> Result<impl IntoResponse, AppError> {
    build_question(&vocabulary, resolve_category(Some(category), params.category))
}

/// Grades an answer against the echoed question id.
///
/// * Correctness is strict string equality between `choice` and `id`.
/// * A correct answer adds one point to the session score.
/// * With score tracking disabled the response carries no `score`.
pub async fn submit_answer(
    State(vocabulary): State<Arc<Vocabulary>>,
    State(scores): State<Arc<dyn ScoreStore>>,
    State(config): State<Config>,
    Extension(session): Extension<SessionId>,
    payload: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    if config.strict_answers && !vocabulary.contains_word(&req.id) {
        return Err(AppError::BadRequest(format!("Unknown word '{}'", req.id)));
    }

    let correct = quiz::is_correct(&req.id, &req.choice);

    let score = if config.track_score {
        let score = if correct {
            scores.increment(&session).await?
        } else {
            scores.get(&session).await?
        };
        Some(score)
    } else {
        None
    };

    tracing::info!(session = %session, word = %req.id, correct, score = ?score, "Answer graded");

    Ok(Json(AnswerResponse {
        correct,
        answer: req.id,
        score,
    }))
}

/// Resets the session score to zero.
pub async fn reset_score(
    State(scores): State<Arc<dyn ScoreStore>>,
    State(config): State<Config>,
    Extension(session): Extension<SessionId>,
) -> Result<impl IntoResponse, AppError> {
    if config.track_score {
        scores.set(&session, 0).await?;
    }

    tracing::info!(session = %session, "Score reset");

    Ok(Json(ScoreResponse { score: 0 }))
}
