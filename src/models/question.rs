// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A multiple-choice question sent to the client.
///
/// `id` is the correct word itself; the server keeps no pending-question state and
/// grades whatever `id` the client echoes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub definition: String,
    pub options: Vec<String>,
}

/// Query parameters for `/question` and `/question/{category}`.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionParams {
    pub category: Option<String>,
}

/// DTO for submitting an answer.
#[derive(Debug, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(min = 1, max = 200, message = "id must be between 1 and 200 characters."))]
    pub id: String,
    #[validate(length(max = 200, message = "choice must be at most 200 characters."))]
    pub choice: String,
}

/// Grading result. `score` is absent when score tracking is disabled.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub correct: bool,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: u64,
}
