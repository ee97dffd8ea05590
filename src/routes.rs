// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{health, page, quiz},
    state::AppState,
    utils::jwt::session_middleware,
};

/// Assembles the main application router.
///
/// * Session-scoped routes (page, question, answer, reset) run behind the session cookie middleware.
/// * `/health` and `/static` are served without touching sessions.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let session_routes = Router::new()
        .route("/", get(page::index))
        .route("/question", get(quiz::get_question))
        .route("/question/{category}", get(quiz::get_category_question))
        .route("/answer", post(quiz::submit_answer))
        .route("/reset", post(quiz::reset_score))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    let static_service = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(session_routes)
        .route("/health", get(health::health))
        .nest_service("/static", static_service)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
