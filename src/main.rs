// src/main.rs

use std::{sync::Arc, time::Duration};

use vocab_quiz::config::{Config, SESSION_PURGE_INTERVAL_SECS};
use vocab_quiz::logging::init_tracing;
use vocab_quiz::models::word::Vocabulary;
use vocab_quiz::routes;
use vocab_quiz::state::AppState;
use vocab_quiz::store::{InMemoryScoreStore, ScoreStore};
use vocab_quiz::utils::template::PageTemplate;

use dotenvy::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Logging comes first so configuration warnings are visible.
    let _guard = init_tracing();

    // Load configuration from environment
    let config = Config::from_env();

    let vocabulary = Vocabulary::from_file(&config.words_file).inspect_err(|e| {
        tracing::error!("Failed to load vocabulary from {}: {}", config.words_file, e);
    })?;

    tracing::info!(
        "Loaded {} words ({} categories) from {}",
        vocabulary.len(),
        vocabulary.categories().len(),
        config.words_file
    );
    if vocabulary.distinct_word_count() < vocab_quiz::config::OPTION_COUNT {
        tracing::warn!(
            "Vocabulary has only {} distinct words; questions will offer fewer options",
            vocabulary.distinct_word_count()
        );
    }

    let scores = Arc::new(InMemoryScoreStore::new(config.session_ttl));
    spawn_session_purge(scores.clone());

    // Create AppState
    let state = AppState {
        vocabulary: Arc::new(vocabulary),
        scores,
        page: Arc::new(PageTemplate::load_or_default(&config.template_file)),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .inspect_err(|e| tracing::error!("Failed to bind {}: {}", config.bind_addr, e))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Periodically drops sessions that have been idle longer than the TTL.
fn spawn_session_purge(store: Arc<InMemoryScoreStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(SESSION_PURGE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            match store.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => tracing::debug!("Purged {} idle sessions", removed),
                Err(e) => tracing::warn!("Session purge failed: {}", e),
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
