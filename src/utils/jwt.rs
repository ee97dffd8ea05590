// src/utils/jwt.rs

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::AppError,
    store::SessionId,
    utils::cookie::{build_session_cookie, get_cookie},
};

/// Session token claims.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionClaims {
    /// Subject - the opaque session id.
    pub sub: String,
    /// Issued-at as Unix timestamp.
    pub iat: usize,
    /// Expiration time as Unix timestamp.
    pub exp: usize,
}

fn now_secs() -> Result<usize, AppError> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .as_secs() as usize)
}

fn ttl_secs(ttl_seconds: u64) -> usize {
    usize::try_from(ttl_seconds).unwrap_or(usize::MAX)
}

/// Signs a session token valid for `ttl_seconds`.
pub fn sign_session_token(
    session: &SessionId,
    secret: &str,
    ttl_seconds: u64,
) -> Result<String, AppError> {
    let now = now_secs()?;

    let claims = SessionClaims {
        sub: session.to_string(),
        iat: now,
        exp: now.saturating_add(ttl_secs(ttl_seconds)),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Verifies and decodes a session token.
///
/// Tampered, expired or malformed tokens are rejected.
pub fn verify_session_token(token: &str, secret: &str) -> Result<SessionClaims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::BadRequest("Invalid session token".to_string()))?;

    Ok(token_data.claims)
}

/// True once less than half of the token lifetime remains.
fn needs_refresh(claims: &SessionClaims, ttl_seconds: u64) -> bool {
    let Ok(now) = now_secs() else {
        return true;
    };
    claims.exp.saturating_sub(now) < ttl_secs(ttl_seconds) / 2
}

/// Axum Middleware: Session resolution.
///
/// Reads the signed session cookie and injects its `SessionId` into the request
/// extensions. A missing or invalid cookie starts a fresh session. New sessions and
/// tokens past half their lifetime get a `Set-Cookie` on the response.
pub async fn session_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let claims = get_cookie(req.headers(), &config.session_cookie_name)
        .and_then(|token| verify_session_token(&token, &config.session_secret).ok());

    let (session, reissue) = match claims {
        Some(claims) => {
            let refresh = needs_refresh(&claims, config.session_ttl);
            (SessionId::from(claims.sub), refresh)
        }
        None => {
            let session = SessionId::new();
            tracing::debug!(session = %session, "Starting new session");
            (session, true)
        }
    };

    req.extensions_mut().insert(session.clone());
    let mut response = next.run(req).await;

    if reissue {
        match sign_session_token(&session, &config.session_secret, config.session_ttl) {
            Ok(token) => {
                let cookie = build_session_cookie(
                    &config.session_cookie_name,
                    &token,
                    config.session_ttl,
                    config.cookie_secure,
                );
                match HeaderValue::from_str(&cookie) {
                    Ok(value) => {
                        response.headers_mut().append(header::SET_COOKIE, value);
                    }
                    Err(e) => tracing::error!("Invalid session cookie header: {:?}", e),
                }
            }
            Err(e) => tracing::error!(session = %session, "Failed to sign session token: {}", e),
        }
    }

    response
}
