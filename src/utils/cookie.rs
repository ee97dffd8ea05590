// src/utils/cookie.rs

use axum::http::{HeaderMap, header};

/// Looks up a cookie value across all `Cookie` headers.
pub fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Builds a `Set-Cookie` value for the session token.
pub fn build_session_cookie(name: &str, token: &str, max_age: u64, secure: bool) -> String {
    let mut parts = Vec::with_capacity(6);

    parts.push(format!("{name}={token}"));
    parts.push("Path=/".to_string());
    parts.push(format!("Max-Age={max_age}"));
    parts.push("HttpOnly".to_string());
    parts.push("SameSite=Lax".to_string());

    if secure {
        parts.push("Secure".to_string());
    }

    parts.join("; ")
}
