// src/config.rs

use std::{env, net::SocketAddr, str::FromStr};

use dotenvy::dotenv;

/// Number of options offered per question (the correct word plus distractors).
pub const OPTION_COUNT: usize = 4;

/// How often idle sessions are swept from the score store.
pub const SESSION_PURGE_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub words_file: String,
    pub session_secret: String,
    pub session_ttl: u64,
    pub session_cookie_name: String,
    pub cookie_secure: bool,
    /// When false the service runs as the stateless variant: answers carry no score.
    pub track_score: bool,
    /// When true, answers whose `id` is not a vocabulary word are rejected.
    pub strict_answers: bool,
    pub static_dir: String,
    pub template_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let bind_addr = parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)));

        let words_file = env::var("WORDS_FILE").unwrap_or_else(|_| "data/words.json".to_string());

        let session_secret = match env::var("SESSION_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "SESSION_SECRET not set, using a random secret; sessions will not survive a restart"
                );
                format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
            }
        };

        let session_ttl = parse_or("SESSION_TTL_SECS", 86_400u64);

        let session_cookie_name =
            env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "quiz_session".to_string());

        let cookie_secure = parse_flag("COOKIE_SECURE", false);
        let track_score = parse_flag("TRACK_SCORE", true);
        let strict_answers = parse_flag("STRICT_ANSWERS", false);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let template_file =
            env::var("TEMPLATE_FILE").unwrap_or_else(|_| "templates/index.html".to_string());

        Self {
            bind_addr,
            words_file,
            session_secret,
            session_ttl,
            session_cookie_name,
            cookie_secure,
            track_score,
            strict_answers,
            static_dir,
            template_file,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid value for {}: {:?}, using default", key, raw);
        default
    })
}

fn parse_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => parse_bool(&raw).unwrap_or_else(|| {
            tracing::warn!("Invalid boolean for {}: {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
