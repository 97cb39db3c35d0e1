use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Where anonymous requests are sent to sign in
    pub login_url: String,
    /// Header the identity-aware proxy sets to the authenticated subject
    pub auth_user_header: String,
    /// Create missing tables on startup
    pub run_migrations: bool,
    /// Hide resumes owned by other users behind a 404
    pub enforce_ownership: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: match env::var("PORT") {
                Ok(port) => port.parse().context("PORT must be a port number")?,
                Err(_) => 8080,
            },
            login_url: env::var("LOGIN_URL").unwrap_or_else(|_| "/accounts/login/".to_string()),
            auth_user_header: env::var("AUTH_USER_HEADER")
                .map(|h| h.to_ascii_lowercase())
                .unwrap_or_else(|_| "x-forwarded-user".to_string()),
            run_migrations: parse_flag(env::var("RUN_MIGRATIONS").ok().as_deref(), true),
            enforce_ownership: parse_flag(env::var("ENFORCE_OWNERSHIP").ok().as_deref(), false),
        })
    }
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
