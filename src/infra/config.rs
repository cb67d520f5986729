//! Centralized configuration (environment variables + defaults).

/// Listening port, defaults to 3000 if unset or unparseable.
pub fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(3000)
}

/// Database URL, defaults to the on-disk catalog file in the working directory.
///
/// `mode=rwc` creates the file on first start.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://moviesData.db?mode=rwc".to_string())
}
