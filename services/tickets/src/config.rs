/// Tickets service configuration loaded from environment variables.
#[derive(Debug)]
pub struct TicketsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3200). Env var: `TICKETS_PORT`.
    pub tickets_port: u16,
    /// HS256 secret for access tokens.
    pub jwt_secret: String,
    /// Base URL of the external identity provider (e.g. "http://identity:9099").
    pub identity_provider_url: String,
}

impl TicketsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            tickets_port: std::env::var("TICKETS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3200),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            identity_provider_url: std::env::var("IDENTITY_PROVIDER_URL")
                .expect("IDENTITY_PROVIDER_URL"),
        }
    }
}
