/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3100). Env var: `API_PORT`.
    pub api_port: u16,
    /// Filesystem root for uploaded media (default "./media"). Env var: `MEDIA_ROOT`.
    pub media_root: String,
    /// URL prefix media paths are served under (default "/media"). Env var: `MEDIA_BASE_URL`.
    pub media_base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3100),
            media_root: std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_owned()),
            media_base_url: std::env::var("MEDIA_BASE_URL")
                .unwrap_or_else(|_| "/media".to_owned()),
        }
    }
}
