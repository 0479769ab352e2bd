//! CORS Config

use clap::Args;

/// Origin value allowing every browser origin.
pub(crate) const ANY_ORIGIN: &str = "*";

/// Cross-origin settings for the browser client.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Allowed origins, comma separated, or `*` for any origin
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',', default_value = ANY_ORIGIN)]
    pub cors_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether every origin is allowed.
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin.trim() == ANY_ORIGIN)
    }
}
