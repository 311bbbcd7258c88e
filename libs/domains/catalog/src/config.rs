use core_config::{ConfigError, Environment, FromEnv, env_or_default};

const DEFAULT_PICTURE_BASE_URL: &str = "http://localhost/assets/images";

/// Catalog domain configuration
#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub environment: Environment,
    /// Host and path prefix item pictures are served from
    pub picture_base_url: String,
}

impl FromEnv for CatalogConfig {
    /// Reads from environment variables:
    /// - APP_ENV: see [`Environment::from_env`]
    /// - CATALOG_PICTURE_BASE_URL: defaults to `http://localhost/assets/images`
    fn from_env() -> Result<Self, ConfigError> {
        let picture_base_url =
            env_or_default("CATALOG_PICTURE_BASE_URL", DEFAULT_PICTURE_BASE_URL);
        if !picture_base_url.starts_with("http://") && !picture_base_url.starts_with("https://") {
            return Err(ConfigError::ParseError {
                key: "CATALOG_PICTURE_BASE_URL".to_string(),
                details: format!("expected an http(s) URL, got '{}'", picture_base_url),
            });
        }

        Ok(Self {
            environment: Environment::from_env(),
            picture_base_url,
        })
    }
}

impl CatalogConfig {
    /// Install the process-wide subscriber for this deployment environment
    pub fn init_tracing(&self) {
        core_config::tracing::init_tracing(&self.environment);
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            picture_base_url: DEFAULT_PICTURE_BASE_URL.to_string(),
        }
    }
}
