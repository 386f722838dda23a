use crate::errors::ConfigError;
use crate::i18n::Lang;
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_STATIC_IMG_PREFIX: &str = "/static/img/";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// Backend origin queried by the lookup client.
    pub api_base_url: String,
    /// Origin prepended to navigation targets and root-relative images.
    /// Empty when the front is served from the backend's own origin.
    pub public_base_url: String,
    pub static_img_prefix: String,
    pub lang: Lang,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            public_base_url: String::new(),
            static_img_prefix: DEFAULT_STATIC_IMG_PREFIX.to_string(),
            lang: Lang::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("PORT", format!("'{port}' is not a port number")))?;
        }
        if let Some(url) = lookup("APP_API_BASE_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                return Err(ConfigError::invalid("APP_API_BASE_URL", "must not be empty"));
            }
            config.api_base_url = url.to_string();
        }
        if let Some(url) = lookup("APP_PUBLIC_BASE_URL") {
            config.public_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(prefix) = lookup("APP_STATIC_IMG_PREFIX") {
            let prefix = prefix.trim();
            if !prefix.is_empty() {
                config.static_img_prefix = if prefix.ends_with('/') {
                    prefix.to_string()
                } else {
                    format!("{prefix}/")
                };
            }
        }
        if let Some(lang) = lookup("APP_LANG") {
            config.lang = lang
                .parse()
                .map_err(|reason: String| ConfigError::invalid("APP_LANG", reason))?;
        }

        Ok(config)
    }

    /// Absolute URL for a path on the public origin. Absolute URLs pass
    /// through untouched.
    pub fn public_url(&self, path: &str) -> String {
        if path.starts_with("http") || !path.starts_with('/') {
            return path.to_string();
        }
        format!("{}{}", self.public_base_url, path)
    }
}
