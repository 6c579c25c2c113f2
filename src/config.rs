//! Site configuration parsed from environment variables.

pub const DEFAULT_CMS_BASE_URL: &str = "http://localhost:1337";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CMS_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CMS_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SITE_NAME: &str = "LandingPage";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmsTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// CMS origin without a trailing slash. Also the media base URL.
    pub cms_base_url: String,
    pub port: u16,
    pub timeouts: CmsTimeouts,
    pub site_name: String,
}

impl SiteConfig {
    /// Build typed site config from environment variables.
    ///
    /// Optional:
    /// - `STRAPI_BASE_URL`: default `http://localhost:1337`
    /// - `PORT`: default 3000
    /// - `CMS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `CMS_CONNECT_TIMEOUT_SECS`: default 10
    /// - `SITE_NAME`: default `LandingPage`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cms_base_url = normalize_base_url(
            std::env::var("STRAPI_BASE_URL")
                .ok()
                .as_deref()
                .unwrap_or(DEFAULT_CMS_BASE_URL),
        );

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };

        let timeouts = CmsTimeouts {
            request_secs: env_parse_u64("CMS_REQUEST_TIMEOUT_SECS", DEFAULT_CMS_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("CMS_CONNECT_TIMEOUT_SECS", DEFAULT_CMS_CONNECT_TIMEOUT_SECS),
        };

        let site_name = std::env::var("SITE_NAME")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned());

        Ok(Self { cms_base_url, port, timeouts, site_name })
    }

    /// Config pointing at `base_url` with defaults for everything else.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            cms_base_url: normalize_base_url(base_url),
            port: DEFAULT_PORT,
            timeouts: CmsTimeouts {
                request_secs: DEFAULT_CMS_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CMS_CONNECT_TIMEOUT_SECS,
            },
            site_name: DEFAULT_SITE_NAME.to_owned(),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_CMS_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
