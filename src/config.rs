use http::Uri;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

// Published with the site; EmailJS public keys are meant to ship to browsers.
const DEFAULT_SERVICE_ID: &str = "service_734f09k";
const DEFAULT_TEMPLATE_ID: &str = "template_1nwi4dc";
const DEFAULT_PUBLIC_KEY: &str = "600nWhWzRkSPRLiFR";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
    #[error("invalid email endpoint {0:?}")]
    InvalidEndpoint(String),
}

/// Credentials for the transactional email service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Sent as `accessToken`. Required when the account runs in strict mode.
    pub private_key: Option<String>,
    pub endpoint: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
            private_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to the published values for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &'static str, default: String| match lookup(key) {
            Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(key)),
            Some(v) => Ok(v),
            None => Ok(default),
        };
        let config = Self {
            service_id: get("EMAILJS_SERVICE_ID", defaults.service_id)?,
            template_id: get("EMAILJS_TEMPLATE_ID", defaults.template_id)?,
            public_key: get("EMAILJS_PUBLIC_KEY", defaults.public_key)?,
            private_key: match lookup("EMAILJS_PRIVATE_KEY") {
                Some(v) if v.trim().is_empty() => return Err(ConfigError::Empty("EMAILJS_PRIVATE_KEY")),
                v => v,
            },
            endpoint: get("EMAILJS_ENDPOINT", defaults.endpoint)?,
        };
        let uri = config
            .endpoint
            .parse::<Uri>()
            .map_err(|_| ConfigError::InvalidEndpoint(config.endpoint.clone()))?;
        if !matches!(uri.scheme_str(), Some("http" | "https")) || uri.host().is_none() {
            return Err(ConfigError::InvalidEndpoint(config.endpoint));
        }
        Ok(config)
    }
}
