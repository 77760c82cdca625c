use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Which air-quality API the dashboard talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// API server running on this machine.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000/api".to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL of the server hosting the API, for endpoints such as
    /// `/health` that live outside the `/api` prefix.
    pub fn service_root(&self) -> String {
        let api_url = self.api_url();
        match api_url.strip_suffix("/api") {
            Some(root) => root.to_string(),
            None => api_url,
        }
    }

    /// Picks the endpoint from, in order: an explicit URL, the `AQI_API_URL`
    /// environment variable, the config file, the local default.
    pub fn resolve(cli_url: Option<&str>, env_url: Option<&str>, config_url: Option<&str>) -> Self {
        [cli_url, env_url, config_url]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .map(|url| url.parse().unwrap_or_default())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(()),
            "local" => Ok(Environment::Local),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: trimmed.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
