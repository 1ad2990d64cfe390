use crate::{env_or_default, ConfigError, FromEnv};

/// Browser origins allowed to call the API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

impl FromEnv for CorsConfig {
    /// Reads `FRONTEND_URL` as a comma-separated list of origins.
    /// Unset or empty means no cross-origin browser access.
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("FRONTEND_URL", "");
        let allowed_origins = raw
            .split(',')
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { allowed_origins })
    }
}
