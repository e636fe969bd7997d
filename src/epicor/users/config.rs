use std::fmt;

use tracing::debug;

use crate::epicor::users::error::{Result, SyncError};

pub const API_URL_VAR: &str = "EPICOR_API_URL";
pub const USER_ID_VAR: &str = "EPICOR_USER_ID";
pub const PASSWORD_VAR: &str = "EPICOR_PASSWORD";
pub const COMPANY_DOMAIN_VAR: &str = "COMPANY_DOMAIN";

/// Connection settings for the ERP and the mail domain used for new
/// accounts. Built once at startup and handed to the calls that need it.
#[derive(Clone)]
pub struct Config {
    /// Base URL of the ERP REST service, e.g. `https://host/api/v1`.
    pub api_url: String,
    /// Basic auth user.
    pub user_id: String,
    /// Basic auth password.
    pub password: String,
    /// Domain appended to derived user IDs to build email addresses.
    pub company_domain: String,
}

impl Config {
    /// Loads the configuration from the process environment, reading a
    /// `.env` file from the working directory first when one exists.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded environment file"),
            Err(error) if error.not_found() => {}
            Err(error) => return Err(error.into()),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(SyncError::MissingEnv(name))
        };

        Ok(Self {
            api_url: require(API_URL_VAR)?,
            user_id: require(USER_ID_VAR)?,
            password: require(PASSWORD_VAR)?,
            company_domain: require(COMPANY_DOMAIN_VAR)?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .field("company_domain", &self.company_domain)
            .finish()
    }
}
