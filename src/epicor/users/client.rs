use std::fmt;
use std::str::FromStr;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::epicor::users::config::Config;
use crate::epicor::users::error::{Result, SyncError};

const JSON: &str = "application/json";

/// The two verbs the ERP dialect is driven with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Method {
    /// Creates a resource in a collection.
    Post,
    /// Updates a single addressed resource.
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }

    fn to_http(self) -> reqwest::Method {
        match self {
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

impl FromStr for Method {
    type Err = SyncError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_uppercase().as_str() {
            "POST" | "CREATE" => Ok(Method::Post),
            "PATCH" | "UPDATE" => Ok(Method::Patch),
            _ => Err(SyncError::InvalidMethod(value.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blocking client for the ERP REST service. Every call is a single attempt
/// authenticated with HTTP Basic credentials.
pub struct ErpClient {
    http: Client,
    base_url: String,
    user_id: String,
    password: String,
}

impl ErpClient {
    /// Builds a client from the startup configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            user_id: config.user_id.clone(),
            password: config.password.clone(),
        })
    }

    /// Full URL of `endpoint` below the configured base URL.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Sends `payload` to `endpoint` using the verb named by `method`.
    ///
    /// Verbs other than create (`POST`) and update (`PATCH`) are rejected
    /// before any connection is made. On success the decoded response body
    /// is returned.
    pub fn send<T>(&self, endpoint: &str, payload: &T, method: &str) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let method = method.parse::<Method>()?;
        self.request(method, endpoint, payload)
    }

    /// Any non-2xx status is an error carrying the status and body. An empty
    /// success body decodes to `Value::Null`.
    #[instrument(level = "debug", skip(self, method, payload), fields(method = %method))]
    fn request<T>(&self, method: Method, endpoint: &str, payload: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        debug!(%url, "sending request");

        let response = self
            .http
            .request(method.to_http(), &url)
            .basic_auth(&self.user_id, Some(&self.password))
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .json(payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(SyncError::Http {
                method: method.as_str(),
                url,
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
