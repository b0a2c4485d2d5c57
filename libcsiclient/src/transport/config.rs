//! Client configuration.
//!
//! A [`ClientConfig`] can be loaded from YAML and then overridden by
//! environment variables:
//!
//! - `CSI_ENDPOINT`: controller URI, e.g. `http://10.0.0.5:10000`.
//! - `CSI_CONNECT_TIMEOUT_MS`: connection establishment timeout.
//! - `CSI_REQUEST_TIMEOUT_MS`: default per-call deadline; `0` disables it.
//! - `CSI_VERSION`: protocol version sent with every request.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tonic::transport::Endpoint;

use crate::context::CallContext;
use crate::csi::Version;
use crate::error::ConfigError;

pub const ENV_ENDPOINT: &str = "CSI_ENDPOINT";
pub const ENV_CONNECT_TIMEOUT_MS: &str = "CSI_CONNECT_TIMEOUT_MS";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "CSI_REQUEST_TIMEOUT_MS";
pub const ENV_VERSION: &str = "CSI_VERSION";

/// Settings for reaching a CSI controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Controller URI.
    pub endpoint: String,
    pub connect_timeout_ms: u64,
    /// Default deadline for each call; `None` means calls are unbounded.
    pub request_timeout_ms: Option<u64>,
    /// Protocol version as `major.minor.patch`.
    pub version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:10000".to_owned(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: Some(30_000),
            version: "0.0.1".to_owned(),
        }
    }
}

impl ClientConfig {
    /// Parse a YAML document; missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse the YAML file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(value) = lookup(ENV_CONNECT_TIMEOUT_MS) {
            self.connect_timeout_ms = parse_millis(ENV_CONNECT_TIMEOUT_MS, value)?;
        }
        if let Some(value) = lookup(ENV_REQUEST_TIMEOUT_MS) {
            let ms = parse_millis(ENV_REQUEST_TIMEOUT_MS, value)?;
            self.request_timeout_ms = (ms > 0).then_some(ms);
        }
        if let Some(version) = lookup(ENV_VERSION) {
            self.version = version;
        }
        Ok(self)
    }

    /// The configured protocol version.
    pub fn version(&self) -> Result<Version, ConfigError> {
        Ok(self.version.parse::<Version>()?)
    }

    /// The default per-call deadline.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// A fresh context carrying the default request deadline.
    pub fn call_context(&self) -> CallContext {
        match self.request_timeout() {
            Some(timeout) => CallContext::with_timeout(timeout),
            None => CallContext::background(),
        }
    }

    /// The tonic endpoint described by this configuration.
    pub fn endpoint(&self) -> Result<Endpoint, ConfigError> {
        let endpoint =
            Endpoint::from_shared(self.endpoint.clone()).map_err(ConfigError::Endpoint)?;
        Ok(endpoint.connect_timeout(Duration::from_millis(self.connect_timeout_ms)))
    }
}

fn parse_millis(key: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
