//! Configuration types for the Keycloak client.

use crate::errors::KeycloakError;
use std::time::Duration;

/// Default path prefix of the realm (token, userinfo, certs) endpoints.
pub const DEFAULT_REALMS_PATH: &str = "/realms";

/// Default path prefix of the admin REST API.
pub const DEFAULT_ADMIN_REALMS_PATH: &str = "/admin/realms";

/// Path prefix used by legacy WildFly based distributions.
pub const LEGACY_WILDFLY_PREFIX: &str = "/auth";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-keycloak/0.1.0";

/// Keycloak client configuration.
#[derive(Debug, Clone)]
pub struct KeycloakConfig {
    /// Server base URL, e.g. `https://sso.example.com`.
    pub base_url: String,
    /// Path prefix of the realm endpoints.
    pub realms_path: String,
    /// Path prefix of the admin endpoints.
    pub admin_realms_path: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for KeycloakConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            realms_path: DEFAULT_REALMS_PATH.to_string(),
            admin_realms_path: DEFAULT_ADMIN_REALMS_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl KeycloakConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> KeycloakConfigBuilder {
        KeycloakConfigBuilder::new()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KeycloakError> {
        if self.base_url.is_empty() {
            return Err(KeycloakError::configuration("Base URL cannot be empty"));
        }

        let url = url::Url::parse(&self.base_url)
            .map_err(|e| KeycloakError::configuration(format!("Invalid base URL: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(KeycloakError::configuration(
                "Base URL must start with http:// or https://",
            ));
        }

        for (name, path) in [
            ("realms path", &self.realms_path),
            ("admin realms path", &self.admin_realms_path),
        ] {
            if !path.starts_with('/') {
                return Err(KeycloakError::configuration(format!(
                    "The {} must start with '/': {}",
                    name, path
                )));
            }
        }

        Ok(())
    }
}

/// Builder for KeycloakConfig.
#[derive(Debug, Default)]
pub struct KeycloakConfigBuilder {
    base_url: Option<String>,
    realms_path: Option<String>,
    admin_realms_path: Option<String>,
    legacy_wildfly_support: bool,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl KeycloakConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the path prefix of the realm endpoints.
    pub fn realms_path(mut self, path: impl Into<String>) -> Self {
        self.realms_path = Some(path.into());
        self
    }

    /// Sets the path prefix of the admin endpoints.
    pub fn admin_realms_path(mut self, path: impl Into<String>) -> Self {
        self.admin_realms_path = Some(path.into());
        self
    }

    /// Prefixes both paths with `/auth` for pre-Quarkus distributions.
    pub fn legacy_wildfly_support(mut self) -> Self {
        self.legacy_wildfly_support = true;
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<KeycloakConfig, KeycloakError> {
        let prefix = if self.legacy_wildfly_support {
            LEGACY_WILDFLY_PREFIX
        } else {
            ""
        };
        let realms_path = self
            .realms_path
            .unwrap_or_else(|| DEFAULT_REALMS_PATH.to_string());
        let admin_realms_path = self
            .admin_realms_path
            .unwrap_or_else(|| DEFAULT_ADMIN_REALMS_PATH.to_string());

        let config = KeycloakConfig {
            base_url: self
                .base_url
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            realms_path: format!("{}{}", prefix, realms_path),
            admin_realms_path: format!("{}{}", prefix, admin_realms_path),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}
