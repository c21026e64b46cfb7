//! # Keycloak Integration Library
//!
//! An async client for the Keycloak admin and authentication REST APIs:
//! - OpenID Connect token flows (password, client credentials, refresh, token exchange, UMA)
//! - Token introspection, user info, issuer metadata and realm certificates
//! - Realm, client, client scope, group, role and user administration
//! - Authorization services (resources, scopes, policies, permissions)
//! - UMA protection API (resource sets, permission tickets, user-managed policies)
//! - Components, identity providers and organizations
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_keycloak::{GetUsersParams, KeycloakClient, SecretString};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KeycloakClient::new("https://sso.example.com")?;
//!
//!     let password = SecretString::new(std::env::var("KEYCLOAK_PASSWORD")?);
//!     let token = client
//!         .tokens()
//!         .login_admin("admin", &password, "master")
//!         .await?;
//!
//!     let params = GetUsersParams {
//!         search: Some("alice".to_string()),
//!         ..Default::default()
//!     };
//!     let users = client
//!         .users()
//!         .get_users(&token.access_token, "master", &params)
//!         .await?;
//!     for user in users {
//!         println!("{}", user);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// HTTP client and transport
pub mod client;
pub mod transport;

// Query string encoding
pub mod query;

// API services
pub mod services;

// Option helpers
pub mod utils;

// Re-exports for convenience
pub use client::{KeycloakClient, KeycloakClientBuilder};
pub use config::{KeycloakConfig, KeycloakConfigBuilder};
pub use errors::{parse_api_error_type, ApiErrorType, KeycloakError, KeycloakErrorKind, KeycloakResult};
pub use query::{get_query_params, QueryParams};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use types::*;
pub use utils::*;

pub use secrecy::{ExposeSecret, SecretString};
