//! Token endpoint payloads.

use super::flexible::StringOrArray;
use super::render::impl_pretty_display;
use crate::errors::KeycloakResult;
use crate::query::get_query_params;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grant type of the resource owner password flow.
pub const GRANT_TYPE_PASSWORD: &str = "password";

/// Grant type of the client credentials flow.
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";

/// Grant type of a refresh.
pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";

/// Grant type of the token exchange flow.
pub const GRANT_TYPE_TOKEN_EXCHANGE: &str = "urn:ietf:params:oauth:grant-type:token-exchange";

/// Grant type of a UMA requesting party token.
pub const GRANT_TYPE_UMA_TICKET: &str = "urn:ietf:params:oauth:grant-type:uma-ticket";

/// Token set returned by the token endpoint.
///
/// `Debug` redacts the tokens; `Display` renders the full body.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwtToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub id_token: String,
    /// Access token lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,
    /// Refresh token lifetime in seconds.
    #[serde(default)]
    pub refresh_expires_in: i64,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default, rename = "not-before-policy")]
    pub not_before_policy: i64,
    #[serde(default)]
    pub session_state: String,
    #[serde(default)]
    pub scope: String,
}

impl std::fmt::Debug for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtToken")
            .field("access_token", &"[REDACTED]")
            .field("id_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("refresh_expires_in", &self.refresh_expires_in)
            .field("refresh_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("not_before_policy", &self.not_before_policy)
            .field("session_state", &self.session_state)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Options of a generic token request.
///
/// Sent as a form: scalar fields by their names, `scope` and
/// `response_type` joined with spaces.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(rename = "scope", skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(rename = "response_type", skip_serializing_if = "Option::is_none")]
    pub response_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// One-time password for realms with OTP enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_assertion_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_assertion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_token_type: Option<String>,
}

impl std::fmt::Debug for TokenOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("TokenOptions")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(&self.client_secret))
            .field("grant_type", &self.grant_type)
            .field("refresh_token", &redacted(&self.refresh_token))
            .field("scopes", &self.scopes)
            .field("response_types", &self.response_types)
            .field("permission", &self.permission)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("totp", &redacted(&self.totp))
            .field("code", &redacted(&self.code))
            .field("redirect_uri", &self.redirect_uri)
            .field("client_assertion_type", &self.client_assertion_type)
            .field("client_assertion", &redacted(&self.client_assertion))
            .field("subject_token", &redacted(&self.subject_token))
            .field("requested_subject", &self.requested_subject)
            .field("audience", &self.audience)
            .field("requested_token_type", &self.requested_token_type)
            .finish()
    }
}

impl TokenOptions {
    /// Encodes the options as form fields, sorted by name.
    pub fn form_data(&self) -> KeycloakResult<Vec<(String, String)>> {
        let scalars = TokenOptions {
            scopes: None,
            response_types: None,
            ..self.clone()
        };
        let mut form: Vec<(String, String)> = get_query_params(&scalars)?.into_iter().collect();
        if let Some(scopes) = &self.scopes {
            form.push(("scope".to_string(), scopes.join(" ")));
        }
        if let Some(types) = &self.response_types {
            form.push(("response_type".to_string(), types.join(" ")));
        }
        form.sort();
        Ok(form)
    }
}

/// Options of a UMA requesting party token request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestingPartyTokenOptions {
    /// Defaults to the UMA ticket grant when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claim_token_format: Option<String>,
    /// Previously issued RPT to upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpt: Option<String>,
    /// `resource#scope` entries, each sent as its own `permission` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_include_resource_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_permissions_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_request: Option<bool>,
    /// `decision` or `permissions` to get a verdict instead of a token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_token: Option<String>,
}

impl RequestingPartyTokenOptions {
    /// Encodes the options as form fields.
    pub fn form_data(&self) -> KeycloakResult<Vec<(String, String)>> {
        let scalars = RequestingPartyTokenOptions {
            grant_type: Some(
                self.grant_type
                    .clone()
                    .unwrap_or_else(|| GRANT_TYPE_UMA_TICKET.to_string()),
            ),
            permissions: None,
            ..self.clone()
        };
        let mut form: Vec<(String, String)> = get_query_params(&scalars)?.into_iter().collect();
        form.sort();
        for permission in self.permissions.iter().flatten() {
            form.push(("permission".to_string(), permission.clone()));
        }
        Ok(form)
    }
}

/// Permission granted by a requesting party token in `permissions` mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestingPartyPermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<HashMap<String, String>>,
    #[serde(rename = "rsid", skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(rename = "rsname", skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

/// Verdict of a requesting party token request in `decision` mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestingPartyPermissionDecision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,
}

/// Permission carried by an introspected token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePermission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_scopes: Option<Vec<String>>,
}

/// Result of token introspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntroSpectTokenResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<ResourcePermission>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Audience, a single string or a list depending on the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<StringOrArray>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
    #[serde(rename = "typ", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Postal address claim of the userinfo endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfoAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Standard claims of the userinfo endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoneinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<UserInfoAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// One JSON web key of the realm certificate endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertResponseKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    #[serde(rename = "keyOps", skip_serializing_if = "Option::is_none")]
    pub key_ops: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5u: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5c: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x5t: Option<String>,
    #[serde(rename = "x5t#S256", skip_serializing_if = "Option::is_none")]
    pub x5t_s256: Option<String>,
}

/// Realm certificate endpoint (JWKS).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<CertResponseKey>>,
}

/// Realm issuer endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(rename = "public_key", skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(rename = "token-service", skip_serializing_if = "Option::is_none")]
    pub token_service: Option<String>,
    #[serde(rename = "account-service", skip_serializing_if = "Option::is_none")]
    pub account_service: Option<String>,
    #[serde(rename = "tokens-not-before", skip_serializing_if = "Option::is_none")]
    pub tokens_not_before: Option<i64>,
}

impl_pretty_display!(
    JwtToken,
    TokenOptions,
    RequestingPartyTokenOptions,
    RequestingPartyPermission,
    RequestingPartyPermissionDecision,
    ResourcePermission,
    IntroSpectTokenResult,
    UserInfoAddress,
    UserInfo,
    CertResponseKey,
    CertResponse,
    IssuerResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::string_p;

    #[test]
    fn test_token_options_form_data() {
        let options = TokenOptions {
            client_id: string_p("app"),
            grant_type: string_p(GRANT_TYPE_PASSWORD),
            username: string_p("alice"),
            password: string_p("secret"),
            scopes: Some(vec!["openid".into(), "profile".into()]),
            ..Default::default()
        };

        let form = options.form_data().unwrap();
        let expected: Vec<(String, String)> = [
            ("client_id", "app"),
            ("grant_type", "password"),
            ("password", "secret"),
            ("scope", "openid profile"),
            ("username", "alice"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(form, expected);
    }

    #[test]
    fn test_rpt_options_form_data_repeats_permission() {
        let options = RequestingPartyTokenOptions {
            audience: string_p("resource-server"),
            permissions: Some(vec!["res1#view".into(), "res2".into()]),
            response_mode: string_p("decision"),
            ..Default::default()
        };

        let form = options.form_data().unwrap();
        assert!(form.contains(&("grant_type".to_string(), GRANT_TYPE_UMA_TICKET.to_string())));
        assert!(form.contains(&("audience".to_string(), "resource-server".to_string())));
        let permissions: Vec<&str> = form
            .iter()
            .filter(|(k, _)| k == "permission")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(permissions, vec!["res1#view", "res2"]);
    }

    #[test]
    fn test_jwt_token_decodes_partial_body() {
        let token: JwtToken = serde_json::from_str(
            r#"{"access_token":"abc","expires_in":300,"token_type":"Bearer","not-before-policy":0}"#,
        )
        .unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 300);
        assert!(token.refresh_token.is_empty());
    }

    #[test]
    fn test_jwt_token_debug_redacts_tokens() {
        let token = JwtToken {
            access_token: "eyJ-access".to_string(),
            id_token: "eyJ-id".to_string(),
            refresh_token: "eyJ-refresh".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 300,
            ..Default::default()
        };

        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("Bearer"));
        assert!(debug.contains("300"));

        assert!(token.to_string().contains("\"access_token\": \"eyJ-access\""));
    }

    #[test]
    fn test_token_options_debug_redacts_credentials() {
        let options = TokenOptions {
            client_id: string_p("app"),
            client_secret: string_p("s3cret"),
            password: string_p("hunter2"),
            ..Default::default()
        };

        let debug = format!("{:?}", options);
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("Some(\"[REDACTED]\")"));
        assert!(debug.contains("refresh_token: None"));
        assert!(debug.contains("\"app\""));
    }

    #[test]
    fn test_introspection_audience_forms() {
        let single: IntroSpectTokenResult =
            serde_json::from_str(r#"{"active":true,"aud":"account"}"#).unwrap();
        assert_eq!(single.aud.unwrap().0, vec!["account"]);

        let many: IntroSpectTokenResult =
            serde_json::from_str(r#"{"active":true,"aud":["a","b"]}"#).unwrap();
        assert_eq!(many.aud.unwrap().0, vec!["a", "b"]);
    }
}
