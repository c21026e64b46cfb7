//! OpenID Connect token endpoint operations.

use crate::client::KeycloakClient;
use crate::errors::KeycloakResult;
use crate::types::{
    CertResponse, IntroSpectTokenResult, IssuerResponse, JwtToken, RequestingPartyPermission,
    RequestingPartyPermissionDecision, RequestingPartyTokenOptions, TokenOptions, UserInfo,
    GRANT_TYPE_CLIENT_CREDENTIALS, GRANT_TYPE_PASSWORD, GRANT_TYPE_REFRESH_TOKEN,
    GRANT_TYPE_TOKEN_EXCHANGE,
};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use tracing::instrument;

const ADMIN_CLIENT_ID: &str = "admin-cli";
const REFRESH_TOKEN_TYPE: &str = "urn:ietf:params:oauth:token-type:refresh_token";
const RPT_TOKEN_TYPE_HINT: &str = "requesting_party_token";

/// Service for token endpoint operations.
pub struct TokensService<'a> {
    client: &'a KeycloakClient,
}

impl<'a> TokensService<'a> {
    /// Creates a new tokens service.
    pub fn new(client: &'a KeycloakClient) -> Self {
        Self { client }
    }

    fn openid_url(&self, realm: &str, endpoint: &[&str]) -> KeycloakResult<String> {
        let mut segments = vec!["protocol", "openid-connect"];
        segments.extend_from_slice(endpoint);
        self.client.realm_url(realm, &segments)
    }

    /// Requests a token with arbitrary options.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn get_token(&self, realm: &str, options: &TokenOptions) -> KeycloakResult<JwtToken> {
        let url = self.openid_url(realm, &["token"])?;
        self.client.post_form(url, None, &options.form_data()?).await
    }

    /// Logs a user in with the password grant.
    pub async fn login(
        &self,
        client_id: &str,
        client_secret: &SecretString,
        realm: &str,
        username: &str,
        password: &SecretString,
    ) -> KeycloakResult<JwtToken> {
        self.get_token(
            realm,
            &TokenOptions {
                client_id: Some(client_id.to_string()),
                client_secret: Some(client_secret.expose_secret().clone()),
                grant_type: Some(GRANT_TYPE_PASSWORD.to_string()),
                username: Some(username.to_string()),
                password: Some(password.expose_secret().clone()),
                scopes: Some(vec!["openid".to_string()]),
                ..Default::default()
            },
        )
        .await
    }

    /// Logs a user in with the password grant and a one-time password.
    pub async fn login_otp(
        &self,
        client_id: &str,
        client_secret: &SecretString,
        realm: &str,
        username: &str,
        password: &SecretString,
        totp: &str,
    ) -> KeycloakResult<JwtToken> {
        self.get_token(
            realm,
            &TokenOptions {
                client_id: Some(client_id.to_string()),
                client_secret: Some(client_secret.expose_secret().clone()),
                grant_type: Some(GRANT_TYPE_PASSWORD.to_string()),
                username: Some(username.to_string()),
                password: Some(password.expose_secret().clone()),
                totp: Some(totp.to_string()),
                scopes: Some(vec!["openid".to_string()]),
                ..Default::default()
            },
        )
        .await
    }

    /// Logs a confidential client in with the client credentials grant.
    pub async fn login_client(
        &self,
        client_id: &str,
        client_secret: &SecretString,
        realm: &str,
        scopes: &[&str],
    ) -> KeycloakResult<JwtToken> {
        let scopes = if scopes.is_empty() {
            None
        } else {
            Some(scopes.iter().map(|s| s.to_string()).collect())
        };
        self.get_token(
            realm,
            &TokenOptions {
                client_id: Some(client_id.to_string()),
                client_secret: Some(client_secret.expose_secret().clone()),
                grant_type: Some(GRANT_TYPE_CLIENT_CREDENTIALS.to_string()),
                scopes,
                ..Default::default()
            },
        )
        .await
    }

    /// Logs an administrator in through the `admin-cli` client.
    pub async fn login_admin(
        &self,
        username: &str,
        password: &SecretString,
        realm: &str,
    ) -> KeycloakResult<JwtToken> {
        self.get_token(
            realm,
            &TokenOptions {
                client_id: Some(ADMIN_CLIENT_ID.to_string()),
                grant_type: Some(GRANT_TYPE_PASSWORD.to_string()),
                username: Some(username.to_string()),
                password: Some(password.expose_secret().clone()),
                ..Default::default()
            },
        )
        .await
    }

    /// Exchanges `token` for a token of `target_client`, optionally
    /// impersonating `user_id`.
    pub async fn login_client_token_exchange(
        &self,
        client_id: &str,
        token: &SecretString,
        client_secret: &SecretString,
        realm: &str,
        target_client: &str,
        user_id: &str,
    ) -> KeycloakResult<JwtToken> {
        let requested_subject = if user_id.is_empty() {
            None
        } else {
            Some(user_id.to_string())
        };
        self.get_token(
            realm,
            &TokenOptions {
                client_id: Some(client_id.to_string()),
                client_secret: Some(client_secret.expose_secret().clone()),
                grant_type: Some(GRANT_TYPE_TOKEN_EXCHANGE.to_string()),
                subject_token: Some(token.expose_secret().clone()),
                requested_token_type: Some(REFRESH_TOKEN_TYPE.to_string()),
                audience: Some(target_client.to_string()),
                requested_subject,
                ..Default::default()
            },
        )
        .await
    }

    /// Refreshes a token.
    pub async fn refresh_token(
        &self,
        refresh_token: &SecretString,
        client_id: &str,
        client_secret: &SecretString,
        realm: &str,
    ) -> KeycloakResult<JwtToken> {
        self.get_token(
            realm,
            &TokenOptions {
                client_id: Some(client_id.to_string()),
                client_secret: Some(client_secret.expose_secret().clone()),
                grant_type: Some(GRANT_TYPE_REFRESH_TOKEN.to_string()),
                refresh_token: Some(refresh_token.expose_secret().clone()),
                ..Default::default()
            },
        )
        .await
    }

    /// Requests a UMA requesting party token.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn get_requesting_party_token(
        &self,
        token: &str,
        realm: &str,
        options: &RequestingPartyTokenOptions,
    ) -> KeycloakResult<JwtToken> {
        let url = self.openid_url(realm, &["token"])?;
        self.client.post_form(url, Some(token), &options.form_data()?).await
    }

    /// Lists the permissions a requesting party token would grant.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn get_requesting_party_permissions(
        &self,
        token: &str,
        realm: &str,
        options: &RequestingPartyTokenOptions,
    ) -> KeycloakResult<Vec<RequestingPartyPermission>> {
        let options = RequestingPartyTokenOptions {
            response_mode: Some("permissions".to_string()),
            ..options.clone()
        };
        let url = self.openid_url(realm, &["token"])?;
        self.client.post_form(url, Some(token), &options.form_data()?).await
    }

    /// Asks whether the requested permissions would be granted.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn get_requesting_party_permission_decision(
        &self,
        token: &str,
        realm: &str,
        options: &RequestingPartyTokenOptions,
    ) -> KeycloakResult<RequestingPartyPermissionDecision> {
        let options = RequestingPartyTokenOptions {
            response_mode: Some("decision".to_string()),
            ..options.clone()
        };
        let url = self.openid_url(realm, &["token"])?;
        self.client.post_form(url, Some(token), &options.form_data()?).await
    }

    /// Ends the session of a refresh token held by a confidential client.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn logout(
        &self,
        client_id: &str,
        client_secret: &SecretString,
        realm: &str,
        refresh_token: &SecretString,
    ) -> KeycloakResult<()> {
        let url = self.openid_url(realm, &["logout"])?;
        let form = form(&[
            ("client_id", client_id),
            ("client_secret", client_secret.expose_secret().as_str()),
            ("refresh_token", refresh_token.expose_secret().as_str()),
        ]);
        self.client.post_form_no_response(url, None, &form).await
    }

    /// Ends the session of a refresh token held by a public client.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn logout_public_client(
        &self,
        client_id: &str,
        realm: &str,
        access_token: &str,
        refresh_token: &SecretString,
    ) -> KeycloakResult<()> {
        let url = self.openid_url(realm, &["logout"])?;
        let form = form(&[
            ("client_id", client_id),
            ("refresh_token", refresh_token.expose_secret().as_str()),
        ]);
        self.client
            .post_form_no_response(url, Some(access_token), &form)
            .await
    }

    /// Revokes a refresh token.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn revoke_token(
        &self,
        realm: &str,
        client_id: &str,
        client_secret: &SecretString,
        refresh_token: &SecretString,
    ) -> KeycloakResult<()> {
        let url = self.openid_url(realm, &["revoke"])?;
        let form = form(&[
            ("client_id", client_id),
            ("client_secret", client_secret.expose_secret().as_str()),
            ("token", refresh_token.expose_secret().as_str()),
        ]);
        self.client.post_form_no_response(url, None, &form).await
    }

    /// Introspects a token.
    #[instrument(skip_all, fields(realm = %realm))]
    pub async fn retrospect_token(
        &self,
        access_token: &str,
        client_id: &str,
        client_secret: &SecretString,
        realm: &str,
    ) -> KeycloakResult<IntroSpectTokenResult> {
        let url = self.openid_url(realm, &["token", "introspect"])?;
        let form = form(&[
            ("client_id", client_id),
            ("client_secret", client_secret.expose_secret().as_str()),
            ("token_type_hint", RPT_TOKEN_TYPE_HINT),
            ("token", access_token),
        ]);
        self.client.post_form(url, None, &form).await
    }

    /// Gets the standard claims of the token's user.
    pub async fn get_user_info(&self, access_token: &str, realm: &str) -> KeycloakResult<UserInfo> {
        let url = self.openid_url(realm, &["userinfo"])?;
        self.client.get(access_token, url).await
    }

    /// Gets every claim of the token's user, custom ones included.
    pub async fn get_raw_user_info(
        &self,
        access_token: &str,
        realm: &str,
    ) -> KeycloakResult<HashMap<String, serde_json::Value>> {
        let url = self.openid_url(realm, &["userinfo"])?;
        self.client.get(access_token, url).await
    }

    /// Gets the issuer description of a realm.
    pub async fn get_issuer(&self, realm: &str) -> KeycloakResult<IssuerResponse> {
        let url = self.client.realm_url(realm, &[])?;
        self.client.get_public(url).await
    }

    /// Gets the public keys of a realm.
    pub async fn get_certs(&self, realm: &str) -> KeycloakResult<CertResponse> {
        let url = self.openid_url(realm, &["certs"])?;
        self.client.get_public(url).await
    }
}

fn form(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
