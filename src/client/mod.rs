//! Keycloak API client implementation.

use crate::config::{KeycloakConfig, KeycloakConfigBuilder};
use crate::errors::{KeycloakError, KeycloakResult};
use crate::query::get_query_params;
use crate::services::*;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Keycloak error response format, OAuth2 and admin flavours.
#[derive(Debug, Default, Deserialize)]
struct KeycloakErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

/// Keycloak API client.
///
/// Stateless apart from configuration: tokens are passed to every call.
#[derive(Clone)]
pub struct KeycloakClient {
    transport: Arc<dyn HttpTransport>,
    config: KeycloakConfig,
}

impl std::fmt::Debug for KeycloakClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeycloakClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl KeycloakClient {
    /// Creates a client for the server at `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> KeycloakResult<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Creates a client from a configuration.
    pub fn with_config(config: KeycloakConfig) -> KeycloakResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
            config,
        })
    }

    /// Creates a client that sends requests through `transport`.
    pub fn with_transport(
        config: KeycloakConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> KeycloakResult<Self> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    /// Creates a new client builder.
    pub fn builder() -> KeycloakClientBuilder {
        KeycloakClientBuilder::new()
    }

    /// Gets the configuration.
    pub fn config(&self) -> &KeycloakConfig {
        &self.config
    }

    // Service accessors

    /// Gets the token endpoints service.
    pub fn tokens(&self) -> TokensService<'_> {
        TokensService::new(self)
    }

    /// Gets the realms service.
    pub fn realms(&self) -> RealmsService<'_> {
        RealmsService::new(self)
    }

    /// Gets the clients service.
    pub fn clients(&self) -> ClientsService<'_> {
        ClientsService::new(self)
    }

    /// Gets the client scopes service.
    pub fn client_scopes(&self) -> ClientScopesService<'_> {
        ClientScopesService::new(self)
    }

    /// Gets the groups service.
    pub fn groups(&self) -> GroupsService<'_> {
        GroupsService::new(self)
    }

    /// Gets the roles service.
    pub fn roles(&self) -> RolesService<'_> {
        RolesService::new(self)
    }

    /// Gets the users service.
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Gets the authorization (resource server admin) service.
    pub fn authorization(&self) -> AuthorizationService<'_> {
        AuthorizationService::new(self)
    }

    /// Gets the UMA protection API service.
    pub fn protection(&self) -> ProtectionService<'_> {
        ProtectionService::new(self)
    }

    /// Gets the components service.
    pub fn components(&self) -> ComponentsService<'_> {
        ComponentsService::new(self)
    }

    /// Gets the identity providers service.
    pub fn identity_providers(&self) -> IdentityProvidersService<'_> {
        IdentityProvidersService::new(self)
    }

    /// Gets the organizations service.
    pub fn organizations(&self) -> OrganizationsService<'_> {
        OrganizationsService::new(self)
    }

    // URL builders

    /// URL under `{base}{realms_path}/{realm}`.
    pub(crate) fn realm_url(&self, realm: &str, segments: &[&str]) -> KeycloakResult<String> {
        let mut all = vec![realm];
        all.extend_from_slice(segments);
        self.build_url(&self.config.realms_path, &all)
    }

    /// URL under `{base}{admin_realms_path}/{realm}`.
    pub(crate) fn admin_url(&self, realm: &str, segments: &[&str]) -> KeycloakResult<String> {
        let mut all = vec![realm];
        all.extend_from_slice(segments);
        self.build_url(&self.config.admin_realms_path, &all)
    }

    /// URL under `{base}{admin_realms_path}` itself.
    pub(crate) fn admin_realms_url(&self, segments: &[&str]) -> KeycloakResult<String> {
        self.build_url(&self.config.admin_realms_path, segments)
    }

    /// URL under the admin root, the parent of `admin_realms_path`.
    pub(crate) fn admin_root_url(&self, segments: &[&str]) -> KeycloakResult<String> {
        let path = &self.config.admin_realms_path;
        let root = path.strip_suffix("/realms").unwrap_or(path);
        self.build_url(root, segments)
    }

    // Each segment is percent-encoded on its own; prefix slashes are kept.
    fn build_url(&self, prefix: &str, segments: &[&str]) -> KeycloakResult<String> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| KeycloakError::configuration(format!("Invalid base URL: {}", e)))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| KeycloakError::configuration("Base URL cannot be a base"))?;
            path.pop_if_empty();
            path.extend(prefix.split('/').filter(|s| !s.is_empty()));
            path.extend(segments);
        }
        Ok(url.into())
    }

    // Request helpers

    /// Sends an authenticated GET and decodes the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, token: &str, url: String) -> KeycloakResult<T> {
        let request = self.authorized(HttpMethod::Get, url, token);
        self.request(request).await
    }

    /// Sends an authenticated GET with query parameters.
    pub(crate) async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        token: &str,
        url: String,
        params: &P,
    ) -> KeycloakResult<T> {
        let url = with_query(url, params)?;
        self.get(token, url).await
    }

    /// Sends an unauthenticated GET and decodes the JSON response.
    pub(crate) async fn get_public<T: DeserializeOwned>(&self, url: String) -> KeycloakResult<T> {
        self.request(HttpRequest::new(HttpMethod::Get, url)).await
    }

    /// Sends a JSON POST and decodes the JSON response.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        token: &str,
        url: String,
        body: &B,
    ) -> KeycloakResult<T> {
        let request = self.json_request(HttpMethod::Post, url, token, body)?;
        self.request(request).await
    }

    /// Sends a JSON POST and ignores the response body.
    pub(crate) async fn post_no_response<B: Serialize + ?Sized>(
        &self,
        token: &str,
        url: String,
        body: &B,
    ) -> KeycloakResult<()> {
        let request = self.json_request(HttpMethod::Post, url, token, body)?;
        self.execute(request).await.map(|_| ())
    }

    /// Sends a JSON POST and returns the id of the created resource.
    pub(crate) async fn post_created<B: Serialize + ?Sized>(
        &self,
        token: &str,
        url: String,
        body: &B,
    ) -> KeycloakResult<String> {
        let request = self.json_request(HttpMethod::Post, url, token, body)?;
        let response = self.execute(request).await?;
        created_id(&response)
    }

    /// Sends a POST without body and decodes the JSON response.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, token: &str, url: String) -> KeycloakResult<T> {
        let request = self.authorized(HttpMethod::Post, url, token);
        self.request(request).await
    }

    /// Sends a POST without body and ignores the response body.
    pub(crate) async fn post_empty_no_response(&self, token: &str, url: String) -> KeycloakResult<()> {
        let request = self.authorized(HttpMethod::Post, url, token);
        self.execute(request).await.map(|_| ())
    }

    /// Sends a JSON PUT and ignores the response body.
    pub(crate) async fn put_no_response<B: Serialize + ?Sized>(
        &self,
        token: &str,
        url: String,
        body: &B,
    ) -> KeycloakResult<()> {
        let request = self.json_request(HttpMethod::Put, url, token, body)?;
        self.execute(request).await.map(|_| ())
    }

    /// Sends a PUT without body.
    pub(crate) async fn put_empty(&self, token: &str, url: String) -> KeycloakResult<()> {
        let request = self.authorized(HttpMethod::Put, url, token);
        self.execute(request).await.map(|_| ())
    }

    /// Sends an authenticated DELETE.
    pub(crate) async fn delete(&self, token: &str, url: String) -> KeycloakResult<()> {
        let request = self.authorized(HttpMethod::Delete, url, token);
        self.execute(request).await.map(|_| ())
    }

    /// Sends an authenticated DELETE with a JSON body.
    pub(crate) async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        token: &str,
        url: String,
        body: &B,
    ) -> KeycloakResult<()> {
        let request = self.json_request(HttpMethod::Delete, url, token, body)?;
        self.execute(request).await.map(|_| ())
    }

    /// Sends a form POST and decodes the JSON response.
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        url: String,
        token: Option<&str>,
        form: &[(String, String)],
    ) -> KeycloakResult<T> {
        let request = self.form_request(url, token, form)?;
        self.request(request).await
    }

    /// Sends a form POST and ignores the response body.
    pub(crate) async fn post_form_no_response(
        &self,
        url: String,
        token: Option<&str>,
        form: &[(String, String)],
    ) -> KeycloakResult<()> {
        let request = self.form_request(url, token, form)?;
        self.execute(request).await.map(|_| ())
    }

    // Internal methods

    fn authorized(&self, method: HttpMethod, url: String, token: &str) -> HttpRequest {
        HttpRequest::new(method, url).header("Authorization", format!("Bearer {}", token))
    }

    fn json_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        url: String,
        token: &str,
        body: &B,
    ) -> KeycloakResult<HttpRequest> {
        let body = serde_json::to_string(body).map_err(|e| {
            KeycloakError::encode(format!("Failed to serialize request body: {}", e)).with_cause(e)
        })?;
        let mut request = self
            .authorized(method, url, token)
            .header("Content-Type", CONTENT_TYPE_JSON);
        request.body = Some(body);
        Ok(request)
    }

    fn form_request(
        &self,
        url: String,
        token: Option<&str>,
        form: &[(String, String)],
    ) -> KeycloakResult<HttpRequest> {
        let body = serde_urlencoded::to_string(form).map_err(|e| {
            KeycloakError::encode(format!("Failed to encode form: {}", e)).with_cause(e)
        })?;
        let mut request = match token {
            Some(token) => self.authorized(HttpMethod::Post, url, token),
            None => HttpRequest::new(HttpMethod::Post, url),
        };
        request = request.header("Content-Type", CONTENT_TYPE_FORM);
        request.body = Some(body);
        Ok(request)
    }

    async fn request<T: DeserializeOwned>(&self, request: HttpRequest) -> KeycloakResult<T> {
        let response = self.execute(request).await?;
        decode_body(&response.body)
    }

    #[instrument(skip(self, request), fields(method = request.method.as_str(), url = %request.url))]
    async fn execute(&self, mut request: HttpRequest) -> KeycloakResult<HttpResponse> {
        request = request.header("Accept", CONTENT_TYPE_JSON);
        request.timeout = Some(self.config.timeout);

        debug!("sending request");
        let response = self.transport.send(request).await?;
        debug!(status = response.status, "request completed");

        if !response.is_success() {
            let error = error_from_response(&response);
            warn!(
                status = response.status,
                api_error = %error.api_error_type(),
                "request failed"
            );
            return Err(error);
        }

        Ok(response)
    }
}

/// Appends the encoded parameters to `url`, sorted by name.
pub(crate) fn with_query<P: Serialize + ?Sized>(url: String, params: &P) -> KeycloakResult<String> {
    let params = get_query_params(params)?;
    if params.is_empty() {
        return Ok(url);
    }

    let mut pairs: Vec<(String, String)> = params.into_iter().collect();
    pairs.sort();

    let mut url = Url::parse(&url)
        .map_err(|e| KeycloakError::invalid_parameter(format!("Invalid URL {}: {}", url, e)))?;
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(url.into())
}

fn decode_body<T: DeserializeOwned>(body: &str) -> KeycloakResult<T> {
    serde_json::from_str(body).map_err(|e| {
        KeycloakError::decode(format!("Failed to deserialize response: {}", e)).with_cause(e)
    })
}

fn created_id(response: &HttpResponse) -> KeycloakResult<String> {
    let location = response.header("location").ok_or_else(|| {
        KeycloakError::invalid_parameter(format!(
            "HTTP {} response carries no Location header",
            response.status
        ))
    })?;

    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .map(String::from)
        .ok_or_else(|| KeycloakError::invalid_parameter(format!("Invalid Location header: {}", location)))
}

fn error_from_response(response: &HttpResponse) -> KeycloakError {
    let status = reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(|reason| format!("{} {}", response.status, reason))
        .unwrap_or_else(|| response.status.to_string());

    let body = response.body.trim();
    let parts: Vec<String> = match serde_json::from_str::<KeycloakErrorResponse>(body) {
        Ok(parsed) => [parsed.error, parsed.error_description, parsed.error_message]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) if !body.is_empty() => vec![body.to_string()],
        Err(_) => Vec::new(),
    };

    let message = if parts.is_empty() {
        status
    } else {
        format!("{}: {}", status, parts.join(": "))
    };
    KeycloakError::api(response.status, message)
}

/// Builder for KeycloakClient.
#[derive(Default)]
pub struct KeycloakClientBuilder {
    config: KeycloakConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl KeycloakClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Sets the path prefix of the realm endpoints.
    pub fn realms_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.realms_path(path);
        self
    }

    /// Sets the path prefix of the admin endpoints.
    pub fn admin_realms_path(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.admin_realms_path(path);
        self
    }

    /// Prefixes both paths with `/auth` for pre-Quarkus distributions.
    pub fn legacy_wildfly_support(mut self) -> Self {
        self.config = self.config.legacy_wildfly_support();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.connect_timeout(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config = self.config.user_agent(ua);
        self
    }

    /// Sends requests through a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the client.
    pub fn build(self) -> KeycloakResult<KeycloakClient> {
        let config = self.config.build()?;
        match self.transport {
            Some(transport) => KeycloakClient::with_transport(config, transport),
            None => KeycloakClient::with_config(config),
        }
    }
}
