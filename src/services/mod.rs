//! Keycloak API services.

mod authorization;
mod client_scopes;
mod clients;
mod components;
mod groups;
mod identity_providers;
mod organizations;
mod protection;
mod realms;
mod roles;
mod tokens;
mod users;

pub use authorization::AuthorizationService;
pub use client_scopes::ClientScopesService;
pub use clients::ClientsService;
pub use components::ComponentsService;
pub use groups::GroupsService;
pub use identity_providers::IdentityProvidersService;
pub use organizations::OrganizationsService;
pub use protection::ProtectionService;
pub use realms::RealmsService;
pub use roles::RolesService;
pub use tokens::TokensService;
pub use users::UsersService;

use crate::errors::{KeycloakError, KeycloakResult};

/// Returns the value of a field the request path is built from.
pub(crate) fn required<'a>(value: &'a Option<String>, name: &str) -> KeycloakResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(KeycloakError::invalid_parameter(format!("{} is required", name))),
    }
}
