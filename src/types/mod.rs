//! Data types mirroring the Keycloak REST API schema.
//!
//! Every field is optional and left out of the JSON when absent, matching
//! the partial representations the server accepts and returns. All
//! representations display as sorted, tab-indented JSON.

pub mod flexible;
pub mod render;

mod authz;
mod client;
mod group;
mod realm;
mod role;
mod token;
mod user;

pub use authz::*;
pub use client::*;
pub use flexible::{EnforcedString, StringOrArray};
pub use group::*;
pub use realm::*;
pub use render::pretty_string;
pub use role::*;
pub use token::*;
pub use user::*;
