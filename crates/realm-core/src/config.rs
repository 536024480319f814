//! Realm configuration data
//!
//! Plain data describing which realms exist and which backend implementation
//! kind serves each capability. How this gets loaded (file, env, remote config)
//! is the embedding process's business; the core only consumes the materialized
//! list, once, at startup.

use serde::{Deserialize, Serialize};

/// Backend kind used when a realm does not specify one
pub const DEFAULT_BACKEND_KIND: &str = "memory";

fn default_backend_kind() -> String {
    DEFAULT_BACKEND_KIND.to_string()
}

/// A single configured realm
///
/// The implementation kinds are optional; unset kinds fall back to the
/// defaults on [`RealmsConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmDefinition {
    /// Realm name. May carry a leading slash; the registry canonicalizes it.
    pub name: String,

    /// Backend kind for the client-credential store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_impl: Option<String>,

    /// Backend kind for the user-credential store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_impl: Option<String>,
}

impl RealmDefinition {
    /// Create a definition using the configured default backend kinds
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client_impl: None,
            user_impl: None,
        }
    }

    /// Override the client-store backend kind for this realm
    pub fn with_client_impl(mut self, kind: impl Into<String>) -> Self {
        self.client_impl = Some(kind.into());
        self
    }

    /// Override the user-store backend kind for this realm
    pub fn with_user_impl(mut self, kind: impl Into<String>) -> Self {
        self.user_impl = Some(kind.into());
        self
    }
}

/// The full realm configuration consumed at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmsConfig {
    /// Default client-store backend kind for realms without an override
    #[serde(default = "default_backend_kind")]
    pub default_client_impl: String,

    /// Default user-store backend kind for realms without an override
    #[serde(default = "default_backend_kind")]
    pub default_user_impl: String,

    /// Configured realms, in startup-population order
    #[serde(default)]
    pub realms: Vec<RealmDefinition>,
}

impl Default for RealmsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RealmsConfig {
    /// Create an empty configuration with default backend kinds
    pub fn new() -> Self {
        Self {
            default_client_impl: default_backend_kind(),
            default_user_impl: default_backend_kind(),
            realms: Vec::new(),
        }
    }

    /// Create a configuration from a list of realm definitions
    pub fn with_realms(realms: Vec<RealmDefinition>) -> Self {
        Self {
            realms,
            ..Self::new()
        }
    }

    /// Resolve the client-store backend kind for a realm definition
    pub fn client_impl_for<'a>(&'a self, realm: &'a RealmDefinition) -> &'a str {
        realm
            .client_impl
            .as_deref()
            .unwrap_or(&self.default_client_impl)
    }

    /// Resolve the user-store backend kind for a realm definition
    pub fn user_impl_for<'a>(&'a self, realm: &'a RealmDefinition) -> &'a str {
        realm.user_impl.as_deref().unwrap_or(&self.default_user_impl)
    }
}
