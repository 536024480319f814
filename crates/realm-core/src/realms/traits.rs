//! Capability contracts and errors for realm-scoped credential stores

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while populating or querying the realm registry
#[derive(Error, Debug)]
pub enum RealmError {
    /// Configuration references a backend kind nobody registered
    #[error("unknown backend kind: {kind}")]
    UnknownBackendKind { kind: String },

    /// A backend failed to construct or initialize during startup
    #[error("failed to initialize realm '{realm}': {message}")]
    Initialization { realm: String, message: String },

    /// Exact-key accessor miss. The caller should have resolved the name
    /// first, so seeing this for a resolved name is a server-side bug signal.
    #[error("realm not found: {name}")]
    RealmNotFound { name: String },
}

impl RealmError {
    /// Create an unknown-backend-kind error
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownBackendKind { kind: kind.into() }
    }

    /// Create an initialization error for a realm
    pub fn initialization(realm: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Initialization {
            realm: realm.into(),
            message: message.into(),
        }
    }

    /// Create a realm-not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::RealmNotFound { name: name.into() }
    }
}

pub type RealmResult<T> = Result<T, RealmError>;

/// Realm-scoped client-credential store
///
/// Implementations hold the OAuth-client records for exactly one realm. The
/// credential operations themselves live on the concrete backend; this core
/// only drives the lifecycle and hands out the initialized handle.
#[async_trait]
pub trait ClientRealm: std::fmt::Debug + Send + Sync {
    /// Realm name this store was initialized for (empty before `initialize`)
    fn realm_name(&self) -> &str;

    /// One-time lifecycle hook, called exactly once before the handle is
    /// handed out. May block on backend setup (connections, schema checks).
    async fn initialize(&mut self, realm_name: &str) -> RealmResult<()>;
}

/// Realm-scoped user-credential store
///
/// Same lifecycle contract as [`ClientRealm`], holding end-user credential
/// records instead of client records.
#[async_trait]
pub trait UserRealm: std::fmt::Debug + Send + Sync {
    /// Realm name this store was initialized for (empty before `initialize`)
    fn realm_name(&self) -> &str;

    /// One-time lifecycle hook, called exactly once before the handle is
    /// handed out. May block on backend setup.
    async fn initialize(&mut self, realm_name: &str) -> RealmResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_the_offending_name() {
        let err = RealmError::not_found("customers");
        assert_eq!(err.to_string(), "realm not found: customers");

        let err = RealmError::unknown_kind("cassandra");
        assert_eq!(err.to_string(), "unknown backend kind: cassandra");

        let err = RealmError::initialization("employees", "connection refused");
        assert_eq!(
            err.to_string(),
            "failed to initialize realm 'employees': connection refused"
        );
    }
}
