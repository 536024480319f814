//! Backend construction by implementation kind
//!
//! A registry of constructors: each backend kind maps to a zero-argument
//! function producing an uninitialized store. The factory is plain data owned
//! by the caller and passed down to [`RealmRegistry::setup`](super::RealmRegistry::setup);
//! no global container is involved. It runs only during startup, so a failed
//! lookup is a configuration error, never a request-time error.

use std::collections::HashMap;
use std::fmt;

use super::memory::{MemoryClientRealm, MemoryUserRealm};
use super::traits::{ClientRealm, RealmError, RealmResult, UserRealm};

/// Backend kind registered by default for the in-memory stubs
pub const MEMORY_KIND: &str = "memory";

/// Constructor for an uninitialized client-credential store
pub type ClientRealmCtor = Box<dyn Fn() -> Box<dyn ClientRealm> + Send + Sync>;

/// Constructor for an uninitialized user-credential store
pub type UserRealmCtor = Box<dyn Fn() -> Box<dyn UserRealm> + Send + Sync>;

/// Constructs and initializes realm backends by implementation kind
pub struct RealmFactory {
    client_ctors: HashMap<String, ClientRealmCtor>,
    user_ctors: HashMap<String, UserRealmCtor>,
}

impl fmt::Debug for RealmFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealmFactory")
            .field("client_kinds", &self.client_kinds())
            .field("user_kinds", &self.user_kinds())
            .finish()
    }
}

impl Default for RealmFactory {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl RealmFactory {
    /// Create a factory with no registered kinds
    pub fn empty() -> Self {
        Self {
            client_ctors: HashMap::new(),
            user_ctors: HashMap::new(),
        }
    }

    /// Create a factory with the built-in `"memory"` kind registered for
    /// both capabilities
    pub fn with_builtins() -> Self {
        let mut factory = Self::empty();
        factory.register_client_kind(MEMORY_KIND, Box::new(|| Box::new(MemoryClientRealm::new())));
        factory.register_user_kind(MEMORY_KIND, Box::new(|| Box::new(MemoryUserRealm::new())));
        factory
    }

    /// Register a client-store backend kind
    pub fn register_client_kind(&mut self, kind: impl Into<String>, ctor: ClientRealmCtor) {
        self.client_ctors.insert(kind.into(), ctor);
    }

    /// Register a user-store backend kind
    pub fn register_user_kind(&mut self, kind: impl Into<String>, ctor: UserRealmCtor) {
        self.user_ctors.insert(kind.into(), ctor);
    }

    /// Check whether a client-store kind is registered
    pub fn has_client_kind(&self, kind: &str) -> bool {
        self.client_ctors.contains_key(kind)
    }

    /// Check whether a user-store kind is registered
    pub fn has_user_kind(&self, kind: &str) -> bool {
        self.user_ctors.contains_key(kind)
    }

    /// Registered client-store kinds, sorted
    pub fn client_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.client_ctors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Registered user-store kinds, sorted
    pub fn user_kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.user_ctors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Construct a client store of the given kind and initialize it for
    /// `realm_name`. The handle comes back ready to serve.
    pub async fn new_client_realm(
        &self,
        kind: &str,
        realm_name: &str,
    ) -> RealmResult<Box<dyn ClientRealm>> {
        let ctor = self
            .client_ctors
            .get(kind)
            .ok_or_else(|| RealmError::unknown_kind(kind))?;
        let mut realm = ctor();
        realm.initialize(realm_name).await?;
        Ok(realm)
    }

    /// Construct a user store of the given kind and initialize it for
    /// `realm_name`. The handle comes back ready to serve.
    pub async fn new_user_realm(
        &self,
        kind: &str,
        realm_name: &str,
    ) -> RealmResult<Box<dyn UserRealm>> {
        let ctor = self
            .user_ctors
            .get(kind)
            .ok_or_else(|| RealmError::unknown_kind(kind))?;
        let mut realm = ctor();
        realm.initialize(realm_name).await?;
        Ok(realm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let factory = RealmFactory::with_builtins();
        assert!(factory.has_client_kind(MEMORY_KIND));
        assert!(factory.has_user_kind(MEMORY_KIND));
        assert_eq!(factory.client_kinds(), vec![MEMORY_KIND]);
    }

    #[tokio::test]
    async fn test_new_realm_comes_back_initialized() {
        let factory = RealmFactory::with_builtins();

        let client = factory.new_client_realm(MEMORY_KIND, "customers").await.unwrap();
        assert_eq!(client.realm_name(), "customers");

        let user = factory.new_user_realm(MEMORY_KIND, "customers").await.unwrap();
        assert_eq!(user.realm_name(), "customers");
    }

    #[tokio::test]
    async fn test_unknown_kind_fails_lookup() {
        let factory = RealmFactory::with_builtins();

        let err = factory.new_client_realm("cassandra", "customers").await.unwrap_err();
        match err {
            RealmError::UnknownBackendKind { kind } => assert_eq!(kind, "cassandra"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_register_custom_kind() {
        let mut factory = RealmFactory::empty();
        assert!(!factory.has_client_kind(MEMORY_KIND));

        factory.register_client_kind("stub", Box::new(|| Box::new(MemoryClientRealm::new())));
        let realm = factory.new_client_realm("stub", "services").await.unwrap();
        assert_eq!(realm.realm_name(), "services");
    }
}
