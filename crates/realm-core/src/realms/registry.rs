//! Realm registry: startup population and request-time lookups
//!
//! The registry is built once, single-threaded, before any traffic is
//! admitted. After [`RealmRegistry::setup`] returns it never mutates, so it is
//! safe to share behind an `Arc` and read from any number of request-handling
//! tasks without locking.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::config::RealmsConfig;
use crate::logging::SharedLogger;

use super::factory::RealmFactory;
use super::resolve;
use super::traits::{ClientRealm, RealmError, RealmResult, UserRealm};

/// Per-realm credential-store handles, keyed by canonical realm name
///
/// Holds one client store and one user store per configured realm. The two
/// maps always have identical key sets: they are populated together, per
/// realm, during setup, and setup either completes fully or fails.
pub struct RealmRegistry {
    client_realms: HashMap<String, Box<dyn ClientRealm>>,
    user_realms: HashMap<String, Box<dyn UserRealm>>,
    // Client-realm key set, kept as the authoritative universe for resolution
    realm_names: HashSet<String>,
}

impl fmt::Debug for RealmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RealmRegistry")
            .field("realms", &self.realm_names())
            .finish()
    }
}

impl RealmRegistry {
    /// Populate a registry from the realm configuration
    ///
    /// Realms are processed in configuration order. For each realm the client
    /// store is constructed and initialized first, then the user store, then
    /// both are inserted under the canonical (no leading slash) name. Any
    /// construction or initialization failure aborts the whole setup; a
    /// partially populated registry is never returned.
    pub async fn setup(
        config: &RealmsConfig,
        factory: &RealmFactory,
        logger: SharedLogger,
    ) -> RealmResult<Self> {
        let mut registry = Self {
            client_realms: HashMap::new(),
            user_realms: HashMap::new(),
            realm_names: HashSet::new(),
        };

        for definition in &config.realms {
            let name = resolve::strip_leading_slash(&definition.name).to_string();
            let client_kind = config.client_impl_for(definition);
            let user_kind = config.user_impl_for(definition);

            let client = factory.new_client_realm(client_kind, &name).await?;
            let user = factory.new_user_realm(user_kind, &name).await?;

            logger.info(&format!(
                "realm '{name}' ready (client: {client_kind}, user: {user_kind})"
            ));

            registry.client_realms.insert(name.clone(), client);
            registry.user_realms.insert(name.clone(), user);
            registry.realm_names.insert(name);
        }

        Ok(registry)
    }

    /// Resolve a request host name to a configured realm
    ///
    /// See [`resolve::find_realm_in_host`] for the matching rules. `None`
    /// means no configured realm appears in the host, an expected outcome for
    /// foreign or malformed requests.
    pub fn find_realm_in_host(&self, host: &str) -> Option<String> {
        resolve::find_realm_in_host(&self.realm_names, host)
    }

    /// Resolve an explicit realm identifier to a configured realm
    ///
    /// A leading slash on the identifier is ignored, so `"foo"` and `"/foo"`
    /// resolve identically.
    pub fn find_realm_in_realm(&self, realm: &str) -> Option<String> {
        resolve::find_realm_in_realm(&self.realm_names, realm)
    }

    /// Fetch the client-credential store for a canonical realm name
    ///
    /// Exact-key lookup, no normalization: callers resolve first via the
    /// `find_realm_*` methods and pass the result here.
    pub fn get_client_realm(&self, name: &str) -> RealmResult<&dyn ClientRealm> {
        self.client_realms
            .get(name)
            .map(|realm| realm.as_ref())
            .ok_or_else(|| RealmError::not_found(name))
    }

    /// Fetch the user-credential store for a canonical realm name
    ///
    /// Same contract as [`get_client_realm`](Self::get_client_realm).
    pub fn get_user_realm(&self, name: &str) -> RealmResult<&dyn UserRealm> {
        self.user_realms
            .get(name)
            .map(|realm| realm.as_ref())
            .ok_or_else(|| RealmError::not_found(name))
    }

    /// Check whether a canonical realm name is configured
    pub fn contains_realm(&self, name: &str) -> bool {
        self.realm_names.contains(name)
    }

    /// Configured canonical realm names, sorted
    pub fn realm_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.realm_names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
