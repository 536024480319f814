//! Realm Core
//!
//! Realm resolution for a multi-tenant identity provider. A realm is an
//! isolated tenant namespace backed by its own client-credential and
//! user-credential stores; this crate resolves an incoming request's target
//! realm from a host name or an explicit realm identifier and dispatches to
//! the per-realm store handles. Backends are pluggable; the crate ships only
//! an in-memory stub and the contracts real backends implement.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use realm_core::{
//!     ConsoleLogger, RealmDefinition, RealmFactory, RealmRegistry, RealmsConfig,
//! };
//!
//! let config = RealmsConfig::with_realms(vec![
//!     RealmDefinition::new("customers"),
//!     RealmDefinition::new("employees"),
//! ]);
//! let factory = RealmFactory::with_builtins();
//! let registry = RealmRegistry::setup(&config, &factory, Arc::new(ConsoleLogger::new())).await?;
//!
//! // On each authentication request:
//! if let Some(realm) = registry.find_realm_in_host("api.customers.example.com") {
//!     let clients = registry.get_client_realm(&realm)?;
//!     let users = registry.get_user_realm(&realm)?;
//!     // hand the stores to the token-issuance layer
//! }
//! ```

pub mod config;
pub mod logging;
pub mod realms;

// Re-export commonly used types
pub use config::{RealmDefinition, RealmsConfig, DEFAULT_BACKEND_KIND};

pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};

pub use realms::{
    ensure_leading_slash, strip_leading_slash, ClientRealm, ClientRealmCtor, MemoryClientRealm,
    MemoryUserRealm, RealmError, RealmFactory, RealmRegistry, RealmResult, UserRealm,
    UserRealmCtor, MEMORY_KIND,
};
