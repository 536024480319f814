//! Realm registry, name resolution, and backend construction
//!
//! ## Architecture
//!
//! [`RealmRegistry`] owns two maps, canonical realm name to client store and
//! canonical realm name to user store, populated once at startup and
//! immutable afterwards. [`RealmFactory`] is a registry of constructors that
//! turns an implementation-kind token into an initialized store; it decouples
//! the registry from concrete backend types. The pure functions in
//! [`resolve`] turn untrusted host names and realm identifiers into canonical
//! configured names.

mod factory;
mod memory;
mod registry;
pub mod resolve;
mod traits;

pub use factory::{ClientRealmCtor, RealmFactory, UserRealmCtor, MEMORY_KIND};
pub use memory::{MemoryClientRealm, MemoryUserRealm};
pub use registry::RealmRegistry;
pub use resolve::{ensure_leading_slash, strip_leading_slash};
pub use traits::{ClientRealm, RealmError, RealmResult, UserRealm};
