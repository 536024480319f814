//! In-memory stub realm backends
//!
//! These hold no credential data; they exist so tests and embedders can stand
//! up a fully populated registry without a real backend. Registered under the
//! `"memory"` kind by [`RealmFactory::with_builtins`](super::RealmFactory::with_builtins).

use async_trait::async_trait;

use super::traits::{ClientRealm, RealmError, RealmResult, UserRealm};

/// In-memory client-credential store stub
#[derive(Debug, Default)]
pub struct MemoryClientRealm {
    realm_name: Option<String>,
}

impl MemoryClientRealm {
    /// Create a new, uninitialized stub
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientRealm for MemoryClientRealm {
    fn realm_name(&self) -> &str {
        self.realm_name.as_deref().unwrap_or("")
    }

    async fn initialize(&mut self, realm_name: &str) -> RealmResult<()> {
        if self.realm_name.is_some() {
            return Err(RealmError::initialization(realm_name, "already initialized"));
        }
        self.realm_name = Some(realm_name.to_string());
        Ok(())
    }
}

/// In-memory user-credential store stub
#[derive(Debug, Default)]
pub struct MemoryUserRealm {
    realm_name: Option<String>,
}

impl MemoryUserRealm {
    /// Create a new, uninitialized stub
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRealm for MemoryUserRealm {
    fn realm_name(&self) -> &str {
        self.realm_name.as_deref().unwrap_or("")
    }

    async fn initialize(&mut self, realm_name: &str) -> RealmResult<()> {
        if self.realm_name.is_some() {
            return Err(RealmError::initialization(realm_name, "already initialized"));
        }
        self.realm_name = Some(realm_name.to_string());
        Ok(())
    }
}
