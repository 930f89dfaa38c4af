//! Permission providers
//!
//! A provider resolves the effective permission set for an actor. It stands
//! in for whatever backs authorization in a deployment: a role assignment
//! store, a policy engine, or a cached grant list.

use crate::actor::Actor;
use crate::error::AccessResult;
use crate::permission::Permission;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Resolves an actor's granted permissions
///
/// Implementations must not mutate any state as part of a lookup. A lookup
/// failure is reported as [`AccessError::ProviderUnavailable`](crate::AccessError),
/// never as an empty grant set.
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    /// Resolve the granted permission set for the given actor
    async fn grants_for(&self, actor: &Actor) -> AccessResult<HashSet<Permission>>;
}

/// In-memory provider for simple deployments and tests
///
/// Explicit per-actor grant entries take precedence; actors without an entry
/// fall back to their role defaults.
#[derive(Default)]
pub struct StaticPermissionProvider {
    overrides: HashMap<String, HashSet<Permission>>,
}

impl StaticPermissionProvider {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Register an explicit grant set for an actor id
    pub fn set_grants<S: Into<String>>(&mut self, actor_id: S, grants: HashSet<Permission>) {
        self.overrides.insert(actor_id.into(), grants);
    }

    /// Builder-style variant of [`set_grants`](Self::set_grants)
    pub fn with_grants<S: Into<String>>(
        mut self,
        actor_id: S,
        grants: HashSet<Permission>,
    ) -> Self {
        self.set_grants(actor_id, grants);
        self
    }
}

#[async_trait]
impl PermissionProvider for StaticPermissionProvider {
    async fn grants_for(&self, actor: &Actor) -> AccessResult<HashSet<Permission>> {
        match self.overrides.get(&actor.actor_id) {
            Some(grants) => Ok(grants.clone()),
            None => Ok(actor.effective_permissions()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Role;

    #[tokio::test]
    async fn test_override_takes_precedence_over_roles() {
        let provider = StaticPermissionProvider::new()
            .with_grants("u1", [Permission::View].into_iter().collect());
        let actor = Actor::new("u1", vec![Role::Admin]);

        let grants = provider.grants_for(&actor).await.unwrap();
        assert_eq!(grants, [Permission::View].into_iter().collect());
    }

    #[tokio::test]
    async fn test_fallback_to_role_defaults() {
        let provider = StaticPermissionProvider::new();
        let actor = Actor::new("u2", vec![Role::Editor]);

        let grants = provider.grants_for(&actor).await.unwrap();
        assert!(grants.contains(&Permission::Create));
        assert!(!grants.contains(&Permission::Delete));
    }
}
