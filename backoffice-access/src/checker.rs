//! Access decision checker
//!
//! Stateless predicate over (actor grants, requirement), evaluated once per
//! render decision. The only caching is request-scoped: a [`RequestScope`]
//! memoizes one provider lookup per actor and is dropped with the request.

use crate::actor::Actor;
use crate::error::AccessResult;
use crate::permission::Permission;
use crate::provider::PermissionProvider;
use crate::requirement::{AccessDecision, PermissionRequirement};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Read-through cache of resolved grant sets, scoped to one request
///
/// Failed lookups are not cached, so a later call within the same request
/// may still succeed.
#[derive(Default)]
pub struct RequestScope {
    grants: RwLock<HashMap<String, HashSet<Permission>>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self {
            grants: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve grants for an actor, hitting the provider at most once
    pub async fn grants_for(
        &self,
        provider: &dyn PermissionProvider,
        actor: &Actor,
    ) -> AccessResult<HashSet<Permission>> {
        {
            let cached = self.grants.read().await;
            if let Some(grants) = cached.get(&actor.actor_id) {
                return Ok(grants.clone());
            }
        }

        let resolved = provider.grants_for(actor).await?;

        let mut cached = self.grants.write().await;
        cached.insert(actor.actor_id.clone(), resolved.clone());

        Ok(resolved)
    }
}

/// Evaluates permission requirements against actors
pub struct AccessChecker {
    provider: Arc<dyn PermissionProvider>,
}

impl AccessChecker {
    /// Create a checker backed by the given provider
    pub fn new(provider: Arc<dyn PermissionProvider>) -> Self {
        Self { provider }
    }

    /// Check whether the actor satisfies the requirement
    ///
    /// A denied check returns `Ok` with a non-granted decision; only a
    /// provider failure returns `Err`. An empty requirement is vacuously
    /// granted without a provider lookup.
    pub async fn is_available(
        &self,
        actor: &Actor,
        requirement: &PermissionRequirement,
    ) -> AccessResult<AccessDecision> {
        if requirement.is_empty() {
            return Ok(AccessDecision::new(requirement.clone(), true));
        }

        let grants = self.provider.grants_for(actor).await?;
        Ok(self.decide(actor, requirement, &grants))
    }

    /// Like [`is_available`](Self::is_available), but memoizes the grant
    /// lookup in the given request scope
    pub async fn is_available_scoped(
        &self,
        scope: &RequestScope,
        actor: &Actor,
        requirement: &PermissionRequirement,
    ) -> AccessResult<AccessDecision> {
        if requirement.is_empty() {
            return Ok(AccessDecision::new(requirement.clone(), true));
        }

        let grants = scope.grants_for(self.provider.as_ref(), actor).await?;
        Ok(self.decide(actor, requirement, &grants))
    }

    /// Fail-closed variant for UI rendering
    ///
    /// A provider failure is logged and mapped to a denied decision; the
    /// page render never crashes on an authorization outage.
    pub async fn is_available_or_deny(
        &self,
        scope: &RequestScope,
        actor: &Actor,
        requirement: &PermissionRequirement,
    ) -> AccessDecision {
        match self.is_available_scoped(scope, actor, requirement).await {
            Ok(decision) => decision,
            Err(error) => {
                warn!(
                    actor = %actor.display_string(),
                    requirement = %requirement.summary(),
                    error = %error,
                    "Permission provider unavailable, denying access"
                );
                AccessDecision::denied(requirement.clone())
            }
        }
    }

    fn decide(
        &self,
        actor: &Actor,
        requirement: &PermissionRequirement,
        grants: &HashSet<Permission>,
    ) -> AccessDecision {
        let granted = requirement.is_satisfied_by(grants);
        debug!(
            actor = %actor.display_string(),
            requirement = %requirement.summary(),
            granted,
            "Evaluated access decision"
        );
        AccessDecision::new(requirement.clone(), granted)
    }
}
