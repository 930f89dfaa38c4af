//! Permission requirements and access decisions

use crate::permission::Permission;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a requirement's permissions combine during evaluation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequirementPolicy {
    /// Every listed permission must be granted
    #[default]
    All,
    /// At least one listed permission must be granted
    Any,
}

impl std::fmt::Display for RequirementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequirementPolicy::All => write!(f, "all"),
            RequirementPolicy::Any => write!(f, "any"),
        }
    }
}

impl std::str::FromStr for RequirementPolicy {
    type Err = crate::AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(RequirementPolicy::All),
            "any" => Ok(RequirementPolicy::Any),
            _ => Err(crate::AccessError::UnknownIdentifier(s.to_string())),
        }
    }
}

/// A set of permissions required to perform an action
///
/// Constructed at the call site, not persisted. An empty requirement is
/// vacuously satisfied under either policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PermissionRequirement {
    permissions: HashSet<Permission>,
    policy: RequirementPolicy,
}

impl PermissionRequirement {
    /// Require every listed permission
    pub fn all<I: IntoIterator<Item = Permission>>(permissions: I) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            policy: RequirementPolicy::All,
        }
    }

    /// Require at least one listed permission
    pub fn any<I: IntoIterator<Item = Permission>>(permissions: I) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            policy: RequirementPolicy::Any,
        }
    }

    /// Build a requirement with an explicit policy
    pub fn with_policy<I: IntoIterator<Item = Permission>>(
        permissions: I,
        policy: RequirementPolicy,
    ) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            policy,
        }
    }

    /// The permissions this requirement names
    pub fn permissions(&self) -> &HashSet<Permission> {
        &self.permissions
    }

    /// The evaluation policy
    pub fn policy(&self) -> RequirementPolicy {
        self.policy
    }

    /// Whether the requirement names no permissions
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Evaluate this requirement against a granted permission set
    pub fn is_satisfied_by(&self, granted: &HashSet<Permission>) -> bool {
        if self.permissions.is_empty() {
            return true;
        }

        match self.policy {
            RequirementPolicy::All => self.permissions.iter().all(|p| granted.contains(p)),
            RequirementPolicy::Any => self.permissions.iter().any(|p| granted.contains(p)),
        }
    }

    /// Short description for logging
    pub fn summary(&self) -> String {
        let mut names: Vec<String> = self.permissions.iter().map(|p| p.to_string()).collect();
        names.sort();
        format!("{}({})", self.policy, names.join(","))
    }
}

/// The ephemeral result of evaluating a requirement against an actor
#[derive(Debug, Clone, PartialEq)]
pub struct AccessDecision {
    granted: bool,
    requirement: PermissionRequirement,
}

impl AccessDecision {
    /// Record a decision for a requirement
    pub fn new(requirement: PermissionRequirement, granted: bool) -> Self {
        Self {
            granted,
            requirement,
        }
    }

    /// A denied decision, used by the fail-closed path
    pub fn denied(requirement: PermissionRequirement) -> Self {
        Self::new(requirement, false)
    }

    /// Whether access was granted
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// The requirement that was evaluated
    pub fn requirement(&self) -> &PermissionRequirement {
        &self.requirement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grants(permissions: &[Permission]) -> HashSet<Permission> {
        permissions.iter().copied().collect()
    }

    #[test]
    fn test_all_policy_requires_superset() {
        let requirement =
            PermissionRequirement::all([Permission::Create, Permission::Update]);

        assert!(requirement.is_satisfied_by(&grants(&[
            Permission::View,
            Permission::Create,
            Permission::Update,
        ])));
        assert!(!requirement.is_satisfied_by(&grants(&[Permission::Create])));
    }

    #[test]
    fn test_any_policy_requires_intersection() {
        let requirement =
            PermissionRequirement::any([Permission::Create, Permission::Update]);

        assert!(requirement.is_satisfied_by(&grants(&[Permission::Update])));
        assert!(!requirement.is_satisfied_by(&grants(&[Permission::View])));
    }

    #[test]
    fn test_empty_requirement_is_vacuously_satisfied() {
        let all = PermissionRequirement::all([]);
        let any = PermissionRequirement::any([]);

        assert!(all.is_satisfied_by(&grants(&[])));
        assert!(any.is_satisfied_by(&grants(&[])));
    }

    #[test]
    fn test_empty_grants_deny_nonempty_requirement() {
        let requirement = PermissionRequirement::all([Permission::Create]);
        assert!(!requirement.is_satisfied_by(&grants(&[])));

        let requirement = PermissionRequirement::any([Permission::Create]);
        assert!(!requirement.is_satisfied_by(&grants(&[])));
    }

    #[test]
    fn test_summary_is_stable() {
        let requirement =
            PermissionRequirement::all([Permission::Update, Permission::Create]);
        assert_eq!(requirement.summary(), "all(create,update)");
    }
}
