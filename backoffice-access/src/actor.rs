//! Actor identity
//!
//! The actor is the authenticated identity behind one request. It is created
//! by the authentication layer at request start and treated as immutable for
//! the request's duration.

use crate::permission::Permission;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Role classification granting a default permission set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    /// Read-only access to admin pages
    Viewer,
    /// Can create and update entities
    Editor,
    /// Can additionally delete and export entities
    Manager,
    /// Full administrative access
    Admin,
}

impl Role {
    /// Get default permissions for this role
    pub fn default_permissions(&self) -> HashSet<Permission> {
        use Permission::*;

        match self {
            Role::Viewer => [View].into_iter().collect(),
            Role::Editor => [View, Create, Update].into_iter().collect(),
            Role::Manager => [View, Create, Update, Delete, Export].into_iter().collect(),
            Role::Admin => [View, Create, Update, Delete, Export, Admin]
                .into_iter()
                .collect(),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Viewer => write!(f, "viewer"),
            Role::Editor => write!(f, "editor"),
            Role::Manager => write!(f, "manager"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = crate::AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(Role::Viewer),
            "editor" => Ok(Role::Editor),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            _ => Err(crate::AccessError::UnknownIdentifier(s.to_string())),
        }
    }
}

/// Actor identity information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique actor identifier
    pub actor_id: String,
    /// Assigned roles
    pub roles: Vec<Role>,
    /// Display name (optional)
    pub display_name: Option<String>,
    /// Additional actor metadata
    pub metadata: HashMap<String, String>,
    /// Custom permissions (overrides role defaults)
    pub custom_permissions: Option<HashSet<Permission>>,
}

impl Actor {
    /// Create a new actor with the given roles
    pub fn new<S: Into<String>>(actor_id: S, roles: Vec<Role>) -> Self {
        Self {
            actor_id: actor_id.into(),
            roles,
            display_name: None,
            metadata: HashMap::new(),
            custom_permissions: None,
        }
    }

    /// Create an anonymous actor with the given fallback role
    pub fn anonymous(role: Role) -> Self {
        Self {
            actor_id: format!("anon_{}", uuid::Uuid::new_v4()),
            roles: vec![role],
            display_name: Some("Anonymous".to_string()),
            metadata: HashMap::new(),
            custom_permissions: None,
        }
    }

    /// Set the display name
    pub fn with_display_name<S: Into<String>>(mut self, name: S) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Override role defaults with an explicit permission set
    pub fn with_custom_permissions(mut self, permissions: HashSet<Permission>) -> Self {
        self.custom_permissions = Some(permissions);
        self
    }

    /// Get effective permissions for this actor
    ///
    /// Custom permissions take precedence; otherwise the union of the role
    /// defaults applies.
    pub fn effective_permissions(&self) -> HashSet<Permission> {
        match &self.custom_permissions {
            Some(permissions) => permissions.clone(),
            None => self
                .roles
                .iter()
                .flat_map(|role| role.default_permissions())
                .collect(),
        }
    }

    /// Check if this actor holds a specific permission
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.effective_permissions().contains(permission)
    }

    /// Check if this is an anonymous actor
    pub fn is_anonymous(&self) -> bool {
        self.actor_id.starts_with("anon_")
    }

    /// Get actor display string for logging
    pub fn display_string(&self) -> String {
        let roles = self
            .roles
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",");

        match &self.display_name {
            Some(name) => format!("{} [{}]", name, roles),
            None => format!("{} [{}]", self.actor_id, roles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_permissions_are_ordered_by_privilege() {
        let viewer = Role::Viewer.default_permissions();
        let editor = Role::Editor.default_permissions();
        let manager = Role::Manager.default_permissions();
        let admin = Role::Admin.default_permissions();

        assert!(viewer.is_subset(&editor));
        assert!(editor.is_subset(&manager));
        assert!(manager.is_subset(&admin));
    }

    #[test]
    fn test_effective_permissions_union_roles() {
        let actor = Actor::new("u1", vec![Role::Viewer, Role::Editor]);
        let permissions = actor.effective_permissions();

        assert!(permissions.contains(&Permission::View));
        assert!(permissions.contains(&Permission::Create));
        assert!(!permissions.contains(&Permission::Delete));
    }

    #[test]
    fn test_custom_permissions_override_roles() {
        let actor = Actor::new("u2", vec![Role::Admin])
            .with_custom_permissions([Permission::View].into_iter().collect());

        assert!(actor.has_permission(&Permission::View));
        assert!(!actor.has_permission(&Permission::Create));
    }

    #[test]
    fn test_anonymous_actor() {
        let actor = Actor::anonymous(Role::Viewer);

        assert!(actor.is_anonymous());
        assert!(actor.has_permission(&Permission::View));
        assert!(!actor.has_permission(&Permission::Create));
    }

    #[test]
    fn test_role_fromstr() {
        assert_eq!("Editor".parse::<Role>().unwrap(), Role::Editor);
        assert!("superuser".parse::<Role>().is_err());
    }
}
