//! Permission identifiers
//!
//! Permissions name action categories on admin entities. Roles bundle them;
//! see [`crate::actor`].

use serde::{Deserialize, Serialize};

/// Specific permissions that can be granted to actors
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    /// View admin pages and entity listings
    View,
    /// Create new entities
    Create,
    /// Update existing entities
    Update,
    /// Delete entities
    Delete,
    /// Export entity data
    Export,
    /// Administrative functions
    Admin,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::View => write!(f, "view"),
            Permission::Create => write!(f, "create"),
            Permission::Update => write!(f, "update"),
            Permission::Delete => write!(f, "delete"),
            Permission::Export => write!(f, "export"),
            Permission::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Permission {
    type Err = crate::AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "view" => Ok(Permission::View),
            "create" => Ok(Permission::Create),
            "update" => Ok(Permission::Update),
            "delete" => Ok(Permission::Delete),
            "export" => Ok(Permission::Export),
            "admin" => Ok(Permission::Admin),
            _ => Err(crate::AccessError::UnknownIdentifier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_display_fromstr_roundtrip() {
        let all = [
            Permission::View,
            Permission::Create,
            Permission::Update,
            Permission::Delete,
            Permission::Export,
            Permission::Admin,
        ];

        for permission in all {
            let parsed: Permission = permission.to_string().parse().unwrap();
            assert_eq!(parsed, permission);
        }
    }

    #[test]
    fn test_unknown_permission_rejected() {
        let result = "publish".parse::<Permission>();
        assert!(result.is_err());
    }
}
