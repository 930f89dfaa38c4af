//! Actor extraction from request headers
//!
//! An upstream authentication proxy is expected to set the actor headers;
//! requests without them get an anonymous actor with the configured fallback
//! role. The actor is always constructed here and passed down explicitly.

use axum::http::HeaderMap;
use backoffice_access::{Actor, Role};

/// Header carrying the actor identifier
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying a comma-separated role list
pub const ACTOR_ROLES_HEADER: &str = "x-actor-roles";
/// Header carrying the actor display name
pub const ACTOR_NAME_HEADER: &str = "x-actor-name";

/// Build the request actor from headers
pub fn actor_from_headers(headers: &HeaderMap, fallback_role: Role) -> Actor {
    let actor_id = headers
        .get(ACTOR_ID_HEADER)
        .and_then(|value| value.to_str().ok());

    let Some(actor_id) = actor_id else {
        return Actor::anonymous(fallback_role);
    };

    let roles: Vec<Role> = headers
        .get(ACTOR_ROLES_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|list| {
            list.split(',')
                .filter_map(|name| match name.trim().parse::<Role>() {
                    Ok(role) => Some(role),
                    Err(_) => {
                        tracing::warn!(role = name.trim(), "Ignoring unknown role in header");
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let roles = if roles.is_empty() {
        vec![fallback_role]
    } else {
        roles
    };

    let mut actor = Actor::new(actor_id, roles);
    if let Some(name) = headers
        .get(ACTOR_NAME_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        actor = actor.with_display_name(name);
    }

    actor
}
