//! Route definitions for the Backoffice web server

use crate::{handlers, AppState};
use axum::{routing::get, Router};

/// Create admin page routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/info", get(handlers::info_page))
        .route("/questionnaire", get(handlers::questionnaire_page))
}

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_app, WebConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(WebConfig::default()).unwrap();
        create_app(state)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_route() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_info_page_enabled_for_editor() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/admin/info")
                    .header("x-actor-id", "u1")
                    .header("x-actor-roles", "editor")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let markup = body_string(response).await;
        assert!(markup.contains("Create Info"));
        assert!(!markup.contains(" disabled"));
    }

    #[tokio::test]
    async fn test_page_disabled_when_provider_unavailable() {
        use async_trait::async_trait;
        use backoffice_access::{
            AccessChecker, AccessError, AccessResult, Actor, Permission, PermissionProvider,
        };
        use std::collections::HashSet;
        use std::sync::Arc;

        struct UnavailableProvider;

        #[async_trait]
        impl PermissionProvider for UnavailableProvider {
            async fn grants_for(&self, _actor: &Actor) -> AccessResult<HashSet<Permission>> {
                Err(AccessError::unavailable("backend offline"))
            }
        }

        let state = AppState::new(WebConfig::default())
            .unwrap()
            .with_checker(Arc::new(AccessChecker::new(Arc::new(UnavailableProvider))));

        let response = create_app(state)
            .oneshot(
                Request::builder()
                    .uri("/admin/info")
                    .header("x-actor-id", "u1")
                    .header("x-actor-roles", "admin")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Fail-closed: even an admin actor sees a disabled trigger when the
        // permission provider is down.
        assert_eq!(response.status(), StatusCode::OK);
        let markup = body_string(response).await;
        assert!(markup.contains(" disabled"));
    }

    #[tokio::test]
    async fn test_questionnaire_page_disabled_for_anonymous() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/admin/questionnaire")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let markup = body_string(response).await;
        assert!(markup.contains("Create Questionnaire"));
        assert!(markup.contains(" disabled"));
    }
}
