//! Request handlers for the admin pages

use crate::auth;
use crate::modal::{CreateModal, EntityKind};
use crate::templates::{AdminPageTemplate, ModalView};
use crate::{AppState, WebResult};
use askama::Template;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, Json},
};
use backoffice_access::RequestScope;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Info admin page
pub async fn info_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> WebResult<Html<String>> {
    entity_page(state, headers, EntityKind::Info).await
}

/// Questionnaire admin page
pub async fn questionnaire_page(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> WebResult<Html<String>> {
    entity_page(state, headers, EntityKind::Questionnaire).await
}

/// Render an entity admin page with its permission-gated create modal
async fn entity_page(
    state: AppState,
    headers: HeaderMap,
    entity: EntityKind,
) -> WebResult<Html<String>> {
    let actor = auth::actor_from_headers(&headers, state.anonymous_role);
    let scope = RequestScope::new();

    let modal = CreateModal::new(entity).with_requirement(state.create_requirement());

    // Fail-closed: a provider outage renders the trigger disabled.
    let decision = state
        .checker
        .is_available_or_deny(&scope, &actor, modal.requirement())
        .await;

    let config = modal.config(&state.translator, &decision);
    let heading = state
        .translator
        .t("app", &format!("{}.page.title", entity.slug()));

    let template = AdminPageTemplate::new(heading, ModalView::new(&modal, config));
    Ok(Html(template.render()?))
}
