//! Template system for server-side rendering
//!
//! This module provides templates for server-side rendering using Askama.

use crate::modal::{CreateModal, ModalConfig};
use askama::Template;

/// Modal data as the markup consumes it
#[derive(Debug, Clone)]
pub struct ModalView {
    pub id: String,
    pub title: String,
    pub button_label: String,
    pub button_class: String,
    pub button_disabled: bool,
    pub is_create: bool,
    pub entity_slug: String,
}

impl ModalView {
    /// Flatten a resolved modal configuration for the templates
    pub fn new(modal: &CreateModal, config: ModalConfig) -> Self {
        Self {
            id: config.id,
            title: config.title,
            button_label: config.toggle_button.label,
            button_class: config.toggle_button.css_class,
            button_disabled: config.toggle_button.disabled,
            is_create: modal.is_create,
            entity_slug: modal.entity().slug().to_string(),
        }
    }
}

/// Entity admin page template
#[derive(Template)]
#[template(path = "admin_entity.html")]
pub struct AdminPageTemplate {
    pub title: String,
    pub heading: String,
    pub modal: ModalView,
}

impl AdminPageTemplate {
    pub fn new(heading: String, modal: ModalView) -> Self {
        Self {
            title: format!("Backoffice - {}", heading),
            heading,
            modal,
        }
    }
}

/// Error page template
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub error_code: u16,
    pub error_message: String,
}

impl ErrorTemplate {
    pub fn internal(error_message: String) -> Self {
        Self {
            title: "Backoffice - Error".to_string(),
            error_code: 500,
            error_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translator;
    use crate::modal::EntityKind;
    use backoffice_access::{AccessDecision, PermissionRequirement};

    fn page(granted: bool) -> String {
        let modal = CreateModal::new(EntityKind::Info);
        let decision = AccessDecision::new(modal.requirement().clone(), granted);
        let config = modal.config(&Translator::default(), &decision);
        let view = ModalView::new(&modal, config);

        AdminPageTemplate::new("Info".to_string(), view)
            .render()
            .unwrap()
    }

    #[test]
    fn test_granted_decision_renders_enabled_trigger() {
        let markup = page(true);

        assert!(markup.contains("Create Info"));
        assert!(markup.contains("info-create-modal"));
        assert!(!markup.contains("disabled"));
    }

    #[test]
    fn test_denied_decision_renders_disabled_trigger() {
        let markup = page(false);

        assert!(markup.contains("Create Info"));
        assert!(markup.contains(" disabled"));
    }

    #[test]
    fn test_form_partial_receives_create_flag() {
        let modal = CreateModal::new(EntityKind::Info).with_is_create(true);
        let decision = AccessDecision::new(modal.requirement().clone(), true);
        let config = modal.config(&Translator::default(), &decision);
        let view = ModalView::new(&modal, config);

        let markup = AdminPageTemplate::new("Info".to_string(), view)
            .render()
            .unwrap();
        assert!(markup.contains("name=\"is_create\" value=\"true\""));
    }

    #[test]
    fn test_error_template_renders() {
        let markup = ErrorTemplate::internal("boom".to_string()).render().unwrap();

        assert!(markup.contains("500"));
        assert!(markup.contains("boom"));
    }

    #[test]
    fn test_requirement_survives_view_construction() {
        let modal = CreateModal::new(EntityKind::Questionnaire);
        assert_eq!(
            modal.requirement(),
            &PermissionRequirement::all([backoffice_access::Permission::Create])
        );
    }
}
