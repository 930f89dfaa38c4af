//! Create-trigger modal component
//!
//! One generic modal descriptor replaces the per-entity admin templates: the
//! entity kind, the permission requirement and the form flags are the only
//! things that vary between them.

use crate::i18n::Translator;
use backoffice_access::{AccessDecision, Permission, PermissionRequirement};

/// Entity kinds managed through the admin interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Info,
    Questionnaire,
}

impl EntityKind {
    /// URL and element-id slug
    pub fn slug(&self) -> &'static str {
        match self {
            EntityKind::Info => "info",
            EntityKind::Questionnaire => "questionnaire",
        }
    }
}

/// The modal trigger button
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleButton {
    pub label: String,
    pub css_class: String,
    pub disabled: bool,
}

/// Configuration record consumed by the modal markup
#[derive(Debug, Clone, PartialEq)]
pub struct ModalConfig {
    pub id: String,
    pub title: String,
    pub toggle_button: ToggleButton,
}

/// Generic create-modal descriptor for an admin entity
#[derive(Debug, Clone)]
pub struct CreateModal {
    entity: EntityKind,
    requirement: PermissionRequirement,
    /// Forwarded to the shared form partial. The legacy admin templates pass
    /// false here even in the create flow; the flag stays caller-owned.
    pub is_create: bool,
}

impl CreateModal {
    /// Create-modal for an entity, gated on the `create` permission
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            requirement: PermissionRequirement::all([Permission::Create]),
            is_create: false,
        }
    }

    /// Override the permission requirement
    pub fn with_requirement(mut self, requirement: PermissionRequirement) -> Self {
        self.requirement = requirement;
        self
    }

    /// Set the form partial's create flag
    pub fn with_is_create(mut self, is_create: bool) -> Self {
        self.is_create = is_create;
        self
    }

    /// The entity this modal creates
    pub fn entity(&self) -> EntityKind {
        self.entity
    }

    /// The permission requirement gating the trigger
    pub fn requirement(&self) -> &PermissionRequirement {
        &self.requirement
    }

    /// Build the modal configuration from an access decision
    ///
    /// The toggle button is disabled whenever the decision is not granted,
    /// which includes the fail-closed outcome of a provider outage.
    pub fn config(&self, translator: &Translator, decision: &AccessDecision) -> ModalConfig {
        let slug = self.entity.slug();

        ModalConfig {
            id: format!("{}-create-modal", slug),
            title: translator.t("app", &format!("{}.create.title", slug)),
            toggle_button: ToggleButton {
                label: translator.t("app", &format!("{}.create.label", slug)),
                css_class: "btn btn-success".to_string(),
                disabled: !decision.is_granted(),
            },
        }
    }
}
