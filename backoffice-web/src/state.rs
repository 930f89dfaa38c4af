//! Application state management

use crate::i18n::Translator;
use crate::{WebConfig, WebError, WebResult};
use backoffice_access::{
    AccessChecker, Permission, PermissionRequirement, RequirementPolicy, Role,
    StaticPermissionProvider,
};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: WebConfig,
    /// Access decision checker
    pub checker: Arc<AccessChecker>,
    /// Translation service
    pub translator: Arc<Translator>,
    /// Role for requests without actor headers
    pub anonymous_role: Role,
    /// Policy applied to create-trigger requirements
    requirement_policy: RequirementPolicy,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: WebConfig) -> WebResult<Self> {
        let anonymous_role = config
            .anonymous_role
            .parse::<Role>()
            .map_err(|e| WebError::Config(format!("Invalid anonymous role: {}", e)))?;

        let requirement_policy = config
            .requirement_policy
            .parse::<RequirementPolicy>()
            .map_err(|e| WebError::Config(format!("Invalid requirement policy: {}", e)))?;

        let provider = Arc::new(StaticPermissionProvider::new());
        let checker = Arc::new(AccessChecker::new(provider));

        Ok(Self {
            config,
            checker,
            translator: Arc::new(Translator::default()),
            anonymous_role,
            requirement_policy,
        })
    }

    /// Substitute the access checker, used by tests to inject fakes
    pub fn with_checker(mut self, checker: Arc<AccessChecker>) -> Self {
        self.checker = checker;
        self
    }

    /// The requirement gating create triggers, under the configured policy
    pub fn create_requirement(&self) -> PermissionRequirement {
        PermissionRequirement::with_policy([Permission::Create], self.requirement_policy)
    }
}
