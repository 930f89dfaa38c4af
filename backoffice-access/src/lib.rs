//! Backoffice Access - Role-based access decisions
//!
//! This crate answers one question: may the current actor perform a given
//! action? The answer drives UI decisions such as enabling or disabling the
//! "Create" trigger of an admin modal.
//!
//! Design points:
//! - The actor is always passed in explicitly; there is no ambient
//!   "current user" state.
//! - Permission resolution goes through an injected [`PermissionProvider`]
//!   so tests can substitute a fake.
//! - A provider failure is a distinct error ([`AccessError::ProviderUnavailable`]),
//!   never a silent grant or deny. Callers that render UI use the fail-closed
//!   helper on [`AccessChecker`] to map it to a denied decision.

pub mod actor;
pub mod checker;
pub mod error;
pub mod permission;
pub mod provider;
pub mod requirement;

pub use actor::{Actor, Role};
pub use checker::{AccessChecker, RequestScope};
pub use error::{AccessError, AccessResult};
pub use permission::Permission;
pub use provider::{PermissionProvider, StaticPermissionProvider};
pub use requirement::{AccessDecision, PermissionRequirement, RequirementPolicy};
