//! mr-approvals: approval gating for GitLab merge requests
//!
//! Resolves whether a merge request's approval requirements are satisfied,
//! across the incompatible API shapes of older GitLab releases, honoring
//! org-level `MR_APPROVERS` overrides set at project or ancestor-group
//! scope, and re-applying approvals by impersonation after a rebase push
//! invalidates them.
//!
//! The decision logic lives in [`approvals`]; [`api`] is the thin transport
//! seam it calls through.

pub mod api;
pub mod approvals;
pub mod error;
pub mod types;

pub use approvals::{Approvals, VersionGate};
pub use error::{Error, Result};
pub use types::{ApprovalRecord, Approver, MergeRequestRef, RequiredApprovers, ServiceVersion};
