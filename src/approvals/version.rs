//! Version-gated endpoint and feature selection
//!
//! All version comparisons for the approvals flow live here so every call
//! site shares one source of truth.

use crate::types::{MergeRequestRef, ServiceVersion};

/// The v4 API addressed merge requests by internal `id` until this release
const IID_ADDRESSING: (u64, u64, u64) = (9, 2, 2);

/// `MR_APPROVERS` override resolution and CE-native approvals start here
const OVERRIDES: (u64, u64, u64) = (13, 2, 0);

/// Decides endpoint shape and feature availability for one service version
#[derive(Debug, Clone, Copy)]
pub struct VersionGate {
    version: ServiceVersion,
}

impl VersionGate {
    /// Create a gate for the given version
    pub const fn new(version: ServiceVersion) -> Self {
        Self { version }
    }

    /// The identifier the approval endpoints are addressed by
    ///
    /// GitLab botched the v4 API before 9.2.3: merge request routes took the
    /// internal `id` instead of the project-scoped `iid`.
    fn path_ref(&self, mr: &MergeRequestRef) -> u64 {
        if self.version.release() >= IID_ADDRESSING {
            mr.iid
        } else {
            mr.id
        }
    }

    /// Path for fetching the native approval record
    pub fn approvals_path(&self, mr: &MergeRequestRef) -> String {
        format!(
            "/projects/{}/merge_requests/{}/approvals",
            mr.project_id,
            self.path_ref(mr)
        )
    }

    /// Path for approving a merge request
    pub fn approve_path(&self, mr: &MergeRequestRef) -> String {
        format!(
            "/projects/{}/merge_requests/{}/approve",
            mr.project_id,
            self.path_ref(mr)
        )
    }

    /// Whether `MR_APPROVERS` override resolution should be attempted
    pub fn supports_overrides(&self) -> bool {
        self.version.release() >= OVERRIDES
    }

    /// Whether the native approval feature exists on this instance
    ///
    /// EE always has it; CE grew it in 13.2. When this is false there is no
    /// approvals endpoint to call and the record must be synthesized as
    /// auto-approved.
    pub fn has_native_approvals(&self) -> bool {
        self.version.is_ee || self.version.release() >= OVERRIDES
    }
}
