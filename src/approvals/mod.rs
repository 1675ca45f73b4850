//! Approval resolution for merge requests
//!
//! [`Approvals`] answers one question: are this merge request's approval
//! requirements satisfied? The answer depends on the instance version, the
//! edition, and any `MR_APPROVERS` override configured on the project or an
//! ancestor group. It also restores approvals lost to a rebase push by
//! replaying them through impersonation.

mod overrides;
mod reconcile;
mod version;

pub use overrides::resolve_required_approvers;
pub use reconcile::reconcile;
pub use version::VersionGate;

use crate::api::{ApiClient, Request};
use crate::error::Result;
use crate::types::{ApprovalRecord, MergeRequestRef, RequiredApprovers};
use std::sync::Arc;
use tracing::debug;

/// Approval state for one merge request
///
/// Holds the most recently fetched [`ApprovalRecord`]; empty until the first
/// [`refetch`](Self::refetch), and replaced wholesale on each one. A failed
/// refetch leaves the previous record intact. Callers must serialize
/// `refetch`/`approve` calls on the same instance.
pub struct Approvals {
    api: Arc<dyn ApiClient>,
    mr: MergeRequestRef,
    record: Option<ApprovalRecord>,
}

impl Approvals {
    /// Create a facade for one merge request; no record until `refetch`
    pub const fn new(api: Arc<dyn ApiClient>, mr: MergeRequestRef) -> Self {
        Self {
            api,
            mr,
            record: None,
        }
    }

    /// Project-scoped merge request iid
    pub const fn iid(&self) -> u64 {
        self.mr.iid
    }

    /// Numeric project id
    pub const fn project_id(&self) -> u64 {
        self.mr.project_id
    }

    /// The stored record, if a refetch has completed
    pub const fn record(&self) -> Option<&ApprovalRecord> {
        self.record.as_ref()
    }

    /// Approvals still needed; absent record or null count reads as 0
    pub fn approvals_left(&self) -> u64 {
        self.record
            .as_ref()
            .map_or(0, ApprovalRecord::approvals_left)
    }

    /// Whether the approval requirements are satisfied
    pub fn sufficient(&self) -> bool {
        self.approvals_left() == 0
    }

    /// Usernames of recorded approvers, in service-reported order
    pub fn approver_usernames(&self) -> Vec<String> {
        self.record.as_ref().map_or_else(Vec::new, |record| {
            record
                .approved_by
                .iter()
                .map(|entry| entry.user.username.clone())
                .collect()
        })
    }

    /// User ids of recorded approvers, in service-reported order
    pub fn approver_ids(&self) -> Vec<u64> {
        self.record.as_ref().map_or_else(Vec::new, |record| {
            record
                .approved_by
                .iter()
                .map(|entry| entry.user.id)
                .collect()
        })
    }

    async fn fetch_native(&self, gate: VersionGate) -> Result<ApprovalRecord> {
        let body = self
            .api
            .call(&Request::get(gate.approvals_path(&self.mr)))
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Re-resolve approval state from the service and replace the record
    ///
    /// Flow: version gate → override lookup (when the instance supports it)
    /// → reconciliation against the native record when an override is in
    /// play, otherwise the native record verbatim, or a synthesized
    /// auto-approved record where the feature does not exist at all.
    pub async fn refetch(&mut self) -> Result<()> {
        let gate = VersionGate::new(self.api.version().await?);

        let required = if gate.supports_overrides() {
            resolve_required_approvers(self.api.as_ref(), self.mr.project_id).await?
        } else {
            RequiredApprovers::default()
        };

        let record = if required.is_empty() {
            if gate.has_native_approvals() {
                self.fetch_native(gate).await?
            } else {
                debug!(iid = self.mr.iid, "approval feature unavailable, treating as approved");
                ApprovalRecord::auto_approved(&self.mr)
            }
        } else {
            // Overrides decide sufficiency, but the native record still
            // supplies the list of who actually approved.
            let native = self.fetch_native(gate).await?;
            reconcile(&required, native)
        };

        self.record = Some(record);
        Ok(())
    }

    /// Approve `target` as every currently recorded approver, in order
    ///
    /// One impersonated POST per approver id. Not transactional: a failure
    /// partway through leaves earlier approvals applied. Retrying is safe
    /// since approving twice as the same user is idempotent on the service.
    pub async fn approve(&self, target: &MergeRequestRef) -> Result<()> {
        let gate = VersionGate::new(self.api.version().await?);
        let path = gate.approve_path(target);

        for uid in self.approver_ids() {
            debug!(uid, path = %path, "re-approving by impersonation");
            self.api.call(&Request::post(path.as_str()).sudo(uid)).await?;
        }
        Ok(())
    }

    /// Replay the recorded approvals onto this merge request
    ///
    /// Capture approver identities before pushing a rebased branch (which
    /// may invalidate approvals), then call this to restore them.
    pub async fn reapprove(&self) -> Result<()> {
        self.approve(&self.mr).await
    }
}
