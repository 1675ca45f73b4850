//! Reconciliation of override approver lists with service-reported state
//!
//! Pure logic, no I/O; the facade fetches the native record and passes it in.

use crate::types::{ApprovalRecord, RequiredApprovers};
use tracing::debug;

/// Combine a required-approver override with the native approval record
///
/// This is a binary gate, not a quorum: one approval from anyone in
/// `required` satisfies the whole requirement. The returned record clears
/// `approved_by` either way, because the override mechanism reports only
/// sufficiency, never individual approvers.
///
/// Callers only invoke this when `required` is non-empty; with no override
/// in play the native record passes through untouched.
pub fn reconcile(required: &RequiredApprovers, native: ApprovalRecord) -> ApprovalRecord {
    let satisfied = native
        .approved_by
        .iter()
        .any(|entry| required.usernames().contains(&entry.user.username));

    if satisfied {
        debug!(%required, "merge request approved by a required approver");
    } else {
        debug!(%required, "no required approver has approved yet");
    }

    ApprovalRecord {
        approvals_left: Some(u64::from(!satisfied)),
        approved_by: Vec::new(),
        ..native
    }
}
