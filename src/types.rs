//! Core types for mr-approvals

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The GitLab instance version, fetched once per session
///
/// Ordering questions are always asked against the `(major, minor, patch)`
/// triple via [`release`](Self::release); the edition flag never participates
/// in version comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceVersion {
    /// Major version component
    pub major: u64,
    /// Minor version component
    pub minor: u64,
    /// Patch version component
    pub patch: u64,
    /// Whether this is an Enterprise Edition instance
    pub is_ee: bool,
}

impl ServiceVersion {
    /// The `(major, minor, patch)` triple, for tuple comparisons
    pub const fn release(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl FromStr for ServiceVersion {
    type Err = Error;

    /// Parse strings like `"13.2.0"`, `"13.2.0-ee"`, or `"13.0.14-rc2-ee"`
    fn from_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.splitn(2, '-');
        let triple = parts.next().unwrap_or_default();
        let suffix = parts.next().unwrap_or_default();

        let components: Vec<&str> = triple.split('.').collect();
        if components.len() != 3 {
            return Err(Error::Version(s.to_string()));
        }
        let number = |raw: &str| {
            raw.parse::<u64>()
                .map_err(|_| Error::Version(s.to_string()))
        };

        Ok(Self {
            major: number(components[0])?,
            minor: number(components[1])?,
            patch: number(components[2])?,
            is_ee: suffix.split('-').any(|part| part == "ee"),
        })
    }
}

impl std::fmt::Display for ServiceVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_ee {
            write!(f, "-ee")?;
        }
        Ok(())
    }
}

/// Identity of the merge request a facade is bound to
///
/// Carries both the project-scoped `iid` and the instance-internal `id`
/// because older GitLab releases addressed approval endpoints by `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRequestRef {
    /// Numeric project id
    pub project_id: u64,
    /// Project-scoped merge request iid (the number shown in the UI)
    pub iid: u64,
    /// Instance-internal merge request id
    pub id: u64,
}

/// An identity that has approved a merge request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Approver {
    /// Numeric user id (used for impersonation)
    pub id: u64,
    /// Username (used for override matching)
    pub username: String,
}

/// One entry in the service's `approved_by` list
///
/// The wire format wraps each approver in a `user` object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovedBy {
    /// The approving user
    pub user: Approver,
}

/// Approval state for one merge request
///
/// Replaced wholesale on every refetch; callers never mutate it field by
/// field. The record is sufficient iff [`approvals_left`](Self::approvals_left)
/// resolves to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApprovalRecord {
    /// Instance-internal merge request id
    pub id: u64,
    /// Project-scoped merge request iid
    pub iid: u64,
    /// Numeric project id
    pub project_id: u64,
    /// Approvals still needed; the service reports null once the approval
    /// feature is inactive, so absent and null both read as zero
    #[serde(default)]
    pub approvals_left: Option<u64>,
    /// Who has approved, in service-reported order
    pub approved_by: Vec<ApprovedBy>,
}

impl ApprovalRecord {
    /// Synthesize a record for an instance where the approval feature does
    /// not exist: nothing left to approve, nobody recorded as approver
    pub const fn auto_approved(mr: &MergeRequestRef) -> Self {
        Self {
            id: mr.id,
            iid: mr.iid,
            project_id: mr.project_id,
            approvals_left: Some(0),
            approved_by: Vec::new(),
        }
    }

    /// Approvals still needed, with null/absent coalesced to zero
    pub fn approvals_left(&self) -> u64 {
        self.approvals_left.unwrap_or(0)
    }
}

/// The authoritative approver list from an `MR_APPROVERS` override variable
///
/// An ordered set of usernames; empty means "no override configured, defer
/// to the service's native approval rules".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredApprovers(Vec<String>);

impl RequiredApprovers {
    /// Parse a comma-separated username list
    ///
    /// Entries are trimmed, empty entries and duplicates dropped, original
    /// order preserved. `""` and `" , "` both parse to the empty set.
    pub fn parse(raw: &str) -> Self {
        let mut usernames: Vec<String> = Vec::new();
        for entry in raw.split(',') {
            let entry = entry.trim();
            if !entry.is_empty() && !usernames.iter().any(|u| u == entry) {
                usernames.push(entry.to_string());
            }
        }
        Self(usernames)
    }

    /// Whether no override is configured
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The usernames, in configured order
    pub fn usernames(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for RequiredApprovers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
