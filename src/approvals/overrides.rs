//! Hierarchical `MR_APPROVERS` override lookup
//!
//! Walks project → ancestor groups, nearest scope first, and returns the
//! first non-empty approver list. The ancestor chain comes back in one batch
//! call, so this is an ordered list traversal rather than a tree ascent.

use crate::api::{ApiClient, Request};
use crate::error::Result;
use crate::types::RequiredApprovers;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Configuration variable naming the required approvers
const OVERRIDE_VARIABLE: &str = "MR_APPROVERS";

/// A configuration variable at project or group scope
#[derive(Deserialize)]
struct Variable {
    key: String,
    value: String,
}

/// An ancestor group of a project
#[derive(Deserialize)]
struct Group {
    id: u64,
    full_path: String,
}

/// Resolve the authoritative required-approver list for a project
///
/// Priority order: the project's own variables win outright; otherwise
/// ancestor groups are tried by descending `full_path` length, since a
/// longer full path means a nearer ancestor. Equal-length paths are ordered
/// by ascending group id to keep the walk deterministic. A scope whose
/// variable parses to an empty list falls through to the next scope.
pub async fn resolve_required_approvers(
    api: &dyn ApiClient,
    project_id: u64,
) -> Result<RequiredApprovers> {
    let variables = api
        .call(&Request::get(format!("/projects/{project_id}/variables")))
        .await?;
    if let Some(approvers) = override_from(variables)? {
        debug!(project_id, %approvers, "using merge request approvers from project");
        return Ok(approvers);
    }

    let groups = api
        .call(&Request::get(format!("/projects/{project_id}/groups")))
        .await?;
    let mut groups: Vec<Group> = serde_json::from_value(groups)?;
    groups.sort_by(|a, b| {
        b.full_path
            .len()
            .cmp(&a.full_path.len())
            .then(a.id.cmp(&b.id))
    });

    for group in groups {
        let variables = api
            .call(&Request::get(format!("/groups/{}/variables", group.id)))
            .await?;
        if let Some(approvers) = override_from(variables)? {
            debug!(
                group = %group.full_path,
                %approvers,
                "using merge request approvers from ancestor group"
            );
            return Ok(approvers);
        }
    }

    debug!(project_id, "no approver override configured in any scope");
    Ok(RequiredApprovers::default())
}

/// Extract a non-empty `MR_APPROVERS` list from a variables response
fn override_from(variables: Value) -> Result<Option<RequiredApprovers>> {
    let variables: Vec<Variable> = serde_json::from_value(variables)?;
    let Some(raw) = variables
        .into_iter()
        .find(|v| v.key == OVERRIDE_VARIABLE)
        .map(|v| v.value)
    else {
        return Ok(None);
    };

    let approvers = RequiredApprovers::parse(&raw);
    Ok(if approvers.is_empty() {
        None
    } else {
        Some(approvers)
    })
}
