//! Command implementations for the mr-approvals binary

mod reapprove;
mod status;

pub use reapprove::run_reapprove;
pub use status::run_status;

use mr_approvals::api::{ApiClient, HttpApi, Request};
use mr_approvals::error::Result;
use mr_approvals::types::MergeRequestRef;
use std::sync::Arc;

/// Shared setup for both commands
///
/// Builds the API client and resolves the target merge request, since the
/// approvals endpoints need the MR's internal id as well as its iid.
pub struct CommandContext {
    /// The API client
    pub api: Arc<HttpApi>,
    /// The resolved merge request
    pub mr: MergeRequestRef,
}

impl CommandContext {
    /// Connect and look up the merge request named on the command line
    pub async fn new(host: &str, token: &str, project: &str, iid: u64) -> Result<Self> {
        let api = Arc::new(HttpApi::new(host, token)?);

        // The project may be given as a numeric id or a full path; paths
        // must be percent-encoded to live in one URL segment.
        let project_ref = if project.bytes().all(|b| b.is_ascii_digit()) {
            project.to_string()
        } else {
            urlencoding::encode(project).into_owned()
        };

        let body = api
            .call(&Request::get(format!(
                "/projects/{project_ref}/merge_requests/{iid}"
            )))
            .await?;
        let mr: MergeRequestRef = serde_json::from_value(body)?;

        Ok(Self { api, mr })
    }
}
