//! Shared test fixtures
//!
//! These are test utilities - not all may be used in every test file but are
//! available across the suite.

#![allow(dead_code)]

pub mod mock_api;

use mr_approvals::types::MergeRequestRef;
use serde_json::{Value, json};

/// The merge request most tests are bound to
pub const MR: MergeRequestRef = MergeRequestRef {
    project_id: 42,
    iid: 7,
    id: 700,
};

/// Build a native approvals payload for [`MR`]
pub fn approvals_payload(approvals_left: Option<u64>, approved_by: &[(u64, &str)]) -> Value {
    let approved_by: Vec<Value> = approved_by
        .iter()
        .map(|(id, username)| json!({ "user": { "id": id, "username": username } }))
        .collect();
    json!({
        "id": 700,
        "iid": 7,
        "project_id": 42,
        "approvals_left": approvals_left,
        "approved_by": approved_by,
    })
}

/// Build a variables payload from `(key, value)` pairs
pub fn variables(entries: &[(&str, &str)]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value, "variable_type": "env_var" }))
        .collect();
    json!(entries)
}

/// Build an ancestor-groups payload from `(id, full_path)` pairs
pub fn groups(entries: &[(u64, &str)]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|(id, full_path)| {
            json!({
                "id": id,
                "full_path": full_path,
                "web_url": format!("https://gitlab.example.com/groups/{full_path}"),
            })
        })
        .collect();
    json!(entries)
}
