//! Mock API client for testing
//!
//! Manually implements `ApiClient` with canned responses, call tracking,
//! and error injection.

#![allow(dead_code)]

use async_trait::async_trait;
use mr_approvals::api::{ApiClient, Method, Request};
use mr_approvals::error::{Error, Result};
use mr_approvals::types::ServiceVersion;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock transport with configurable responses per GET path
///
/// POST and PUT requests succeed with a null body unless an error is
/// injected for their path. Every request is recorded in order.
pub struct MockApi {
    version: ServiceVersion,
    get_responses: Mutex<HashMap<String, Value>>,
    // Call tracking
    calls: Mutex<Vec<Request>>,
    // Error injection, keyed by path
    errors: Mutex<HashMap<String, String>>,
}

impl MockApi {
    /// Create a mock reporting the given version string (e.g. `"13.2.0-ee"`)
    pub fn new(version: &str) -> Self {
        Self {
            version: version.parse().expect("valid test version"),
            get_responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            errors: Mutex::new(HashMap::new()),
        }
    }

    /// Set the response body for a GET path
    pub fn set_response(&self, path: &str, body: Value) {
        self.get_responses
            .lock()
            .unwrap()
            .insert(path.to_string(), body);
    }

    /// Make any request to `path` fail
    pub fn fail_path(&self, path: &str, msg: &str) {
        self.errors
            .lock()
            .unwrap()
            .insert(path.to_string(), msg.to_string());
    }

    /// All recorded requests, in order
    pub fn calls(&self) -> Vec<Request> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded requests against one path, in order
    pub fn calls_to(&self, path: &str) -> Vec<Request> {
        self.calls()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    /// Recorded POST requests, in order
    pub fn post_calls(&self) -> Vec<Request> {
        self.calls()
            .into_iter()
            .filter(|r| r.method == Method::Post)
            .collect()
    }

    /// Assert that no request touched a path containing `fragment`
    pub fn assert_no_call_containing(&self, fragment: &str) {
        let offenders: Vec<Request> = self
            .calls()
            .into_iter()
            .filter(|r| r.path.contains(fragment))
            .collect();
        assert!(
            offenders.is_empty(),
            "Expected no calls to paths containing {fragment:?} but got: {offenders:?}"
        );
    }
}

#[async_trait]
impl ApiClient for MockApi {
    async fn call(&self, request: &Request) -> Result<Value> {
        self.calls.lock().unwrap().push(request.clone());

        if let Some(msg) = self.errors.lock().unwrap().get(&request.path) {
            return Err(Error::GitLabApi(msg.clone()));
        }

        match request.method {
            Method::Get => self
                .get_responses
                .lock()
                .unwrap()
                .get(&request.path)
                .cloned()
                .ok_or_else(|| {
                    Error::GitLabApi(format!("no response configured for GET {}", request.path))
                }),
            Method::Post | Method::Put => Ok(Value::Null),
        }
    }

    async fn version(&self) -> Result<ServiceVersion> {
        Ok(self.version)
    }
}
