//! Transport seam for the GitLab REST API
//!
//! The approvals core never talks HTTP itself; it builds [`Request`] values
//! and hands them to an [`ApiClient`]. The [`HttpApi`] adapter is the real
//! implementation; tests substitute their own.

mod http;

pub use http::HttpApi;

use crate::error::Result;
use crate::types::ServiceVersion;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP method of an API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// A single API request: method, v4 path, optional impersonation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Path below `/api/v4`, e.g. `/projects/42/variables`
    pub path: String,
    /// User id to impersonate via the `Sudo` header, if any
    pub sudo: Option<u64>,
}

impl Request {
    /// Build a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            sudo: None,
        }
    }

    /// Build a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            sudo: None,
        }
    }

    /// Build a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            sudo: None,
        }
    }

    /// Issue this request as another user (admin tokens only)
    #[must_use]
    pub const fn sudo(mut self, uid: u64) -> Self {
        self.sudo = Some(uid);
        self
    }
}

/// The transport collaborator the approvals core depends on
///
/// One logical call at a time; pagination, authentication, and caching are
/// the implementor's concern. Failures propagate unchanged to the caller.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Execute a request and return the decoded JSON body
    async fn call(&self, request: &Request) -> Result<Value>;

    /// The instance version, fetched once per session by implementors
    async fn version(&self) -> Result<ServiceVersion>;
}
