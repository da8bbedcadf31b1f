//! Response envelopes
//!
//! Every operation answers with either
//! `{ok: true, data, meta: {source?, retrieved_at, pagination?, warnings}}` or
//! `{ok: false, error: {code, message, details?}, meta: {retrieved_at}}`.

use crate::{ErrorCode, SitemapError};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

/// Tagged success/error response
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success(Success<T>),
    Failure(Failure),
}

#[derive(Debug, Clone, Serialize)]
pub struct Success<T> {
    pub ok: bool,
    pub data: T,
    pub meta: SuccessMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub retrieved_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,

    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub next_cursor: Option<String>,
    pub offset: u64,
    pub limit: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub ok: bool,
    pub error: ErrorBody,
    pub meta: FailureMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailureMeta {
    pub retrieved_at: String,
}

impl<T> Envelope<T> {
    /// Wraps a successful result
    pub fn success(data: T, source: Option<String>, warnings: Vec<String>) -> Self {
        Self::Success(Success {
            ok: true,
            data,
            meta: SuccessMeta {
                source,
                retrieved_at: now(),
                pagination: None,
                warnings,
            },
        })
    }

    /// Attaches pagination metadata to a success envelope
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        if let Self::Success(success) = &mut self {
            success.meta.pagination = Some(pagination);
        }
        self
    }

    /// Wraps a failure
    pub fn failure(error: &SitemapError) -> Self {
        Self::Failure(Failure {
            ok: false,
            error: ErrorBody {
                code: error.code(),
                message: error.to_string(),
                details: error_details(error),
            },
            meta: FailureMeta {
                retrieved_at: now(),
            },
        })
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the success payload, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(success) => Some(&success.data),
            Self::Failure(_) => None,
        }
    }

    /// Returns the error body, if any
    pub fn error(&self) -> Option<&ErrorBody> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(&failure.error),
        }
    }

    /// Returns the success metadata, if any
    pub fn meta(&self) -> Option<&SuccessMeta> {
        match self {
            Self::Success(success) => Some(&success.meta),
            Self::Failure(_) => None,
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn error_details(error: &SitemapError) -> Option<Value> {
    match error {
        SitemapError::Upstream { url, status } => Some(json!({ "url": url, "status": status })),
        SitemapError::RateLimited { url }
        | SitemapError::Timeout { url }
        | SitemapError::Network { url, .. } => Some(json!({ "url": url })),
        SitemapError::Parse { url, message } => Some(json!({ "url": url, "reason": message })),
        _ => None,
    }
}
