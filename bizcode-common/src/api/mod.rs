//! Carrier and wire shape for business errors.
//!
//! [`BizFault`] is what application code returns with `?` when a business
//! rule fails. The web layer turns it into an HTTP status plus an
//! [`ErrorResponse`] body with [`BizFault::to_response`].

pub mod schema;

use crate::errors::{BizError, ErrorLogType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A raised business error: the catalog variant plus throw-site detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] {}", .error.biz_code(), .message)]
pub struct BizFault {
    error: BizError,
    message: String,
    context: BTreeMap<String, String>,
}

impl BizFault {
    /// Raises `error` with a human-readable message.
    pub fn new(error: BizError, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context key-value pair.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn error(&self) -> BizError {
        self.error
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn context(&self) -> &BTreeMap<String, String> {
        &self.context
    }

    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.error.http_status()
    }

    #[must_use]
    pub fn biz_code(&self) -> u32 {
        self.error.biz_code()
    }

    #[must_use]
    pub fn log_type(&self) -> ErrorLogType {
        self.error.log_type()
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.error.is_verbose()
    }

    /// Returns the HTTP status and body the web layer should send.
    #[must_use]
    pub fn to_response(&self) -> (u16, ErrorResponse) {
        (self.http_status(), ErrorResponse::from(self))
    }
}

/// Raises the variant with its symbolic name as the message.
impl From<BizError> for BizFault {
    fn from(error: BizError) -> Self {
        Self::new(error, error.name())
    }
}

/// JSON body rendered for a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    pub success: bool,
    /// Business code of the raised error
    pub code: u32,
    /// Message supplied where the error was raised
    pub message: String,
    /// Additional key-value context
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl From<&BizFault> for ErrorResponse {
    fn from(fault: &BizFault) -> Self {
        Self {
            success: false,
            code: fault.biz_code(),
            message: fault.message.clone(),
            context: fault.context.clone(),
        }
    }
}
