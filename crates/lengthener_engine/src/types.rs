use std::fmt;

use thiserror::Error;

use crate::{ClipboardError, SettingsError};

pub type RequestId = u64;
pub type AckId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LengthenCompleted {
        request_id: RequestId,
        result: Result<String, ApiError>,
    },
    CopyCompleted {
        request_id: RequestId,
        result: Result<(), ClipboardError>,
    },
    CopyResetElapsed {
        ack_id: AckId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    InvalidBody,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::InvalidBody => write!(f, "invalid response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
