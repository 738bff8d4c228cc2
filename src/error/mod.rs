pub(crate) mod internal;

use std::fmt;
use std::io;

use backtrace::Backtrace;

use crate::core::Capability;

#[derive(Debug)]
pub enum IagateError {
    // Identifier/password pair does not match any credential record.
    InvalidCredentials,
    // The operation needs an authenticated session.
    Unauthenticated,
    // The current identity lacks the capability the operation requires.
    PermissionDenied { capability: Capability },
    // A submitted form failed validation.
    InvalidRequest(String),
    UnknownRoute(String),
    UnknownCapability(String),
    // A best effort collaborator (chat history, storage backend) failed.
    ExternalService {
        service: &'static str,
        description: String,
    },
    Internal(internal::Error),
}

impl IagateError {
    pub(crate) fn external(service: &'static str, err: impl fmt::Display) -> Self {
        IagateError::ExternalService {
            service,
            description: err.to_string(),
        }
    }

    /// Backtrace captured where an internal failure was raised.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match self {
            IagateError::Internal(err) => err.backtrace(),
            _ => None,
        }
    }

    /// Whether the user can simply retry the action that produced this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            IagateError::InvalidCredentials
                | IagateError::InvalidRequest(_)
                | IagateError::ExternalService { .. }
        )
    }
}

impl fmt::Display for IagateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IagateError::InvalidCredentials => write!(f, "invalid credentials"),
            IagateError::Unauthenticated => write!(f, "unauthenticated"),
            IagateError::PermissionDenied { capability } => {
                write!(f, "permission denied. {} required", capability)
            }
            IagateError::InvalidRequest(description) => write!(f, "{}", description),
            IagateError::UnknownRoute(path) => write!(f, "unknown route {}", path),
            IagateError::UnknownCapability(name) => write!(f, "unknown capability {}", name),
            IagateError::ExternalService {
                service,
                description,
            } => write!(f, "{} unavailable. {}", service, description),
            IagateError::Internal(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for IagateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IagateError::Internal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<internal::Error> for IagateError {
    fn from(err: internal::Error) -> Self {
        IagateError::Internal(err)
    }
}

impl From<io::Error> for IagateError {
    fn from(err: io::Error) -> Self {
        IagateError::Internal(internal::Error::from(err))
    }
}

impl From<serde_yaml::Error> for IagateError {
    fn from(err: serde_yaml::Error) -> Self {
        IagateError::Internal(internal::Error::from(err))
    }
}

impl From<serde_json::Error> for IagateError {
    fn from(err: serde_json::Error) -> Self {
        IagateError::Internal(internal::Error::from(err))
    }
}
