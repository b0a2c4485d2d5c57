//! Error types.
//!
//! [`ControllerError`] is returned by every facade operation. Its variants
//! split into local pre-flight checks (raised before anything is sent),
//! response validation, server-declared reply errors and transport failures.
//! Transport failures keep the original [`tonic::Status`] untouched.

use thiserror::Error;

use crate::csi;

/// Unified error type for Controller facade operations.
#[derive(Debug, Error, Clone)]
pub enum ControllerError {
    /// A volume ID was required but not supplied.
    #[error("volume ID required")]
    VolumeIdRequired,

    /// Volume info was required but not supplied.
    #[error("volume info required")]
    VolumeInfoRequired,

    /// A volume capability list was required but not supplied.
    #[error("volume capability required")]
    VolumeCapabilityRequired,

    /// A `ListVolumes` entry did not carry a volume info.
    #[error("nil volume info")]
    NilVolumeInfo,

    /// The response carried neither a result nor an error.
    #[error("response carried no result")]
    MissingResult,

    /// The controller answered with an error reply.
    #[error("controller error reply: {0}")]
    Reply(csi::Error),

    /// The RPC itself failed.
    #[error(transparent)]
    Transport(#[from] tonic::Status),
}

impl ControllerError {
    /// `true` for errors detected locally before any request was sent.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::VolumeIdRequired | Self::VolumeInfoRequired | Self::VolumeCapabilityRequired
        )
    }

    /// The transport status, when the RPC itself failed.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            Self::Transport(status) => Some(status),
            _ => None,
        }
    }
}

/// A version string that is not a `major.minor.patch` triple.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid version {input:?}: {reason}")]
pub struct ParseVersionError {
    input: String,
    reason: String,
}

impl ParseVersionError {
    pub(crate) fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Failure to load or apply a [`crate::transport::ClientConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Version(#[from] ParseVersionError),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[source] tonic::transport::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csi::error::general_error::GeneralErrorCode;

    #[test]
    fn error_display() {
        assert_eq!(
            ControllerError::VolumeIdRequired.to_string(),
            "volume ID required"
        );
        assert_eq!(ControllerError::NilVolumeInfo.to_string(), "nil volume info");

        let reply = ControllerError::Reply(csi::Error::general(
            GeneralErrorCode::Undefined,
            false,
            "backend offline",
        ));
        assert_eq!(
            reply.to_string(),
            "controller error reply: Undefined: backend offline"
        );
    }

    #[test]
    fn transport_status_is_kept() {
        let err: ControllerError = tonic::Status::unavailable("down").into();
        let status = err.status().expect("transport status");
        assert_eq!(status.code(), tonic::Code::Unavailable);
        assert_eq!(status.message(), "down");
        assert!(!err.is_preflight());
    }

    #[test]
    fn preflight_kinds() {
        assert!(ControllerError::VolumeIdRequired.is_preflight());
        assert!(ControllerError::VolumeInfoRequired.is_preflight());
        assert!(ControllerError::VolumeCapabilityRequired.is_preflight());
        assert!(!ControllerError::NilVolumeInfo.is_preflight());
        assert!(!ControllerError::MissingResult.is_preflight());
    }
}
