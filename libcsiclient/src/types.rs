//! Ergonomic helpers over the wire types in [`crate::csi`].
//!
//! The protobuf messages are plain data; this module adds the constructors,
//! parsing and formatting that callers need when assembling requests by hand.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::csi::{
    AccessMode, ControllerServiceCapability, Error, NodeId, PublishVolumeInfo, Version,
    VolumeCapability, VolumeId, VolumeMetadata, access_mode, controller_service_capability,
    error, volume_capability,
};
use crate::error::ParseVersionError;

// ---------------------------------------------------------------------------
// Version
// ---------------------------------------------------------------------------

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Parse a dotted `major.minor.patch` triple.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u32, ParseVersionError> {
            let part = parts
                .next()
                .ok_or_else(|| ParseVersionError::new(s, "expected major.minor.patch"))?;
            part.parse::<u32>()
                .map_err(|e| ParseVersionError::new(s, e.to_string()))
        };
        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(ParseVersionError::new(s, "trailing components"));
        }
        Ok(version)
    }
}

// ---------------------------------------------------------------------------
// Key-value identity blobs
// ---------------------------------------------------------------------------

/// Render a key-value blob with sorted keys so output is stable.
fn fmt_values(values: &HashMap<String, String>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sorted: BTreeMap<_, _> = values.iter().collect();
    let mut first = true;
    for (k, v) in sorted {
        if !first {
            f.write_str(",")?;
        }
        first = false;
        write!(f, "{k}={v}")?;
    }
    Ok(())
}

macro_rules! key_value_blob {
    ($($ty:ident),+ $(,)?) => {$(
        impl $ty {
            /// Build from any sequence of key-value pairs.
            pub fn new<I, K, V>(pairs: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: Into<String>,
            {
                pairs.into_iter().collect()
            }

            pub fn get(&self, key: &str) -> Option<&str> {
                self.values.get(key).map(String::as_str)
            }
        }

        impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for $ty {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                Self {
                    values: iter
                        .into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect(),
                }
            }
        }

        impl From<HashMap<String, String>> for $ty {
            fn from(values: HashMap<String, String>) -> Self {
                Self { values }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_values(&self.values, f)
            }
        }
    )+};
}

key_value_blob!(VolumeId, VolumeMetadata, NodeId, PublishVolumeInfo);

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

impl VolumeCapability {
    /// A filesystem-mount capability.
    pub fn mount<S: Into<String>>(fs_type: impl Into<String>, mount_flags: Vec<S>) -> Self {
        Self {
            value: Some(volume_capability::Value::Mount(
                volume_capability::MountVolume {
                    fs_type: fs_type.into(),
                    mount_flags: mount_flags.into_iter().map(Into::into).collect(),
                },
            )),
        }
    }

    /// A raw block-device capability.
    pub fn block() -> Self {
        Self {
            value: Some(volume_capability::Value::Block(
                volume_capability::BlockVolume {},
            )),
        }
    }
}

impl From<access_mode::Mode> for AccessMode {
    fn from(mode: access_mode::Mode) -> Self {
        Self { mode: mode as i32 }
    }
}

impl ControllerServiceCapability {
    /// Capability advertising support for one controller RPC.
    pub fn rpc(kind: controller_service_capability::rpc::Type) -> Self {
        Self {
            r#type: Some(controller_service_capability::Type::Rpc(
                controller_service_capability::Rpc {
                    r#type: kind as i32,
                },
            )),
        }
    }

    /// The RPC this capability advertises, if it is an RPC capability.
    pub fn rpc_type(&self) -> Option<controller_service_capability::rpc::Type> {
        match &self.r#type {
            Some(controller_service_capability::Type::Rpc(rpc)) => Some(rpc.r#type()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Error reply
// ---------------------------------------------------------------------------

impl Error {
    pub fn general(
        code: error::general_error::GeneralErrorCode,
        caller_must_not_retry: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            value: Some(error::Value::GeneralError(error::GeneralError {
                error_code: code as i32,
                caller_must_not_retry,
                error_description: description.into(),
            })),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(error::Value::GeneralError(e)) => {
                write!(f, "{:?}: {}", e.error_code(), e.error_description)
            }
            None => f.write_str("unspecified error"),
        }
    }
}
