//! Request construction for `CreateVolume`.
//!
//! Optional fields follow the protocol's omission rules: a zero/zero
//! capacity range and an empty mount capability are left out of the message
//! entirely rather than sent as zero values.

use std::collections::HashMap;

use crate::csi::{CapacityRange, CreateVolumeRequest, Version, VolumeCapability};

/// Caller-side arguments for `CreateVolume`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVolumeArgs {
    /// Suggested volume name.
    pub name: String,
    /// Minimum size in bytes; zero means unconstrained.
    pub required_bytes: u64,
    /// Maximum size in bytes; zero means unconstrained.
    pub limit_bytes: u64,
    /// Filesystem type for a mount capability.
    pub fs_type: String,
    /// Mount options for a mount capability.
    pub mount_flags: Vec<String>,
    /// Opaque plugin parameters.
    pub parameters: HashMap<String, String>,
}

impl CreateVolumeArgs {
    /// Arguments for a volume called `name` with nothing else set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set both capacity bounds, in bytes.
    pub fn with_capacity(mut self, required_bytes: u64, limit_bytes: u64) -> Self {
        self.required_bytes = required_bytes;
        self.limit_bytes = limit_bytes;
        self
    }

    /// Request a mount capability with this filesystem type.
    pub fn with_fs_type(mut self, fs_type: impl Into<String>) -> Self {
        self.fs_type = fs_type.into();
        self
    }

    /// Replace the mount flags.
    pub fn with_mount_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mount_flags = flags.into_iter().map(Into::into).collect();
        self
    }

    /// Add one plugin parameter, replacing any earlier value for `key`.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// The capacity range to send, if either bound is set.
    pub fn capacity_range(&self) -> Option<CapacityRange> {
        (self.required_bytes > 0 || self.limit_bytes > 0).then_some(CapacityRange {
            required_bytes: self.required_bytes,
            limit_bytes: self.limit_bytes,
        })
    }

    /// The mount capability to send, if a filesystem type or flags are set.
    pub fn volume_capability(&self) -> Option<VolumeCapability> {
        (!self.fs_type.is_empty() || !self.mount_flags.is_empty())
            .then(|| VolumeCapability::mount(self.fs_type.clone(), self.mount_flags.clone()))
    }

    /// Build the wire request.
    pub fn into_request(self, version: Version) -> CreateVolumeRequest {
        let capacity_range = self.capacity_range();
        let volume_capabilities = self.volume_capability().into_iter().collect();
        CreateVolumeRequest {
            version: Some(version),
            name: self.name,
            capacity_range,
            volume_capabilities,
            parameters: self.parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;
    use crate::csi::volume_capability;

    const V: Version = Version::new(0, 0, 1);

    #[test]
    fn zero_capacity_is_omitted() {
        let req = CreateVolumeArgs::new("v").into_request(V);
        assert_eq!(req.capacity_range, None);
    }

    #[test]
    fn any_capacity_bound_is_sent() {
        for (required, limit) in [(1, 0), (0, 1), (1024, 4096)] {
            let req = CreateVolumeArgs::new("v")
                .with_capacity(required, limit)
                .into_request(V);
            assert_eq!(
                req.capacity_range,
                Some(CapacityRange {
                    required_bytes: required,
                    limit_bytes: limit,
                })
            );
        }
    }

    #[test]
    fn empty_mount_capability_is_omitted() {
        let req = CreateVolumeArgs::new("v").into_request(V);
        assert!(req.volume_capabilities.is_empty());
    }

    #[test]
    fn fs_type_alone_yields_mount_capability() {
        let req = CreateVolumeArgs::new("v").with_fs_type("xfs").into_request(V);
        assert_eq!(req.volume_capabilities.len(), 1);
        match &req.volume_capabilities[0].value {
            Some(volume_capability::Value::Mount(m)) => {
                assert_eq!(m.fs_type, "xfs");
                assert!(m.mount_flags.is_empty());
            }
            other => panic!("unexpected capability: {other:?}"),
        }
    }

    #[test]
    fn mount_flags_alone_yield_mount_capability() {
        let req = CreateVolumeArgs::new("v")
            .with_mount_flags(["ro", "noexec"])
            .into_request(V);
        match &req.volume_capabilities[..] {
            [cap] => match &cap.value {
                Some(volume_capability::Value::Mount(m)) => {
                    assert!(m.fs_type.is_empty());
                    assert_eq!(m.mount_flags, vec!["ro".to_owned(), "noexec".to_owned()]);
                }
                other => panic!("unexpected capability: {other:?}"),
            },
            caps => panic!("expected one capability, got {}", caps.len()),
        }
    }

    #[test]
    fn request_survives_the_wire() {
        let req = CreateVolumeArgs::new("data")
            .with_capacity(1 << 30, 0)
            .with_fs_type("ext4")
            .with_parameter("tier", "gold")
            .into_request(Version::new(1, 2, 3));

        let decoded = CreateVolumeRequest::decode(req.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded, req);
        assert_eq!(decoded.version, Some(Version::new(1, 2, 3)));
        assert_eq!(decoded.name, "data");
        assert_eq!(decoded.parameters.get("tier").map(String::as_str), Some("gold"));

        let bare = CreateVolumeArgs::new("bare").into_request(V);
        let decoded = CreateVolumeRequest::decode(bare.encode_to_vec().as_slice()).expect("decode");
        assert_eq!(decoded.capacity_range, None);
        assert!(decoded.volume_capabilities.is_empty());
    }
}
