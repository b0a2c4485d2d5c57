//! Wire messages for the CSI Controller service.
//!
//! The layout mirrors what `prost-build` emits for the `csi` package: every
//! response wraps its payload in a `reply` oneof that is either a nested
//! `Result` or an [`Error`], and nested messages live in a snake_case module
//! named after their parent.

use std::collections::HashMap;

/// Protocol version marker sent with every request.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Version {
    #[prost(uint32, tag = "1")]
    pub major: u32,
    #[prost(uint32, tag = "2")]
    pub minor: u32,
    #[prost(uint32, tag = "3")]
    pub patch: u32,
}

// ---------------------------------------------------------------------------
// Identity blobs
// ---------------------------------------------------------------------------

/// Provider-defined volume identity.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct VolumeId {
    #[prost(map = "string, string", tag = "1")]
    pub values: HashMap<String, String>,
}

/// Provider-defined metadata attached to a volume.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct VolumeMetadata {
    #[prost(map = "string, string", tag = "1")]
    pub values: HashMap<String, String>,
}

/// Provider-defined node identity.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct NodeId {
    #[prost(map = "string, string", tag = "1")]
    pub values: HashMap<String, String>,
}

/// Attachment metadata returned by `ControllerPublishVolume`.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PublishVolumeInfo {
    #[prost(map = "string, string", tag = "1")]
    pub values: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Volumes and capabilities
// ---------------------------------------------------------------------------

/// Lower and upper bounds for a new volume's size.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct CapacityRange {
    #[prost(uint64, tag = "1")]
    pub required_bytes: u64,
    #[prost(uint64, tag = "2")]
    pub limit_bytes: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct AccessMode {
    #[prost(enumeration = "access_mode::Mode", tag = "1")]
    pub mode: i32,
}

/// Nested message and enum types in `AccessMode`.
pub mod access_mode {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Mode {
        Unknown = 0,
        SingleNodeWriter = 1,
        SingleNodeReaderOnly = 2,
        MultiNodeReaderOnly = 3,
        MultiNodeSingleWriter = 4,
        MultiNodeMultiWriter = 5,
    }
}

/// A volume as reported by the controller.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VolumeInfo {
    #[prost(uint64, tag = "1")]
    pub capacity_bytes: u64,
    #[prost(message, optional, tag = "2")]
    pub access_mode: Option<AccessMode>,
    #[prost(message, optional, tag = "3")]
    pub id: Option<VolumeId>,
    #[prost(message, optional, tag = "4")]
    pub metadata: Option<VolumeMetadata>,
}

/// How a volume is accessed: as a raw block device or as a mounted filesystem.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VolumeCapability {
    #[prost(oneof = "volume_capability::Value", tags = "1, 2")]
    pub value: Option<volume_capability::Value>,
}

/// Nested message and enum types in `VolumeCapability`.
pub mod volume_capability {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct BlockVolume {}

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MountVolume {
        /// Empty means the plugin picks a default.
        #[prost(string, tag = "1")]
        pub fs_type: String,
        #[prost(string, repeated, tag = "2")]
        pub mount_flags: Vec<String>,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(message, tag = "1")]
        Block(BlockVolume),
        #[prost(message, tag = "2")]
        Mount(MountVolume),
    }
}

/// A single operation or volume shape supported by the controller.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ControllerServiceCapability {
    #[prost(oneof = "controller_service_capability::Type", tags = "1, 2")]
    pub r#type: Option<controller_service_capability::Type>,
}

/// Nested message and enum types in `ControllerServiceCapability`.
pub mod controller_service_capability {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Rpc {
        #[prost(enumeration = "rpc::Type", tag = "1")]
        pub r#type: i32,
    }

    /// Nested message and enum types in `Rpc`.
    pub mod rpc {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum Type {
            Unknown = 0,
            CreateDeleteVolume = 1,
            PublishUnpublishVolume = 2,
            ListVolumes = 3,
            GetCapacity = 4,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(message, tag = "1")]
        Rpc(Rpc),
        #[prost(message, tag = "2")]
        VolumeCapability(super::VolumeCapability),
    }
}

// ---------------------------------------------------------------------------
// Error reply
// ---------------------------------------------------------------------------

/// Server-declared failure carried in a response's `reply` oneof.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Error {
    #[prost(oneof = "error::Value", tags = "1")]
    pub value: Option<error::Value>,
}

/// Nested message and enum types in `Error`.
pub mod error {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GeneralError {
        #[prost(enumeration = "general_error::GeneralErrorCode", tag = "1")]
        pub error_code: i32,
        #[prost(bool, tag = "2")]
        pub caller_must_not_retry: bool,
        #[prost(string, tag = "3")]
        pub error_description: String,
    }

    /// Nested message and enum types in `GeneralError`.
    pub mod general_error {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
        )]
        #[repr(i32)]
        pub enum GeneralErrorCode {
            Unknown = 0,
            Undefined = 1,
            UnsupportedRequestVersion = 2,
            MissingRequiredField = 3,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Value {
        #[prost(message, tag = "1")]
        GeneralError(GeneralError),
    }
}

// ---------------------------------------------------------------------------
// CreateVolume
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateVolumeRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(string, tag = "2")]
    pub name: String,
    /// Absent means the size is left to the plugin.
    #[prost(message, optional, tag = "3")]
    pub capacity_range: Option<CapacityRange>,
    #[prost(message, repeated, tag = "4")]
    pub volume_capabilities: Vec<VolumeCapability>,
    #[prost(map = "string, string", tag = "5")]
    pub parameters: HashMap<String, String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateVolumeResponse {
    #[prost(oneof = "create_volume_response::Reply", tags = "1, 2")]
    pub reply: Option<create_volume_response::Reply>,
}

/// Nested message and enum types in `CreateVolumeResponse`.
pub mod create_volume_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Result {
        #[prost(message, optional, tag = "1")]
        pub volume_info: Option<super::VolumeInfo>,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}

// ---------------------------------------------------------------------------
// DeleteVolume
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteVolumeRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(message, optional, tag = "2")]
    pub volume_id: Option<VolumeId>,
    #[prost(message, optional, tag = "3")]
    pub volume_metadata: Option<VolumeMetadata>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteVolumeResponse {
    #[prost(oneof = "delete_volume_response::Reply", tags = "1, 2")]
    pub reply: Option<delete_volume_response::Reply>,
}

/// Nested message and enum types in `DeleteVolumeResponse`.
pub mod delete_volume_response {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Result {}

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}

// ---------------------------------------------------------------------------
// ControllerPublishVolume / ControllerUnpublishVolume
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ControllerPublishVolumeRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(message, optional, tag = "2")]
    pub volume_id: Option<VolumeId>,
    #[prost(message, optional, tag = "3")]
    pub volume_metadata: Option<VolumeMetadata>,
    #[prost(message, optional, tag = "4")]
    pub node_id: Option<NodeId>,
    #[prost(bool, tag = "5")]
    pub readonly: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ControllerPublishVolumeResponse {
    #[prost(oneof = "controller_publish_volume_response::Reply", tags = "1, 2")]
    pub reply: Option<controller_publish_volume_response::Reply>,
}

/// Nested message and enum types in `ControllerPublishVolumeResponse`.
pub mod controller_publish_volume_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Result {
        #[prost(message, optional, tag = "1")]
        pub publish_volume_info: Option<super::PublishVolumeInfo>,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ControllerUnpublishVolumeRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(message, optional, tag = "2")]
    pub volume_id: Option<VolumeId>,
    #[prost(message, optional, tag = "3")]
    pub volume_metadata: Option<VolumeMetadata>,
    #[prost(message, optional, tag = "4")]
    pub node_id: Option<NodeId>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ControllerUnpublishVolumeResponse {
    #[prost(oneof = "controller_unpublish_volume_response::Reply", tags = "1, 2")]
    pub reply: Option<controller_unpublish_volume_response::Reply>,
}

/// Nested message and enum types in `ControllerUnpublishVolumeResponse`.
pub mod controller_unpublish_volume_response {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Result {}

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}

// ---------------------------------------------------------------------------
// ValidateVolumeCapabilities
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateVolumeCapabilitiesRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    #[prost(message, optional, tag = "2")]
    pub volume_info: Option<VolumeInfo>,
    #[prost(message, repeated, tag = "3")]
    pub volume_capabilities: Vec<VolumeCapability>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateVolumeCapabilitiesResponse {
    #[prost(oneof = "validate_volume_capabilities_response::Reply", tags = "1, 2")]
    pub reply: Option<validate_volume_capabilities_response::Reply>,
}

/// Nested message and enum types in `ValidateVolumeCapabilitiesResponse`.
pub mod validate_volume_capabilities_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Result {
        /// Whether every requested capability is supported.
        #[prost(bool, tag = "1")]
        pub supported: bool,
        #[prost(string, tag = "2")]
        pub message: String,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}

// ---------------------------------------------------------------------------
// ListVolumes
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListVolumesRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
    /// Zero lets the plugin choose the page size.
    #[prost(uint32, tag = "2")]
    pub max_entries: u32,
    #[prost(string, tag = "3")]
    pub starting_token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListVolumesResponse {
    #[prost(oneof = "list_volumes_response::Reply", tags = "1, 2")]
    pub reply: Option<list_volumes_response::Reply>,
}

/// Nested message and enum types in `ListVolumesResponse`.
pub mod list_volumes_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Result {
        #[prost(message, repeated, tag = "1")]
        pub entries: Vec<result::Entry>,
        /// Empty when there are no further pages.
        #[prost(string, tag = "2")]
        pub next_token: String,
    }

    /// Nested message and enum types in `Result`.
    pub mod result {
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct Entry {
            #[prost(message, optional, tag = "1")]
            pub volume_info: Option<super::super::VolumeInfo>,
        }
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}

// ---------------------------------------------------------------------------
// GetCapacity
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct GetCapacityRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCapacityResponse {
    #[prost(oneof = "get_capacity_response::Reply", tags = "1, 2")]
    pub reply: Option<get_capacity_response::Reply>,
}

/// Nested message and enum types in `GetCapacityResponse`.
pub mod get_capacity_response {
    #[derive(Clone, Copy, PartialEq, ::prost::Message)]
    pub struct Result {
        #[prost(uint64, tag = "1")]
        pub total_capacity: u64,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}

// ---------------------------------------------------------------------------
// ControllerGetCapabilities
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ControllerGetCapabilitiesRequest {
    #[prost(message, optional, tag = "1")]
    pub version: Option<Version>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ControllerGetCapabilitiesResponse {
    #[prost(oneof = "controller_get_capabilities_response::Reply", tags = "1, 2")]
    pub reply: Option<controller_get_capabilities_response::Reply>,
}

/// Nested message and enum types in `ControllerGetCapabilitiesResponse`.
pub mod controller_get_capabilities_response {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Result {
        #[prost(message, repeated, tag = "1")]
        pub capabilities: Vec<super::ControllerServiceCapability>,
    }

    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Reply {
        #[prost(message, tag = "1")]
        Result(Result),
        #[prost(message, tag = "2")]
        Error(super::Error),
    }
}
