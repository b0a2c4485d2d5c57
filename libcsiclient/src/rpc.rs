//! The Controller RPC surface consumed by the facade.
//!
//! [`ControllerRpc`] is the seam between the facade and a transport: one
//! method per RPC, each taking the call context, the request message and the
//! caller's [`CallOption`]s. [`crate::transport::GrpcController`] implements
//! it over tonic; tests plug in their own stubs.

use async_trait::async_trait;
use tonic::Status;

use crate::context::{CallContext, CallOption};
use crate::csi;

/// Protobuf package of the CSI service.
pub const NAMESPACE: &str = "csi";

/// Fully qualified gRPC service name.
pub const SERVICE: &str = "csi.Controller";

// Full method paths, one per Controller RPC.

/// Path of `CreateVolume`.
pub const FM_CREATE_VOLUME: &str = "/csi.Controller/CreateVolume";
/// Path of `DeleteVolume`.
pub const FM_DELETE_VOLUME: &str = "/csi.Controller/DeleteVolume";
/// Path of `ControllerPublishVolume`.
pub const FM_CONTROLLER_PUBLISH_VOLUME: &str = "/csi.Controller/ControllerPublishVolume";
/// Path of `ControllerUnpublishVolume`.
pub const FM_CONTROLLER_UNPUBLISH_VOLUME: &str = "/csi.Controller/ControllerUnpublishVolume";
/// Path of `ValidateVolumeCapabilities`.
pub const FM_VALIDATE_VOLUME_CAPABILITIES: &str = "/csi.Controller/ValidateVolumeCapabilities";
/// Path of `ListVolumes`.
pub const FM_LIST_VOLUMES: &str = "/csi.Controller/ListVolumes";
/// Path of `GetCapacity`.
pub const FM_GET_CAPACITY: &str = "/csi.Controller/GetCapacity";
/// Path of `ControllerGetCapabilities`.
pub const FM_CONTROLLER_GET_CAPABILITIES: &str = "/csi.Controller/ControllerGetCapabilities";

/// Identifies one Controller RPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerMethod {
    /// Provision a new volume.
    CreateVolume,
    /// Remove a provisioned volume.
    DeleteVolume,
    /// Attach a volume to a node.
    ControllerPublishVolume,
    /// Detach a volume from a node.
    ControllerUnpublishVolume,
    /// Check a volume against a set of capabilities.
    ValidateVolumeCapabilities,
    /// Page through the controller's volumes.
    ListVolumes,
    /// Report the total available capacity.
    GetCapacity,
    /// Report the controller's supported RPCs and volume capabilities.
    ControllerGetCapabilities,
}

impl ControllerMethod {
    /// Every method, in service declaration order.
    pub const ALL: [Self; 8] = [
        Self::CreateVolume,
        Self::DeleteVolume,
        Self::ControllerPublishVolume,
        Self::ControllerUnpublishVolume,
        Self::ValidateVolumeCapabilities,
        Self::ListVolumes,
        Self::GetCapacity,
        Self::ControllerGetCapabilities,
    ];

    /// Bare method name, e.g. `"CreateVolume"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateVolume => "CreateVolume",
            Self::DeleteVolume => "DeleteVolume",
            Self::ControllerPublishVolume => "ControllerPublishVolume",
            Self::ControllerUnpublishVolume => "ControllerUnpublishVolume",
            Self::ValidateVolumeCapabilities => "ValidateVolumeCapabilities",
            Self::ListVolumes => "ListVolumes",
            Self::GetCapacity => "GetCapacity",
            Self::ControllerGetCapabilities => "ControllerGetCapabilities",
        }
    }

    /// Full method path used for routing.
    pub const fn path(self) -> &'static str {
        match self {
            Self::CreateVolume => FM_CREATE_VOLUME,
            Self::DeleteVolume => FM_DELETE_VOLUME,
            Self::ControllerPublishVolume => FM_CONTROLLER_PUBLISH_VOLUME,
            Self::ControllerUnpublishVolume => FM_CONTROLLER_UNPUBLISH_VOLUME,
            Self::ValidateVolumeCapabilities => FM_VALIDATE_VOLUME_CAPABILITIES,
            Self::ListVolumes => FM_LIST_VOLUMES,
            Self::GetCapacity => FM_GET_CAPACITY,
            Self::ControllerGetCapabilities => FM_CONTROLLER_GET_CAPABILITIES,
        }
    }
}

impl std::fmt::Display for ControllerMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Transport stub for the Controller service.
///
/// Implementations perform exactly one RPC per call and return the transport
/// failure as-is. They must apply `opts` to the outgoing call in order.
#[async_trait]
pub trait ControllerRpc: Send + Sync {
    async fn create_volume(
        &self,
        ctx: &CallContext,
        req: csi::CreateVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::CreateVolumeResponse, Status>;

    async fn delete_volume(
        &self,
        ctx: &CallContext,
        req: csi::DeleteVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::DeleteVolumeResponse, Status>;

    async fn controller_publish_volume(
        &self,
        ctx: &CallContext,
        req: csi::ControllerPublishVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerPublishVolumeResponse, Status>;

    async fn controller_unpublish_volume(
        &self,
        ctx: &CallContext,
        req: csi::ControllerUnpublishVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerUnpublishVolumeResponse, Status>;

    async fn validate_volume_capabilities(
        &self,
        ctx: &CallContext,
        req: csi::ValidateVolumeCapabilitiesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ValidateVolumeCapabilitiesResponse, Status>;

    async fn list_volumes(
        &self,
        ctx: &CallContext,
        req: csi::ListVolumesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ListVolumesResponse, Status>;

    async fn get_capacity(
        &self,
        ctx: &CallContext,
        req: csi::GetCapacityRequest,
        opts: &[CallOption],
    ) -> Result<csi::GetCapacityResponse, Status>;

    async fn controller_get_capabilities(
        &self,
        ctx: &CallContext,
        req: csi::ControllerGetCapabilitiesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerGetCapabilitiesResponse, Status>;
}
