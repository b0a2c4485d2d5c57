//! Controller client facade.
//!
//! One async function per Controller RPC. Each call validates its required
//! arguments, builds the request, performs a single invocation on the
//! [`ControllerRpc`] stub and unwraps the nested reply. Nothing is retried
//! and no state is kept between calls.
//!
//! Reply handling is shared by all operations: an error reply becomes
//! [`ControllerError::Reply`], a transport failure becomes
//! [`ControllerError::Transport`] with the original status.

use tracing::instrument;

use crate::context::{CallContext, CallOption};
use crate::csi::{
    self, ControllerServiceCapability, NodeId, PublishVolumeInfo, Version, VolumeCapability,
    VolumeId, VolumeInfo, VolumeMetadata,
};
use crate::error::ControllerError;
use crate::request::CreateVolumeArgs;
use crate::rpc::ControllerRpc;

/// Provision a volume.
///
/// Returns `None` when the controller replied without a volume info; callers
/// decide whether that is acceptable.
#[instrument(skip_all, fields(method = "CreateVolume", volume_name = %args.name))]
pub async fn create_volume<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    args: CreateVolumeArgs,
    opts: &[CallOption],
) -> Result<Option<VolumeInfo>, ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::create_volume_response::Reply;

    let req = args.into_request(version);
    let res = client.create_volume(ctx, req, opts).await?;
    match res.reply {
        Some(Reply::Result(result)) => Ok(result.volume_info),
        Some(Reply::Error(e)) => Err(ControllerError::Reply(e)),
        None => Ok(None),
    }
}

/// Delete a volume.
///
/// `volume_id` is forwarded as given, even when absent; the controller is
/// left to reject it.
#[instrument(skip_all, fields(method = "DeleteVolume"))]
pub async fn delete_volume<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    volume_id: Option<VolumeId>,
    volume_metadata: Option<VolumeMetadata>,
    opts: &[CallOption],
) -> Result<(), ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::delete_volume_response::Reply;

    let req = csi::DeleteVolumeRequest {
        version: Some(version),
        volume_id,
        volume_metadata,
    };
    let res = client.delete_volume(ctx, req, opts).await?;
    match res.reply {
        Some(Reply::Error(e)) => Err(ControllerError::Reply(e)),
        Some(Reply::Result(_)) | None => Ok(()),
    }
}

/// Attach a volume to a node.
#[instrument(skip_all, fields(method = "ControllerPublishVolume", readonly = readonly))]
#[allow(clippy::too_many_arguments)]
pub async fn controller_publish_volume<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    volume_id: Option<VolumeId>,
    volume_metadata: Option<VolumeMetadata>,
    node_id: Option<NodeId>,
    readonly: bool,
    opts: &[CallOption],
) -> Result<Option<PublishVolumeInfo>, ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::controller_publish_volume_response::Reply;

    let volume_id = volume_id.ok_or(ControllerError::VolumeIdRequired)?;
    let req = csi::ControllerPublishVolumeRequest {
        version: Some(version),
        volume_id: Some(volume_id),
        volume_metadata,
        node_id,
        readonly,
    };
    let res = client.controller_publish_volume(ctx, req, opts).await?;
    match res.reply {
        Some(Reply::Result(result)) => Ok(result.publish_volume_info),
        Some(Reply::Error(e)) => Err(ControllerError::Reply(e)),
        None => Ok(None),
    }
}

/// Detach a volume from a node.
#[instrument(skip_all, fields(method = "ControllerUnpublishVolume"))]
pub async fn controller_unpublish_volume<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    volume_id: Option<VolumeId>,
    volume_metadata: Option<VolumeMetadata>,
    node_id: Option<NodeId>,
    opts: &[CallOption],
) -> Result<(), ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::controller_unpublish_volume_response::Reply;

    let volume_id = volume_id.ok_or(ControllerError::VolumeIdRequired)?;
    let req = csi::ControllerUnpublishVolumeRequest {
        version: Some(version),
        volume_id: Some(volume_id),
        volume_metadata,
        node_id,
    };
    let res = client.controller_unpublish_volume(ctx, req, opts).await?;
    match res.reply {
        Some(Reply::Error(e)) => Err(ControllerError::Reply(e)),
        Some(Reply::Result(_)) | None => Ok(()),
    }
}

/// Ask the controller whether `volume_info` supports `volume_capabilities`.
///
/// An empty capability list is sent as-is; only a missing list is rejected.
/// The nested result is returned without interpretation.
#[instrument(skip_all, fields(method = "ValidateVolumeCapabilities"))]
pub async fn validate_volume_capabilities<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    volume_info: Option<VolumeInfo>,
    volume_capabilities: Option<Vec<VolumeCapability>>,
    opts: &[CallOption],
) -> Result<Option<csi::validate_volume_capabilities_response::Result>, ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::validate_volume_capabilities_response::Reply;

    let volume_info = volume_info.ok_or(ControllerError::VolumeInfoRequired)?;
    let volume_capabilities =
        volume_capabilities.ok_or(ControllerError::VolumeCapabilityRequired)?;
    let req = csi::ValidateVolumeCapabilitiesRequest {
        version: Some(version),
        volume_info: Some(volume_info),
        volume_capabilities,
    };
    let res = client.validate_volume_capabilities(ctx, req, opts).await?;
    match res.reply {
        Some(Reply::Result(result)) => Ok(Some(result)),
        Some(Reply::Error(e)) => Err(ControllerError::Reply(e)),
        None => Ok(None),
    }
}

/// Fetch one page of volumes.
///
/// Returns the volumes in server order together with the continuation token.
/// If any entry lacks a volume info the whole page is rejected with
/// [`ControllerError::NilVolumeInfo`].
#[instrument(
    skip_all,
    fields(method = "ListVolumes", max_entries = max_entries, starting_token = %starting_token)
)]
pub async fn list_volumes<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    max_entries: u32,
    starting_token: String,
    opts: &[CallOption],
) -> Result<(Vec<VolumeInfo>, String), ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::list_volumes_response::Reply;

    let req = csi::ListVolumesRequest {
        version: Some(version),
        max_entries,
        starting_token,
    };
    let res = client.list_volumes(ctx, req, opts).await?;
    let result = match res.reply {
        Some(Reply::Result(result)) => result,
        Some(Reply::Error(e)) => return Err(ControllerError::Reply(e)),
        None => return Err(ControllerError::MissingResult),
    };

    if result.entries.is_empty() {
        return Ok((Vec::new(), result.next_token));
    }

    let volumes = result
        .entries
        .into_iter()
        .map(|entry| entry.volume_info.ok_or(ControllerError::NilVolumeInfo))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((volumes, result.next_token))
}

/// Total capacity the controller can provision, in bytes.
#[instrument(skip_all, fields(method = "GetCapacity"))]
pub async fn get_capacity<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    opts: &[CallOption],
) -> Result<u64, ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::get_capacity_response::Reply;

    let req = csi::GetCapacityRequest {
        version: Some(version),
    };
    let res = client.get_capacity(ctx, req, opts).await?;
    match res.reply {
        Some(Reply::Result(result)) => Ok(result.total_capacity),
        Some(Reply::Error(e)) => Err(ControllerError::Reply(e)),
        None => Err(ControllerError::MissingResult),
    }
}

/// Capabilities the controller supports, in server order.
#[instrument(skip_all, fields(method = "ControllerGetCapabilities"))]
pub async fn controller_get_capabilities<C>(
    ctx: &CallContext,
    client: &C,
    version: Version,
    opts: &[CallOption],
) -> Result<Vec<ControllerServiceCapability>, ControllerError>
where
    C: ControllerRpc + ?Sized,
{
    use csi::controller_get_capabilities_response::Reply;

    let req = csi::ControllerGetCapabilitiesRequest {
        version: Some(version),
    };
    let res = client.controller_get_capabilities(ctx, req, opts).await?;
    match res.reply {
        Some(Reply::Result(result)) => Ok(result.capabilities),
        Some(Reply::Error(e)) => Err(ControllerError::Reply(e)),
        None => Err(ControllerError::MissingResult),
    }
}
