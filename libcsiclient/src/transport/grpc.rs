//! tonic-backed [`ControllerRpc`] implementation.

use async_trait::async_trait;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{GrpcMethod, Status};
use tracing::{debug, instrument};

use crate::context::{CallContext, CallOption};
use crate::csi;
use crate::rpc::{ControllerMethod, ControllerRpc, SERVICE};

/// Controller stub speaking unary gRPC over a tonic [`Channel`].
///
/// The channel is a cheap handle; each call works on its own clone so the
/// stub can be shared by reference across tasks.
#[derive(Debug, Clone)]
pub struct GrpcController {
    channel: Channel,
}

impl GrpcController {
    /// Wrap an existing channel.
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    /// Connect eagerly to `endpoint`.
    pub async fn connect(endpoint: Endpoint) -> Result<Self, tonic::transport::Error> {
        let channel = endpoint.connect().await?;
        debug!(uri = %endpoint.uri(), "CSI controller channel established");
        Ok(Self::new(channel))
    }

    /// Build a stub whose channel connects on first use.
    pub fn connect_lazy(endpoint: Endpoint) -> Self {
        Self::new(endpoint.connect_lazy())
    }

    /// Perform one unary call.
    ///
    /// Options are applied to the request metadata in order. A context
    /// deadline is both advertised to the server as `grpc-timeout` and
    /// enforced locally; an already expired context never reaches the
    /// channel.
    #[instrument(skip_all, fields(method = %method))]
    async fn unary<Req, Resp>(
        &self,
        method: ControllerMethod,
        ctx: &CallContext,
        req: Req,
        opts: &[CallOption],
    ) -> Result<Resp, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        if ctx.is_expired() {
            debug!("call context expired before dispatch");
            return Err(Status::deadline_exceeded("call context deadline elapsed"));
        }

        let mut request = tonic::Request::new(req);
        for opt in opts {
            opt.apply(request.metadata_mut());
        }
        if let Some(remaining) = ctx.remaining() {
            request.set_timeout(remaining);
        }
        request
            .extensions_mut()
            .insert(GrpcMethod::new(SERVICE, method.name()));

        let path = PathAndQuery::from_static(method.path());
        let codec = ProstCodec::<Req, Resp>::default();
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());

        debug!(path = method.path(), "dispatching CSI controller call");
        let call = async move {
            if let Err(e) = grpc.ready().await {
                return Err(Status::unknown(format!("service was not ready: {e}")));
            }
            grpc.unary(request, path, codec).await
        };
        let response = match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, call)
                .await
                .map_err(|_| Status::deadline_exceeded("call context deadline elapsed"))??,
            None => call.await?,
        };
        debug!("CSI controller response received");
        Ok(response.into_inner())
    }
}

#[async_trait]
impl ControllerRpc for GrpcController {
    async fn create_volume(
        &self,
        ctx: &CallContext,
        req: csi::CreateVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::CreateVolumeResponse, Status> {
        self.unary(ControllerMethod::CreateVolume, ctx, req, opts).await
    }

    async fn delete_volume(
        &self,
        ctx: &CallContext,
        req: csi::DeleteVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::DeleteVolumeResponse, Status> {
        self.unary(ControllerMethod::DeleteVolume, ctx, req, opts).await
    }

    async fn controller_publish_volume(
        &self,
        ctx: &CallContext,
        req: csi::ControllerPublishVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerPublishVolumeResponse, Status> {
        self.unary(ControllerMethod::ControllerPublishVolume, ctx, req, opts).await
    }

    async fn controller_unpublish_volume(
        &self,
        ctx: &CallContext,
        req: csi::ControllerUnpublishVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerUnpublishVolumeResponse, Status> {
        self.unary(ControllerMethod::ControllerUnpublishVolume, ctx, req, opts).await
    }

    async fn validate_volume_capabilities(
        &self,
        ctx: &CallContext,
        req: csi::ValidateVolumeCapabilitiesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ValidateVolumeCapabilitiesResponse, Status> {
        self.unary(ControllerMethod::ValidateVolumeCapabilities, ctx, req, opts).await
    }

    async fn list_volumes(
        &self,
        ctx: &CallContext,
        req: csi::ListVolumesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ListVolumesResponse, Status> {
        self.unary(ControllerMethod::ListVolumes, ctx, req, opts).await
    }

    async fn get_capacity(
        &self,
        ctx: &CallContext,
        req: csi::GetCapacityRequest,
        opts: &[CallOption],
    ) -> Result<csi::GetCapacityResponse, Status> {
        self.unary(ControllerMethod::GetCapacity, ctx, req, opts).await
    }

    async fn controller_get_capabilities(
        &self,
        ctx: &CallContext,
        req: csi::ControllerGetCapabilitiesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerGetCapabilitiesResponse, Status> {
        self.unary(ControllerMethod::ControllerGetCapabilities, ctx, req, opts).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;
    use tonic::Code;

    use super::*;
    use crate::controller::get_capacity;
    use crate::csi::Version;

    fn unreachable_stub() -> GrpcController {
        GrpcController::connect_lazy(Endpoint::from_static("http://127.0.0.1:1"))
    }

    #[tokio::test]
    async fn elapsed_deadline_is_deadline_exceeded() {
        let ctx = CallContext::with_deadline(Instant::now());
        let err = unreachable_stub()
            .get_capacity(&ctx, csi::GetCapacityRequest::default(), &[])
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::DeadlineExceeded);
    }

    #[tokio::test]
    async fn expired_context_never_opens_a_connection() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let endpoint = Endpoint::from_shared(format!("http://{addr}")).expect("endpoint");
        let stub = GrpcController::connect_lazy(endpoint);

        let ctx = CallContext::with_deadline(Instant::now());
        for _ in 0..3 {
            let err = stub
                .list_volumes(&ctx, csi::ListVolumesRequest::default(), &[])
                .await
                .unwrap_err();
            assert_eq!(err.code(), Code::DeadlineExceeded);
        }

        let accepted = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
        assert!(accepted.is_err(), "expired call reached the server");
    }

    #[tokio::test]
    async fn connection_failure_surfaces_as_transport_error() {
        let ctx = CallContext::with_timeout(Duration::from_secs(5));
        let err = get_capacity(&ctx, &unreachable_stub(), Version::new(0, 0, 1), &[])
            .await
            .unwrap_err();
        assert!(err.status().is_some(), "unexpected error: {err}");
    }
}
