#![allow(dead_code)]

//! Shared fixtures for the integration tests.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use libcsiclient::csi::{self, VolumeId, VolumeInfo, access_mode::Mode};
use libcsiclient::{CallContext, CallOption, ControllerMethod, ControllerRpc};
use tonic::Status;
use tonic::metadata::MetadataMap;
use tracing_subscriber::EnvFilter;

pub fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn volume(id: &str, capacity_bytes: u64) -> VolumeInfo {
    VolumeInfo {
        capacity_bytes,
        access_mode: Some(Mode::SingleNodeWriter.into()),
        id: Some(VolumeId::new([("id", id)])),
        metadata: None,
    }
}

/// One invocation seen by [`MockController`].
pub struct RecordedCall {
    pub method: ControllerMethod,
    pub request: Box<dyn Any + Send>,
    /// Metadata produced by applying the call's options in order.
    pub metadata: MetadataMap,
}

/// Controller stub that records every call and replays canned responses.
///
/// A method without a canned response answers with the default (empty)
/// response message.
#[derive(Default)]
pub struct MockController {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<HashMap<ControllerMethod, Box<dyn Any + Send>>>,
}

impl MockController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next call to `method` with `response`.
    pub fn respond<T: Send + 'static>(
        self,
        method: ControllerMethod,
        response: Result<T, Status>,
    ) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(method, Box::new(response));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn method(&self, index: usize) -> ControllerMethod {
        self.calls.lock().unwrap()[index].method
    }

    /// The request of call `index`, which must be of type `T`.
    pub fn request<T: Clone + 'static>(&self, index: usize) -> T {
        self.calls.lock().unwrap()[index]
            .request
            .downcast_ref::<T>()
            .expect("request type")
            .clone()
    }

    pub fn metadata(&self, index: usize) -> MetadataMap {
        self.calls.lock().unwrap()[index].metadata.clone()
    }

    fn record<Req, Resp>(
        &self,
        method: ControllerMethod,
        req: Req,
        opts: &[CallOption],
    ) -> Result<Resp, Status>
    where
        Req: Send + 'static,
        Resp: Default + Send + 'static,
    {
        let mut metadata = MetadataMap::new();
        for opt in opts {
            opt.apply(&mut metadata);
        }
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            request: Box::new(req),
            metadata,
        });

        match self.responses.lock().unwrap().remove(&method) {
            Some(canned) => *canned
                .downcast::<Result<Resp, Status>>()
                .expect("canned response type"),
            None => Ok(Resp::default()),
        }
    }
}

#[async_trait]
impl ControllerRpc for MockController {
    async fn create_volume(
        &self,
        _ctx: &CallContext,
        req: csi::CreateVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::CreateVolumeResponse, Status> {
        self.record(ControllerMethod::CreateVolume, req, opts)
    }

    async fn delete_volume(
        &self,
        _ctx: &CallContext,
        req: csi::DeleteVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::DeleteVolumeResponse, Status> {
        self.record(ControllerMethod::DeleteVolume, req, opts)
    }

    async fn controller_publish_volume(
        &self,
        _ctx: &CallContext,
        req: csi::ControllerPublishVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerPublishVolumeResponse, Status> {
        self.record(ControllerMethod::ControllerPublishVolume, req, opts)
    }

    async fn controller_unpublish_volume(
        &self,
        _ctx: &CallContext,
        req: csi::ControllerUnpublishVolumeRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerUnpublishVolumeResponse, Status> {
        self.record(ControllerMethod::ControllerUnpublishVolume, req, opts)
    }

    async fn validate_volume_capabilities(
        &self,
        _ctx: &CallContext,
        req: csi::ValidateVolumeCapabilitiesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ValidateVolumeCapabilitiesResponse, Status> {
        self.record(ControllerMethod::ValidateVolumeCapabilities, req, opts)
    }

    async fn list_volumes(
        &self,
        _ctx: &CallContext,
        req: csi::ListVolumesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ListVolumesResponse, Status> {
        self.record(ControllerMethod::ListVolumes, req, opts)
    }

    async fn get_capacity(
        &self,
        _ctx: &CallContext,
        req: csi::GetCapacityRequest,
        opts: &[CallOption],
    ) -> Result<csi::GetCapacityResponse, Status> {
        self.record(ControllerMethod::GetCapacity, req, opts)
    }

    async fn controller_get_capabilities(
        &self,
        _ctx: &CallContext,
        req: csi::ControllerGetCapabilitiesRequest,
        opts: &[CallOption],
    ) -> Result<csi::ControllerGetCapabilitiesResponse, Status> {
        self.record(ControllerMethod::ControllerGetCapabilities, req, opts)
    }
}
