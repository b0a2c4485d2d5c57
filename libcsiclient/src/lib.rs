//! # libcsiclient — typed client for the CSI Controller service
//!
//! `libcsiclient` wraps the [Container Storage Interface][csi] Controller
//! RPCs in plain async functions. Each function checks required arguments
//! locally, builds the protobuf request with the protocol's omission rules,
//! performs one call through a [`ControllerRpc`] stub and unwraps the nested
//! reply into a typed value or a [`ControllerError`].
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |---|---|
//! | [`csi`] | prost wire messages for the Controller service. |
//! | [`types`] | Constructors, parsing and formatting for wire types. |
//! | [`error`] | [`ControllerError`], [`ConfigError`], [`ParseVersionError`]. |
//! | [`context`] | [`CallContext`] deadlines and opaque [`CallOption`]s. |
//! | [`rpc`] | [`ControllerRpc`] stub trait and fixed method paths. |
//! | [`request`] | [`CreateVolumeArgs`] request builder. |
//! | [`controller`] | The eight facade operations. |
//! | [`transport`] | tonic-based [`GrpcController`] and [`ClientConfig`]. |
//!
//! [csi]: https://github.com/container-storage-interface/spec

pub mod context;
pub mod controller;
pub mod csi;
pub mod error;
pub mod request;
pub mod rpc;
pub mod transport;
pub mod types;

pub use context::{CallContext, CallOption};
pub use controller::{
    controller_get_capabilities, controller_publish_volume, controller_unpublish_volume,
    create_volume, delete_volume, get_capacity, list_volumes, validate_volume_capabilities,
};
pub use error::{ConfigError, ControllerError, ParseVersionError};
pub use request::CreateVolumeArgs;
pub use rpc::{ControllerMethod, ControllerRpc};
pub use transport::{ClientConfig, GrpcController};
