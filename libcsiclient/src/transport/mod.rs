//! gRPC transport for the Controller service.
//!
//! [`GrpcController`] implements [`crate::rpc::ControllerRpc`] on top of a
//! tonic channel, and [`ClientConfig`] describes how to build that channel.

pub mod config;
pub mod grpc;

pub use config::ClientConfig;
pub use grpc::GrpcController;
