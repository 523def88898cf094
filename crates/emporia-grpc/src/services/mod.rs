//! gRPC service implementations.

mod health_service;
mod product_service;
mod user_service;

pub use health_service::HealthServiceImpl;
pub use product_service::ProductGrpcService;
pub use user_service::UserGrpcService;

use crate::proto::common;
use chrono::{DateTime, Utc};
use emporia_core::EmporiaError;
use tonic::Status;
use tracing::error;

/// Maps a domain error onto a gRPC status.
pub(crate) fn to_status(err: EmporiaError) -> Status {
    error!("gRPC error: {:?}", err);

    match err {
        EmporiaError::NotFound { .. } => Status::not_found(err.to_string()),
        EmporiaError::Validation(msg) => Status::invalid_argument(msg),
        EmporiaError::Conflict(msg) => Status::already_exists(msg),
        _ => Status::internal(err.to_string()),
    }
}

/// Converts a chrono timestamp to the wire representation.
pub(crate) fn to_proto_timestamp(dt: DateTime<Utc>) -> common::Timestamp {
    common::Timestamp {
        seconds: dt.timestamp(),
        nanos: dt.timestamp_subsec_nanos() as i32,
    }
}
