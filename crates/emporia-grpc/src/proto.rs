//! Generated protobuf modules.

pub mod common {
    tonic::include_proto!("emporia.common");
}

pub mod user {
    tonic::include_proto!("emporia.user");
}

pub mod product {
    tonic::include_proto!("emporia.product");
}

pub mod health {
    tonic::include_proto!("emporia.health");
}
