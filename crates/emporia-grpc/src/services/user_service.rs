//! User gRPC service implementation.

use super::{to_proto_timestamp, to_status};
use crate::proto::{common, user};
use emporia_service::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use emporia_service::UserService;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::debug;

/// User gRPC service implementation.
pub struct UserGrpcService {
    user_service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Creates a new user gRPC service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }
}

#[tonic::async_trait]
impl user::user_service_server::UserService for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<user::CreateUserRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC CreateUser: {}", req.name);

        let create_request = CreateUserRequest {
            name: req.name,
            email: req.email,
        };

        let response = self
            .user_service
            .create(create_request)
            .await
            .map_err(to_status)?;

        Ok(Response::new(user::UserResponse {
            user: Some(to_proto_user(&response)),
        }))
    }

    async fn get_user(
        &self,
        request: Request<user::GetUserRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetUser: {}", req.id);

        let response = self
            .user_service
            .find_by_id(req.id)
            .await
            .map_err(to_status)?;

        Ok(Response::new(user::UserResponse {
            user: Some(to_proto_user(&response)),
        }))
    }

    async fn update_user(
        &self,
        request: Request<user::UpdateUserRequest>,
    ) -> Result<Response<user::UserResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC UpdateUser: {}", req.id);

        let update_request = UpdateUserRequest {
            name: req.name,
            email: req.email,
        };

        let response = self
            .user_service
            .update(req.id, update_request)
            .await
            .map_err(to_status)?;

        Ok(Response::new(user::UserResponse {
            user: Some(to_proto_user(&response)),
        }))
    }

    async fn delete_user(
        &self,
        request: Request<user::DeleteUserRequest>,
    ) -> Result<Response<common::Empty>, Status> {
        let req = request.into_inner();
        debug!("gRPC DeleteUser: {}", req.id);

        self.user_service
            .delete(req.id)
            .await
            .map_err(to_status)?;

        Ok(Response::new(common::Empty {}))
    }

    async fn list_users(
        &self,
        _request: Request<user::ListUsersRequest>,
    ) -> Result<Response<user::ListUsersResponse>, Status> {
        debug!("gRPC ListUsers");

        let response = self.user_service.find_all().await.map_err(to_status)?;

        Ok(Response::new(user::ListUsersResponse {
            users: response.iter().map(to_proto_user).collect(),
        }))
    }
}

fn to_proto_user(user: &UserResponse) -> user::User {
    user::User {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: Some(to_proto_timestamp(user.created_at)),
        updated_at: Some(to_proto_timestamp(user.updated_at)),
    }
}
