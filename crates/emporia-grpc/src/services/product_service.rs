//! Product gRPC service implementation.

use super::{to_proto_timestamp, to_status};
use crate::proto::{common, product};
use emporia_service::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use emporia_service::ProductService;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::debug;

/// Product gRPC service implementation.
pub struct ProductGrpcService {
    product_service: Arc<dyn ProductService>,
}

impl ProductGrpcService {
    /// Creates a new product gRPC service.
    pub fn new(product_service: Arc<dyn ProductService>) -> Self {
        Self { product_service }
    }
}

#[tonic::async_trait]
impl product::product_service_server::ProductService for ProductGrpcService {
    async fn create_product(
        &self,
        request: Request<product::CreateProductRequest>,
    ) -> Result<Response<product::ProductResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC CreateProduct: {}", req.name);

        let create_request = CreateProductRequest {
            name: req.name,
            description: req.description,
            price: req.price,
            user_id: req.user_id,
        };

        let response = self
            .product_service
            .create(create_request)
            .await
            .map_err(to_status)?;

        Ok(Response::new(product::ProductResponse {
            product: Some(to_proto_product(&response)),
        }))
    }

    async fn get_product(
        &self,
        request: Request<product::GetProductRequest>,
    ) -> Result<Response<product::ProductResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC GetProduct: {}", req.id);

        let response = self
            .product_service
            .find_by_id(req.id)
            .await
            .map_err(to_status)?;

        Ok(Response::new(product::ProductResponse {
            product: Some(to_proto_product(&response)),
        }))
    }

    async fn update_product(
        &self,
        request: Request<product::UpdateProductRequest>,
    ) -> Result<Response<product::ProductResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC UpdateProduct: {}", req.id);

        let update_request = UpdateProductRequest {
            name: req.name,
            description: req.description,
            price: req.price,
        };

        let response = self
            .product_service
            .update(req.id, update_request)
            .await
            .map_err(to_status)?;

        Ok(Response::new(product::ProductResponse {
            product: Some(to_proto_product(&response)),
        }))
    }

    async fn delete_product(
        &self,
        request: Request<product::DeleteProductRequest>,
    ) -> Result<Response<common::Empty>, Status> {
        let req = request.into_inner();
        debug!("gRPC DeleteProduct: {}", req.id);

        self.product_service
            .delete(req.id)
            .await
            .map_err(to_status)?;

        Ok(Response::new(common::Empty {}))
    }

    async fn list_products(
        &self,
        _request: Request<product::ListProductsRequest>,
    ) -> Result<Response<product::ListProductsResponse>, Status> {
        debug!("gRPC ListProducts");

        let response = self.product_service.find_all().await.map_err(to_status)?;

        Ok(Response::new(product::ListProductsResponse {
            products: response.iter().map(to_proto_product).collect(),
        }))
    }

    async fn list_products_by_user(
        &self,
        request: Request<product::ListProductsByUserRequest>,
    ) -> Result<Response<product::ListProductsResponse>, Status> {
        let req = request.into_inner();
        debug!("gRPC ListProductsByUser: {}", req.user_id);

        let response = self
            .product_service
            .find_by_user_id(req.user_id)
            .await
            .map_err(to_status)?;

        Ok(Response::new(product::ListProductsResponse {
            products: response.iter().map(to_proto_product).collect(),
        }))
    }
}

fn to_proto_product(product: &ProductResponse) -> product::Product {
    product::Product {
        id: product.id,
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        user_id: product.user_id,
        created_at: Some(to_proto_timestamp(product.created_at)),
        updated_at: Some(to_proto_timestamp(product.updated_at)),
    }
}
