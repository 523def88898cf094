//! OpenAPI document assembly.

use crate::controllers::product_controller::UserProductsResponse;
use crate::controllers::health_controller::HealthResponse;
use emporia_service::{
    CreateProductRequest, CreateUserRequest, ProductResponse, UpdateProductRequest,
    UpdateUserRequest, UserResponse,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Emporia API",
        description = "CRUD service for users and products with a cache-aside service layer"
    ),
    paths(
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::delete_user,
        crate::controllers::product_controller::list_products,
        crate::controllers::product_controller::create_product,
        crate::controllers::product_controller::get_product,
        crate::controllers::product_controller::update_product,
        crate::controllers::product_controller::delete_product,
        crate::controllers::product_controller::list_products_by_user,
        crate::controllers::product_controller::get_user_products,
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        CreateProductRequest,
        UpdateProductRequest,
        ProductResponse,
        UserProductsResponse,
        HealthResponse,
    )),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "users", description = "User management"),
        (name = "products", description = "Product management")
    )
)]
pub struct ApiDoc;
