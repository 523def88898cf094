//! Product management controller.
//!
//! Also hosts the composite user-with-products read: assembling it from two
//! service calls is this adapter's job, not the service layer's.

use crate::{
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use emporia_service::{
    CreateProductRequest, ProductResponse, UpdateProductRequest, UserResponse,
};
use serde::Serialize;
use tracing::debug;
use utoipa::ToSchema;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/user/:user_id", get(list_products_by_user))
}

/// A user together with the products they own.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProductsResponse {
    pub user: UserResponse,
    pub products: Vec<ProductResponse>,
}

/// List all products.
#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<ProductResponse>> {
    debug!("List products request");

    let response = state.product_service.find_all().await?;
    ok(response)
}

/// Create a new product.
#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid product payload")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<crate::responses::ApiResponse<ProductResponse>>), AppError> {
    debug!("Create product request: {}", request.name);

    let response = state.product_service.create(request).await?;
    Ok(created(response))
}

/// Get a product by id.
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    let response = state.product_service.find_by_id(id).await?;
    ok(response)
}

/// Update a product.
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> ApiResult<ProductResponse> {
    debug!("Update product request: {}", id);

    let response = state.product_service.update(id, request).await?;
    ok(response)
}

/// Delete a product.
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    debug!("Delete product request: {}", id);

    state.product_service.delete(id).await?;
    Ok(no_content())
}

/// List the products owned by a user.
#[utoipa::path(
    get,
    path = "/api/v1/products/user/{user_id}",
    tag = "products",
    params(("user_id" = i64, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Products owned by the user", body = [ProductResponse])
    )
)]
pub async fn list_products_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Vec<ProductResponse>> {
    debug!("List products for user: {}", user_id);

    let response = state.product_service.find_by_user_id(user_id).await?;
    ok(response)
}

/// Get a user together with the products they own.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/products",
    tag = "products",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user and their products", body = UserProductsResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_products(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<UserProductsResponse> {
    debug!("Get user products request: {}", id);

    let user = state.user_service.find_by_id(id).await?;
    let products = state.product_service.find_by_user_id(id).await?;

    ok(UserProductsResponse { user, products })
}
