//! Main application router.

use crate::{
    controllers::{health_controller, product_controller, user_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use axum::{middleware, routing::get, Json, Router};
use emporia_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    // The composite user-with-products read lives under the user path but is
    // a product-controller concern.
    let user_routes = user_controller::router().route(
        "/:id/products",
        get(product_controller::get_user_products),
    );

    let api_router = Router::new()
        .nest("/users", user_routes)
        .nest("/products", product_controller::router())
        .with_state(state);

    let router = Router::new()
        // Health endpoints at the root
        .merge(health_controller::router())
        // API v1
        .nest("/api/v1", api_router)
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi_json))
        // Root endpoint
        .route("/", get(root))
        // Middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Serves the OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Emporia API v1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use emporia_core::{EmporiaError, EmporiaResult, ValidateExt};
    use emporia_service::{
        CreateProductRequest, CreateUserRequest, ProductResponse, ProductService,
        UpdateProductRequest, UpdateUserRequest, UserResponse, UserService,
    };
    use http_body_util::BodyExt;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct MockUserService {
        users: Mutex<HashMap<i64, UserResponse>>,
        next_id: AtomicI64,
    }

    impl MockUserService {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl UserService for MockUserService {
        async fn create(&self, request: CreateUserRequest) -> EmporiaResult<UserResponse> {
            request.validate_request()?;
            let now = chrono::Utc::now();
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let response = UserResponse {
                id,
                name: request.name,
                email: request.email,
                created_at: now,
                updated_at: now,
            };
            self.users.lock().unwrap().insert(id, response.clone());
            Ok(response)
        }

        async fn find_by_id(&self, id: i64) -> EmporiaResult<UserResponse> {
            if id <= 0 {
                return Err(EmporiaError::validation("User id must be positive"));
            }
            self.users
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| EmporiaError::not_found("User", id))
        }

        async fn update(&self, id: i64, request: UpdateUserRequest) -> EmporiaResult<UserResponse> {
            request.validate_request()?;
            let mut users = self.users.lock().unwrap();
            let user = users
                .get_mut(&id)
                .ok_or_else(|| EmporiaError::not_found("User", id))?;
            user.name = request.name;
            user.email = request.email;
            Ok(user.clone())
        }

        async fn delete(&self, id: i64) -> EmporiaResult<()> {
            self.users
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| EmporiaError::not_found("User", id))
        }

        async fn find_all(&self) -> EmporiaResult<Vec<UserResponse>> {
            let mut users: Vec<UserResponse> =
                self.users.lock().unwrap().values().cloned().collect();
            users.sort_by_key(|u| u.id);
            Ok(users)
        }
    }

    struct MockProductService {
        products: Mutex<HashMap<i64, ProductResponse>>,
        next_id: AtomicI64,
    }

    impl MockProductService {
        fn new() -> Self {
            Self {
                products: Mutex::new(HashMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl ProductService for MockProductService {
        async fn create(&self, request: CreateProductRequest) -> EmporiaResult<ProductResponse> {
            request.validate_request()?;
            let now = chrono::Utc::now();
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let response = ProductResponse {
                id,
                name: request.name,
                description: request.description,
                price: request.price,
                user_id: request.user_id,
                created_at: now,
                updated_at: now,
            };
            self.products.lock().unwrap().insert(id, response.clone());
            Ok(response)
        }

        async fn find_by_id(&self, id: i64) -> EmporiaResult<ProductResponse> {
            self.products
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or_else(|| EmporiaError::not_found("Product", id))
        }

        async fn update(
            &self,
            id: i64,
            request: UpdateProductRequest,
        ) -> EmporiaResult<ProductResponse> {
            request.validate_request()?;
            let mut products = self.products.lock().unwrap();
            let product = products
                .get_mut(&id)
                .ok_or_else(|| EmporiaError::not_found("Product", id))?;
            product.name = request.name;
            product.price = request.price;
            Ok(product.clone())
        }

        async fn delete(&self, id: i64) -> EmporiaResult<()> {
            self.products
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| EmporiaError::not_found("Product", id))
        }

        async fn find_all(&self) -> EmporiaResult<Vec<ProductResponse>> {
            Ok(self.products.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_user_id(&self, user_id: i64) -> EmporiaResult<Vec<ProductResponse>> {
            Ok(self
                .products
                .lock()
                .unwrap()
                .values()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect())
        }
    }

    fn test_router() -> Router {
        let state = AppState::new(
            Arc::new(MockUserService::new()),
            Arc::new(MockProductService::new()),
        );
        create_router(state, &ServerConfig::default())
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_router();

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_create_user_returns_201() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/users",
                r#"{"name":"Ann","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["name"], "Ann");
    }

    #[tokio::test]
    async fn test_create_user_empty_name_returns_400() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/users",
                r#"{"name":"","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_404() {
        let app = test_router();

        let response = app
            .oneshot(Request::get("/api/v1/users/999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_user_crud_round_trip() {
        let app = test_router();

        let create = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/users",
                r#"{"name":"Ann","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(create.status(), StatusCode::CREATED);

        let update = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/v1/users/1",
                r#"{"name":"Anna","email":"anna@x.com"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(update.status(), StatusCode::OK);
        let body = body_json(update).await;
        assert_eq!(body["data"]["name"], "Anna");

        let delete = app
            .clone()
            .oneshot(
                Request::delete("/api/v1/users/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete.status(), StatusCode::NO_CONTENT);

        let get = app
            .oneshot(Request::get("/api/v1/users/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(get.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_product_invalid_price_returns_400() {
        let app = test_router();

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/v1/products",
                r#"{"name":"Widget","price":-1.0,"user_id":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_user_products_combines_both_services() {
        let app = test_router();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/users",
                r#"{"name":"Ann","email":"a@x.com"}"#,
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/products",
                r#"{"name":"Widget","description":"A widget","price":9.99,"user_id":1}"#,
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::get("/api/v1/users/1/products")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["user"]["name"], "Ann");
        assert_eq!(body["data"]["products"][0]["name"], "Widget");
    }

    #[tokio::test]
    async fn test_list_products_by_user_empty_is_ok() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::get("/api/v1/products/user/2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let app = test_router();

        let response = app
            .oneshot(
                Request::get("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["paths"]["/api/v1/users"].is_object());
    }
}
