//! HTTP binding for the catalog service: routes, handlers and the mapping
//! from `CatalogError` to status codes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use validator::Validate;

use crate::application::dtos::{CreateProductRequest, UpdateProductRequest};
use crate::application::ProductService;
use crate::error::CatalogError;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductService>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/products", get(get_all_products).post(create_product))
        .route(
            "/api/v1/products/:id",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
        .with_state(state)
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            CatalogError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
            CatalogError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            CatalogError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
        };
        json_error(status, code, self.to_string())
    }
}

fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Collects validator failures into a per-field message map.
fn validation_error_response(errors: validator::ValidationErrors) -> Response {
    let fields: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), json!(messages))
        })
        .collect();

    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_error",
            "message": "request validation failed",
            "fields": fields,
        })),
    )
        .into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "healthy", "service": "product-service"}))
}

async fn get_all_products(State(s): State<AppState>) -> Result<Response, CatalogError> {
    let response = s.service.get_all_products().await?;
    Ok(Json(response).into_response())
}

async fn get_product_by_id(
    State(s): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    let response = s.service.get_product_by_id(&id).await?;
    Ok(Json(response).into_response())
}

async fn create_product(
    State(s): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<Response, CatalogError> {
    if let Err(errors) = request.validate() {
        return Ok(validation_error_response(errors));
    }
    let response = s.service.create_product(request).await?;
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

async fn update_product(
    State(s): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Response, CatalogError> {
    if let Err(errors) = request.validate() {
        return Ok(validation_error_response(errors));
    }
    let response = s.service.update_product(&id, request).await?;
    Ok(Json(response).into_response())
}

async fn delete_product(
    State(s): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    s.service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
