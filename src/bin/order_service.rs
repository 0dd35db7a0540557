//! Order intake service binary.
//!
//! Holds no domain logic: it accepts a product id and republishes it as an
//! `order.created` event, nothing else.

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_service::domain::events::{OrderCreatedEvent, ORDER_CREATED_SUBJECT};

#[derive(Clone)]
struct AppState {
    nats: async_nats::Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderRequest {
    product_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let nats_url = std::env::var("NATS_URL").unwrap_or_else(|_| "localhost:4222".to_string());
    let nats = async_nats::connect(&nats_url).await?;

    let app = Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({"status": "healthy", "service": "order-service"})) }),
        )
        .route("/api/v1/orders", post(create_order))
        .with_state(AppState { nats });

    let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("order-service listening on 0.0.0.0:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn create_order(
    State(s): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let event = OrderCreatedEvent {
        product_id: request.product_id.clone(),
    };
    let payload = serde_json::to_vec(&event)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    s.nats
        .publish(ORDER_CREATED_SUBJECT.to_string(), payload.into())
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    tracing::info!(product_id = %request.product_id, "order created event published");
    Ok((StatusCode::CREATED, request.product_id))
}
