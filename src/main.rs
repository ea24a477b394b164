use order_matching_api::{create_router, MatchingEngine};
use order_matching_api::models::DEFAULT_TRADE_CAPACITY;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_matching_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Engine configuration (defaults match the single supported pair)
    let pair = std::env::var("INSTRUMENT").unwrap_or_else(|_| "BTCZAR".to_string());
    let trade_capacity = std::env::var("TRADE_HISTORY_CAPACITY")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_TRADE_CAPACITY);

    // One engine instance per pair, owned here and shared with every handler
    let engine = Arc::new(MatchingEngine::new(pair, trade_capacity));

    let app = create_router(engine.clone());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Order Matching API server running on http://{}", addr);
    tracing::info!("Pair: {}", engine.pair());
    tracing::info!("Swagger UI: http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.unwrap();
}
