use crate::agent::ChatRelay;
use crate::models::chat::{ChatRequest, ChatResponse, ErrorResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::info;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home_handler))
        .route("/chat", post(chat_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_http_server(
    addr: &str,
    relay: Arc<ChatRelay>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    info!("Starting HTTP API server on: http://{}", addr);

    let app = router(AppState { relay });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn chat_handler(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    info!("Received user input: {}", req.message);

    let outcome = state
        .relay
        .process_chat(&req.message, req.role.as_deref(), &req.conversation_history)
        .await;

    match outcome.error {
        Some(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error,
                message: outcome.reply,
            }),
        )
            .into_response(),
        None => (
            StatusCode::OK,
            Json(ChatResponse {
                reply: outcome.reply,
                conversation_history: outcome.conversation_history,
            }),
        )
            .into_response(),
    }
}

async fn home_handler() -> &'static str {
    info!("Home route accessed.");
    "Welcome to the chat relay!"
}
