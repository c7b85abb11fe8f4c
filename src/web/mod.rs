//! # Módulo Web — Ranking via HTTP
//!
//! Camada HTTP opcional (modo `serve`), construída com **Axum** + **Maud**.
//! Expõe a mesma pipeline do modo batch.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                              │
//! │  ├── GET  /              → HTML: ranking atual         │
//! │  ├── GET  /status        → JSON: resumo do ranking     │
//! │  ├── GET  /api/ranking   → JSON: ranking atual         │
//! │  ├── POST /api/evaluate  → JSON: trace fuzzy           │
//! │  ├── POST /api/rank      → JSON: ranking da planilha   │
//! │  └── POST /api/reload    → JSON: relê planilha         │
//! ├────────────────────────────────────────────────────────┤
//! │ CorsLayer (tower_http)                                 │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── API JSON ──────────────────────────────────────────
        .route("/status", get(handlers::status))
        .route("/api/ranking", get(handlers::ranking))
        .route("/api/evaluate", post(handlers::evaluate))
        .route("/api/rank", post(handlers::rank_sheet))
        .route("/api/reload", post(handlers::reload))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
