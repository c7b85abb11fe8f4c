//! # Handlers HTTP
//!
//! Cada função pública é um handler Axum mapeado em
//! [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Ranking atual (Maud) |
//! | `status` | GET | JSON | Resumo do ranking carregado |
//! | `ranking` | GET | JSON | Ranking atual completo |
//! | `evaluate` | POST | JSON | Trace fuzzy de um par (servis, harga) |
//! | `rank_sheet` | POST | JSON | Ranking de uma planilha enviada |
//! | `reload` | POST | JSON | Relê a planilha configurada |
//!
//! Erros saem como `{ "error": "...", "status": 422 }` via [`ApiError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::state::AppState;
use super::templates;
use crate::error::InputError;
use crate::pipeline::{self, Evaluation, Ranking};
use crate::sheet::{self, Validation};

/// Erro devolvido pelos handlers JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Input(#[from] InputError),

    #[error("corpo inválido: {0}")]
    BadBody(String),

    #[error("{field} deve ser um número finito")]
    NonFinite { field: &'static str },

    #[error("falha ao recarregar a planilha: {0}")]
    Reload(String),

    #[error("erro interno: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Input(_) | ApiError::BadBody(_) | ApiError::NonFinite { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Reload(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(serde_json::json!({
                "error": self.to_string(),
                "status": status.as_u16(),
            })),
        )
            .into_response()
    }
}

/// Resposta do `/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Registros avaliados no ranking atual.
    pub records: usize,
    /// Registros no ranking (≤ top-N).
    pub ranked: usize,
    /// Quando o ranking atual foi calculado.
    pub generated_at: DateTime<Utc>,
}

impl StatusResponse {
    fn of(ranking: &Ranking) -> Self {
        Self {
            records: ranking.evaluated,
            ranked: ranking.entries.len(),
            generated_at: ranking.generated_at,
        }
    }
}

/// Corpo do `POST /api/evaluate`.
///
/// Aceita números ou strings numéricas (`"NaN"`, `"inf"` chegam à
/// checagem de finitude em vez de falhar na desserialização).
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub servis: Value,
    pub harga: Value,
}

fn finite_field(field: &'static str, value: &Value) -> Result<f64, ApiError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        Some(_) => Err(ApiError::NonFinite { field }),
        None => Err(ApiError::BadBody(format!("{field} deve ser numérico, recebido {value}"))),
    }
}

/// GET `/` — Página com o ranking atual.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let ranking = state.ranking.read();
    Html(templates::ranking_page(&ranking, state.pipeline.top_n()).into_string())
}

/// GET `/status` — Resumo do ranking carregado.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse::of(&state.ranking.read()))
}

/// GET `/api/ranking` — Ranking atual em JSON.
pub async fn ranking(State(state): State<AppState>) -> Json<Ranking> {
    Json(state.ranking.read().clone())
}

/// POST `/api/evaluate` — Trace fuzzy completo de um par (servis, harga).
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Json<Evaluation>, ApiError> {
    // Números fora do f64 (1e400) falham já no parse do JSON
    let Json(req) = payload?;
    let servis = finite_field("servis", &req.servis)?;
    let harga = finite_field("harga", &req.harga)?;
    Ok(Json(state.pipeline.evaluate(servis, harga)))
}

/// POST `/api/rank` — Ranqueia a planilha enviada no corpo.
///
/// Validação estrita; não altera o ranking do servidor.
pub async fn rank_sheet(
    State(state): State<AppState>,
    Json(rows): Json<Vec<Vec<Value>>>,
) -> Result<Json<Ranking>, ApiError> {
    let read = sheet::parse_rows(&rows, Validation::Strict)?;
    let scorer = state.pipeline;
    // rayon + CPU: fora do executor async
    let ranking = tokio::task::spawn_blocking(move || scorer.rank(&read.records))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(ranking))
}

/// POST `/api/reload` — Relê a planilha configurada e troca o ranking.
///
/// Em caso de falha o ranking anterior é mantido.
pub async fn reload(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let config = state.config.clone();
    let scorer = state.pipeline;
    let loaded = tokio::task::spawn_blocking(move || pipeline::load_ranking(&config, &scorer))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    match loaded {
        Ok(ranking) => {
            let status = StatusResponse::of(&ranking);
            *state.ranking.write() = ranking;
            tracing::info!(records = status.records, "Ranking recarregado");
            Ok(Json(status))
        }
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "Falha ao recarregar ranking");
            Err(ApiError::Reload(format!("{e:#}")))
        }
    }
}
