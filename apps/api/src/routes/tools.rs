use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::forms::{FieldSpec, ViewModel};
use crate::qr::{self, QrPayload};
use crate::state::AppState;
use crate::tools::Tool;

#[derive(Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

fn describe(tool: &dyn Tool) -> ToolDescriptor {
    ToolDescriptor {
        id: tool.id(),
        title: tool.title(),
        fields: tool.schema().fields(),
    }
}

/// GET /api/v1/tools
pub async fn handle_list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.tools.iter().map(describe).collect())
}

/// GET /api/v1/tools/:id
pub async fn handle_describe_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ToolDescriptor>, AppError> {
    let tool = lookup(&state, &id)?;
    Ok(Json(describe(tool)))
}

/// POST /api/v1/tools/:id/compute
///
/// Body is a flat JSON object of raw field values, as a browser form
/// would submit them. One synchronous compute per request; no state is
/// retained afterwards.
pub async fn handle_compute(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(raw): Json<Map<String, Value>>,
) -> Result<Json<ViewModel>, AppError> {
    let tool = lookup(&state, &id)?;
    let inputs = tool.schema().validate(&raw)?;
    let view = tool.compute(&inputs, &state.config.statutory)?;
    Ok(Json(view))
}

/// GET /api/v1/tools/:id/qr
/// QR code linking to the tool's public page.
pub async fn handle_tool_qr(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<QrPayload>, AppError> {
    let tool = lookup(&state, &id)?;
    let target = format!(
        "{}/tools/{}",
        state.config.public_base_url.trim_end_matches('/'),
        tool.id()
    );
    Ok(Json(qr::generate(&target)?))
}

#[derive(Deserialize)]
pub struct QrQuery {
    pub target: String,
}

/// GET /api/v1/qr?target=<url>
pub async fn handle_qr(
    State(_state): State<AppState>,
    Query(query): Query<QrQuery>,
) -> Result<Json<QrPayload>, AppError> {
    Ok(Json(qr::generate(&query.target)?))
}

fn lookup<'s>(state: &'s AppState, id: &str) -> Result<&'s dyn Tool, AppError> {
    state
        .tools
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Tool '{id}' not found")))
}
