use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::resume::{AnalysisStub, ArchivedResume};
use crate::state::AppState;

/// GET /analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisStub>>, AppError> {
    let stubs = state.archive.list_stubs()?;
    Ok(Json(stubs))
}

/// GET /analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArchivedResume>, AppError> {
    let record = state.archive.get(&id)?;
    Ok(Json(record))
}
