//! CRUD handlers for professors.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::extract::AppJson;
use crate::app::GerenciamentoState;
use crate::domain::{
    AppError, CreateProfessorRequest, EntityId, Professor, UpdateProfessorRequest,
};

pub async fn list(
    State(state): State<GerenciamentoState>,
) -> Result<Json<Vec<Professor>>, AppError> {
    Ok(Json(state.professores.list()?))
}

pub async fn get(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Professor>, AppError> {
    let professor = state
        .professores
        .get(id)?
        .ok_or_else(|| AppError::not_found(id))?;
    Ok(Json(professor))
}

pub async fn create(
    State(state): State<GerenciamentoState>,
    AppJson(payload): AppJson<CreateProfessorRequest>,
) -> Result<(StatusCode, Json<Professor>), AppError> {
    payload.validate()?;
    let created = state.professores.insert(Professor::from(payload))?;
    info!(id = created.id, "professor created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
    AppJson(patch): AppJson<UpdateProfessorRequest>,
) -> Result<Json<Professor>, AppError> {
    patch.validate()?;
    let updated = state.professores.update(id, |professor| professor.apply(patch))?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    state.professores.remove(id)?;
    info!(id, "professor removed");
    Ok(StatusCode::NO_CONTENT)
}
