//! CRUD handlers for classes.
//!
//! `professor_id` is a soft reference: the roster service owns both
//! sides, so no outbound check happens here.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::extract::AppJson;
use crate::app::GerenciamentoState;
use crate::domain::{AppError, CreateTurmaRequest, EntityId, Turma, UpdateTurmaRequest};

pub async fn list(State(state): State<GerenciamentoState>) -> Result<Json<Vec<Turma>>, AppError> {
    Ok(Json(state.turmas.list()?))
}

pub async fn get(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Turma>, AppError> {
    let turma = state
        .turmas
        .get(id)?
        .ok_or_else(|| AppError::not_found(id))?;
    Ok(Json(turma))
}

pub async fn create(
    State(state): State<GerenciamentoState>,
    AppJson(payload): AppJson<CreateTurmaRequest>,
) -> Result<(StatusCode, Json<Turma>), AppError> {
    payload.validate()?;
    let created = state.turmas.insert(Turma::from(payload))?;
    info!(id = created.id, "turma created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
    AppJson(patch): AppJson<UpdateTurmaRequest>,
) -> Result<Json<Turma>, AppError> {
    patch.validate()?;
    let updated = state.turmas.update(id, |turma| turma.apply(patch))?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    state.turmas.remove(id)?;
    info!(id, "turma removed");
    Ok(StatusCode::NO_CONTENT)
}
