//! CRUD handlers for students.
//!
//! `media_final` is derived from the two term grades and recomputed on
//! every write; it is never accepted from the client.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::extract::AppJson;
use crate::app::GerenciamentoState;
use crate::domain::{Aluno, AppError, CreateAlunoRequest, EntityId, UpdateAlunoRequest};

pub async fn list(State(state): State<GerenciamentoState>) -> Result<Json<Vec<Aluno>>, AppError> {
    Ok(Json(state.alunos.list()?))
}

pub async fn get(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Aluno>, AppError> {
    let aluno = state
        .alunos
        .get(id)?
        .ok_or_else(|| AppError::not_found(id))?;
    Ok(Json(aluno))
}

pub async fn create(
    State(state): State<GerenciamentoState>,
    AppJson(payload): AppJson<CreateAlunoRequest>,
) -> Result<(StatusCode, Json<Aluno>), AppError> {
    payload.validate()?;
    let created = state.alunos.insert(Aluno::from(payload))?;
    info!(id = created.id, "aluno created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
    AppJson(patch): AppJson<UpdateAlunoRequest>,
) -> Result<Json<Aluno>, AppError> {
    patch.validate()?;
    let updated = state.alunos.update(id, |aluno| aluno.apply(patch))?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<GerenciamentoState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    state.alunos.remove(id)?;
    info!(id, "aluno removed");
    Ok(StatusCode::NO_CONTENT)
}
