//! CRUD handlers for assignments.
//!
//! Creating an assignment confirms both `professor_id` and `turma_id`
//! against the roster service; updating confirms whichever of the two
//! the patch supplies. Existence of the assignment itself is settled
//! before any outbound call so a missing id is a 404 even when the
//! body also carries a bad reference.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::extract::AppJson;
use crate::app::TarefasState;
use crate::domain::{
    AppError, CreateTarefaRequest, EntityId, PeerKind, Tarefa, UpdateTarefaRequest,
    verify_references,
};

pub async fn list(State(state): State<TarefasState>) -> Result<Json<Vec<Tarefa>>, AppError> {
    Ok(Json(state.tarefas.list()?))
}

pub async fn get(
    State(state): State<TarefasState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Tarefa>, AppError> {
    let tarefa = state
        .tarefas
        .get(id)?
        .ok_or_else(|| AppError::not_found(id))?;
    Ok(Json(tarefa))
}

pub async fn create(
    State(state): State<TarefasState>,
    AppJson(payload): AppJson<CreateTarefaRequest>,
) -> Result<(StatusCode, Json<Tarefa>), AppError> {
    payload.validate()?;
    verify_references(
        state.gerenciamento.as_ref(),
        &[
            (PeerKind::Professor, payload.professor_id),
            (PeerKind::Turma, payload.turma_id),
        ],
    )
    .await?;
    let created = state.tarefas.insert(Tarefa::from(payload))?;
    info!(id = created.id, turma_id = created.turma_id, "tarefa created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<TarefasState>,
    Path(id): Path<EntityId>,
    AppJson(patch): AppJson<UpdateTarefaRequest>,
) -> Result<Json<Tarefa>, AppError> {
    patch.validate()?;
    if !state.tarefas.contains(id)? {
        return Err(AppError::not_found(id));
    }

    let mut refs = Vec::new();
    if let Some(professor_id) = patch.professor_id {
        refs.push((PeerKind::Professor, professor_id));
    }
    if let Some(turma_id) = patch.turma_id {
        refs.push((PeerKind::Turma, turma_id));
    }
    verify_references(state.gerenciamento.as_ref(), &refs).await?;

    let updated = state.tarefas.update(id, |tarefa| tarefa.apply(patch))?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<TarefasState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    state.tarefas.remove(id)?;
    info!(id, "tarefa removed");
    Ok(StatusCode::NO_CONTENT)
}
