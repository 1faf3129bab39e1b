//! CRUD handlers for grades.
//!
//! A grade references a student owned by the roster service and an
//! assignment owned by this service; the student is confirmed over
//! HTTP, the assignment against the local store. Both lookups run even
//! when the first fails and collapse into one composite rejection.

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
    AppError, CreateNotaRequest, EntityId, Nota, PeerKind, ReferenceError, UpdateNotaRequest,
};

fn invalid_refs(kinds: &[&str]) -> AppError {
    ReferenceError::Invalid(format!(
        "{} not found or owning service unavailable",
        kinds.join("/")
    ))
    .into()
}

pub async fn list(State(state): State<TarefasState>) -> Result<Json<Vec<Nota>>, AppError> {
    Ok(Json(state.notas.list()?))
}

pub async fn get(
    State(state): State<TarefasState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Nota>, AppError> {
    let nota = state
        .notas
        .get(id)?
        .ok_or_else(|| AppError::not_found(id))?;
    Ok(Json(nota))
}

pub async fn create(
    State(state): State<TarefasState>,
    AppJson(payload): AppJson<CreateNotaRequest>,
) -> Result<(StatusCode, Json<Nota>), AppError> {
    payload.validate()?;
    let aluno_ok = state
        .gerenciamento
        .exists(PeerKind::Aluno, payload.aluno_id)
        .await;
    let tarefa_ok = state.tarefas.contains(payload.tarefa_id)?;
    if !(aluno_ok && tarefa_ok) {
        return Err(invalid_refs(&["aluno", "tarefa"]));
    }

    let created = state.notas.insert(Nota::from(payload))?;
    info!(id = created.id, aluno_id = created.aluno_id, "nota created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<TarefasState>,
    Path(id): Path<EntityId>,
    AppJson(patch): AppJson<UpdateNotaRequest>,
) -> Result<Json<Nota>, AppError> {
    patch.validate()?;
    if !state.notas.contains(id)? {
        return Err(AppError::not_found(id));
    }

    let mut checked = Vec::new();
    let mut all_ok = true;
    if let Some(aluno_id) = patch.aluno_id {
        checked.push("aluno");
        if !state.gerenciamento.exists(PeerKind::Aluno, aluno_id).await {
            all_ok = false;
        }
    }
    if let Some(tarefa_id) = patch.tarefa_id {
        checked.push("tarefa");
        if !state.tarefas.contains(tarefa_id)? {
            all_ok = false;
        }
    }
    if !all_ok {
        return Err(invalid_refs(&checked));
    }

    let updated = state.notas.update(id, |nota| nota.apply(patch))?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<TarefasState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    state.notas.remove(id)?;
    info!(id, "nota removed");
    Ok(StatusCode::NO_CONTENT)
}
