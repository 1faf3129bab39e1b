//! CRUD handlers for room bookings.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::extract::AppJson;
use crate::app::ReservasState;
use crate::domain::{
    AppError, CreateReservaRequest, EntityId, PeerKind, Reserva, UpdateReservaRequest,
    verify_references,
};

pub async fn list(State(state): State<ReservasState>) -> Result<Json<Vec<Reserva>>, AppError> {
    Ok(Json(state.reservas.list()?))
}

pub async fn get(
    State(state): State<ReservasState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Reserva>, AppError> {
    let reserva = state
        .reservas
        .get(id)?
        .ok_or_else(|| AppError::not_found(id))?;
    Ok(Json(reserva))
}

pub async fn create(
    State(state): State<ReservasState>,
    AppJson(payload): AppJson<CreateReservaRequest>,
) -> Result<(StatusCode, Json<Reserva>), AppError> {
    payload.validate()?;
    verify_references(
        state.gerenciamento.as_ref(),
        &[(PeerKind::Turma, payload.turma_id)],
    )
    .await?;
    let created = state.reservas.insert(Reserva::from(payload))?;
    info!(id = created.id, num_sala = created.num_sala, "reserva created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<ReservasState>,
    Path(id): Path<EntityId>,
    AppJson(patch): AppJson<UpdateReservaRequest>,
) -> Result<Json<Reserva>, AppError> {
    patch.validate()?;
    if !state.reservas.contains(id)? {
        return Err(AppError::not_found(id));
    }

    let mut refs = Vec::new();
    if let Some(turma_id) = patch.turma_id {
        refs.push((PeerKind::Turma, turma_id));
    }
    verify_references(state.gerenciamento.as_ref(), &refs).await?;

    let updated = state.reservas.update(id, |reserva| reserva.apply(patch))?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<ReservasState>,
    Path(id): Path<EntityId>,
) -> Result<StatusCode, AppError> {
    state.reservas.remove(id)?;
    info!(id, "reserva removed");
    Ok(StatusCode::NO_CONTENT)
}
