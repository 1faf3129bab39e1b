//! Domain layer: entity types, request payloads, errors and trait
//! contracts. Depends on nothing above it.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AppError, ConfigError, ReferenceError, StoreError, ValidationError};
pub use traits::{PeerKind, Record, ReferenceChecker, verify_references};
pub use types::{
    Aluno, CreateAlunoRequest, CreateNotaRequest, CreateProfessorRequest, CreateReservaRequest,
    CreateTarefaRequest, CreateTurmaRequest, EntityId, ErrorDetail, ErrorResponse, Nota, Professor,
    Reserva, Tarefa, Turma, UpdateAlunoRequest, UpdateNotaRequest, UpdateProfessorRequest,
    UpdateReservaRequest, UpdateTarefaRequest, UpdateTurmaRequest,
};
