//! Per-service application state.
//!
//! Each service owns its stores; services that validate foreign keys
//! also hold a reference checker. Everything is injected through the
//! constructor so tests can swap in mocks, and handlers never reach
//! for global state.

use std::sync::Arc;

use crate::domain::{Aluno, Nota, Professor, ReferenceChecker, Reserva, Tarefa, Turma};
use crate::infra::MemoryStore;

/// Roster service: professors, classes and students. Owns the records
/// the other services reference, so it performs no outbound checks.
#[derive(Clone)]
pub struct GerenciamentoState {
    pub professores: Arc<MemoryStore<Professor>>,
    pub turmas: Arc<MemoryStore<Turma>>,
    pub alunos: Arc<MemoryStore<Aluno>>,
}

impl GerenciamentoState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            professores: Arc::new(MemoryStore::new()),
            turmas: Arc::new(MemoryStore::new()),
            alunos: Arc::new(MemoryStore::new()),
        }
    }
}

impl Default for GerenciamentoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Assignment service: assignments and their grades. Professors,
/// classes and students are confirmed against the roster service.
#[derive(Clone)]
pub struct TarefasState {
    pub tarefas: Arc<MemoryStore<Tarefa>>,
    pub notas: Arc<MemoryStore<Nota>>,
    pub gerenciamento: Arc<dyn ReferenceChecker>,
}

impl TarefasState {
    #[must_use]
    pub fn new(gerenciamento: Arc<dyn ReferenceChecker>) -> Self {
        Self {
            tarefas: Arc::new(MemoryStore::new()),
            notas: Arc::new(MemoryStore::new()),
            gerenciamento,
        }
    }
}

/// Booking service: room reservations, with classes confirmed against
/// the roster service.
#[derive(Clone)]
pub struct ReservasState {
    pub reservas: Arc<MemoryStore<Reserva>>,
    pub gerenciamento: Arc<dyn ReferenceChecker>,
}

impl ReservasState {
    #[must_use]
    pub fn new(gerenciamento: Arc<dyn ReferenceChecker>) -> Self {
        Self {
            reservas: Arc::new(MemoryStore::new()),
            gerenciamento,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockReferenceChecker;

    #[test]
    fn test_states_are_clone_and_share_stores() {
        let state = GerenciamentoState::new();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.professores, &cloned.professores));
        assert!(Arc::ptr_eq(&state.alunos, &cloned.alunos));
    }

    #[test]
    fn test_tarefas_state_holds_injected_checker() {
        let checker = Arc::new(MockReferenceChecker::new());
        let state = TarefasState::new(checker.clone());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.tarefas, &cloned.tarefas));
        assert_eq!(checker.call_count(), 0);
    }
}
