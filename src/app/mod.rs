//! Application layer: service state wiring.

pub mod state;

pub use state::{GerenciamentoState, ReservasState, TarefasState};
