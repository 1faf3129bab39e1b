//! API layer: extractors, handlers and routers.

pub mod extract;
pub mod handlers;
pub mod router;

pub use router::{gerenciamento_router, metrics_router, reservas_router, tarefas_router};
