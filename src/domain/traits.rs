//! Domain traits defining contracts for the store and for peer services.

use std::fmt;

use async_trait::async_trait;

use super::error::ReferenceError;
use super::types::EntityId;

/// Implemented by every stored entity so the store can assign and read
/// its identifier.
pub trait Record {
    fn id(&self) -> EntityId;
    fn assign_id(&mut self, id: EntityId);
}

/// Kinds of records owned by the roster service that other services
/// reference by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeerKind {
    Professor,
    Turma,
    Aluno,
}

impl PeerKind {
    /// Resource path segment on the owning service.
    #[must_use]
    pub fn resource(self) -> &'static str {
        match self {
            PeerKind::Professor => "professores",
            PeerKind::Turma => "turmas",
            PeerKind::Aluno => "alunos",
        }
    }
}

impl fmt::Display for PeerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeerKind::Professor => "professor",
            PeerKind::Turma => "turma",
            PeerKind::Aluno => "aluno",
        };
        f.write_str(name)
    }
}

/// Existence lookup against the service owning a referenced record.
///
/// Implementations are fail-closed: any transport failure, timeout or
/// non-success status reads as "does not exist". One round trip per
/// call, no caching.
#[async_trait]
pub trait ReferenceChecker: Send + Sync {
    async fn exists(&self, kind: PeerKind, id: EntityId) -> bool;
}

/// Confirms every supplied reference against the peer service.
///
/// Each id gets its own lookup even after an earlier one has failed;
/// failures collapse into a single composite error naming the checked
/// kinds without pinpointing which lookup failed.
pub async fn verify_references(
    checker: &dyn ReferenceChecker,
    refs: &[(PeerKind, EntityId)],
) -> Result<(), ReferenceError> {
    if refs.is_empty() {
        return Ok(());
    }

    let mut all_ok = true;
    for (kind, id) in refs {
        if !checker.exists(*kind, *id).await {
            all_ok = false;
        }
    }

    if all_ok {
        Ok(())
    } else {
        Err(ReferenceError::Invalid(composite_message(refs)))
    }
}

fn composite_message(refs: &[(PeerKind, EntityId)]) -> String {
    let mut kinds: Vec<String> = refs.iter().map(|(kind, _)| kind.to_string()).collect();
    kinds.dedup();
    format!(
        "{} not found or owning service unavailable",
        kinds.join("/")
    )
}
