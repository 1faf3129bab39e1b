//! Mock implementations for testing.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;

use crate::domain::{EntityId, PeerKind, ReferenceChecker};

/// In-memory reference checker with a configurable set of known records.
///
/// `unavailable` simulates a peer outage: every lookup reads as
/// non-existent, which is exactly what the HTTP implementation reports
/// on timeout or transport failure.
pub struct MockReferenceChecker {
    known: Mutex<HashSet<(PeerKind, EntityId)>>,
    unavailable: AtomicBool,
    call_count: AtomicU64,
}

impl MockReferenceChecker {
    /// Creates a checker that knows no records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            known: Mutex::new(HashSet::new()),
            unavailable: AtomicBool::new(false),
            call_count: AtomicU64::new(0),
        }
    }

    /// Creates a checker that behaves like an unreachable peer.
    #[must_use]
    pub fn unavailable() -> Self {
        let checker = Self::new();
        checker.set_unavailable(true);
        checker
    }

    /// Registers a record the checker will report as existing.
    pub fn allow(&self, kind: PeerKind, id: EntityId) {
        self.known.lock().unwrap().insert((kind, id));
    }

    /// Forgets a previously registered record.
    pub fn revoke(&self, kind: PeerKind, id: EntityId) {
        self.known.lock().unwrap().remove(&(kind, id));
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// Number of lookups performed, across all kinds.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for MockReferenceChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReferenceChecker for MockReferenceChecker {
    async fn exists(&self, kind: PeerKind, id: EntityId) -> bool {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.unavailable.load(Ordering::Relaxed) {
            return false;
        }
        self.known.lock().unwrap().contains(&(kind, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_reports_registered_records() {
        let checker = MockReferenceChecker::new();
        checker.allow(PeerKind::Turma, 1);

        assert!(checker.exists(PeerKind::Turma, 1).await);
        assert!(!checker.exists(PeerKind::Turma, 2).await);
        assert!(!checker.exists(PeerKind::Professor, 1).await);
        assert_eq!(checker.call_count(), 3);
    }

    #[tokio::test]
    async fn test_unavailable_hides_registered_records() {
        let checker = MockReferenceChecker::new();
        checker.allow(PeerKind::Aluno, 1);
        checker.set_unavailable(true);
        assert!(!checker.exists(PeerKind::Aluno, 1).await);

        checker.set_unavailable(false);
        assert!(checker.exists(PeerKind::Aluno, 1).await);
    }

    #[tokio::test]
    async fn test_revoke() {
        let checker = MockReferenceChecker::new();
        checker.allow(PeerKind::Professor, 5);
        checker.revoke(PeerKind::Professor, 5);
        assert!(!checker.exists(PeerKind::Professor, 5).await);
    }
}
