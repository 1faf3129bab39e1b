//! In-memory resource store.
//!
//! One `MemoryStore` per entity type: a mutex-guarded map from id to
//! record plus a monotonic id counter. The mutex serializes concurrent
//! requests; ids are never reused, even after deletes.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::{EntityId, Record, StoreError};

struct StoreInner<T> {
    records: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

pub struct MemoryStore<T> {
    inner: Mutex<StoreInner<T>>,
}

impl<T> MemoryStore<T>
where
    T: Record + Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Assigns the next identifier to `record`, persists it and returns
    /// the stored copy.
    pub fn insert(&self, mut record: T) -> Result<T, StoreError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        record.assign_id(id);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    pub fn get(&self, id: EntityId) -> Result<Option<T>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.records.get(&id).cloned())
    }

    pub fn contains(&self, id: EntityId) -> Result<bool, StoreError> {
        let inner = self.lock()?;
        Ok(inner.records.contains_key(&id))
    }

    /// All records in id order, which is creation order.
    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.records.values().cloned().collect())
    }

    /// Mutates the record in place and returns the updated copy, or
    /// `NotFound` if the id is absent.
    pub fn update(&self, id: EntityId, mutate: impl FnOnce(&mut T)) -> Result<T, StoreError> {
        let mut inner = self.lock()?;
        let record = inner
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        mutate(record);
        Ok(record.clone())
    }

    /// Removes the record, or `NotFound` if the id is absent. The id is
    /// retired permanently.
    pub fn remove(&self, id: EntityId) -> Result<T, StoreError> {
        let mut inner = self.lock()?;
        inner.records.remove(&id).ok_or(StoreError::NotFound(id))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreInner<T>>, StoreError> {
        self.inner
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl<T> Default for MemoryStore<T>
where
    T: Record + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Professor;

    fn professor(nome: &str) -> Professor {
        Professor {
            id: 0,
            nome: nome.to_string(),
            idade: None,
            materia: "Matemática".to_string(),
            observacoes: String::new(),
        }
    }

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let store = MemoryStore::new();
        let a = store.insert(professor("Ana")).unwrap();
        let b = store.insert(professor("Bruno")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_ids_are_never_reused_after_delete() {
        let store = MemoryStore::new();
        let a = store.insert(professor("Ana")).unwrap();
        store.remove(a.id).unwrap();
        let b = store.insert(professor("Bruno")).unwrap();
        assert_eq!(b.id, 2);
        assert!(store.get(a.id).unwrap().is_none());
    }

    #[test]
    fn test_get_returns_stored_record() {
        let store = MemoryStore::new();
        let created = store.insert(professor("Ana")).unwrap();
        let fetched = store.get(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_list_preserves_creation_order() {
        let store = MemoryStore::new();
        for nome in ["Ana", "Bruno", "Carla"] {
            store.insert(professor(nome)).unwrap();
        }
        let nomes: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|p| p.nome)
            .collect();
        assert_eq!(nomes, vec!["Ana", "Bruno", "Carla"]);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let store: MemoryStore<Professor> = MemoryStore::new();
        let err = store.update(9, |_| {}).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(9)));
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = MemoryStore::new();
        let created = store.insert(professor("Ana")).unwrap();
        let updated = store
            .update(created.id, |p| p.materia = "Física".to_string())
            .unwrap();
        assert_eq!(updated.materia, "Física");
        assert_eq!(store.get(created.id).unwrap().unwrap().materia, "Física");
    }

    #[test]
    fn test_remove_does_not_affect_other_records() {
        let store = MemoryStore::new();
        let a = store.insert(professor("Ana")).unwrap();
        let b = store.insert(professor("Bruno")).unwrap();
        store.remove(a.id).unwrap();
        assert_eq!(store.list().unwrap(), vec![b.clone()]);
        assert!(matches!(
            store.remove(a.id).unwrap_err(),
            StoreError::NotFound(_)
        ));
        assert_eq!(store.get(b.id).unwrap().unwrap(), b);
    }
}
