//! Document store: the authoritative document collection mirrored to a
//! persisted slot.
//!
//! Every mutation builds the next collection, writes it to the slot, and
//! only then replaces the in-memory copy, so memory and storage agree after
//! each call whether it succeeded or failed. Validation failures and unknown
//! ids are no-ops and never touch storage.

use std::collections::HashSet;

use super::clock::{Clock, SystemClock};
use super::document::{Document, DocumentId};
use super::error::{StoreError, StoreResult};
use super::search;
use super::storage::KeyValueStorage;

/// Slot key used when none is configured
pub const DEFAULT_SLOT_KEY: &str = "my-docs";

/// Result of an edit-surface submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    Created(Document),
    Updated(DocumentId),
    /// Title or content was blank
    Rejected,
    /// The edited document no longer exists
    NotFound(DocumentId),
}

pub struct DocumentStore<S> {
    storage: S,
    key: String,
    documents: Vec<Document>,
    clock: Box<dyn Clock>,
    last_id: Option<DocumentId>,
}

impl<S: KeyValueStorage> DocumentStore<S> {
    /// Open the store and hydrate it from the slot named `key`
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        Self::with_clock(storage, key, Box::new(SystemClock))
    }

    /// Open the store with a custom id clock
    pub fn with_clock(storage: S, key: impl Into<String>, clock: Box<dyn Clock>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            documents: Vec::new(),
            clock,
            last_id: None,
        };
        store.reload();
        tracing::info!(
            "Opened document store '{}' with {} documents",
            store.key,
            store.documents.len()
        );
        store
    }

    /// Read the persisted collection.
    ///
    /// Never fails: a missing, unreadable or corrupt slot reads as empty.
    pub fn load(&self) -> Vec<Document> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read slot '{}', starting empty: {}", self.key, e);
                return Vec::new();
            }
        };

        let parsed: Vec<Document> = match serde_json::from_str(&raw) {
            Ok(docs) => docs,
            Err(e) => {
                tracing::warn!("Slot '{}' is not a document list, starting empty: {}", self.key, e);
                return Vec::new();
            }
        };

        let mut seen = HashSet::with_capacity(parsed.len());
        parsed
            .into_iter()
            .filter(|doc| {
                let first = seen.insert(doc.id);
                if !first {
                    tracing::warn!("Dropping duplicate document id {} from slot '{}'", doc.id, self.key);
                }
                first
            })
            .collect()
    }

    /// Replace the in-memory collection with the persisted one
    pub fn reload(&mut self) {
        self.documents = self.load();
    }

    /// Persist `collection` as the whole store state
    #[allow(dead_code)]
    pub fn save(&mut self, collection: Vec<Document>) -> StoreResult<()> {
        self.commit(collection)
    }

    /// Current in-memory collection
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Find a document by id
    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Title search over the current collection
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Document> + 'a {
        search::search(&self.documents, term)
    }

    /// Create a document. Returns `None` if title or content is blank.
    pub fn create(&mut self, title: &str, content: &str) -> StoreResult<Option<Document>> {
        if is_blank(title, content) {
            tracing::debug!("Rejected document with blank title or content");
            return Ok(None);
        }

        let id = self.next_id()?;
        let doc = Document::new(id, title, content);

        let mut next = self.documents.clone();
        next.push(doc.clone());
        self.commit(next)?;
        self.last_id = Some(id);

        tracing::info!("Created document {}", id);
        Ok(Some(doc))
    }

    /// Replace title and content of a document. Returns whether it applied.
    pub fn update(&mut self, id: DocumentId, title: &str, content: &str) -> StoreResult<bool> {
        if is_blank(title, content) {
            tracing::debug!("Rejected update of {} with blank title or content", id);
            return Ok(false);
        }

        let applied = self.mutate(id, |doc| {
            doc.title = title.to_string();
            doc.content = content.to_string();
        })?;
        if applied {
            tracing::info!("Updated document {}", id);
        }
        Ok(applied)
    }

    /// Update `editing` if set, otherwise create a new document
    pub fn upsert(
        &mut self,
        editing: Option<DocumentId>,
        title: &str,
        content: &str,
    ) -> StoreResult<Upsert> {
        if is_blank(title, content) {
            return Ok(Upsert::Rejected);
        }

        match editing {
            Some(id) => {
                if self.update(id, title, content)? {
                    Ok(Upsert::Updated(id))
                } else {
                    Ok(Upsert::NotFound(id))
                }
            }
            None => Ok(self
                .create(title, content)?
                .map(Upsert::Created)
                .unwrap_or(Upsert::Rejected)),
        }
    }

    /// Delete a document permanently. Returns whether it existed.
    pub fn remove(&mut self, id: DocumentId) -> StoreResult<bool> {
        if self.get(id).is_none() {
            tracing::debug!("Remove of unknown document {}", id);
            return Ok(false);
        }

        let next = self
            .documents
            .iter()
            .filter(|doc| doc.id != id)
            .cloned()
            .collect();
        self.commit(next)?;

        tracing::info!("Removed document {}", id);
        Ok(true)
    }

    /// Flip the completed flag. Returns whether the document exists.
    pub fn toggle_completed(&mut self, id: DocumentId) -> StoreResult<bool> {
        let applied = self.mutate(id, Document::toggle_completed)?;
        if applied {
            tracing::info!("Toggled completion of document {}", id);
        }
        Ok(applied)
    }

    /// Apply `f` to the first document with `id` and persist
    fn mutate(&mut self, id: DocumentId, f: impl FnOnce(&mut Document)) -> StoreResult<bool> {
        let Some(index) = self.documents.iter().position(|doc| doc.id == id) else {
            tracing::debug!("No document with id {}", id);
            return Ok(false);
        };

        let mut next = self.documents.clone();
        f(&mut next[index]);
        self.commit(next)?;
        Ok(true)
    }

    /// Write `next` to the slot, then adopt it in memory
    fn commit(&mut self, next: Vec<Document>) -> StoreResult<()> {
        let mut seen = HashSet::with_capacity(next.len());
        if let Some(dup) = next.iter().find(|doc| !seen.insert(doc.id)) {
            return Err(StoreError::DuplicateId(dup.id));
        }

        let raw = serde_json::to_string(&next)?;
        if let Err(e) = self.storage.set(&self.key, &raw) {
            tracing::error!("Failed to persist slot '{}': {}", self.key, e);
            return Err(e.into());
        }
        self.documents = next;
        Ok(())
    }

    /// Timestamp id, bumped past every id already handed out
    fn next_id(&self) -> StoreResult<DocumentId> {
        let highest = self
            .documents
            .iter()
            .map(|doc| doc.id)
            .chain(self.last_id)
            .max();

        let id = match highest {
            Some(DocumentId(high)) => {
                let after = high.checked_add(1).ok_or(StoreError::IdsExhausted)?;
                self.clock.now_millis().max(after)
            }
            None => self.clock.now_millis(),
        };
        Ok(DocumentId(id))
    }
}

/// Whether title or content is empty after trimming
fn is_blank(title: &str, content: &str) -> bool {
    title.trim().is_empty() || content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::testing::ManualClock;
    use crate::core::error::StorageError;
    use crate::core::storage::{FileStorage, MemoryStorage, StorageResult};
    use std::cell::Cell;

    const T1: i64 = 1_700_000_000_000;

    fn store_at<'a>(storage: &'a MemoryStorage, clock: &ManualClock) -> DocumentStore<&'a MemoryStorage> {
        DocumentStore::with_clock(storage, DEFAULT_SLOT_KEY, Box::new(clock.clone()))
    }

    /// Storage whose writes can be made to fail
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: Cell<bool>,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            if self.fail_writes.get() {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_example_scenario() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        assert!(store.load().is_empty());

        let doc = store.create("Plan", "Write design doc").unwrap().unwrap();
        assert_eq!(doc.id, DocumentId(T1));
        assert_eq!(doc.title, "Plan");
        assert_eq!(doc.content, "Write design doc");
        assert!(!doc.completed);
        assert_eq!(store.load(), vec![doc.clone()]);

        assert!(store.toggle_completed(doc.id).unwrap());
        assert!(store.load()[0].completed);

        let found: Vec<_> = search::search(&store.load(), "plan").map(|d| d.id).collect();
        assert_eq!(found, vec![doc.id]);

        assert!(store.remove(doc.id).unwrap());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let storage = MemoryStorage::new();
        let store = DocumentStore::open(&storage, DEFAULT_SLOT_KEY);
        assert!(store.documents().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(DEFAULT_SLOT_KEY, "{not json").unwrap();
        let store = DocumentStore::open(&storage, DEFAULT_SLOT_KEY);
        assert!(store.documents().is_empty());

        storage.set(DEFAULT_SLOT_KEY, r#"{"id":1}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_unreadable_slot_loads_empty() {
        let storage = MemoryStorage::new();
        let store = DocumentStore::open(&storage, "bad/key");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_duplicate_ids_in_slot_keep_first() {
        let storage = MemoryStorage::new();
        storage
            .set(
                DEFAULT_SLOT_KEY,
                r#"[{"id":1,"title":"a","content":"x","completed":false},
                    {"id":1,"title":"b","content":"y","completed":true},
                    {"id":2,"title":"c","content":"z","completed":false}]"#,
            )
            .unwrap();
        let store = DocumentStore::open(&storage, DEFAULT_SLOT_KEY);
        let titles: Vec<_> = store.documents().iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_reads_collection_written_elsewhere() {
        let storage = MemoryStorage::new();
        storage
            .set(
                DEFAULT_SLOT_KEY,
                r#"[{"id":1712345678901,"title":"Plan","content":"Write design doc","completed":true}]"#,
            )
            .unwrap();
        let store = DocumentStore::open(&storage, DEFAULT_SLOT_KEY);
        assert_eq!(store.documents().len(), 1);
        assert_eq!(store.documents()[0].id, DocumentId(1712345678901));
        assert!(store.documents()[0].completed);
    }

    #[test]
    fn test_save_load_round_trip() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);

        let mut done = Document::new(DocumentId(3), "Zeta", "last");
        done.completed = true;
        let collection = vec![
            Document::new(DocumentId(9), "Alpha", "first"),
            done,
            Document::new(DocumentId(5), "Mid", "second"),
        ];

        let _ = store.load();
        store.save(collection.clone()).unwrap();
        assert_eq!(store.load(), collection);
        assert_eq!(store.documents(), collection.as_slice());
    }

    #[test]
    fn test_save_rejects_duplicate_ids() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        store.create("a", "b").unwrap();

        let result = store.save(vec![
            Document::new(DocumentId(1), "a", "b"),
            Document::new(DocumentId(1), "c", "d"),
        ]);
        assert!(matches!(result, Err(StoreError::DuplicateId(DocumentId(1)))));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_persists_across_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut store = DocumentStore::open(FileStorage::new(dir.path()).unwrap(), DEFAULT_SLOT_KEY);
            let doc = store.create("Plan", "Write design doc").unwrap().unwrap();
            store.toggle_completed(doc.id).unwrap();
            doc.id
        };

        let store = DocumentStore::open(FileStorage::new(dir.path()).unwrap(), DEFAULT_SLOT_KEY);
        let doc = store.get(id).unwrap();
        assert_eq!(doc.title, "Plan");
        assert!(doc.completed);
    }

    #[test]
    fn test_create_validation() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        store.create("keep", "me").unwrap();
        let before = store.load();

        assert_eq!(store.create("", "x").unwrap(), None);
        assert_eq!(store.create("x", "").unwrap(), None);
        assert_eq!(store.create("", "").unwrap(), None);
        assert_eq!(store.create("   ", "x").unwrap(), None);
        assert_eq!(store.create("x", "\n\t").unwrap(), None);

        assert_eq!(store.load(), before);
        assert_eq!(store.documents(), before.as_slice());
    }

    #[test]
    fn test_rejected_create_does_not_write() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        store.create("", "x").unwrap();
        assert_eq!(storage.get(DEFAULT_SLOT_KEY).unwrap(), None);
    }

    #[test]
    fn test_create_keeps_text_as_entered() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let content = "    indented code\n    more\n";
        let doc = store.create("  Plan ", content).unwrap().unwrap();
        assert_eq!(doc.title, "  Plan ");
        assert_eq!(doc.content, content);
        assert_eq!(store.load()[0].content, content);

        assert!(store.update(doc.id, "Plan", "\tfn main() {}\n").unwrap());
        assert_eq!(store.load()[0].content, "\tfn main() {}\n");
    }

    #[test]
    fn test_create_after_max_id_is_rejected() {
        let storage = MemoryStorage::new();
        storage
            .set(
                DEFAULT_SLOT_KEY,
                &format!(r#"[{{"id":{},"title":"a","content":"b","completed":false}}]"#, i64::MAX),
            )
            .unwrap();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);

        assert!(matches!(store.create("new", "doc"), Err(StoreError::IdsExhausted)));
        let ids: Vec<_> = store.load().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![DocumentId(i64::MAX)]);
        assert_eq!(store.documents().len(), 1);
    }

    #[test]
    fn test_create_below_max_id_still_works() {
        let storage = MemoryStorage::new();
        storage
            .set(
                DEFAULT_SLOT_KEY,
                &format!(r#"[{{"id":{},"title":"a","content":"b","completed":false}}]"#, i64::MAX - 1),
            )
            .unwrap();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);

        let doc = store.create("new", "doc").unwrap().unwrap();
        assert_eq!(doc.id, DocumentId(i64::MAX));
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_create_appends_in_order() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        for (i, title) in ["c", "a", "b"].iter().enumerate() {
            clock.set(T1 + i as i64 * 10);
            store.create(title, "x").unwrap();
        }
        let titles: Vec<_> = store.load().into_iter().map(|d| d.title).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_rapid_creations_get_distinct_ids() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);

        let a = store.create("a", "x").unwrap().unwrap();
        let b = store.create("b", "x").unwrap().unwrap();
        let c = store.create("c", "x").unwrap().unwrap();
        assert_eq!(a.id, DocumentId(T1));
        assert_eq!(b.id, DocumentId(T1 + 1));
        assert_eq!(c.id, DocumentId(T1 + 2));

        // Each id still addresses exactly its own document
        store.toggle_completed(b.id).unwrap();
        let completed: Vec<_> = store.load().into_iter().map(|d| d.completed).collect();
        assert_eq!(completed, vec![false, true, false]);
    }

    #[test]
    fn test_ids_stay_unique_when_clock_goes_backwards() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let a = store.create("a", "x").unwrap().unwrap();
        clock.set(T1 - 5000);
        let b = store.create("b", "x").unwrap().unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_ids_unique_against_hydrated_collection() {
        let storage = MemoryStorage::new();
        storage
            .set(DEFAULT_SLOT_KEY, &format!(r#"[{{"id":{},"title":"a","content":"b","completed":false}}]"#, T1))
            .unwrap();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let doc = store.create("new", "doc").unwrap().unwrap();
        assert_eq!(doc.id, DocumentId(T1 + 1));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let a = store.create("a", "x").unwrap().unwrap();
        store.remove(a.id).unwrap();
        let b = store.create("b", "x").unwrap().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_replaces_text_keeps_completed() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let doc = store.create("Plan", "Write").unwrap().unwrap();
        store.toggle_completed(doc.id).unwrap();

        assert!(store.update(doc.id, "Plan v2", "Rewrite").unwrap());
        let loaded = store.load();
        assert_eq!(loaded[0].title, "Plan v2");
        assert_eq!(loaded[0].content, "Rewrite");
        assert!(loaded[0].completed);
        assert_eq!(loaded[0].id, doc.id);
    }

    #[test]
    fn test_update_idempotent() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let doc = store.create("Plan", "Write").unwrap().unwrap();
        store.create("Other", "Doc").unwrap();

        store.update(doc.id, "T", "C").unwrap();
        let once = store.load();
        store.update(doc.id, "T", "C").unwrap();
        assert_eq!(store.load(), once);
    }

    #[test]
    fn test_update_unknown_or_blank_is_noop() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let doc = store.create("Plan", "Write").unwrap().unwrap();
        let before = store.load();

        assert!(!store.update(DocumentId(42), "T", "C").unwrap());
        assert!(!store.update(doc.id, "", "C").unwrap());
        assert!(!store.update(doc.id, "T", " ").unwrap());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_upsert() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);

        let created = match store.upsert(None, "Plan", "Write").unwrap() {
            Upsert::Created(doc) => doc,
            other => panic!("expected Created, got {:?}", other),
        };
        assert_eq!(
            store.upsert(Some(created.id), "Plan", "Rewrite").unwrap(),
            Upsert::Updated(created.id)
        );
        assert_eq!(store.get(created.id).unwrap().content, "Rewrite");
        assert_eq!(store.upsert(None, "", "x").unwrap(), Upsert::Rejected);
        assert_eq!(store.upsert(Some(created.id), "x", "").unwrap(), Upsert::Rejected);
        assert_eq!(
            store.upsert(Some(DocumentId(1)), "x", "y").unwrap(),
            Upsert::NotFound(DocumentId(1))
        );
        assert_eq!(store.documents().len(), 1);
    }

    #[test]
    fn test_remove_is_final() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let gone = store.create("Gone", "x").unwrap().unwrap();
        let kept = store.create("Kept", "y").unwrap().unwrap();

        assert!(store.remove(gone.id).unwrap());
        assert!(!store.remove(gone.id).unwrap());

        // Unrelated mutations afterwards
        store.create("New", "z").unwrap();
        store.toggle_completed(kept.id).unwrap();
        store.update(kept.id, "Kept2", "y").unwrap();
        assert!(!store.toggle_completed(gone.id).unwrap());
        assert!(!store.update(gone.id, "Back", "again").unwrap());

        assert!(store.load().iter().all(|d| d.id != gone.id));
        assert!(store.search("").all(|d| d.id != gone.id));
        assert!(store.get(gone.id).is_none());
    }

    #[test]
    fn test_remove_unknown_does_not_write() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        assert!(!store.remove(DocumentId(7)).unwrap());
        assert_eq!(storage.get(DEFAULT_SLOT_KEY).unwrap(), None);
    }

    #[test]
    fn test_toggle_involution() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        let doc = store.create("Plan", "Write").unwrap().unwrap();

        assert!(store.toggle_completed(doc.id).unwrap());
        assert!(store.get(doc.id).unwrap().completed);
        assert!(store.toggle_completed(doc.id).unwrap());
        assert!(!store.load()[0].completed);
        assert!(!store.toggle_completed(DocumentId(1)).unwrap());
    }

    #[test]
    fn test_search_is_subset() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        store.create("Plan", "a").unwrap();
        store.create("Shopping", "b").unwrap();
        store.create("Planet", "c").unwrap();

        let all = store.load();
        let hits: Vec<_> = store.search("PLAN").collect();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|hit| all.contains(hit)));
        assert_eq!(store.search("").count(), 3);
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let storage = FlakyStorage::default();
        let clock = ManualClock::new(T1);
        let mut store = DocumentStore::with_clock(&storage, DEFAULT_SLOT_KEY, Box::new(clock.clone()));
        let doc = store.create("Plan", "Write").unwrap().unwrap();
        let before = store.load();

        storage.fail_writes.set(true);
        assert!(store.create("New", "doc").is_err());
        assert!(store.update(doc.id, "X", "Y").is_err());
        assert!(store.toggle_completed(doc.id).is_err());
        assert!(store.remove(doc.id).is_err());

        assert_eq!(store.documents(), before.as_slice());
        assert_eq!(store.load(), before);

        // A failed create does not burn an id
        storage.fail_writes.set(false);
        let next = store.create("New", "doc").unwrap().unwrap();
        assert_eq!(next.id, DocumentId(T1 + 1));
    }

    #[test]
    fn test_reload_picks_up_external_write() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::new(T1);
        let mut store = store_at(&storage, &clock);
        store.create("Plan", "Write").unwrap();

        storage.set(DEFAULT_SLOT_KEY, "[]").unwrap();
        assert_eq!(store.documents().len(), 1);
        store.reload();
        assert!(store.documents().is_empty());
    }
}
