//! In-memory registry of loaded corpora. The shell owns persistence and
//! navigation; this store only serves projections and their counts.

use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::BoardError;
use crate::models::{CanonicalBan, CorpusMeta, RawRecord};
use crate::project::Projector;
use crate::summary::risk_distribution;

struct LoadedCorpus {
    meta: CorpusMeta,
    bans: Vec<CanonicalBan>,
}

#[derive(Default)]
pub struct CorpusStore {
    inner: Mutex<Vec<LoadedCorpus>>,
}

impl CorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects a raw corpus and registers it under a fresh id, returning
    /// the derived metadata.
    pub fn insert(&self, name: &str, records: &[RawRecord], projector: &Projector) -> CorpusMeta {
        let bans: Vec<CanonicalBan> = records.iter().map(|record| projector.project(record)).collect();
        let distribution = risk_distribution(&bans);
        let meta = CorpusMeta {
            id: Uuid::new_v4(),
            name: name.to_string(),
            loaded_at: Utc::now(),
            total_records: bans.len(),
            high_risk_records: distribution.high,
        };
        debug!(id = %meta.id, total = meta.total_records, "registered corpus");
        self.inner.lock().push(LoadedCorpus {
            meta: meta.clone(),
            bans,
        });
        meta
    }

    /// Corpus metadata ordered newest first.
    pub fn all(&self) -> Vec<CorpusMeta> {
        let mut metas: Vec<CorpusMeta> = self
            .inner
            .lock()
            .iter()
            .map(|corpus| corpus.meta.clone())
            .collect();
        metas.sort_by(|a, b| b.loaded_at.cmp(&a.loaded_at));
        metas
    }

    pub fn find(&self, id: &Uuid) -> Option<CorpusMeta> {
        self.inner
            .lock()
            .iter()
            .find(|corpus| &corpus.meta.id == id)
            .map(|corpus| corpus.meta.clone())
    }

    pub fn bans(&self, id: &Uuid) -> Result<Vec<CanonicalBan>, BoardError> {
        self.inner
            .lock()
            .iter()
            .find(|corpus| &corpus.meta.id == id)
            .map(|corpus| corpus.bans.clone())
            .ok_or(BoardError::UnknownCorpus(*id))
    }

    pub fn remove(&self, id: &Uuid) -> Result<(), BoardError> {
        let mut guard = self.inner.lock();
        let before = guard.len();
        guard.retain(|corpus| &corpus.meta.id != id);
        if guard.len() == before {
            return Err(BoardError::UnknownCorpus(*id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<RawRecord> {
        vec![
            json!({ "ban_number": "B-1", "risk_level": "high" })
                .as_object()
                .unwrap()
                .clone(),
            json!({ "ban_number": "B-2" }).as_object().unwrap().clone(),
        ]
    }

    #[test]
    fn insert_derives_counts() {
        let store = CorpusStore::new();
        let meta = store.insert("august", &records(), &Projector::new());
        assert_eq!(meta.total_records, 2);
        assert_eq!(meta.high_risk_records, 1);
        assert_eq!(store.find(&meta.id).unwrap().name, "august");
        assert_eq!(store.bans(&meta.id).unwrap().len(), 2);
    }

    #[test]
    fn remove_unknown_corpus_is_a_typed_error() {
        let store = CorpusStore::new();
        let missing = Uuid::new_v4();
        assert!(matches!(
            store.remove(&missing),
            Err(BoardError::UnknownCorpus(id)) if id == missing
        ));
        let meta = store.insert("august", &records(), &Projector::new());
        assert!(store.remove(&meta.id).is_ok());
        assert!(store.find(&meta.id).is_none());
    }
}
