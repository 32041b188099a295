//! Remote theme store interface
//!
//! An opaque save-by-id / load-by-id key-value store. The user id is
//! passed through untouched; nothing here interprets authentication.

use crate::{PersistError, ThemeSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A snapshot plus the metadata the remote store wants alongside it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Existing id to overwrite, or `None` to let the store assign one
    pub id: Option<String>,
    pub name: Option<String>,
    /// Opaque; forwarded, never interpreted
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub snapshot: ThemeSnapshot,
}

/// Async key-value theme store
pub trait RemoteStore: Send + Sync + 'static {
    /// Persist a document, returning its id
    fn save(
        &self,
        doc: ThemeDocument,
    ) -> impl Future<Output = Result<String, PersistError>> + Send;

    /// Fetch a document's snapshot. Absence is `None`, not an error.
    fn load(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<ThemeSnapshot>, PersistError>> + Send;
}

/// In-process remote store used by tests and the demo binary
#[derive(Default)]
pub struct InMemoryRemote {
    documents: Mutex<HashMap<String, ThemeDocument>>,
    next_id: AtomicU64,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn document(&self, id: &str) -> Option<ThemeDocument> {
        self.documents.lock().unwrap().get(id).cloned()
    }
}

impl RemoteStore for InMemoryRemote {
    async fn save(&self, doc: ThemeDocument) -> Result<String, PersistError> {
        let id = doc
            .id
            .clone()
            .unwrap_or_else(|| format!("theme-{}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        self.documents.lock().unwrap().insert(id.clone(), doc);
        Ok(id)
    }

    async fn load(&self, id: &str) -> Result<Option<ThemeSnapshot>, PersistError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .get(id)
            .map(|doc| doc.snapshot.clone()))
    }
}
