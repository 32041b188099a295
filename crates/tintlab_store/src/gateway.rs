//! The persistence gateway
//!
//! Local write first, remote write spawned and forgotten. The interactive
//! path gets its id back immediately and never awaits.

use crate::{LocalCache, RemoteStore, ThemeDocument, ThemeSnapshot};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Non-blocking user notification ("theme saved", "save failed")
pub type Notifier = Arc<dyn Fn(&str) + Send + Sync>;

/// Id used for local-only saves until a remote id exists
const LOCAL_ID: &str = "local";

pub struct PersistenceGateway<R: RemoteStore> {
    cache: LocalCache,
    remote: Arc<R>,
    runtime: Option<Handle>,
    notifier: Option<Notifier>,
}

impl<R: RemoteStore> PersistenceGateway<R> {
    /// Build a gateway. Remote writes are spawned on the current tokio
    /// runtime if one exists; without a runtime the gateway degrades to
    /// local-only persistence.
    pub fn new(cache: LocalCache, remote: Arc<R>) -> Self {
        Self {
            cache,
            remote,
            runtime: Handle::try_current().ok(),
            notifier: None,
        }
    }

    pub fn with_runtime(cache: LocalCache, remote: Arc<R>, runtime: Handle) -> Self {
        Self {
            cache,
            remote,
            runtime: Some(runtime),
            notifier: None,
        }
    }

    /// Register an optional non-blocking notification callback
    pub fn set_notifier(&mut self, notifier: Notifier) {
        self.notifier = Some(notifier);
    }

    /// Save a snapshot.
    ///
    /// The local cache write happens on this thread and its failure is
    /// logged, not surfaced; the remote write is fire-and-forget. Returns
    /// the id the snapshot was cached under.
    pub fn save_snapshot(
        &self,
        snapshot: ThemeSnapshot,
        name: Option<String>,
        user_id: Option<String>,
    ) -> String {
        let id = LOCAL_ID.to_string();

        if let Err(err) = self.cache.save(&id, &snapshot) {
            // In-memory state is still authoritative; the UI carries on
            warn!(%err, "local theme cache write failed");
        } else {
            debug!(%id, "theme snapshot cached locally");
        }

        match &self.runtime {
            Some(handle) => {
                let remote = Arc::clone(&self.remote);
                let notifier = self.notifier.clone();
                let doc = ThemeDocument {
                    id: None,
                    name,
                    user_id,
                    snapshot,
                };
                handle.spawn(async move {
                    match remote.save(doc).await {
                        Ok(remote_id) => {
                            debug!(%remote_id, "theme snapshot saved remotely");
                            if let Some(notify) = notifier {
                                notify("theme saved");
                            }
                        }
                        Err(err) => {
                            warn!(%err, "remote theme save failed");
                            if let Some(notify) = notifier {
                                notify("theme save failed, kept locally");
                            }
                        }
                    }
                });
            }
            None => {
                debug!("no async runtime, skipping remote theme save");
            }
        }

        id
    }

    /// Load a snapshot: local cache first for immediate paint, remote as
    /// fallback. Absence of any saved snapshot is `None`, never an error.
    pub async fn load_snapshot(&self, id: Option<&str>) -> Option<ThemeSnapshot> {
        let id = id.unwrap_or(LOCAL_ID);

        match self.cache.load(id) {
            Ok(Some(snapshot)) => return Some(snapshot),
            Ok(None) => {}
            Err(err) => warn!(%err, "local theme cache read failed"),
        }

        match self.remote.load(id).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(%err, "remote theme load failed");
                None
            }
        }
    }

    pub fn cache(&self) -> &LocalCache {
        &self.cache
    }
}
