//! Tintlab persistence gateway
//!
//! Durably saves and restores token snapshots across sessions, best-effort
//! only. The local file cache is written synchronously on the caller's
//! thread; the remote write is spawned and forgotten. Nothing on this path
//! may block or fail the interactive UI: persistence errors are logged,
//! optionally surfaced through a non-blocking notification, and never
//! revert local state.

mod error;
mod gateway;
mod local;
mod remote;
mod snapshot;

pub use error::PersistError;
pub use gateway::{Notifier, PersistenceGateway};
pub use local::LocalCache;
pub use remote::{InMemoryRemote, RemoteStore, ThemeDocument};
pub use snapshot::ThemeSnapshot;
