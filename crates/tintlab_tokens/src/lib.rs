//! Tintlab token store
//!
//! Holds the latest **committed** value for every
//! `(ElementType, ColorCategory, ColorRole)` triple. Previewed values never
//! live here; they stay inside the preview engine until its debounce
//! settles and the commit lands.
//!
//! # Defaults
//!
//! Every scope has a fully populated default palette. Reads never return
//! partial data: a scope that was never written resolves through
//! [`default_palette`], which returns a fresh value per call so no two
//! scopes can alias the same palette by reference.
//!
//! # Change notification
//!
//! Dependents subscribe directly on the store ([`TokenStore::subscribe`])
//! instead of listening for a global event name. Subscribers are keyed by
//! slotmap ids and can be dropped independently.

mod palette;
mod store;

pub use palette::{default_palette, resolve_color, try_resolve_color, Palette};
pub use store::{SubscriberId, TokenChange, TokenStore};
