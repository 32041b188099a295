//! Tintlab playground session
//!
//! Application-level wiring for the live token playground: one
//! [`PlaygroundSession`] owns the preview engine, the committed token
//! store, and the persistence gateway, and routes settled commits from the
//! first into the latter two.
//!
//! Control flow per the architecture:
//!
//! ```text
//! input control -> session.propose(key, value)
//!   -> [frame-coalesced projection onto the style surface]
//!   -> [debounced commit -> TokenStore.update -> gateway.save_snapshot]
//! ```

mod config;
mod session;

pub use config::PlaygroundConfig;
pub use session::PlaygroundSession;
