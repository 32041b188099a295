//! Tintlab core vocabulary
//!
//! Shared types for the live token playground: the color primitive, the
//! token addressing scheme, and the preview event record that flows from
//! input controls into the preview engine.
//!
//! # Token addressing
//!
//! A token is addressed by the triple `(ElementType, ColorCategory,
//! ColorRole)`. On the wire (input controls, snapshots) the role travels as
//! a short string key such as `"primaryColor"`, qualified by separate
//! category and element parameters. This keeps the key space small and lets
//! the same role name be reused across every element/category combination.

pub mod address;
pub mod color;
pub mod event;

pub use address::{ColorCategory, ColorRole, ElementType};
pub use color::{Color, ColorParseError};
pub use event::PreviewEvent;
