//! Style pack system
//!
//! Policy schema types and pack loading.

pub mod loader;
pub mod schema;

pub use loader::{embedded_default_pack, load_style_pack, resolve_style_pack};
pub use schema::{ReadingBand, StylePack};
