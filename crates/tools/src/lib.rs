//! Developer tooling: entity inspector and the debug UI panel.
//!
//! # Invariants
//! - Widgets only touch entity 0; other entities are read-only here.
//! - Nothing here owns UI state across frames beyond what egui keeps.

pub mod inspector;
pub mod panel;

pub use inspector::{EntityInfo, ListSummary};
pub use panel::{DebugPanel, MAX_SCALE, PanelResponse};
