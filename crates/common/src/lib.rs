//! Types shared by every sandbox crate.

pub mod types;

pub use types::{EntityKind, Extent};
