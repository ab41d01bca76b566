//! Sandbox kernel: the entity list and the frame loop state machine.
//!
//! # Invariants
//! - The entity list is append-only and iterates in insertion order.
//! - The frame loop only moves forward: Running, then Closing, then Terminated.

pub mod entity;
pub mod frame;

pub use entity::{Entity, EntityList, PLAYER_SCALE};
pub use frame::{FrameLoop, LoopPhase};
