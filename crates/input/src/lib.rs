//! Input: raw keyboard state mapped to sandbox actions.
//!
//! # Invariants
//! - Key state is level-triggered. A held key reports its action on every
//!   query, not only on the frame it went down.
//! - The frame loop consumes actions, never raw key events.

pub mod action;
pub mod state;

pub use action::{Action, KeyBindings};
pub use state::InputState;
