//! Quad renderer core, independent of any graphics API.
//!
//! # Invariants
//! - The renderer reads the entity list; it never mutates it.
//! - The projection is set once per frame; scale and position once per draw.
//! - Every entity kind resolves to a texture. Unmapped kinds get the
//!   placeholder, never whatever was bound last.
//!
//! Backends implement [`QuadBackend`]; the OpenGL one lives in
//! `sandbox-render-glow`.

pub mod mesh;
pub mod projection;
mod renderer;
pub mod texture;
pub mod uniform;

pub use mesh::{
    QUAD_ATTRIBUTES, QUAD_INDEX_COUNT, QUAD_INDICES, QUAD_VERTICES, QuadVertex, VertexAttribute,
};
pub use projection::{orthographic, quad_to_clip};
pub use renderer::{QuadBackend, QuadRenderer};
pub use texture::{TextureId, TextureTable};
pub use uniform::Uniform;
