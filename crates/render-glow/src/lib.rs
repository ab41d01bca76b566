//! OpenGL backend for the quad renderer, built on glow.
//!
//! Every GL object is owned by a wrapper that deletes it on drop. Owners
//! hold an `Arc<glow::Context>`, so they must be dropped while that context
//! is still current.
//!
//! # Safety
//! Constructors and draw methods issue raw GL calls and assume the context
//! they were given is current on the calling thread.

pub mod debug;
mod gpu;
mod mesh;
mod shader;
pub mod shaders;
mod texture;

pub use debug::{DebugMessage, IGNORED_MESSAGE_IDS, install_debug_output, log_driver_info};
pub use gpu::{CLEAR_COLOR, GlowBackend};
pub use mesh::QuadMesh;
pub use shader::{ShaderError, ShaderProgram, ShaderStage};
pub use texture::Texture;

/// Errors from creating GL objects.
#[derive(Debug, thiserror::Error)]
pub enum GlError {
    #[error("failed to create {what}: {reason}")]
    Create { what: &'static str, reason: String },
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

impl GlError {
    pub(crate) fn create(what: &'static str) -> impl FnOnce(String) -> Self {
        move |reason| Self::Create { what, reason }
    }
}
