use crate::texture::{TextureId, TextureTable};
use crate::uniform::Uniform;
use glam::{Mat4, Vec2};
use sandbox_kernel::EntityList;

/// Draw-call seam between the quad renderer and a graphics API.
///
/// Calls arrive in a fixed order per frame: `begin_pass`, then for each
/// entity `bind_texture`, `set_uniform` (scale), `set_uniform` (position),
/// `draw_quad`, then `end_pass`.
pub trait QuadBackend {
    /// Bind the quad program and mesh and upload the projection.
    fn begin_pass(&mut self, projection: &Mat4);

    fn bind_texture(&mut self, texture: TextureId);

    fn set_uniform(&mut self, uniform: Uniform, value: Vec2);

    /// Indexed draw of the bound quad.
    fn draw_quad(&mut self);

    fn end_pass(&mut self);
}

/// Draws every entity as a textured quad.
#[derive(Debug, Clone)]
pub struct QuadRenderer {
    projection: Mat4,
    textures: TextureTable,
}

impl QuadRenderer {
    pub fn new(projection: Mat4, textures: TextureTable) -> Self {
        tracing::debug!(fallback = ?textures.fallback(), "quad renderer created");
        Self {
            projection,
            textures,
        }
    }

    /// Issue one draw per entity, in list order.
    pub fn draw<B: QuadBackend + ?Sized>(&self, backend: &mut B, entities: &EntityList) {
        backend.begin_pass(&self.projection);
        for entity in entities {
            backend.bind_texture(self.textures.resolve(entity.kind));
            backend.set_uniform(Uniform::Scale, entity.scale);
            backend.set_uniform(Uniform::Position, entity.position);
            backend.draw_quad();
        }
        backend.end_pass();
    }
}
