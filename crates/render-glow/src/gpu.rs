use crate::GlError;
use crate::mesh::QuadMesh;
use crate::shader::ShaderProgram;
use crate::shaders::{QUAD_FRAGMENT_SHADER, QUAD_VERTEX_SHADER};
use crate::texture::Texture;
use glam::{Mat4, Vec2};
use glow::HasContext;
use sandbox_assets::SpriteImage;
use sandbox_common::Extent;
use sandbox_render::{QuadBackend, TextureId, Uniform};
use std::sync::Arc;

/// Background color behind every frame.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// OpenGL implementation of [`QuadBackend`].
///
/// Owns the quad program, the quad mesh and every registered texture.
/// Slot 0 always holds the placeholder texture.
pub struct GlowBackend {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    mesh: QuadMesh,
    textures: Vec<Texture>,
}

impl GlowBackend {
    /// Compile the quad program, upload the mesh and the placeholder.
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, GlError> {
        let program = ShaderProgram::new(gl.clone(), QUAD_VERTEX_SHADER, QUAD_FRAGMENT_SHADER)?;
        let mesh = QuadMesh::new(gl.clone())?;
        let placeholder = Texture::from_image(gl.clone(), &SpriteImage::placeholder())?;

        // The sampler never changes: unit 0.
        program.bind();
        unsafe {
            let sampler = gl.get_uniform_location(program.raw(), "ourTexture");
            gl.uniform_1_i32(sampler.as_ref(), 0);
            gl.use_program(None);
        }

        tracing::info!("quad backend ready");
        Ok(Self {
            gl,
            program,
            mesh,
            textures: vec![placeholder],
        })
    }

    pub fn placeholder(&self) -> TextureId {
        TextureId(0)
    }

    /// Upload a texture and return its slot.
    pub fn add_texture(&mut self, image: &SpriteImage) -> Result<TextureId, GlError> {
        let texture = Texture::from_image(self.gl.clone(), image)?;
        let id = TextureId(self.textures.len() as u32);
        let (width, height) = texture.size();
        tracing::info!(?id, width, height, "texture registered");
        self.textures.push(texture);
        Ok(id)
    }

    pub fn texture(&self, id: TextureId) -> Option<&Texture> {
        self.textures.get(id.0 as usize)
    }

    pub fn set_viewport(&self, extent: Extent) {
        let (width, height) = (extent.width as i32, extent.height as i32);
        unsafe { self.gl.viewport(0, 0, width, height) }
    }

    /// Clear the color buffer of the bound framebuffer.
    pub fn clear(&self, color: [f32; 4]) {
        unsafe {
            // The UI painter leaves scissoring on between frames.
            self.gl.disable(glow::SCISSOR_TEST);
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }
}

impl QuadBackend for GlowBackend {
    fn begin_pass(&mut self, projection: &Mat4) {
        self.program.bind();
        unsafe {
            self.gl.enable(glow::BLEND);
            self.gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            self.gl.active_texture(glow::TEXTURE0);
        }
        self.program.set_mat4(Uniform::Projection, projection);
        self.mesh.bind();
    }

    fn bind_texture(&mut self, texture: TextureId) {
        match self.texture(texture).or_else(|| self.textures.first()) {
            Some(t) => t.bind(),
            None => tracing::warn!(?texture, "no texture to bind"),
        }
    }

    fn set_uniform(&mut self, uniform: Uniform, value: Vec2) {
        self.program.set_vec2(uniform, value);
    }

    fn draw_quad(&mut self) {
        self.mesh.draw();
    }

    fn end_pass(&mut self) {
        self.mesh.unbind();
    }
}
