use crate::GlError;
use glow::HasContext;
use sandbox_render::{
    QUAD_ATTRIBUTES, QUAD_INDEX_COUNT, QUAD_INDICES, QUAD_VERTICES, VertexAttribute,
};
use std::sync::Arc;

/// The unit quad uploaded once into a VAO with its vertex and index buffers.
pub struct QuadMesh {
    gl: Arc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
}

impl QuadMesh {
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, GlError> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(GlError::create("vertex array"))?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(GlError::create("vertex buffer")(e));
                }
            };
            let ebo = match gl.create_buffer() {
                Ok(ebo) => ebo,
                Err(e) => {
                    gl.delete_buffer(vbo);
                    gl.delete_vertex_array(vao);
                    return Err(GlError::create("index buffer")(e));
                }
            };

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_VERTICES),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_INDICES),
                glow::STATIC_DRAW,
            );

            for attr in QUAD_ATTRIBUTES {
                gl.vertex_attrib_pointer_f32(
                    attr.location,
                    attr.components,
                    glow::FLOAT,
                    false,
                    VertexAttribute::STRIDE,
                    attr.offset,
                );
                gl.enable_vertex_attrib_array(attr.location);
            }

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            Ok(Self { gl, vao, vbo, ebo })
        }
    }

    pub fn bind(&self) {
        unsafe { self.gl.bind_vertex_array(Some(self.vao)) }
    }

    pub fn unbind(&self) {
        unsafe { self.gl.bind_vertex_array(None) }
    }

    /// Mesh must be bound.
    pub fn draw(&self) {
        let gl = &self.gl;
        unsafe { gl.draw_elements(glow::TRIANGLES, QUAD_INDEX_COUNT, glow::UNSIGNED_INT, 0) }
    }
}

impl Drop for QuadMesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_buffer(self.ebo);
        }
    }
}
