//! The one mesh every sprite is drawn with: a unit quad centered on the
//! origin.

use bytemuck::{Pod, Zeroable};
use std::mem::size_of;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 3],
    /// Uploaded with the mesh but not declared in [`QUAD_ATTRIBUTES`]; the
    /// quad shader does not read it.
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

#[rustfmt::skip]
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [ 0.5,  0.5, 0.0], color: [1.0, 0.0, 0.0], uv: [1.0, 1.0] }, // top right
    QuadVertex { position: [ 0.5, -0.5, 0.0], color: [0.0, 1.0, 0.0], uv: [1.0, 0.0] }, // bottom right
    QuadVertex { position: [-0.5, -0.5, 0.0], color: [0.0, 0.0, 1.0], uv: [0.0, 0.0] }, // bottom left
    QuadVertex { position: [-0.5,  0.5, 0.0], color: [1.0, 1.0, 0.0], uv: [0.0, 1.0] }, // top left
];

#[rustfmt::skip]
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

pub const QUAD_INDEX_COUNT: i32 = QUAD_INDICES.len() as i32;

/// Float vertex attribute layout within [`QuadVertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub location: u32,
    pub components: i32,
    /// Byte offset from the start of a vertex.
    pub offset: i32,
}

impl VertexAttribute {
    pub const STRIDE: i32 = size_of::<QuadVertex>() as i32;
}

/// Attributes the quad shader consumes.
pub const QUAD_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        name: "aPos",
        location: 0,
        components: 3,
        offset: 0,
    },
    VertexAttribute {
        name: "aTexCoord",
        location: 2,
        components: 2,
        offset: (6 * size_of::<f32>()) as i32,
    },
];
