use glam::{Mat4, Vec2, Vec4};
use sandbox_common::Extent;

/// Pixel-space orthographic projection: (0, 0) is the top-left corner of
/// the window, (width, height) the bottom-right. Depth range is -1..1.
pub fn orthographic(extent: Extent) -> Mat4 {
    let size = extent.size();
    Mat4::orthographic_rh_gl(0.0, size.x, size.y, 0.0, -1.0, 1.0)
}

/// Where the quad shader places a local quad vertex, in clip space.
///
/// Mirrors the vertex stage of the quad shader:
/// `projection * vec4(local.xy * scale + position, 0, 1)`.
pub fn quad_to_clip(projection: Mat4, scale: Vec2, position: Vec2, local: Vec2) -> Vec4 {
    let world = local * scale + position;
    projection * Vec4::new(world.x, world.y, 0.0, 1.0)
}
