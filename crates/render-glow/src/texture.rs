use crate::GlError;
use glow::{HasContext, PixelUnpackData};
use sandbox_assets::SpriteImage;
use std::sync::Arc;

/// A 2D RGBA8 texture with mipmaps, deleted on drop.
pub struct Texture {
    gl: Arc<glow::Context>,
    raw: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Upload `image`: edges clamped, trilinear minification, nearest
    /// magnification so pixel art stays sharp.
    pub fn from_image(gl: Arc<glow::Context>, image: &SpriteImage) -> Result<Self, GlError> {
        unsafe {
            let raw = gl.create_texture().map_err(GlError::create("texture"))?;
            gl.bind_texture(glow::TEXTURE_2D, Some(raw));

            let parameters = [
                (glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE),
                (glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE),
                (glow::TEXTURE_MIN_FILTER, glow::LINEAR_MIPMAP_LINEAR),
                (glow::TEXTURE_MAG_FILTER, glow::NEAREST),
            ];
            for (name, value) in parameters {
                gl.tex_parameter_i32(glow::TEXTURE_2D, name, value as i32);
            }

            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                image.width() as i32,
                image.height() as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                PixelUnpackData::Slice(Some(image.pixels())),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);

            gl.bind_texture(glow::TEXTURE_2D, None);

            let (width, height) = (image.width(), image.height());
            tracing::debug!(width, height, "texture uploaded");
            Ok(Self {
                gl,
                raw,
                width,
                height,
            })
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bind to `TEXTURE_2D` on the active texture unit.
    pub fn bind(&self) {
        unsafe { self.gl.bind_texture(glow::TEXTURE_2D, Some(self.raw)) }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { self.gl.delete_texture(self.raw) }
    }
}
