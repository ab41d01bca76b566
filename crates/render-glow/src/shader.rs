use glam::{Mat4, Vec2};
use glow::HasContext;
use sandbox_render::Uniform;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader build failures, carrying the full driver log.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("failed to create {0} shader object: {1}")]
    Create(ShaderStage, String),
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("failed to create program object: {0}")]
    CreateProgram(String),
    #[error("program failed to link:\n{log}")]
    Link { log: String },
}

/// A linked program with uniform locations looked up once at link time.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    program: glow::Program,
    locations: [Option<glow::UniformLocation>; Uniform::COUNT],
}

impl ShaderProgram {
    pub fn new(
        gl: Arc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ShaderError> {
        unsafe {
            let vert = compile(&gl, ShaderStage::Vertex, vertex_source)?;
            let frag = match compile(&gl, ShaderStage::Fragment, fragment_source) {
                Ok(frag) => frag,
                Err(e) => {
                    gl.delete_shader(vert);
                    return Err(e);
                }
            };

            let program = match gl.create_program() {
                Ok(program) => program,
                Err(e) => {
                    gl.delete_shader(vert);
                    gl.delete_shader(frag);
                    return Err(ShaderError::CreateProgram(e));
                }
            };
            gl.attach_shader(program, vert);
            gl.attach_shader(program, frag);
            gl.link_program(program);

            let linked = gl.get_program_link_status(program);
            gl.detach_shader(program, vert);
            gl.detach_shader(program, frag);
            gl.delete_shader(vert);
            gl.delete_shader(frag);

            if !linked {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(ShaderError::Link { log });
            }

            let locations = Uniform::ALL.map(|uniform| {
                let location = gl.get_uniform_location(program, uniform.name());
                if location.is_none() {
                    tracing::warn!(uniform = uniform.name(), "uniform not active in program");
                }
                location
            });

            tracing::debug!("shader program linked");
            Ok(Self {
                gl,
                program,
                locations,
            })
        }
    }

    pub fn raw(&self) -> glow::Program {
        self.program
    }

    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.program)) }
    }

    fn location(&self, uniform: Uniform) -> Option<&glow::UniformLocation> {
        self.locations[uniform.index()].as_ref()
    }

    /// Program must be bound.
    pub fn set_mat4(&self, uniform: Uniform, value: &Mat4) {
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(
                self.location(uniform),
                false,
                &value.to_cols_array(),
            )
        }
    }

    /// Program must be bound.
    pub fn set_vec2(&self, uniform: Uniform, value: Vec2) {
        let location = self.location(uniform);
        unsafe { self.gl.uniform_2_f32(location, value.x, value.y) }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.program) }
    }
}

unsafe fn compile(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_enum())
            .map_err(|e| ShaderError::Create(stage, e))?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(ShaderError::Compile { stage, log });
        }
        Ok(shader)
    }
}
