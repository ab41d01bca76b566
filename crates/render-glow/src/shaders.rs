/// GLSL vertex stage of the quad program. Places a unit quad at a
/// pixel-space scale and center, then applies the projection.
pub const QUAD_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 2) in vec2 aTexCoord;

uniform mat4 projection;
uniform vec2 scale;
uniform vec2 position;

out vec2 TexCoord;

void main()
{
    gl_Position = projection * vec4(aPos.xy * scale + position, 0.0, 1.0);
    TexCoord = aTexCoord;
}
"#;

/// GLSL fragment stage of the quad program. Samples texture unit 0.
pub const QUAD_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

in vec2 TexCoord;

uniform sampler2D ourTexture;

void main()
{
    FragColor = texture(ourTexture, TexCoord);
}
"#;
