//! GL debug output: decoding, filtering and routing driver messages to the
//! log.

use glow::HasContext;
use std::fmt;

/// Driver message IDs that are suppressed. Mostly verbose NVIDIA notices.
///
/// 131185 is "buffer will use video memory", 131154 is "pixel transfer is
/// synchronized with 3D rendering", and 0 comes from push/pop debug groups.
pub const IGNORED_MESSAGE_IDS: [u32; 9] = [
    131169, 131185, 131218, 131204, 131222, 131154, 131220, 131140, 0,
];

/// A decoded GL debug message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugMessage {
    pub id: u32,
    pub source: u32,
    pub kind: u32,
    pub severity: u32,
    pub text: String,
}

impl DebugMessage {
    /// Decode a raw callback invocation. Returns `None` for suppressed IDs.
    pub fn decode(source: u32, kind: u32, id: u32, severity: u32, text: &str) -> Option<Self> {
        if IGNORED_MESSAGE_IDS.contains(&id) {
            return None;
        }
        Some(Self {
            id,
            source,
            kind,
            severity,
            text: text.to_owned(),
        })
    }

    pub fn source_label(&self) -> &'static str {
        match self.source {
            glow::DEBUG_SOURCE_API => "API",
            glow::DEBUG_SOURCE_WINDOW_SYSTEM => "Window Manager",
            glow::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
            glow::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
            glow::DEBUG_SOURCE_APPLICATION => "Application",
            glow::DEBUG_SOURCE_OTHER => "Other",
            _ => "",
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            glow::DEBUG_TYPE_ERROR => "Error",
            glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behaviour",
            glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behaviour",
            glow::DEBUG_TYPE_PORTABILITY => "Portability",
            glow::DEBUG_TYPE_PERFORMANCE => "Performance",
            glow::DEBUG_TYPE_MARKER => "Marker",
            glow::DEBUG_TYPE_PUSH_GROUP => "Push Group",
            glow::DEBUG_TYPE_POP_GROUP => "Pop Group",
            glow::DEBUG_TYPE_OTHER => "Other",
            _ => "",
        }
    }

    pub fn severity_label(&self) -> &'static str {
        match self.severity {
            glow::DEBUG_SEVERITY_HIGH => "high",
            glow::DEBUG_SEVERITY_MEDIUM => "medium",
            glow::DEBUG_SEVERITY_LOW => "low",
            glow::DEBUG_SEVERITY_NOTIFICATION => "notification",
            _ => "",
        }
    }

    /// Emit at a level matching the severity.
    pub fn log(&self) {
        match self.severity {
            glow::DEBUG_SEVERITY_HIGH => tracing::error!(target: "gl", "{self}"),
            glow::DEBUG_SEVERITY_MEDIUM => tracing::warn!(target: "gl", "{self}"),
            glow::DEBUG_SEVERITY_LOW => tracing::info!(target: "gl", "{self}"),
            _ => tracing::debug!(target: "gl", "{self}"),
        }
    }
}

impl fmt::Display for DebugMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OpenGL Debug message ({}): {}", self.id, self.text)?;
        writeln!(f, "Source: {}", self.source_label())?;
        writeln!(f, "Type: {}", self.kind_label())?;
        write!(f, "Severity: {}", self.severity_label())
    }
}

/// Enable synchronous debug output and route every unsuppressed message to
/// the log. Needs a debug context; on other contexts the driver may send
/// nothing.
pub fn install_debug_output(gl: &mut glow::Context) {
    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.debug_message_callback(|source, kind, id, severity, text| {
            if let Some(message) = DebugMessage::decode(source, kind, id, severity, text) {
                message.log();
            }
        });
        gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        gl.debug_message_control(glow::DONT_CARE, glow::DONT_CARE, glow::DONT_CARE, &[], true);
    }
    tracing::debug!("GL debug output installed");
}

/// Log vendor, renderer and version strings of the current context.
pub fn log_driver_info(gl: &glow::Context) {
    fn norm(value: String) -> String {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            "<unknown>".to_string()
        } else {
            trimmed.to_string()
        }
    }
    unsafe {
        let vendor = norm(gl.get_parameter_string(glow::VENDOR));
        let renderer = norm(gl.get_parameter_string(glow::RENDERER));
        let version = norm(gl.get_parameter_string(glow::VERSION));
        let glsl = norm(gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION));
        tracing::info!(%vendor, %renderer, %version, %glsl, "OpenGL driver");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_ids_are_suppressed() {
        for id in IGNORED_MESSAGE_IDS {
            let msg = DebugMessage::decode(
                glow::DEBUG_SOURCE_API,
                glow::DEBUG_TYPE_OTHER,
                id,
                glow::DEBUG_SEVERITY_NOTIFICATION,
                "noise",
            );
            assert!(msg.is_none(), "id {id} should be suppressed");
        }
    }

    #[test]
    fn formats_source_type_severity_lines() {
        let msg = DebugMessage::decode(
            glow::DEBUG_SOURCE_SHADER_COMPILER,
            glow::DEBUG_TYPE_ERROR,
            1282,
            glow::DEBUG_SEVERITY_HIGH,
            "bad enum",
        )
        .unwrap();

        assert_eq!(
            msg.to_string(),
            "OpenGL Debug message (1282): bad enum\n\
             Source: Shader Compiler\n\
             Type: Error\n\
             Severity: high"
        );
    }

    #[test]
    fn unknown_enums_have_empty_labels() {
        let msg = DebugMessage::decode(1, 2, 7, 3, "odd").unwrap();
        assert_eq!(msg.source_label(), "");
        assert_eq!(msg.kind_label(), "");
        assert_eq!(msg.severity_label(), "");
        assert!(msg.to_string().contains("Source: \n"));
    }

    #[test]
    fn every_documented_label_decodes() {
        let label = |kind| {
            let source = glow::DEBUG_SOURCE_OTHER;
            let severity = glow::DEBUG_SEVERITY_LOW;
            DebugMessage::decode(source, kind, 1, severity, "")
                .unwrap()
                .kind_label()
        };
        let deprecated = glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR;
        let undefined = glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR;
        assert_eq!(label(deprecated), "Deprecated Behaviour");
        assert_eq!(label(undefined), "Undefined Behaviour");
        assert_eq!(label(glow::DEBUG_TYPE_PORTABILITY), "Portability");
        assert_eq!(label(glow::DEBUG_TYPE_PERFORMANCE), "Performance");
        assert_eq!(label(glow::DEBUG_TYPE_MARKER), "Marker");
        assert_eq!(label(glow::DEBUG_TYPE_PUSH_GROUP), "Push Group");
        assert_eq!(label(glow::DEBUG_TYPE_POP_GROUP), "Pop Group");
    }
}
