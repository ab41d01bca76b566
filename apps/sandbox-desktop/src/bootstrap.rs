//! Window and OpenGL context creation.

use crate::config::{SandboxConfig, WindowPlacement};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use sandbox_common::Extent;
use std::ffi::CStr;
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("no monitor found")]
    NoMonitor,
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("window handle unavailable: {0}")]
    Handle(#[from] raw_window_handle::HandleError),
    #[error("OpenGL: {0}")]
    Gl(#[from] glutin::error::Error),
    #[error("no double-buffered OpenGL config available")]
    NoConfig,
    #[error("window has a zero-sized framebuffer")]
    ZeroSize,
    #[error("failed to load OpenGL function pointers")]
    LoadFunctions,
}

/// Everything that lives as long as the window.
///
/// Fields drop in declaration order: the GL function table first, then the
/// surface and context, and the window last.
pub struct Platform {
    pub gl: Arc<glow::Context>,
    pub surface: Surface<WindowSurface>,
    pub context: PossiblyCurrentContext,
    pub window: Window,
    pub extent: Extent,
}

impl Platform {
    pub fn swap_buffers(&self) {
        if let Err(e) = self.surface.swap_buffers(&self.context) {
            tracing::error!("swap_buffers failed: {e}");
        }
    }
}

pub fn bootstrap(
    event_loop: &ActiveEventLoop,
    config: &SandboxConfig,
) -> Result<Platform, BootstrapError> {
    let monitor = event_loop
        .primary_monitor()
        .or_else(|| event_loop.available_monitors().next())
        .ok_or(BootstrapError::NoMonitor)?;
    let placement = WindowPlacement::compute(config.window, monitor.size(), monitor.position());
    tracing::info!(
        monitor = monitor.name().as_deref().unwrap_or("unnamed"),
        width = placement.size.width,
        height = placement.size.height,
        maximized = placement.maximized,
        "creating window"
    );

    let attributes = Window::default_attributes()
        .with_title(config.title.as_str())
        .with_decorations(true)
        .with_inner_size(placement.size)
        .with_position(placement.position)
        .with_maximized(placement.maximized);
    let window = event_loop.create_window(attributes)?;

    let raw_window = window.window_handle()?.as_raw();
    let raw_display = window.display_handle()?.as_raw();
    let display = unsafe { Display::new(raw_display, api_preference(raw_window))? };

    let template = ConfigTemplateBuilder::new()
        .with_alpha_size(8)
        .with_single_buffering(false)
        .compatible_with_native_window(raw_window)
        .build();
    let gl_config = pick_config(unsafe { display.find_configs(template)? })?;
    tracing::debug!(
        srgb = gl_config.srgb_capable(),
        samples = gl_config.num_samples(),
        "picked GL config"
    );

    let size = window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
    else {
        return Err(BootstrapError::ZeroSize);
    };
    let surface_attributes =
        SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window, width, height);
    let surface = unsafe { display.create_window_surface(&gl_config, &surface_attributes)? };

    let context_attributes = ContextAttributesBuilder::new()
        .with_debug(true)
        .with_profile(GlProfile::Core)
        .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 6))))
        .build(Some(raw_window));
    let context = unsafe { display.create_context(&gl_config, &context_attributes)? }
        .make_current(&surface)?;

    if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        tracing::warn!("failed to enable vsync: {e}");
    }

    if display.get_proc_address(c"glGetString").is_null() {
        return Err(BootstrapError::LoadFunctions);
    }
    let loader = |symbol: &CStr| display.get_proc_address(symbol);
    let mut gl = unsafe { glow::Context::from_loader_function_cstr(loader) };
    sandbox_render_glow::log_driver_info(&gl);
    sandbox_render_glow::install_debug_output(&mut gl);

    Ok(Platform {
        gl: Arc::new(gl),
        surface,
        context,
        window,
        extent: Extent::new(size.width, size.height),
    })
}

fn api_preference(raw_window: RawWindowHandle) -> DisplayApiPreference {
    #[cfg(target_os = "windows")]
    {
        DisplayApiPreference::Wgl(Some(raw_window))
    }
    #[cfg(target_os = "macos")]
    {
        let _ = raw_window;
        DisplayApiPreference::Cgl
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let _ = raw_window;
        DisplayApiPreference::Egl
    }
}

/// First sRGB-capable config, else the first one offered.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Result<Config, BootstrapError> {
    configs
        .reduce(|best, candidate| {
            if candidate.srgb_capable() && !best.srgb_capable() {
                candidate
            } else {
                best
            }
        })
        .ok_or(BootstrapError::NoConfig)
}
