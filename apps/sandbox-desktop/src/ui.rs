//! egui bridge: winit input in, OpenGL painting out.

use std::sync::Arc;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

pub struct DebugUi {
    egui: egui_glow::EguiGlow,
}

impl DebugUi {
    pub fn new(event_loop: &ActiveEventLoop, gl: Arc<glow::Context>) -> Self {
        let egui = egui_glow::EguiGlow::new(event_loop, gl, None, None, true);
        egui.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { egui }
    }

    /// Returns true when egui consumed the event.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui.on_window_event(window, event).consumed
    }

    pub fn run(&mut self, window: &Window, run_ui: impl FnMut(&egui::Context)) {
        self.egui.run(window, run_ui);
    }

    /// Draws the last UI frame into the bound framebuffer.
    pub fn paint(&mut self, window: &Window) {
        self.egui.paint(window);
    }

    pub fn destroy(&mut self) {
        self.egui.destroy();
    }
}
