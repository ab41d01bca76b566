use crate::bootstrap::{Platform, bootstrap};
use crate::config::SandboxConfig;
use crate::ui::DebugUi;
use anyhow::Result;
use sandbox_assets::SpriteImage;
use sandbox_common::EntityKind;
use sandbox_input::InputState;
use sandbox_kernel::{EntityList, FrameLoop, LoopPhase};
use sandbox_render::{QuadRenderer, TextureId, TextureTable, orthographic};
use sandbox_render_glow::{CLEAR_COLOR, GlowBackend};
use sandbox_tools::DebugPanel;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

/// Everything created once the window exists. Declared in teardown order:
/// UI, then GL objects, then the platform itself.
struct Scene {
    ui: DebugUi,
    backend: GlowBackend,
    renderer: QuadRenderer,
    panel: DebugPanel,
    entities: EntityList,
    platform: Platform,
}

impl Scene {
    fn start(event_loop: &ActiveEventLoop, config: &SandboxConfig) -> Result<Self> {
        let _span = tracing::info_span!("startup").entered();
        let platform = bootstrap(event_loop, config)?;
        let extent = platform.extent;

        let mut backend = GlowBackend::new(platform.gl.clone())?;
        backend.set_viewport(extent);
        let textures = load_textures(&mut backend, config);

        let ui = DebugUi::new(event_loop, platform.gl.clone());
        let entities = EntityList::with_player(extent);
        tracing::info!(
            width = extent.width,
            height = extent.height,
            entities = entities.len(),
            "scene ready"
        );

        Ok(Self {
            ui,
            backend,
            renderer: QuadRenderer::new(orthographic(extent), textures),
            panel: DebugPanel::new(extent),
            entities,
            platform,
        })
    }

    fn draw(&mut self, frame: u64) {
        let _span = tracing::info_span!("frame", frame).entered();
        self.backend.clear(CLEAR_COLOR);

        let panel = &self.panel;
        let entities = &mut self.entities;
        self.ui.run(&self.platform.window, |ctx| {
            panel.show(ctx, entities);
        });

        self.renderer.draw(&mut self.backend, &self.entities);
        self.ui.paint(&self.platform.window);

        self.platform.swap_buffers();
        self.platform.window.request_redraw();
    }
}

fn load_textures(backend: &mut GlowBackend, config: &SandboxConfig) -> TextureTable {
    let sprite = SpriteImage::load(&config.sprite_path, config.flip)
        .map_err(anyhow::Error::from)
        .and_then(|image| Ok(backend.add_texture(&image)?));
    texture_table(backend.placeholder(), sprite)
}

/// Maps the player to its sprite. A sprite that failed to load or upload
/// leaves the player on the placeholder.
fn texture_table(placeholder: TextureId, sprite: Result<TextureId>) -> TextureTable {
    let mut table = TextureTable::new(placeholder);
    match sprite {
        Ok(id) => table.insert(EntityKind::Player, id),
        Err(e) => tracing::warn!("failed to load texture: {e:#}"),
    }
    table
}

pub struct SandboxApp {
    config: SandboxConfig,
    input: InputState,
    frame_loop: FrameLoop,
    scene: Option<Scene>,
    startup_error: Option<anyhow::Error>,
}

impl SandboxApp {
    pub fn new(config: SandboxConfig) -> Self {
        Self {
            config,
            input: InputState::new(),
            frame_loop: FrameLoop::default(),
            scene: None,
            startup_error: None,
        }
    }

    /// Consumes the app once the event loop has returned.
    pub fn finish(self) -> Result<()> {
        match self.startup_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn teardown(&mut self) {
        if let Some(mut scene) = self.scene.take() {
            scene.ui.destroy();
            drop(scene);
        }
        self.frame_loop.terminate();
        let frames = self.frame_loop.frames();
        tracing::info!(frames, phase = ?self.frame_loop.phase(), "sandbox closed");
    }
}

impl ApplicationHandler for SandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.scene.is_some() || self.startup_error.is_some() {
            return;
        }
        match Scene::start(event_loop, &self.config) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.startup_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(scene) = &mut self.scene else {
            return;
        };
        if scene.ui.on_window_event(&scene.platform.window, &event) {
            tracing::trace!("event consumed by ui");
        }

        match event {
            WindowEvent::CloseRequested => self.input.request_close(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => self.input.set_key(key, state == ElementState::Pressed),
            WindowEvent::Resized(size) => {
                tracing::debug!(
                    width = size.width,
                    height = size.height,
                    "resize ignored; projection stays fixed"
                );
            }
            WindowEvent::RedrawRequested => {
                if self.frame_loop.begin_frame() {
                    scene.draw(self.frame_loop.frames());
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.frame_loop.poll(&self.input) != LoopPhase::Running {
            event_loop.exit();
            return;
        }
        if let Some(scene) = &self.scene {
            scene.platform.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}
