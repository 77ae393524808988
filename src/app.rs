use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::config::Config;
use crate::context::GlWindow;
use crate::controller::{ControlOutcome, ViewportController, ViewportSink};
use crate::demo::ResizePolicy;
use crate::renderer::Renderer;
use crate::shaders::ShaderSource;
use crate::viewport::Viewport;

/// Runs `config.demo` until its window closes.
pub fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

struct App {
    config: Config,
    controller: ViewportController,

    // Declared before `gl_window` so GPU objects are freed while the context is alive.
    renderer: Option<Renderer>,
    gl_window: Option<GlWindow>,

    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            controller: ViewportController::new(config.initial_viewport, config.screen),
            config,
            renderer: None,
            gl_window: None,
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let demo = self.config.demo;
        let gl_window = GlWindow::new(event_loop, demo.title(), self.config.screen)?;

        let source = match &self.config.shader_paths {
            Some((vertex, fragment)) => ShaderSource::from_files(vertex, fragment)?,
            None => ShaderSource::builtin(),
        };
        let mut renderer = Renderer::new(gl_window.gl.clone(), demo, &source)?;

        if demo.vsync() {
            gl_window.enable_vsync();
        }

        for line in demo.banner(self.config.screen) {
            println!("{line}");
        }

        renderer.set_viewport(&self.controller.viewport());
        log::info!("initial viewport {}", self.controller.viewport());

        gl_window.window.request_redraw();

        self.renderer = Some(renderer);
        self.gl_window = Some(gl_window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.fatal = Some(error);
        event_loop.exit();
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        if code == KeyCode::Escape {
            log::info!("escape pressed; closing");
            event_loop.exit();
            return;
        }

        if !self.config.demo.interactive() {
            return;
        }
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match self.controller.handle_key(code, renderer) {
            Some(ControlOutcome::Changed(viewport)) => {
                println!("viewport updated: {viewport}");
            }
            Some(ControlOutcome::Info { viewport, samples }) => {
                println!();
                println!("current viewport: {viewport}");
                println!("NDC -> screen:");
                for sample in samples {
                    println!("  {sample}");
                }
            }
            None => {}
        }
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        let Some(gl_window) = self.gl_window.as_ref() else {
            return;
        };
        gl_window.resize(size);

        match self.config.demo.resize_policy() {
            ResizePolicy::FollowWindow => {
                let viewport = Viewport::new(0, 0, size.width as i32, size.height as i32);
                self.controller.set(viewport);
                log::debug!("framebuffer resized; viewport now {viewport}");
            }
            ResizePolicy::KeepCustom => {
                log::debug!(
                    "framebuffer resized to {}x{}; keeping {}",
                    size.width,
                    size.height,
                    self.controller.viewport()
                );
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let (Some(renderer), Some(gl_window)) = (self.renderer.as_ref(), self.gl_window.as_ref())
        else {
            return Ok(());
        };

        renderer.render(&self.controller.viewport());
        gl_window.swap_buffers()?;
        gl_window.window.request_redraw();
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl_window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested; stopping");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => self.on_key(event_loop, &event),
            WindowEvent::Resized(size) => self.on_resize(size),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }
            _ => (),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.renderer = None;
        self.gl_window = None;
    }
}
