use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{anyhow, Context as _, Result};
use glow::HasContext;
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};
use winit::window::Window;

use crate::viewport::ScreenSize;

/// A window with a current OpenGL 3.3 core context bound to its surface.
pub struct GlWindow {
    pub gl: Arc<glow::Context>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    pub window: Window,
}

impl GlWindow {
    pub fn new(event_loop: &ActiveEventLoop, title: &str, size: ScreenSize) -> Result<Self> {
        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(size.width as u32, size.height as u32));
        let window = event_loop
            .create_window(attributes)
            .context("failed to create window")?;

        let raw_display = window
            .display_handle()
            .context("window has no display handle")?
            .as_raw();
        let raw_window = window
            .window_handle()
            .context("window has no window handle")?
            .as_raw();

        let display = unsafe { Display::new(raw_display, api_preference(raw_window)) }
            .context("failed to create GL display")?;

        let config = unsafe { display.find_configs(ConfigTemplateBuilder::new().build()) }
            .context("failed to query GL configs")?
            .next()
            .ok_or_else(|| anyhow!("no GL config matches the default template"))?;

        let physical_size = window.inner_size();
        let (width, height) = non_zero(physical_size)
            .ok_or_else(|| anyhow!("window has zero size"))?;

        let surface_attributes =
            SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window, width, height);
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .context("failed to create window surface")?;

        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window));
        let context = unsafe { display.create_context(&config, &context_attributes) }
            .context("failed to create OpenGL 3.3 core context")?
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| {
                display.get_proc_address(name) as *const _
            })
        };

        log::info!(
            "created '{}' ({}x{}), {}",
            title,
            physical_size.width,
            physical_size.height,
            unsafe { gl.get_parameter_string(glow::VERSION) }
        );

        Ok(Self {
            gl: Arc::new(gl),
            surface,
            context,
            window,
        })
    }

    /// Requests one swap per vertical refresh. Drivers may refuse; that is not fatal.
    pub fn enable_vsync(&self) {
        if let Err(e) = self
            .surface
            .set_swap_interval(&self.context, SwapInterval::Wait(NonZeroU32::MIN))
        {
            log::warn!("vsync unavailable: {e}");
        }
    }

    pub fn resize(&self, size: PhysicalSize<u32>) {
        if let Some((width, height)) = non_zero(size) {
            self.surface.resize(&self.context, width, height);
        }
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

fn non_zero(size: PhysicalSize<u32>) -> Option<(NonZeroU32, NonZeroU32)> {
    Some((NonZeroU32::new(size.width)?, NonZeroU32::new(size.height)?))
}

#[cfg(target_os = "windows")]
fn api_preference(raw_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Wgl(Some(raw_window))
}

#[cfg(target_os = "macos")]
fn api_preference(_raw_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn api_preference(_raw_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}
