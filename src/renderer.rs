use std::sync::Arc;

use glow::HasContext;

use crate::controller::ViewportSink;
use crate::demo::{Demo, DrawStyle};
use crate::error::GlError;
use crate::opengl::StaticRenderData;
use crate::shaders::{ShaderProgram, ShaderSource};
use crate::viewport::Viewport;

const OUTLINE_WIDTH: f32 = 3.0;

/// GPU-side resources for one demo and the per-frame draw.
pub struct Renderer {
    context: Arc<glow::Context>,
    program: ShaderProgram,
    render_data: StaticRenderData,
    clear_color: [f32; 4],
    draw_style: DrawStyle,
}

impl Renderer {
    pub fn new(
        context: Arc<glow::Context>,
        demo: Demo,
        source: &ShaderSource,
    ) -> Result<Self, GlError> {
        let program = ShaderProgram::new(&context, demo.title(), source)?;
        let render_data = match demo.mesh().upload(&context) {
            Ok(render_data) => render_data,
            Err(e) => {
                program.destroy(&context);
                return Err(e);
            }
        };

        Ok(Self {
            context,
            program,
            render_data,
            clear_color: demo.clear_color(),
            draw_style: demo.draw_style(),
        })
    }

    pub fn render(&self, viewport: &Viewport) {
        let gl = &*self.context;
        let [r, g, b, a] = self.clear_color;

        unsafe {
            gl.viewport(viewport.x, viewport.y, viewport.width, viewport.height);
            gl.clear_color(r, g, b, a);
            gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.program.bind(gl);
        self.render_data.bind(gl);

        match self.draw_style {
            DrawStyle::Fill => self.render_data.draw(gl),
            DrawStyle::OutlineThenFill => unsafe {
                gl.polygon_mode(glow::FRONT_AND_BACK, glow::LINE);
                gl.line_width(OUTLINE_WIDTH);
                self.render_data.draw(gl);

                gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL);
                self.render_data.draw(gl);
            },
        }

        unsafe { gl.bind_vertex_array(None) };
    }
}

impl ViewportSink for Renderer {
    fn set_viewport(&mut self, viewport: &Viewport) {
        unsafe {
            self.context
                .viewport(viewport.x, viewport.y, viewport.width, viewport.height)
        };
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.render_data.destroy(&self.context);
        self.program.destroy(&self.context);
        log::debug!("released GPU resources for '{}'", self.program.name);
    }
}
