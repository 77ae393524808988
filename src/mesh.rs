use crate::error::GlError;
use crate::opengl::{Layout, StaticRenderData};

/// Floats per vertex: position xyz followed by color rgb.
pub const FLOATS_PER_VERTEX: usize = 6;

/// Hard-coded colored geometry, interleaved as `[x, y, z, r, g, b]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredMesh {
    pub name: &'static str,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl ColoredMesh {
    /// RGB triangle centered on the origin.
    pub fn triangle() -> Self {
        #[rustfmt::skip]
        let vertices = vec![
            // x     y    z     r    g    b
            -0.5, -0.5, 0.0,  1.0, 0.0, 0.0,
             0.5, -0.5, 0.0,  0.0, 1.0, 0.0,
             0.0,  0.5, 0.0,  0.0, 0.0, 1.0,
        ];

        Self {
            name: "Triangle",
            vertices,
            indices: Vec::new(),
        }
    }

    /// Quad whose corners sit halfway to the NDC boundary.
    pub fn half_quad() -> Self {
        Self::quad("Half Quad", 0.5)
    }

    /// Quad whose corners sit exactly on the NDC boundary, so it outlines the viewport.
    pub fn boundary_quad() -> Self {
        Self::quad("Boundary Quad", 1.0)
    }

    fn quad(name: &'static str, extent: f32) -> Self {
        let e = extent;

        #[rustfmt::skip]
        let vertices = vec![
            -e,  e, 0.0,  1.0, 0.0, 0.0, // top left, red
             e,  e, 0.0,  0.0, 1.0, 0.0, // top right, green
             e, -e, 0.0,  0.0, 0.0, 1.0, // bottom right, blue
            -e, -e, 0.0,  1.0, 1.0, 0.0, // bottom left, yellow
        ];

        Self {
            name,
            vertices,
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    pub fn stride() -> i32 {
        (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as i32
    }

    pub fn layouts() -> Vec<Layout> {
        vec![
            Layout::float(0, 3, 0),
            Layout::float(1, 3, 3 * std::mem::size_of::<f32>()),
        ]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    pub fn upload(&self, context: &glow::Context) -> Result<StaticRenderData, GlError> {
        let render_data = StaticRenderData::new(
            context,
            &self.vertices,
            &self.indices,
            Self::stride(),
            &Self::layouts(),
        )?;

        log::debug!(
            "uploaded mesh '{}' ({} vertices, {} indices)",
            self.name,
            self.vertex_count(),
            self.indices.len()
        );

        Ok(render_data)
    }
}
