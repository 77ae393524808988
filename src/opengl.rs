use glow::HasContext;

use crate::error::GlError;

/// One vertex attribute inside an interleaved buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub index: u32,
    pub size: i32,
    pub gl_type: u32,
    pub normalized: bool,
    pub offset: usize,
}

impl Layout {
    pub fn new(index: u32, size: i32, gl_type: u32, normalized: bool, offset: usize) -> Self {
        Self {
            index,
            size,
            gl_type,
            normalized,
            offset,
        }
    }

    pub fn float(index: u32, size: i32, offset: usize) -> Self {
        Self::new(index, size, glow::FLOAT, false, offset)
    }
}

/// VAO/VBO/EBO for geometry uploaded once with `STATIC_DRAW`.
#[derive(Debug)]
pub struct StaticRenderData {
    pub vao: glow::VertexArray,
    pub vbo: glow::Buffer,
    pub ebo: Option<glow::Buffer>,

    pub vertex_count: i32,
    pub index_count: i32,
}

impl StaticRenderData {
    /// Uploads `vertices` (and `indices`, if any) and records the attribute layout in a new VAO.
    pub fn new(
        context: &glow::Context,
        vertices: &[f32],
        indices: &[u32],
        stride: i32,
        layouts: &[Layout],
    ) -> Result<Self, GlError> {
        unsafe {
            let vao = context
                .create_vertex_array()
                .map_err(|reason| GlError::Allocation { what: "VAO", reason })?;
            context.bind_vertex_array(Some(vao));

            let vbo = context
                .create_buffer()
                .map_err(|reason| GlError::Allocation { what: "VBO", reason })?;
            context.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            context.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            let ebo = if indices.is_empty() {
                None
            } else {
                let ebo = context
                    .create_buffer()
                    .map_err(|reason| GlError::Allocation { what: "EBO", reason })?;
                context.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                context.buffer_data_u8_slice(
                    glow::ELEMENT_ARRAY_BUFFER,
                    bytemuck::cast_slice(indices),
                    glow::STATIC_DRAW,
                );
                Some(ebo)
            };

            for layout in layouts {
                context.vertex_attrib_pointer_f32(
                    layout.index,
                    layout.size,
                    layout.gl_type,
                    layout.normalized,
                    stride,
                    layout.offset as i32,
                );
                context.enable_vertex_attrib_array(layout.index);
            }

            // The EBO binding is VAO state; only the ARRAY_BUFFER is safe to unbind first.
            context.bind_buffer(glow::ARRAY_BUFFER, None);
            context.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                ebo,

                vertex_count: vertex_count(vertices.len(), stride),
                index_count: indices.len() as i32,
            })
        }
    }

    pub fn bind(&self, context: &glow::Context) {
        unsafe { context.bind_vertex_array(Some(self.vao)) };
    }

    pub fn draw(&self, context: &glow::Context) {
        unsafe {
            if self.ebo.is_some() {
                context.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            } else {
                context.draw_arrays(glow::TRIANGLES, 0, self.vertex_count);
            }
        }
    }

    pub fn destroy(&self, context: &glow::Context) {
        unsafe {
            context.delete_vertex_array(self.vao);
            context.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                context.delete_buffer(ebo);
            }
        }
    }
}

fn vertex_count(float_count: usize, stride: i32) -> i32 {
    let floats_per_vertex = stride / std::mem::size_of::<f32>() as i32;
    float_count as i32 / floats_per_vertex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_from_stride() {
        assert_eq!(vertex_count(18, 24), 3);
        assert_eq!(vertex_count(24, 24), 4);
    }

    #[test]
    fn float_layout_is_not_normalized() {
        let layout = Layout::float(1, 3, 12);
        assert_eq!(layout, Layout::new(1, 3, glow::FLOAT, false, 12));
    }
}
