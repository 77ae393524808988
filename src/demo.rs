use crate::controller::STEP;
use crate::mesh::ColoredMesh;
use crate::viewport::{ScreenSize, MIN_EXTENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    /// Single triangle with vsync on.
    Triangle,
    /// Inset quad plus a printout of the viewport formula.
    Viewport,
    /// Keyboard-driven viewport over a quad that fills NDC space.
    Advanced,
}

/// How the GL viewport reacts to a framebuffer resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Reset to `(0, 0, width, height)` of the new framebuffer.
    FollowWindow,
    /// Leave the custom viewport alone so its parameters stay observable.
    KeepCustom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStyle {
    Fill,
    /// Thick wireframe pass, then a filled pass.
    OutlineThenFill,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Triangle, Demo::Viewport, Demo::Advanced];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Triangle => "triangle",
            Demo::Viewport => "viewport",
            Demo::Advanced => "advanced",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|demo| demo.name() == name)
    }

    pub fn title(self) -> &'static str {
        match self {
            Demo::Triangle => "GL 60Hz",
            Demo::Viewport => "Viewport Demo",
            Demo::Advanced => "Advanced Viewport Demo",
        }
    }

    pub fn mesh(self) -> ColoredMesh {
        match self {
            Demo::Triangle => ColoredMesh::triangle(),
            Demo::Viewport => ColoredMesh::half_quad(),
            Demo::Advanced => ColoredMesh::boundary_quad(),
        }
    }

    pub fn clear_color(self) -> [f32; 4] {
        match self {
            Demo::Triangle | Demo::Viewport => [0.2, 0.3, 0.3, 1.0],
            Demo::Advanced => [0.1, 0.1, 0.1, 1.0],
        }
    }

    pub fn draw_style(self) -> DrawStyle {
        match self {
            Demo::Advanced => DrawStyle::OutlineThenFill,
            _ => DrawStyle::Fill,
        }
    }

    pub fn resize_policy(self) -> ResizePolicy {
        match self {
            Demo::Advanced => ResizePolicy::KeepCustom,
            _ => ResizePolicy::FollowWindow,
        }
    }

    pub fn interactive(self) -> bool {
        self == Demo::Advanced
    }

    pub fn vsync(self) -> bool {
        self == Demo::Triangle
    }

    /// Lines printed to stdout once the window is up.
    pub fn banner(self, screen: ScreenSize) -> Vec<String> {
        match self {
            Demo::Triangle => vec![
                format!("=== {} ===", self.title()),
                "Vertical sync is on; the swap blocks until the next refresh.".to_string(),
                "Press ESC to quit.".to_string(),
            ],
            Demo::Viewport => vec![
                "=== OpenGL viewport parameters ===".to_string(),
                "glViewport(x, y, width, height)".to_string(),
                "x: x of the viewport's lower-left corner (pixels)".to_string(),
                "y: y of the viewport's lower-left corner (pixels)".to_string(),
                "width: viewport width (pixels)".to_string(),
                "height: viewport height (pixels)".to_string(),
                String::new(),
                "NDC to screen:".to_string(),
                "screenX = (ndcX + 1) * (width / 2) + x".to_string(),
                "screenY = (ndcY + 1) * (height / 2) + y".to_string(),
                String::new(),
                "Example: NDC (-1, 1) with viewport (100, 100, 600, 400)".to_string(),
                "screenX = (-1 + 1) * (600 / 2) + 100 = 100".to_string(),
                "screenY = (1 + 1) * (400 / 2) + 100 = 500".to_string(),
                String::new(),
                "Press ESC to quit.".to_string(),
            ],
            Demo::Advanced => vec![
                "=== Advanced viewport demo ===".to_string(),
                "Keys:".to_string(),
                format!("W/S - move viewport up/down by {STEP}"),
                format!("A/D - move viewport left/right by {STEP}"),
                format!("Q/E - widen/narrow viewport ({MIN_EXTENT}..={})", screen.width),
                format!("Z/C - heighten/shorten viewport ({MIN_EXTENT}..={})", screen.height),
                "R   - reset viewport to full screen".to_string(),
                "T   - move viewport into negative coordinates".to_string(),
                "I   - print current viewport and NDC mapping".to_string(),
                "ESC - quit".to_string(),
                String::new(),
                "Watch what happens when the viewport origin goes negative!".to_string(),
            ],
        }
    }
}
