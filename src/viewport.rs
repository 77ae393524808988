use cgmath::Point2;

/// Smallest width/height the viewport may shrink to, in pixels.
pub const MIN_EXTENT: i32 = 50;

/// Screen dimensions the viewport is clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Viewport rectangle in framebuffer pixels, origin at the bottom-left corner.
///
/// `x` and `y` may be negative; `width` and `height` stay positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Covers the whole screen starting at the origin.
    pub fn full_screen(screen: ScreenSize) -> Self {
        Self::new(0, 0, screen.width, screen.height)
    }

    /// Maps a normalized device coordinate onto the screen without rounding.
    pub fn ndc_to_screen_exact(&self, ndc: Point2<f64>) -> Point2<f64> {
        Point2::new(
            (ndc.x + 1.0) * (self.width as f64 / 2.0) + self.x as f64,
            (ndc.y + 1.0) * (self.height as f64 / 2.0) + self.y as f64,
        )
    }

    /// Maps a normalized device coordinate onto the screen, truncating to whole pixels.
    pub fn ndc_to_screen(&self, ndc: Point2<f64>) -> (i32, i32) {
        let exact = self.ndc_to_screen_exact(ndc);
        (exact.x as i32, exact.y as i32)
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "glViewport({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}
