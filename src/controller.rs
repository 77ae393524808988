use cgmath::Point2;
use winit::keyboard::KeyCode;

use crate::viewport::{ScreenSize, Viewport, MIN_EXTENT};

/// Pixels moved or resized per key event.
pub const STEP: i32 = 10;

/// Viewport offset applied by the negative-offset preset.
pub const NEGATIVE_OFFSET: (i32, i32) = (-200, -150);

/// NDC corners reported by the info action: top-left and bottom-right.
pub const SAMPLE_CORNERS: [(f64, f64); 2] = [(-1.0, 1.0), (1.0, -1.0)];

/// Receives the viewport whenever the controller changes it.
pub trait ViewportSink {
    fn set_viewport(&mut self, viewport: &Viewport);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Widen,
    Narrow,
    Heighten,
    Shorten,
    Reset,
    NegativeOffset,
    Info,
}

impl ViewportAction {
    /// Key binding for the interactive demo. `None` for keys with no viewport meaning.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let action = match code {
            KeyCode::KeyW => Self::MoveUp,
            KeyCode::KeyS => Self::MoveDown,
            KeyCode::KeyA => Self::MoveLeft,
            KeyCode::KeyD => Self::MoveRight,
            KeyCode::KeyQ => Self::Widen,
            KeyCode::KeyE => Self::Narrow,
            KeyCode::KeyZ => Self::Heighten,
            KeyCode::KeyC => Self::Shorten,
            KeyCode::KeyR => Self::Reset,
            KeyCode::KeyT => Self::NegativeOffset,
            KeyCode::KeyI => Self::Info,
            _ => return None,
        };

        Some(action)
    }
}

/// One NDC sample and where it lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcMapping {
    pub ndc: Point2<f64>,
    pub screen: (i32, i32),
}

impl std::fmt::Display for NdcMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NDC({}, {}) -> screen({}, {})",
            self.ndc.x, self.ndc.y, self.screen.0, self.screen.1
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlOutcome {
    /// State changed and was forwarded to the sink.
    Changed(Viewport),
    /// Diagnostics only; state untouched.
    Info {
        viewport: Viewport,
        samples: [NdcMapping; 2],
    },
}

/// Owns the interactive viewport and the screen bounds it is clamped to.
#[derive(Debug, Clone)]
pub struct ViewportController {
    viewport: Viewport,
    screen: ScreenSize,
}

impl ViewportController {
    pub fn new(viewport: Viewport, screen: ScreenSize) -> Self {
        Self { viewport, screen }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the viewport outright, without notifying any sink.
    pub fn set(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn samples(&self) -> [NdcMapping; 2] {
        SAMPLE_CORNERS.map(|(x, y)| {
            let ndc = Point2::new(x, y);
            NdcMapping {
                ndc,
                screen: self.viewport.ndc_to_screen(ndc),
            }
        })
    }

    /// Applies `action` and, if the state was mutated, pushes it to `sink` exactly once.
    pub fn apply(&mut self, action: ViewportAction, sink: &mut impl ViewportSink) -> ControlOutcome {
        let screen = self.screen;
        let v = &mut self.viewport;

        match action {
            // Offsets come straight from the command line and may sit at the i32 limits.
            ViewportAction::MoveUp => v.y = v.y.saturating_add(STEP),
            ViewportAction::MoveDown => v.y = v.y.saturating_sub(STEP),
            ViewportAction::MoveLeft => v.x = v.x.saturating_sub(STEP),
            ViewportAction::MoveRight => v.x = v.x.saturating_add(STEP),
            ViewportAction::Widen => v.width = v.width.saturating_add(STEP).min(screen.width),
            ViewportAction::Narrow => v.width = v.width.saturating_sub(STEP).max(MIN_EXTENT),
            ViewportAction::Heighten => {
                v.height = v.height.saturating_add(STEP).min(screen.height)
            }
            ViewportAction::Shorten => v.height = v.height.saturating_sub(STEP).max(MIN_EXTENT),
            ViewportAction::Reset => *v = Viewport::full_screen(screen),
            ViewportAction::NegativeOffset => {
                *v = Viewport::new(
                    NEGATIVE_OFFSET.0,
                    NEGATIVE_OFFSET.1,
                    screen.width,
                    screen.height,
                )
            }
            ViewportAction::Info => {
                return ControlOutcome::Info {
                    viewport: self.viewport,
                    samples: self.samples(),
                };
            }
        }

        sink.set_viewport(&self.viewport);
        ControlOutcome::Changed(self.viewport)
    }

    /// Routes a key press. Unbound keys return `None` and touch nothing.
    pub fn handle_key(&mut self, code: KeyCode, sink: &mut impl ViewportSink) -> Option<ControlOutcome> {
        ViewportAction::from_key(code).map(|action| self.apply(action, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSize = ScreenSize::new(800, 600);

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Viewport>,
    }

    impl ViewportSink for Recorder {
        fn set_viewport(&mut self, viewport: &Viewport) {
            self.calls.push(*viewport);
        }
    }

    fn controller(x: i32, y: i32, w: i32, h: i32) -> ViewportController {
        ViewportController::new(Viewport::new(x, y, w, h), SCREEN)
    }

    // ── moves ─────────────────────────────────────────────────────────────

    #[test]
    fn moves_step_by_ten() {
        let mut c = controller(100, 100, 600, 400);
        let mut sink = Recorder::default();

        c.apply(ViewportAction::MoveUp, &mut sink);
        assert_eq!(c.viewport(), Viewport::new(100, 110, 600, 400));
        c.apply(ViewportAction::MoveDown, &mut sink);
        c.apply(ViewportAction::MoveDown, &mut sink);
        assert_eq!(c.viewport().y, 90);
        c.apply(ViewportAction::MoveLeft, &mut sink);
        assert_eq!(c.viewport().x, 90);
        c.apply(ViewportAction::MoveRight, &mut sink);
        c.apply(ViewportAction::MoveRight, &mut sink);
        assert_eq!(c.viewport().x, 110);
    }

    #[test]
    fn offsets_may_go_negative() {
        let mut c = controller(0, 0, 800, 600);
        let mut sink = Recorder::default();
        c.apply(ViewportAction::MoveLeft, &mut sink);
        c.apply(ViewportAction::MoveDown, &mut sink);
        assert_eq!(c.viewport(), Viewport::new(-10, -10, 800, 600));
    }

    #[test]
    fn moves_saturate_at_i32_limits() {
        let mut sink = Recorder::default();

        let mut high = controller(i32::MAX - 5, i32::MAX - 5, 800, 600);
        high.apply(ViewportAction::MoveRight, &mut sink);
        high.apply(ViewportAction::MoveUp, &mut sink);
        assert_eq!(high.viewport(), Viewport::new(i32::MAX, i32::MAX, 800, 600));

        let mut low = controller(i32::MIN + 5, i32::MIN + 5, 800, 600);
        low.apply(ViewportAction::MoveLeft, &mut sink);
        low.apply(ViewportAction::MoveDown, &mut sink);
        assert_eq!(low.viewport(), Viewport::new(i32::MIN, i32::MIN, 800, 600));

        assert_eq!(sink.calls.len(), 4);
    }

    #[test]
    fn widening_saturates_on_huge_screen() {
        let mut c = ViewportController::new(
            Viewport::new(0, 0, i32::MAX - 5, 600),
            ScreenSize::new(i32::MAX, 600),
        );
        let mut sink = Recorder::default();
        c.apply(ViewportAction::Widen, &mut sink);
        assert_eq!(c.viewport().width, i32::MAX);
    }

    // ── clamps ────────────────────────────────────────────────────────────

    #[test]
    fn narrowing_stops_at_minimum() {
        let mut c = controller(0, 0, 80, 80);
        let mut sink = Recorder::default();
        for _ in 0..20 {
            c.apply(ViewportAction::Narrow, &mut sink);
            c.apply(ViewportAction::Shorten, &mut sink);
            assert!(c.viewport().width >= MIN_EXTENT);
            assert!(c.viewport().height >= MIN_EXTENT);
        }
        assert_eq!(c.viewport().width, MIN_EXTENT);
        assert_eq!(c.viewport().height, MIN_EXTENT);
    }

    #[test]
    fn widening_stops_at_screen() {
        let mut c = controller(0, 0, 755, 555);
        let mut sink = Recorder::default();
        for _ in 0..20 {
            c.apply(ViewportAction::Widen, &mut sink);
            c.apply(ViewportAction::Heighten, &mut sink);
            assert!(c.viewport().width <= SCREEN.width);
            assert!(c.viewport().height <= SCREEN.height);
        }
        assert_eq!(c.viewport().width, SCREEN.width);
        assert_eq!(c.viewport().height, SCREEN.height);
    }

    #[test]
    fn clamped_action_still_notifies() {
        let mut c = controller(0, 0, 800, 600);
        let mut sink = Recorder::default();
        let outcome = c.apply(ViewportAction::Widen, &mut sink);
        assert_eq!(outcome, ControlOutcome::Changed(Viewport::new(0, 0, 800, 600)));
        assert_eq!(sink.calls.len(), 1);
    }

    // ── presets ───────────────────────────────────────────────────────────

    #[test]
    fn reset_always_yields_full_screen() {
        let mut sink = Recorder::default();
        for start in [(100, 100, 600, 400), (-200, -150, 800, 600), (5, -5, 50, 50)] {
            let mut c = controller(start.0, start.1, start.2, start.3);
            c.apply(ViewportAction::Reset, &mut sink);
            assert_eq!(c.viewport(), Viewport::new(0, 0, 800, 600));
        }
    }

    #[test]
    fn negative_offset_preset() {
        let mut c = controller(100, 100, 600, 400);
        let mut sink = Recorder::default();
        c.apply(ViewportAction::NegativeOffset, &mut sink);
        assert_eq!(c.viewport(), Viewport::new(-200, -150, 800, 600));
    }

    // ── side effects ──────────────────────────────────────────────────────

    #[test]
    fn each_mutation_notifies_once() {
        let mut c = controller(100, 100, 600, 400);
        let mut sink = Recorder::default();
        let actions = [
            ViewportAction::MoveUp,
            ViewportAction::Narrow,
            ViewportAction::Reset,
            ViewportAction::NegativeOffset,
        ];
        for action in actions {
            c.apply(action, &mut sink);
        }
        assert_eq!(sink.calls.len(), actions.len());
        assert_eq!(sink.calls.last(), Some(&Viewport::new(-200, -150, 800, 600)));
    }

    #[test]
    fn info_reports_samples_without_notifying() {
        let mut c = controller(100, 100, 600, 400);
        let mut sink = Recorder::default();

        let outcome = c.apply(ViewportAction::Info, &mut sink);

        assert!(sink.calls.is_empty());
        assert_eq!(c.viewport(), Viewport::new(100, 100, 600, 400));
        match outcome {
            ControlOutcome::Info { viewport, samples } => {
                assert_eq!(viewport, Viewport::new(100, 100, 600, 400));
                assert_eq!(samples[0].screen, (100, 500));
                assert_eq!(samples[1].screen, (700, 100));
            }
            other => panic!("expected info outcome, got {other:?}"),
        }
    }

    #[test]
    fn unbound_key_changes_nothing() {
        let mut c = controller(100, 100, 600, 400);
        let before = c.viewport();
        let mut sink = Recorder::default();

        assert_eq!(c.handle_key(KeyCode::KeyX, &mut sink), None);
        assert_eq!(c.handle_key(KeyCode::Escape, &mut sink), None);

        assert_eq!(c.viewport(), before);
        assert!(sink.calls.is_empty());
    }

    #[test]
    fn bound_key_notifies_once() {
        let mut c = controller(100, 100, 600, 400);
        let mut sink = Recorder::default();

        let outcome = c.handle_key(KeyCode::KeyQ, &mut sink);

        assert_eq!(
            outcome,
            Some(ControlOutcome::Changed(Viewport::new(100, 100, 610, 400)))
        );
        assert_eq!(sink.calls, vec![Viewport::new(100, 100, 610, 400)]);
    }

    #[test]
    fn info_key_reports_without_notifying() {
        let mut c = controller(100, 100, 600, 400);
        let mut sink = Recorder::default();

        let outcome = c.handle_key(KeyCode::KeyI, &mut sink);

        assert!(matches!(outcome, Some(ControlOutcome::Info { .. })));
        assert!(sink.calls.is_empty());
        assert_eq!(c.viewport(), Viewport::new(100, 100, 600, 400));
    }

    // ── key bindings ──────────────────────────────────────────────────────

    #[test]
    fn key_bindings() {
        let bindings = [
            (KeyCode::KeyW, ViewportAction::MoveUp),
            (KeyCode::KeyS, ViewportAction::MoveDown),
            (KeyCode::KeyA, ViewportAction::MoveLeft),
            (KeyCode::KeyD, ViewportAction::MoveRight),
            (KeyCode::KeyQ, ViewportAction::Widen),
            (KeyCode::KeyE, ViewportAction::Narrow),
            (KeyCode::KeyZ, ViewportAction::Heighten),
            (KeyCode::KeyC, ViewportAction::Shorten),
            (KeyCode::KeyR, ViewportAction::Reset),
            (KeyCode::KeyT, ViewportAction::NegativeOffset),
            (KeyCode::KeyI, ViewportAction::Info),
        ];
        for (code, action) in bindings {
            assert_eq!(ViewportAction::from_key(code), Some(action));
        }
    }

    #[test]
    fn mapping_display() {
        let mapping = NdcMapping {
            ndc: Point2::new(-1.0, 1.0),
            screen: (100, 500),
        };
        assert_eq!(mapping.to_string(), "NDC(-1, 1) -> screen(100, 500)");
    }
}
