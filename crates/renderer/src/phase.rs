/// Lifecycle of a shader canvas controller.
///
/// Transitions are driven by four signals: init-success, init-failure,
/// frame-tick, and teardown. `Failed` and `TornDown` are terminal except
/// that teardown may follow a failure (releasing nothing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No sink attached yet.
    Uninitialized,
    /// Program compiled and linked; no frame rendered yet.
    Ready,
    /// Animating continuously.
    Rendering,
    /// Reduced motion: one static frame rendered, scheduling stopped.
    ReducedStatic,
    /// Initialization failed; the static fallback stays visible.
    Failed,
    /// Resources released; nothing will render again.
    TornDown,
}

impl Phase {
    /// Whether a frame tick may issue a draw call in this phase.
    pub fn can_render(self) -> bool {
        matches!(self, Phase::Ready | Phase::Rendering)
    }

    /// Whether the host should keep scheduling frame ticks.
    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Ready | Phase::Rendering)
    }

    pub(crate) fn on_init(self, success: bool) -> Phase {
        match self {
            Phase::Uninitialized => {
                if success {
                    Phase::Ready
                } else {
                    Phase::Failed
                }
            }
            other => other,
        }
    }

    pub(crate) fn on_frame_rendered(self, reduced_motion: bool) -> Phase {
        match self {
            Phase::Ready | Phase::Rendering => {
                if reduced_motion {
                    Phase::ReducedStatic
                } else {
                    Phase::Rendering
                }
            }
            other => other,
        }
    }

    pub(crate) fn on_teardown(self) -> Phase {
        Phase::TornDown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_success_makes_ready() {
        assert_eq!(Phase::Uninitialized.on_init(true), Phase::Ready);
        assert_eq!(Phase::Uninitialized.on_init(false), Phase::Failed);
    }

    #[test]
    fn frame_tick_enters_rendering_or_static() {
        assert_eq!(Phase::Ready.on_frame_rendered(false), Phase::Rendering);
        assert_eq!(Phase::Ready.on_frame_rendered(true), Phase::ReducedStatic);
        assert_eq!(Phase::Rendering.on_frame_rendered(false), Phase::Rendering);
    }

    #[test]
    fn terminal_phases_ignore_frame_ticks() {
        assert_eq!(Phase::Failed.on_frame_rendered(false), Phase::Failed);
        assert_eq!(Phase::TornDown.on_frame_rendered(false), Phase::TornDown);
        assert_eq!(
            Phase::ReducedStatic.on_frame_rendered(false),
            Phase::ReducedStatic
        );
    }

    #[test]
    fn teardown_is_always_reachable() {
        for phase in [
            Phase::Uninitialized,
            Phase::Ready,
            Phase::Rendering,
            Phase::ReducedStatic,
            Phase::Failed,
            Phase::TornDown,
        ] {
            assert_eq!(phase.on_teardown(), Phase::TornDown);
        }
    }

    #[test]
    fn only_live_phases_render_or_animate() {
        assert!(Phase::Ready.can_render());
        assert!(Phase::Rendering.can_render());
        assert!(!Phase::ReducedStatic.can_render());
        assert!(!Phase::Failed.is_animating());
        assert!(!Phase::TornDown.is_animating());
    }
}
