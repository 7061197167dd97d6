pub mod nearest;

pub use nearest::{bisect_left, nearest_series, nearest_time_index};

use serde::{Deserialize, Serialize};

/// Emphasized series plus the time index the pointer resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightState {
    pub series: usize,
    pub index: usize,
}

/// Hover state machine: `Idle -> Tracking` on enter or move,
/// `Tracking -> Idle` on leave.
///
/// `Tracking { highlight: None }` covers the window between enter and the
/// first move, and indices where every series is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Tracking {
        highlight: Option<HighlightState>,
    },
}

impl HoverState {
    #[must_use]
    pub fn is_tracking(self) -> bool {
        matches!(self, Self::Tracking { .. })
    }

    #[must_use]
    pub fn highlight(self) -> Option<HighlightState> {
        match self {
            Self::Idle => None,
            Self::Tracking { highlight } => highlight,
        }
    }
}

/// Phase of a single-point touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Start,
    Move,
    End,
}

/// Device-independent pointer event consumed by the chart engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter,
    Move { x: f64, y: f64 },
    Leave,
}

impl PointerEvent {
    /// Maps touch phases onto the mouse-style enter/move/leave lifecycle.
    ///
    /// Only the tracked touch point is considered; a touch start enters
    /// tracking without moving, matching mouse-enter.
    #[must_use]
    pub fn from_touch(phase: TouchPhase, x: f64, y: f64) -> Self {
        match phase {
            TouchPhase::Start => Self::Enter,
            TouchPhase::Move => Self::Move { x, y },
            TouchPhase::End => Self::Leave,
        }
    }
}

/// Pointer-driven runtime state owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    hover: HoverState,
    cursor: Option<(f64, f64)>,
}

impl InteractionState {
    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn highlight(self) -> Option<HighlightState> {
        self.hover.highlight()
    }

    /// Last pointer position while tracking.
    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn on_pointer_enter(&mut self) {
        self.hover = HoverState::Tracking { highlight: None };
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, highlight: Option<HighlightState>) {
        self.cursor = Some((x, y));
        self.hover = HoverState::Tracking { highlight };
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.hover = HoverState::Idle;
    }
}
