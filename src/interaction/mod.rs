use serde::{Deserialize, Serialize};

use crate::core::RailGeometry;

/// Which boundary of the selection a drag or jump targets.
///
/// Carried explicitly through the drag session instead of comparing
/// rendering-layer object identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Ephemeral per-drag state, created on pointer-down and destroyed on
/// pointer-up/cancel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub handle: Handle,
    pub start_pointer_x: f64,
    pub start_offset: f64,
}

/// Pointer-interaction state machine: `Idle ⇄ Dragging(handle)`.
///
/// One logical pointer stream drives the machine; transitions are synchronous
/// and the session is exclusively owned for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    session: Option<DragSession>,
}

impl DragState {
    #[must_use]
    pub fn phase(self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(self) -> Option<DragSession> {
        self.session
    }

    #[must_use]
    pub fn active_handle(self) -> Option<Handle> {
        self.session.map(|session| session.handle)
    }

    pub fn begin(&mut self, handle: Handle, pointer_x: f64, start_offset: f64) {
        self.session = Some(DragSession {
            handle,
            start_pointer_x: pointer_x,
            start_offset,
        });
    }

    /// Ends the session, returning it so the caller can emit the final
    /// selection exactly once per completed drag.
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

/// Applies snap, clamp, and non-crossing rules to a proposed handle offset.
///
/// Returns the accepted offset, or `None` when the move is rejected and the
/// position must not change. Rejections are normal state-machine boundaries,
/// not errors.
///
/// Free-form moves reject strictly crossing candidates, so the two handles
/// may coincide; step mode rejects already on equality of snapped positions.
#[must_use]
pub fn resolve_move(
    geometry: RailGeometry,
    handle: Handle,
    proposed: f64,
    has_steps: bool,
    min_offset: f64,
    max_offset: f64,
) -> Option<f64> {
    let candidate = if has_steps {
        geometry.snap_to_step(proposed)
    } else {
        proposed
    };

    if !geometry.is_within_limits(candidate) {
        return None;
    }

    let crossing = match handle {
        Handle::Min => {
            if has_steps {
                candidate >= max_offset
            } else {
                candidate > max_offset
            }
        }
        Handle::Max => {
            if has_steps {
                candidate <= min_offset
            } else {
                candidate < min_offset
            }
        }
    };

    if crossing { None } else { Some(candidate) }
}

/// Picks the handle whose left edge is pixel-closer to a click, min on ties.
#[must_use]
pub fn closer_handle(pointer_x: f64, min_offset: f64, max_offset: f64) -> Handle {
    if (pointer_x - min_offset).abs() > (pointer_x - max_offset).abs() {
        Handle::Max
    } else {
        Handle::Min
    }
}
