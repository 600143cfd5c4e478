use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::interaction::{Handle, closer_handle, resolve_move};

use super::SliderEngine;
use super::selection::ChangeCadence;

/// What the pointer currently hovers, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTarget {
    MinHandle,
    MaxHandle,
    Track,
}

impl SliderEngine {
    /// `Idle -> Dragging` transition. A no-op until the rail is measured,
    /// on a degenerate domain, or while another drag is in flight.
    pub fn pointer_down(&mut self, handle: Handle, pointer_x: f64) {
        let Some(pixels) = self.pixels else {
            return;
        };
        if self.domain.is_degenerate() || self.drag.is_dragging() {
            return;
        }

        let start_offset = match handle {
            Handle::Min => pixels.min_offset,
            Handle::Max => pixels.max_offset,
        };
        self.drag.begin(handle, pointer_x, start_offset);
        self.session_emitted = false;
        debug!(?handle, pointer_x, start_offset, "drag started");
    }

    /// `Dragging -> Dragging` transition: applies snap/clamp/non-crossing to
    /// the pointer delta and commits the move when accepted.
    pub fn pointer_move(&mut self, pointer_x: f64) {
        let Some(session) = self.drag.session() else {
            return;
        };
        let Some(pixels) = self.pixels else {
            return;
        };

        let proposed = session.start_offset + (pointer_x - session.start_pointer_x);
        let accepted = resolve_move(
            pixels.geometry,
            session.handle,
            proposed,
            self.has_steps,
            pixels.min_offset,
            pixels.max_offset,
        );

        match accepted {
            Some(offset) => {
                self.apply_offset(session.handle, offset);
                trace!(handle = ?session.handle, offset, "drag move committed");
                if self.emitter.cadence() == ChangeCadence::Continuous {
                    let change = self.selection.to_change();
                    self.emitter.notify(&change);
                    self.session_emitted = true;
                }
            }
            None => trace!(handle = ?session.handle, proposed, "drag move rejected"),
        }
    }

    /// `Dragging -> Idle` transition. Every completed drag notifies at least
    /// once: on-commit cadence always emits here, continuous cadence only
    /// when no intermediate move was committed.
    pub fn pointer_up(&mut self) {
        let Some(session) = self.drag.end() else {
            return;
        };
        debug!(handle = ?session.handle, "drag ended");

        let must_emit = match self.emitter.cadence() {
            ChangeCadence::OnCommit => true,
            ChangeCadence::Continuous => !self.session_emitted,
        };
        if must_emit {
            let change = self.selection.to_change();
            self.emitter.notify(&change);
        }
        self.session_emitted = false;
    }

    /// Cancellation path (lost capture, release outside tracked elements).
    /// Reaches the same `Idle` transition as a regular release.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Single-shot click-to-position on the rail or track.
    ///
    /// The pixel-closer handle is recentered under the pointer, subject to the
    /// same clamp/snap/non-crossing rules as a drag, and a committed jump
    /// notifies immediately regardless of cadence.
    pub fn jump_to(&mut self, pointer_x: f64) {
        let Some(pixels) = self.pixels else {
            return;
        };
        if self.domain.is_degenerate() || self.drag.is_dragging() {
            return;
        }

        let handle = closer_handle(pointer_x, pixels.min_offset, pixels.max_offset);
        let target = pointer_x - pixels.geometry.handle_size() / 2.0;
        let accepted = resolve_move(
            pixels.geometry,
            handle,
            target,
            self.has_steps,
            pixels.min_offset,
            pixels.max_offset,
        );

        match accepted {
            Some(offset) => {
                self.apply_offset(handle, offset);
                debug!(?handle, pointer_x, offset, "jump committed");
                let change = self.selection.to_change();
                self.emitter.notify(&change);
            }
            None => trace!(?handle, pointer_x, "jump rejected"),
        }
    }

    pub fn hover_enter(&mut self, target: HoverTarget) {
        self.hovered = Some(target);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<HoverTarget> {
        self.hovered
    }
}
