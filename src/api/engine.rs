use crate::core::{
    RailGeometry, Stop, TooltipMetrics, TooltipPosition, TooltipVisibility, ValueDomain,
    ValueFormatterFn, evaluate_merge,
};
use crate::error::SliderResult;
use crate::interaction::{DragPhase, DragState, Handle};

use super::selection::{Selection, SelectionChange, SelectionEmitter, SelectionObserver};
use super::validation::validate_index_pair;
use super::{HoverTarget, SliderEngineConfig};

/// Measured pixel state, absent until the host reports rail dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PixelState {
    pub(super) geometry: RailGeometry,
    pub(super) min_offset: f64,
    pub(super) max_offset: f64,
}

/// Main orchestration facade consumed by host UIs.
///
/// `SliderEngine` coordinates the value domain, rail geometry, drag state
/// machine, tooltip merge detection, and selection notifications. The host
/// owns rendering and native event registration and drives the engine through
/// the pointer/hover/measurement entry points.
pub struct SliderEngine {
    pub(super) domain: ValueDomain,
    pub(super) has_steps: bool,
    pub(super) tooltip_visibility: TooltipVisibility,
    pub(super) tooltip_position: TooltipPosition,
    pub(super) formatter: Option<ValueFormatterFn>,
    pub(super) selection: Selection,
    pub(super) pixels: Option<PixelState>,
    pub(super) drag: DragState,
    pub(super) session_emitted: bool,
    pub(super) hovered: Option<HoverTarget>,
    pub(super) tooltip_metrics: Option<TooltipMetrics>,
    pub(super) merged: bool,
    pub(super) emitter: SelectionEmitter,
}

impl SliderEngine {
    pub fn new(config: SliderEngineConfig) -> SliderResult<Self> {
        let domain = ValueDomain::from_source(&config.value)?;

        let min_index = match &config.from {
            Some(from) => domain.resolve_index(from, 0),
            None => 0,
        };
        let max_index = match &config.to {
            Some(to) => domain.resolve_index(to, domain.last_index()),
            None => domain.last_index(),
        };
        validate_index_pair(min_index, max_index, domain.last_index(), "initial selection")?;

        let selection = Selection {
            min_index,
            max_index,
            min_value: domain.format(min_index, None),
            max_value: domain.format(max_index, None),
        };
        let merged = min_index == max_index;

        Ok(Self {
            domain,
            has_steps: config.has_steps,
            tooltip_visibility: config.tooltip_visibility,
            tooltip_position: config.tooltip_position,
            formatter: None,
            selection,
            pixels: None,
            drag: DragState::default(),
            session_emitted: false,
            hovered: None,
            tooltip_metrics: None,
            merged,
            emitter: SelectionEmitter::new(config.change_cadence),
        })
    }

    /// Installs a display formatter and re-derives the formatted selection
    /// values. Does not notify observers.
    pub fn set_value_formatter(&mut self, formatter: ValueFormatterFn) {
        self.formatter = Some(formatter);
        self.selection.min_value = self
            .domain
            .format(self.selection.min_index, self.formatter.as_ref());
        self.selection.max_value = self
            .domain
            .format(self.selection.max_index, self.formatter.as_ref());
    }

    pub fn add_selection_observer(&mut self, observer: Box<dyn SelectionObserver + Send>) {
        self.emitter.add_observer(observer);
    }

    /// Convenience `onChange` registration for plain closures.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&SelectionChange) + Send + 'static,
    {
        self.add_selection_observer(Box::new(callback));
    }

    /// Programmatic selection jump. Validated, silent (no notification), and
    /// re-centers both handles when the rail is already measured.
    pub fn set_selected_indices(&mut self, min_index: usize, max_index: usize) -> SliderResult<()> {
        validate_index_pair(
            min_index,
            max_index,
            self.domain.last_index(),
            "programmatic selection",
        )?;

        self.selection.min_index = min_index;
        self.selection.max_index = max_index;
        self.selection.min_value = self.domain.format(min_index, self.formatter.as_ref());
        self.selection.max_value = self.domain.format(max_index, self.formatter.as_ref());

        if let Some(pixels) = self.pixels.as_mut() {
            pixels.min_offset = pixels.geometry.index_to_offset(min_index);
            pixels.max_offset = pixels.geometry.index_to_offset(max_index);
        }
        self.refresh_merge();
        Ok(())
    }

    #[must_use]
    pub fn domain(&self) -> &ValueDomain {
        &self.domain
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn selection_change(&self) -> SelectionChange {
        self.selection.to_change()
    }

    #[must_use]
    pub fn has_steps(&self) -> bool {
        self.has_steps
    }

    #[must_use]
    pub fn tooltip_visibility(&self) -> TooltipVisibility {
        self.tooltip_visibility
    }

    #[must_use]
    pub fn tooltip_position(&self) -> TooltipPosition {
        self.tooltip_position
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.drag.active_handle()
    }

    #[must_use]
    pub fn merged(&self) -> bool {
        self.merged
    }

    /// Stop at the current min boundary.
    #[must_use]
    pub fn min_stop(&self) -> &Stop {
        self.domain.stop(self.selection.min_index)
    }

    /// Stop at the current max boundary.
    #[must_use]
    pub fn max_stop(&self) -> &Stop {
        self.domain.stop(self.selection.max_index)
    }

    /// Recomputes the merge flag from indices, anchors, and metrics.
    pub(super) fn refresh_merge(&mut self) {
        self.merged = match self.pixels {
            Some(pixels) => evaluate_merge(
                self.selection.min_index,
                self.selection.max_index,
                pixels.geometry.handle_center(pixels.min_offset),
                pixels.geometry.handle_center(pixels.max_offset),
                self.tooltip_metrics,
            ),
            None => self.selection.min_index == self.selection.max_index,
        };
    }

    /// Updates one side of the selection from a committed handle offset.
    pub(super) fn apply_offset(&mut self, handle: Handle, offset: f64) {
        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };

        match handle {
            Handle::Min => pixels.min_offset = offset,
            Handle::Max => pixels.max_offset = offset,
        }

        let index = pixels.geometry.offset_to_index(offset);
        let value = self.domain.format(index, self.formatter.as_ref());
        match handle {
            Handle::Min => {
                self.selection.min_index = index;
                self.selection.min_value = value;
            }
            Handle::Max => {
                self.selection.max_index = index;
                self.selection.max_value = value;
            }
        }

        self.refresh_merge();
    }
}
