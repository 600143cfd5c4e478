use tracing::debug;

use crate::core::{RailGeometry, TrackHighlight};
use crate::error::SliderResult;
use crate::interaction::Handle;

use super::SliderEngine;
use super::engine::PixelState;

impl SliderEngine {
    /// Installs (or replaces, on resize) the measured rail snapshot and
    /// re-derives both handle offsets from the selection indices.
    ///
    /// Idempotent for identical dimensions, and safe to call mid-drag: a live
    /// session keeps its stale start offset until the next move event.
    pub fn configure_rail(&mut self, rail_length: f64, handle_size: f64) -> SliderResult<()> {
        let geometry = RailGeometry::new(rail_length, handle_size, self.domain.len())?;
        let min_offset = geometry.index_to_offset(self.selection.min_index);
        let max_offset = geometry.index_to_offset(self.selection.max_index);

        self.pixels = Some(PixelState {
            geometry,
            min_offset,
            max_offset,
        });
        self.refresh_merge();
        debug!(rail_length, handle_size, "configured rail geometry");
        Ok(())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.pixels.is_some()
    }

    #[must_use]
    pub fn rail_geometry(&self) -> Option<RailGeometry> {
        self.pixels.map(|pixels| pixels.geometry)
    }

    /// Left-edge pixel offset of a handle, `None` until measured.
    #[must_use]
    pub fn handle_offset(&self, handle: Handle) -> Option<f64> {
        self.pixels.map(|pixels| match handle {
            Handle::Min => pixels.min_offset,
            Handle::Max => pixels.max_offset,
        })
    }

    #[must_use]
    pub fn min_offset(&self) -> Option<f64> {
        self.handle_offset(Handle::Min)
    }

    #[must_use]
    pub fn max_offset(&self) -> Option<f64> {
        self.handle_offset(Handle::Max)
    }

    /// Handle offset as a percentage of the rail length.
    #[must_use]
    pub fn handle_offset_percent(&self, handle: Handle) -> Option<f64> {
        let pixels = self.pixels?;
        let offset = match handle {
            Handle::Min => pixels.min_offset,
            Handle::Max => pixels.max_offset,
        };
        Some(pixels.geometry.percent_of_rail(offset))
    }

    /// Highlighted track segment between the two handles, in pixels.
    #[must_use]
    pub fn track_highlight(&self) -> Option<TrackHighlight> {
        self.pixels
            .map(|pixels| pixels.geometry.track_highlight(pixels.min_offset, pixels.max_offset))
    }

    /// Highlighted track segment as percentages of the rail length.
    #[must_use]
    pub fn track_highlight_percent(&self) -> Option<TrackHighlight> {
        self.pixels.map(|pixels| {
            pixels
                .geometry
                .track_highlight_percent(pixels.min_offset, pixels.max_offset)
        })
    }

    /// Tick left edges for interior stops, surfaced only in step mode.
    #[must_use]
    pub fn step_tick_offsets(&self, tick_width: f64) -> Option<Vec<f64>> {
        if !self.has_steps {
            return None;
        }
        self.pixels
            .map(|pixels| pixels.geometry.step_tick_offsets(tick_width))
    }
}
