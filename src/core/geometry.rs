use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Highlighted sub-segment of the rail between the two handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackHighlight {
    pub left: f64,
    pub width: f64,
}

/// Measured rail snapshot plus the index ⇄ offset ⇄ percent mappings.
///
/// Offsets are handle left edges in rail coordinates, so a handle centered on
/// the leftmost stop sits at `-handle_size / 2`.
///
/// The forward mapping divides the rail into `N-1` segments (stop-centered
/// placement) while the inverse mapping buckets by `rail_length / N` marks.
/// The asymmetry is intentional; both formulas must agree for snap
/// round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailGeometry {
    rail_length: f64,
    handle_size: f64,
    stop_count: usize,
}

impl RailGeometry {
    pub fn new(rail_length: f64, handle_size: f64, stop_count: usize) -> SliderResult<Self> {
        if !rail_length.is_finite()
            || rail_length <= 0.0
            || !handle_size.is_finite()
            || handle_size < 0.0
        {
            return Err(SliderError::InvalidGeometry {
                rail_length,
                handle_size,
            });
        }
        if stop_count == 0 {
            return Err(SliderError::InvalidDomain(
                "rail geometry requires at least one stop".to_owned(),
            ));
        }

        Ok(Self {
            rail_length,
            handle_size,
            stop_count,
        })
    }

    #[must_use]
    pub fn rail_length(self) -> f64 {
        self.rail_length
    }

    #[must_use]
    pub fn handle_size(self) -> f64 {
        self.handle_size
    }

    #[must_use]
    pub fn stop_count(self) -> usize {
        self.stop_count
    }

    /// Width of one of the `N-1` segments the rail is divided into.
    #[must_use]
    pub fn segment_width(self) -> f64 {
        if self.stop_count < 2 {
            return self.rail_length;
        }
        self.rail_length / (self.stop_count - 1) as f64
    }

    /// Handle left-edge offset for a stop index.
    #[must_use]
    pub fn index_to_offset(self, index: usize) -> f64 {
        self.segment_width() * index as f64 - self.handle_size / 2.0
    }

    /// Inverse mapping: bucket membership over `N` marks.
    ///
    /// The offset is clamped to `[0, rail_length]` before bucketing, then the
    /// handle center is divided by the per-stop mark width and floored.
    #[must_use]
    pub fn offset_to_index(self, offset: f64) -> usize {
        let marks = self.rail_length / self.stop_count as f64;
        let clamped = offset.clamp(0.0, self.rail_length);
        let index = ((clamped + self.handle_size / 2.0) / marks).floor();
        (index as usize).min(self.stop_count - 1)
    }

    /// Rounds a free-form target to the nearest stop-centered offset.
    #[must_use]
    pub fn snap_to_step(self, target: f64) -> f64 {
        let segment = self.segment_width();
        let step = (target / segment).round();
        segment * step - self.handle_size / 2.0
    }

    /// Lowest offset a handle may occupy (leftmost stop, centered).
    #[must_use]
    pub fn min_limit(self) -> f64 {
        -self.handle_size / 2.0
    }

    /// Highest offset a handle may occupy (rightmost stop, centered).
    #[must_use]
    pub fn max_limit(self) -> f64 {
        self.rail_length - self.handle_size / 2.0
    }

    #[must_use]
    pub fn is_within_limits(self, offset: f64) -> bool {
        offset >= self.min_limit() && offset <= self.max_limit()
    }

    /// Resolution-independent form of an offset.
    #[must_use]
    pub fn percent_of_rail(self, offset: f64) -> f64 {
        offset / self.rail_length * 100.0
    }

    /// Pixel center of the handle sitting at `offset`.
    #[must_use]
    pub fn handle_center(self, offset: f64) -> f64 {
        offset + self.handle_size / 2.0
    }

    #[must_use]
    pub fn track_highlight(self, min_offset: f64, max_offset: f64) -> TrackHighlight {
        TrackHighlight {
            left: min_offset + self.handle_size / 2.0,
            width: max_offset - min_offset,
        }
    }

    #[must_use]
    pub fn track_highlight_percent(self, min_offset: f64, max_offset: f64) -> TrackHighlight {
        let highlight = self.track_highlight(min_offset, max_offset);
        TrackHighlight {
            left: self.percent_of_rail(highlight.left),
            width: self.percent_of_rail(highlight.width),
        }
    }

    /// Left edges of visible step ticks for the interior stops `1..N-1`.
    #[must_use]
    pub fn step_tick_offsets(self, tick_width: f64) -> Vec<f64> {
        if self.stop_count < 3 {
            return Vec::new();
        }
        let segment = self.segment_width();
        (1..self.stop_count - 1)
            .map(|index| segment * index as f64 - tick_width / 2.0)
            .collect()
    }
}
