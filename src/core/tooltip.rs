use serde::{Deserialize, Serialize};

/// Host-facing visibility policy for the value tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipVisibility {
    /// Min/max tooltips visible whenever not merged, merged tooltip when merged.
    Always,
    /// Tooltips show only while hovering a handle or track, or during a drag.
    Hover,
    /// All tooltips hidden unconditionally.
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPosition {
    Over,
    Under,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Resolved visibility for the three tooltips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipState {
    pub min: Visibility,
    pub max: Visibility,
    pub merged: Visibility,
}

impl TooltipState {
    #[must_use]
    pub fn all_hidden() -> Self {
        Self {
            min: Visibility::Hidden,
            max: Visibility::Hidden,
            merged: Visibility::Hidden,
        }
    }
}

/// Host-measured tooltip widths, required for the geometric overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipMetrics {
    pub min_width: f64,
    pub max_width: f64,
    pub mid_width: f64,
}

/// Placement of the merged midpoint tooltip after container clamping.
///
/// `caret_offset` is the distance from the tooltip's left edge to the point
/// it annotates; it equals half the tooltip width unless clamping displaced
/// the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergedTooltipLayout {
    pub left: f64,
    pub caret_offset: f64,
}

/// Bounding-interval overlap between the two tooltip boxes.
///
/// Both tooltips share a row, so the vertical half of the rectangle test
/// always intersects and the check reduces to one dimension.
#[must_use]
pub fn tooltips_collide(
    min_center: f64,
    min_width: f64,
    max_center: f64,
    max_width: f64,
) -> bool {
    let a_right = min_center + min_width / 2.0;
    let a_left = min_center - min_width / 2.0;
    let b_right = max_center + max_width / 2.0;
    let b_left = max_center - max_width / 2.0;

    !(a_right < b_left || a_left > b_right)
}

/// Merge decision for the two value tooltips.
///
/// Coinciding indices force a merge regardless of measured geometry; the
/// geometric test only applies once the host has supplied tooltip widths.
#[must_use]
pub fn evaluate_merge(
    min_index: usize,
    max_index: usize,
    min_center: f64,
    max_center: f64,
    metrics: Option<TooltipMetrics>,
) -> bool {
    if min_index == max_index {
        return true;
    }

    match metrics {
        Some(metrics) => tooltips_collide(
            min_center,
            metrics.min_width,
            max_center,
            metrics.max_width,
        ),
        None => false,
    }
}

/// Anchors the merged tooltip at the track midpoint, clamped so it never
/// renders outside the rail's horizontal extent.
#[must_use]
pub fn merged_tooltip_layout(
    track_left: f64,
    track_width: f64,
    mid_width: f64,
    rail_length: f64,
) -> MergedTooltipLayout {
    let center = track_left + track_width / 2.0;
    let raw_left = center - mid_width / 2.0;
    let max_left = (rail_length - mid_width).max(0.0);
    let left = raw_left.clamp(0.0, max_left);

    MergedTooltipLayout {
        left,
        caret_offset: center - left,
    }
}
