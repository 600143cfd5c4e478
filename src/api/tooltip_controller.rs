use crate::core::{
    MergedTooltipLayout, TooltipMetrics, TooltipState, TooltipVisibility, Visibility,
    merged_tooltip_layout,
};
use crate::interaction::Handle;

use super::SliderEngine;
use super::interaction_controller::HoverTarget;

impl SliderEngine {
    /// Host-measured tooltip widths. Re-evaluates the merge decision, since
    /// the overlap test depends on them.
    pub fn set_tooltip_metrics(&mut self, min_width: f64, max_width: f64, mid_width: f64) {
        self.tooltip_metrics = Some(TooltipMetrics {
            min_width,
            max_width,
            mid_width,
        });
        self.refresh_merge();
    }

    #[must_use]
    pub fn tooltip_metrics(&self) -> Option<TooltipMetrics> {
        self.tooltip_metrics
    }

    /// Resolved visibility for the min/max/merged tooltips under the
    /// configured mode and the current hover/drag/merge state.
    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        match self.tooltip_visibility {
            TooltipVisibility::Never => TooltipState::all_hidden(),
            TooltipVisibility::Always => {
                if self.merged {
                    merged_only()
                } else {
                    both_sides()
                }
            }
            TooltipVisibility::Hover => {
                if let Some(handle) = self.drag.active_handle() {
                    if self.merged {
                        merged_only()
                    } else {
                        single_side(handle)
                    }
                } else if let Some(hovered) = self.hovered {
                    if self.merged {
                        merged_only()
                    } else {
                        match hovered {
                            HoverTarget::MinHandle => single_side(Handle::Min),
                            HoverTarget::MaxHandle => single_side(Handle::Max),
                            HoverTarget::Track => TooltipState::all_hidden(),
                        }
                    }
                } else {
                    TooltipState::all_hidden()
                }
            }
        }
    }

    /// Pixel center each side tooltip is anchored on (the handle center).
    #[must_use]
    pub fn tooltip_anchor(&self, handle: Handle) -> Option<f64> {
        let pixels = self.pixels?;
        let offset = match handle {
            Handle::Min => pixels.min_offset,
            Handle::Max => pixels.max_offset,
        };
        Some(pixels.geometry.handle_center(offset))
    }

    /// Placement of the merged midpoint tooltip, clamped to the rail extent.
    /// Requires measured geometry and tooltip metrics.
    #[must_use]
    pub fn merged_tooltip_layout(&self) -> Option<MergedTooltipLayout> {
        let pixels = self.pixels?;
        let metrics = self.tooltip_metrics?;
        let highlight = pixels
            .geometry
            .track_highlight(pixels.min_offset, pixels.max_offset);
        Some(merged_tooltip_layout(
            highlight.left,
            highlight.width,
            metrics.mid_width,
            pixels.geometry.rail_length(),
        ))
    }

    /// Merged-tooltip label: `"a - b"`, collapsed to `"a"` when both sides
    /// show the same value.
    #[must_use]
    pub fn merged_label(&self) -> String {
        if self.selection.min_value == self.selection.max_value {
            self.selection.min_value.clone()
        } else {
            format!("{} - {}", self.selection.min_value, self.selection.max_value)
        }
    }
}

fn merged_only() -> TooltipState {
    TooltipState {
        min: Visibility::Hidden,
        max: Visibility::Hidden,
        merged: Visibility::Visible,
    }
}

fn both_sides() -> TooltipState {
    TooltipState {
        min: Visibility::Visible,
        max: Visibility::Visible,
        merged: Visibility::Hidden,
    }
}

fn single_side(handle: Handle) -> TooltipState {
    match handle {
        Handle::Min => TooltipState {
            min: Visibility::Visible,
            max: Visibility::Hidden,
            merged: Visibility::Hidden,
        },
        Handle::Max => TooltipState {
            min: Visibility::Hidden,
            max: Visibility::Visible,
            merged: Visibility::Hidden,
        },
    }
}
