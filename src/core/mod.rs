pub mod domain;
pub mod geometry;
pub mod tooltip;

pub use domain::{Stop, ValueDomain, ValueFormatterFn, ValueSource, enumerate_range};
pub use geometry::{RailGeometry, TrackHighlight};
pub use tooltip::{
    MergedTooltipLayout, TooltipMetrics, TooltipPosition, TooltipState, TooltipVisibility,
    Visibility, evaluate_merge, merged_tooltip_layout, tooltips_collide,
};
