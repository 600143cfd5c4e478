use serde::{Deserialize, Serialize};

use crate::core::{Stop, TooltipPosition, TooltipVisibility, ValueSource};

mod engine;
mod geometry_controller;
mod interaction_controller;
mod json_contract;
mod selection;
mod tooltip_controller;
mod validation;

pub use engine::SliderEngine;
pub use interaction_controller::HoverTarget;
pub use json_contract::{SELECTION_CHANGE_JSON_SCHEMA_V1, SelectionChangeJsonContractV1};
pub use selection::{ChangeCadence, Selection, SelectionChange, SelectionObserver};

/// Construction-time configuration for [`SliderEngine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderEngineConfig {
    pub value: ValueSource,
    pub from: Option<Stop>,
    pub to: Option<Stop>,
    pub has_steps: bool,
    pub tooltip_visibility: TooltipVisibility,
    pub tooltip_position: TooltipPosition,
    pub change_cadence: ChangeCadence,
}

impl SliderEngineConfig {
    #[must_use]
    pub fn new(value: ValueSource) -> Self {
        Self {
            value,
            from: None,
            to: None,
            has_steps: false,
            tooltip_visibility: TooltipVisibility::Always,
            tooltip_position: TooltipPosition::Over,
            change_cadence: ChangeCadence::Continuous,
        }
    }

    /// Initial selected stops; each side falls back to the first/last stop
    /// when absent or unmatched.
    #[must_use]
    pub fn with_initial_selection(
        mut self,
        from: impl Into<Stop>,
        to: impl Into<Stop>,
    ) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    #[must_use]
    pub fn with_steps(mut self, has_steps: bool) -> Self {
        self.has_steps = has_steps;
        self
    }

    #[must_use]
    pub fn with_tooltip_visibility(mut self, visibility: TooltipVisibility) -> Self {
        self.tooltip_visibility = visibility;
        self
    }

    #[must_use]
    pub fn with_tooltip_position(mut self, position: TooltipPosition) -> Self {
        self.tooltip_position = position;
        self
    }

    #[must_use]
    pub fn with_change_cadence(mut self, cadence: ChangeCadence) -> Self {
        self.change_cadence = cadence;
        self
    }
}
