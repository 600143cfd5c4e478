//! range-slider-rs: headless dual-handle range-selection engine.
//!
//! This crate owns the positioning and interaction logic of a two-handle
//! range slider: index ⇄ pixel ⇄ percent geometry, the pointer-drag state
//! machine with snapping and non-crossing enforcement, tooltip merge
//! detection, and selection-change notification. Rendering and native event
//! registration stay with the host UI, which supplies measured dimensions and
//! forwards pointer coordinates.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{SliderEngine, SliderEngineConfig};
pub use error::{SliderError, SliderResult};
