use crate::error::{SliderError, SliderResult};

/// Validates a selection index pair against the domain bounds.
pub(super) fn validate_index_pair(
    min_index: usize,
    max_index: usize,
    last_index: usize,
    context: &str,
) -> SliderResult<()> {
    if max_index > last_index {
        return Err(SliderError::InvalidConfig(format!(
            "{context}: max index {max_index} exceeds last stop index {last_index}"
        )));
    }
    if min_index > max_index {
        return Err(SliderError::InvalidConfig(format!(
            "{context}: min index {min_index} must be <= max index {max_index}"
        )));
    }
    Ok(())
}
