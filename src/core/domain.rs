use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Formatter applied when turning a stop into its display string.
pub type ValueFormatterFn = Arc<dyn Fn(&Stop) -> String + Send + Sync + 'static>;

/// One selectable position in the ordered domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stop {
    Number(f64),
    Text(String),
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<f64> for Stop {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Stop {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Stop {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Stop {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Source description for the selectable domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueSource {
    /// Inclusive integer interval enumerated at unit step.
    Interval { min: i64, max: i64 },
    /// Explicit ordered stop list, taken verbatim.
    Stops(Vec<Stop>),
}

/// Enumerates `[start, end)` at the given step.
///
/// Number endpoints step arithmetically; single-character text endpoints step
/// by code point. Mixing endpoint kinds, a zero step, or a step sign that
/// contradicts `end - start` are domain errors.
pub fn enumerate_range(start: &Stop, end: &Stop, step: f64) -> SliderResult<Vec<Stop>> {
    if step == 0.0 || !step.is_finite() {
        return Err(SliderError::InvalidDomain(
            "range step must be finite and non-zero".to_owned(),
        ));
    }

    match (start, end) {
        (Stop::Number(start), Stop::Number(end)) => {
            let span = end - start;
            if span != 0.0 && span.signum() != step.signum() {
                return Err(SliderError::InvalidDomain(
                    "range step sign must match the direction of end - start".to_owned(),
                ));
            }
            let count = (span / step).ceil().max(0.0) as usize;
            Ok((0..count)
                .map(|i| Stop::Number(start + i as f64 * step))
                .collect())
        }
        (Stop::Text(start), Stop::Text(end)) => {
            let start = single_char(start)?;
            let end = single_char(end)?;
            let span = i64::from(u32::from(end)) - i64::from(u32::from(start));
            let step = step.trunc() as i64;
            if step == 0 {
                return Err(SliderError::InvalidDomain(
                    "text range step must have magnitude >= 1".to_owned(),
                ));
            }
            if span != 0 && span.signum() != step.signum() {
                return Err(SliderError::InvalidDomain(
                    "range step sign must match the direction of end - start".to_owned(),
                ));
            }
            let count = (span as f64 / step as f64).ceil().max(0.0) as i64;
            let mut stops = Vec::with_capacity(count.max(0) as usize);
            for i in 0..count {
                let code = u32::from(start) as i64 + i * step;
                let ch = u32::try_from(code).ok().and_then(char::from_u32);
                match ch {
                    Some(ch) => stops.push(Stop::Text(ch.to_string())),
                    None => {
                        return Err(SliderError::InvalidDomain(format!(
                            "text range produced invalid code point: {code}"
                        )));
                    }
                }
            }
            Ok(stops)
        }
        _ => Err(SliderError::InvalidDomain(
            "range endpoints must both be numbers or both be text".to_owned(),
        )),
    }
}

fn single_char(value: &str) -> SliderResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(SliderError::InvalidDomain(format!(
            "text range endpoints must be single characters, got {value:?}"
        ))),
    }
}

/// Immutable ordered sequence of selectable stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDomain {
    stops: Vec<Stop>,
}

impl ValueDomain {
    pub fn from_source(source: &ValueSource) -> SliderResult<Self> {
        let stops = match source {
            ValueSource::Interval { min, max } => {
                if max < min {
                    return Err(SliderError::InvalidDomain(format!(
                        "interval max must be >= min, got min={min}, max={max}"
                    )));
                }
                enumerate_range(&Stop::Number(*min as f64), &Stop::Number(*max as f64 + 1.0), 1.0)?
            }
            ValueSource::Stops(stops) => stops.clone(),
        };

        if stops.is_empty() {
            return Err(SliderError::InvalidDomain(
                "domain must contain at least one stop".to_owned(),
            ));
        }

        Ok(Self { stops })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// A single-stop domain pins both handles and disables dragging.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.stops.len() < 2
    }

    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    #[must_use]
    pub fn stop(&self, index: usize) -> &Stop {
        &self.stops[index]
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.stops.len() - 1
    }

    /// Returns the first position of `value`, or `fallback` when absent.
    #[must_use]
    pub fn resolve_index(&self, value: &Stop, fallback: usize) -> usize {
        self.stops
            .iter()
            .position(|stop| stop == value)
            .unwrap_or(fallback)
    }

    /// Formats the stop at `index` with the optional formatter.
    #[must_use]
    pub fn format(&self, index: usize, formatter: Option<&ValueFormatterFn>) -> String {
        let stop = &self.stops[index];
        match formatter {
            Some(formatter) => formatter(stop),
            None => stop.to_string(),
        }
    }
}
