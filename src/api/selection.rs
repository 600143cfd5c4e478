use serde::{Deserialize, Serialize};

/// Current selection: index pair plus formatted values.
///
/// Invariant: `min_index <= max_index`, both within the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub min_index: usize,
    pub max_index: usize,
    pub min_value: String,
    pub max_value: String,
}

/// Host-facing payload delivered on selection changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionChange {
    pub min: String,
    pub max: String,
    pub min_index: usize,
    pub max_index: usize,
}

impl Selection {
    #[must_use]
    pub fn to_change(&self) -> SelectionChange {
        SelectionChange {
            min: self.min_value.clone(),
            max: self.max_value.clone(),
            min_index: self.min_index,
            max_index: self.max_index,
        }
    }
}

/// When selection-change notifications are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeCadence {
    /// Notify on every committed drag move (and on completed jumps).
    Continuous,
    /// Notify only on pointer-up/cancel and completed jumps.
    OnCommit,
}

/// Observer hook for selection changes.
///
/// Closures work directly: any `FnMut(&SelectionChange)` implements this.
pub trait SelectionObserver {
    fn on_selection_change(&mut self, change: &SelectionChange);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&SelectionChange),
{
    fn on_selection_change(&mut self, change: &SelectionChange) {
        self(change);
    }
}

/// Fans a selection change out to all registered observers.
///
/// Construction never notifies; only user-caused changes flow through here.
pub(super) struct SelectionEmitter {
    cadence: ChangeCadence,
    observers: Vec<Box<dyn SelectionObserver + Send>>,
}

impl SelectionEmitter {
    pub(super) fn new(cadence: ChangeCadence) -> Self {
        Self {
            cadence,
            observers: Vec::new(),
        }
    }

    pub(super) fn cadence(&self) -> ChangeCadence {
        self.cadence
    }

    pub(super) fn add_observer(&mut self, observer: Box<dyn SelectionObserver + Send>) {
        self.observers.push(observer);
    }

    pub(super) fn notify(&mut self, change: &SelectionChange) {
        for observer in &mut self.observers {
            observer.on_selection_change(change);
        }
    }
}
