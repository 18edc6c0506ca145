/// One of the two boxes the engine watches for size changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// The visible flow container. Its width is the available width.
    Container,
    /// The hidden natural-width mirror of the items.
    Shadow,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Container, Region::Shadow];
}

/// Parameters handed to the overflow trigger.
///
/// The shadow copy of the trigger is always measured with [`TriggerProps::closed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerProps<'a> {
    pub overflowing_indices: &'a [usize],
    /// `true` iff at least one item currently overflows.
    pub shown: bool,
}

impl TriggerProps<'static> {
    pub const fn closed() -> Self {
        Self {
            overflowing_indices: &[],
            shown: false,
        }
    }
}

/// The input that was unavailable when a recalculation pass had to be skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingMeasurement {
    ContainerWidth,
    TriggerWidth,
    ItemWidth(usize),
}

/// Result of a recalculation pass (or of a whole flush).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecalcOutcome {
    /// Nothing was pending.
    Idle,
    /// A measurement was missing; the pass is retried on the next trigger.
    Skipped(MissingMeasurement),
    /// The fit count was recomputed and did not change.
    Unchanged,
    /// The fit count changed.
    Updated { previous: usize, fit_count: usize },
}

impl RecalcOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}
