use crate::Partition;

/// Tracks the applied active index and the one-cycle "previous active" grace slot.
///
/// The previous active index keeps a just-deselected item visible for the pass in which the
/// selection changes, so it does not pop out of the row in the same frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveIndexState {
    current: Option<usize>,
    previous: Option<usize>,
}

impl ActiveIndexState {
    pub fn new(current: Option<usize>) -> Self {
        Self {
            current,
            previous: None,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// The active index if it refers to one of `count` items.
    pub fn effective_current(&self, count: usize) -> Option<usize> {
        self.current.filter(|&i| i < count)
    }

    /// Applies a new externally requested active index.
    ///
    /// `partition` and `fit_count` describe the state before the change. Returns `true` when a
    /// recalculation must be forced.
    pub fn request(&mut self, next: Option<usize>, partition: &Partition, fit_count: usize) -> bool {
        if next == self.current {
            return false;
        }

        let lands_in_view = match next {
            None => true,
            Some(index) => partition.is_shown(index),
        };

        self.previous = if lands_in_view {
            // Only an outgoing index beyond the natural range was visible through promotion.
            self.current.filter(|&cur| cur >= fit_count)
        } else {
            None
        };

        ttrace!(
            from = ?self.current,
            to = ?next,
            previous = ?self.previous,
            fit_count,
            "ActiveIndexState::request"
        );
        self.current = next;
        true
    }

    /// Drops the grace slot. Returns `true` if it was set.
    pub fn clear_previous(&mut self) -> bool {
        self.previous.take().is_some()
    }

    /// Clears the previous active index once it refers to a removed item or falls inside the
    /// natural shown range. Returns `true` if it was cleared.
    pub fn prune(&mut self, count: usize, fit_count: usize) -> bool {
        match self.previous {
            Some(prev) if prev >= count || prev < fit_count => {
                ttrace!(prev, count, fit_count, "ActiveIndexState::prune");
                self.previous = None;
                true
            }
            _ => false,
        }
    }
}
