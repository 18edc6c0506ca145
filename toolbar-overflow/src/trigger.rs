/// Monotonic recalculation counter.
///
/// Every event that may change the answer bumps `requested`; a recalculation pass consumes all
/// outstanding bumps at once, so any number of events between two paints collapse into one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecalcTrigger {
    requested: u64,
    consumed: u64,
}

impl RecalcTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&mut self) {
        self.requested = self.requested.wrapping_add(1);
    }

    pub fn is_pending(&self) -> bool {
        self.requested != self.consumed
    }

    /// Consumes outstanding requests. Returns `false` if nothing was pending.
    pub fn take(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.consumed = self.requested;
        true
    }

    /// Total number of requests made so far.
    pub fn requested(&self) -> u64 {
        self.requested
    }
}
