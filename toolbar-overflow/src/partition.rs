use alloc::vec::Vec;

/// Fills `out` with the priority order for `count` items (clears `out` first).
///
/// The active index sorts first, then the previous active index; every other index keeps its
/// natural relative order. Indexes `>= count` are ignored.
pub fn fill_priority_order(
    count: usize,
    active: Option<usize>,
    previous_active: Option<usize>,
    out: &mut Vec<usize>,
) {
    out.clear();
    out.reserve(count);

    let active = active.filter(|&i| i < count);
    let previous_active = previous_active.filter(|&i| i < count && Some(i) != active);

    out.extend(active);
    out.extend(previous_active);
    out.extend((0..count).filter(|&i| Some(i) != active && Some(i) != previous_active));
}

/// Allocating convenience wrapper around [`fill_priority_order`].
pub fn priority_order(
    count: usize,
    active: Option<usize>,
    previous_active: Option<usize>,
) -> Vec<usize> {
    let mut out = Vec::new();
    fill_priority_order(count, active, previous_active, &mut out);
    out
}

/// The visible/overflowing split of item indexes.
///
/// Both halves are sorted ascending and together cover every index exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    shown: Vec<usize>,
    overflowing: Vec<usize>,
}

impl Partition {
    /// Splits `priority` after its first `fit_count` entries and restores document order in both
    /// halves.
    pub fn from_priority(priority: &[usize], fit_count: usize) -> Self {
        let split = fit_count.min(priority.len());
        let mut shown = priority[..split].to_vec();
        let mut overflowing = priority[split..].to_vec();
        shown.sort_unstable();
        overflowing.sort_unstable();
        Self { shown, overflowing }
    }

    /// A partition where all `count` items are shown.
    pub fn all_shown(count: usize) -> Self {
        Self {
            shown: (0..count).collect(),
            overflowing: Vec::new(),
        }
    }

    pub fn shown(&self) -> &[usize] {
        &self.shown
    }

    pub fn overflowing(&self) -> &[usize] {
        &self.overflowing
    }

    pub fn len(&self) -> usize {
        self.shown.len() + self.overflowing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflowing.is_empty()
    }

    pub fn is_shown(&self, index: usize) -> bool {
        self.shown.binary_search(&index).is_ok()
    }

    pub fn is_overflowing(&self, index: usize) -> bool {
        self.overflowing.binary_search(&index).is_ok()
    }
}
