use toolbar_overflow::Region;

use crate::observer::slot;

/// A size change reported by the host, in (possibly fractional) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeEvent {
    pub region: Region,
    pub width: f32,
}

impl ResizeEvent {
    pub fn new(region: Region, width: f32) -> Self {
        Self { region, width }
    }
}

/// How fractional host widths are turned into whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    #[default]
    Floor,
    Ceil,
}

impl Rounding {
    /// Converts `width` to whole pixels. Negative, NaN and infinite-negative widths become 0.
    pub fn to_px(self, width: f32) -> u32 {
        if width.is_nan() || width <= 0.0 {
            return 0;
        }
        // `as` saturates at u32::MAX.
        let truncated = width as u32;
        match self {
            Self::Floor => truncated,
            Self::Ceil if (truncated as f32) < width => truncated.saturating_add(1),
            Self::Ceil => truncated,
        }
    }
}

/// Collects resize notifications between two frames.
///
/// Only the latest width per region survives, and a width equal to the last known one is
/// dropped, so a burst of notifications results in at most one update per region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeQueue {
    last: [Option<u32>; 2],
    pending: [Option<u32>; 2],
}

impl ResizeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `width` as the one currently applied for `region` (`None`: nothing applied yet).
    pub fn set_known(&mut self, region: Region, width: Option<u32>) {
        self.last[slot(region)] = width;
    }

    /// Records a width. Returns `false` if it does not change anything.
    pub fn push(&mut self, region: Region, width: u32) -> bool {
        let i = slot(region);
        let known = self.pending[i].or(self.last[i]);
        if known == Some(width) {
            return false;
        }
        atrace!(?region, width, "ResizeQueue::push");
        self.pending[i] = Some(width);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.pending.iter().all(Option::is_none)
    }

    /// Hands every pending width to `f`, container first.
    pub fn drain(&mut self, mut f: impl FnMut(Region, u32)) {
        for region in Region::ALL {
            let i = slot(region);
            if let Some(width) = self.pending[i].take() {
                self.last[i] = Some(width);
                f(region, width);
            }
        }
    }
}
