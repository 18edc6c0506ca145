use alloc::vec::Vec;

use crate::{MissingMeasurement, TriggerProps};

/// Reports natural (unconstrained) widths for the shadow measurement tree.
///
/// A visual host typically answers from a hidden, non-interactive layout pass laid out at
/// max-content width. A non-visual host can answer from offline text or shape metrics.
/// Returning `None` means "not measured yet"; the pass is skipped and retried later.
pub trait MeasureNatural<T, P> {
    fn item_width(&mut self, index: usize, item: &T) -> Option<u32>;

    /// Width of the trigger rendered in its closed state (`props` is always
    /// [`TriggerProps::closed`]) with the caller's extra parameters.
    fn trigger_width(&mut self, props: TriggerProps<'_>, params: &P) -> Option<u32>;
}

impl<T, P, M: MeasureNatural<T, P> + ?Sized> MeasureNatural<T, P> for &mut M {
    fn item_width(&mut self, index: usize, item: &T) -> Option<u32> {
        (**self).item_width(index, item)
    }

    fn trigger_width(&mut self, props: TriggerProps<'_>, params: &P) -> Option<u32> {
        (**self).trigger_width(props, params)
    }
}

/// A measurement provider backed by widths pushed from the host's own layout pass.
///
/// Item content is ignored; widths are looked up by index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidthTable {
    items: Vec<Option<u32>>,
    trigger: Option<u32>,
}

impl WidthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_widths(items: impl IntoIterator<Item = u32>, trigger: u32) -> Self {
        Self {
            items: items.into_iter().map(Some).collect(),
            trigger: Some(trigger),
        }
    }

    /// Records an item width. A write at `usize::MAX` is ignored.
    pub fn set_item(&mut self, index: usize, width: u32) {
        let Some(len) = index.checked_add(1) else {
            return;
        };
        if index >= self.items.len() {
            self.items.resize(len, None);
        }
        self.items[index] = Some(width);
    }

    pub fn set_trigger(&mut self, width: u32) {
        self.trigger = Some(width);
    }

    /// Forgets all widths, e.g. after the item set was replaced.
    pub fn clear(&mut self) {
        self.items.clear();
        self.trigger = None;
    }

    pub fn truncate(&mut self, count: usize) {
        self.items.truncate(count);
    }
}

impl<T, P> MeasureNatural<T, P> for WidthTable {
    fn item_width(&mut self, index: usize, _item: &T) -> Option<u32> {
        self.items.get(index).copied().flatten()
    }

    fn trigger_width(&mut self, _props: TriggerProps<'_>, _params: &P) -> Option<u32> {
        self.trigger
    }
}

/// Fully measured inputs for the fit calculator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FitInput {
    /// Natural widths in priority order.
    pub widths: Vec<u32>,
    pub natural_total: u64,
    pub trigger_width: u32,
}

/// Off-screen mirror of the items (in priority order) plus one closed trigger.
///
/// Owned by the toolbar and never handed out. A priority change only reorders the mirror; widths
/// are kept per item index until the content changes, and re-measured on every pass.
#[derive(Clone, Debug, Default)]
pub(crate) struct ShadowTree {
    order: Vec<usize>,
    widths: Vec<Option<u32>>, // by item index
    trigger_width: Option<u32>,
}

impl ShadowTree {
    pub fn sync(&mut self, priority: &[usize]) {
        self.order.clear();
        self.order.extend_from_slice(priority);
        self.widths.resize(priority.len(), None);
    }

    /// Forgets every item width, e.g. after the item content was replaced.
    pub fn invalidate_items(&mut self) {
        self.widths.fill(None);
    }

    pub fn invalidate_trigger(&mut self) {
        self.trigger_width = None;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn measure<T, P, M>(&mut self, items: &[T], params: &P, measure: &mut M)
    where
        M: MeasureNatural<T, P> + ?Sized,
    {
        debug_assert_eq!(items.len(), self.order.len(), "shadow tree out of sync");
        for &index in &self.order {
            if let Some(item) = items.get(index) {
                self.widths[index] = measure.item_width(index, item);
            }
        }
        self.trigger_width = measure.trigger_width(TriggerProps::closed(), params);
    }

    pub fn item_width(&self, index: usize) -> Option<u32> {
        self.widths.get(index).copied().flatten()
    }

    pub fn trigger_width(&self) -> Option<u32> {
        self.trigger_width
    }

    pub fn natural_width(&self) -> Option<u64> {
        self.widths
            .iter()
            .try_fold(0u64, |acc, w| w.map(|w| acc.saturating_add(w as u64)))
    }

    pub fn fit_input(&self) -> Result<FitInput, MissingMeasurement> {
        let trigger_width = self.trigger_width.ok_or(MissingMeasurement::TriggerWidth)?;
        let mut widths = Vec::with_capacity(self.order.len());
        let mut natural_total = 0u64;
        for &index in &self.order {
            let width = self
                .widths
                .get(index)
                .copied()
                .flatten()
                .ok_or(MissingMeasurement::ItemWidth(index))?;
            natural_total = natural_total.saturating_add(width as u64);
            widths.push(width);
        }
        Ok(FitInput {
            widths,
            natural_total,
            trigger_width,
        })
    }
}
