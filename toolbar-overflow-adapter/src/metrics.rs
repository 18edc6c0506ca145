use alloc::string::String;

use toolbar_overflow::{MeasureNatural, TriggerProps};
use unicode_width::UnicodeWidthStr;

/// Offline natural widths for text items, in terminal cells.
///
/// Useful for hosts without a layout engine (TUIs, tests): an item's natural width is the
/// display width of its label plus horizontal padding on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    trigger_label: String,
    padding: u32,
    gap: u32,
}

impl CellMetrics {
    pub fn new(trigger_label: impl Into<String>) -> Self {
        Self {
            trigger_label: trigger_label.into(),
            padding: 1,
            gap: 0,
        }
    }

    /// Cells added on each side of a label.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Cells separating neighbouring items; counted as part of each item's width.
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn trigger_label(&self) -> &str {
        &self.trigger_label
    }

    pub fn label_width(&self, label: &str) -> u32 {
        let text = u32::try_from(label.width()).unwrap_or(u32::MAX);
        text.saturating_add(self.padding.saturating_mul(2))
            .saturating_add(self.gap)
    }
}

impl<T: AsRef<str>, P> MeasureNatural<T, P> for CellMetrics {
    fn item_width(&mut self, _index: usize, item: &T) -> Option<u32> {
        Some(self.label_width(item.as_ref()))
    }

    fn trigger_width(&mut self, _props: TriggerProps<'_>, _params: &P) -> Option<u32> {
        Some(self.label_width(&self.trigger_label))
    }
}
