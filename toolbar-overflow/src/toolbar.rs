use alloc::vec::Vec;
use core::cell::Cell;

use crate::fit::compute_fit_count_with_total;
use crate::partition::fill_priority_order;
use crate::shadow::ShadowTree;
use crate::{
    ActiveIndexState, MeasureNatural, OverflowView, Partition, RecalcOutcome, RecalcTrigger,
    Region, ToolbarOptions, ToolbarRenderer, TriggerProps,
};

/// A headless responsive-toolbar engine.
///
/// Decides which items fit into the visible row and which are routed to the overflow trigger.
/// It holds no UI objects:
/// - Your adapter reports container resizes and supplies natural widths through a
///   [`MeasureNatural`] provider.
/// - Events only *request* a recalculation; call [`Self::flush`] once per frame, after layout and
///   before paint, to run it.
/// - Rendering goes through a [`ToolbarRenderer`] or the `shown_items`/`overflowing_items` views.
///
/// For resize subscriptions and event coalescing, see the `toolbar-overflow-adapter` crate.
#[derive(Clone, Debug)]
pub struct ResponsiveToolbar<T, P = ()> {
    options: ToolbarOptions<P>,
    items: Vec<T>,
    active: ActiveIndexState,
    fit_count: usize,
    container_width: Option<u32>,

    priority: Vec<usize>,
    partition: Partition,
    shadow: ShadowTree,
    trigger: RecalcTrigger,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<T, P> ResponsiveToolbar<T, P> {
    /// Creates a toolbar showing every item until the first successful recalculation.
    ///
    /// A recalculation is requested immediately.
    pub fn new(items: Vec<T>, options: ToolbarOptions<P>) -> Self {
        let count = items.len();
        tdebug!(
            count,
            active = ?options.initial_active_index,
            container_width = ?options.initial_container_width,
            "ResponsiveToolbar::new"
        );
        let mut tb = Self {
            active: ActiveIndexState::new(options.initial_active_index),
            fit_count: count,
            container_width: options.initial_container_width,
            priority: Vec::new(),
            partition: Partition::all_shown(count),
            shadow: ShadowTree::default(),
            trigger: RecalcTrigger::new(),
            items,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        tb.rebuild_priority();
        tb.request_recalculation();
        tb
    }

    pub fn options(&self) -> &ToolbarOptions<P> {
        &self.options
    }

    pub fn trigger_params(&self) -> &P {
        &self.options.trigger_params
    }

    /// Replaces the extra trigger parameters. The trigger's natural width may change, so a
    /// recalculation is requested.
    pub fn set_trigger_params(&mut self, params: P) {
        self.options.trigger_params = params;
        self.shadow.invalidate_trigger();
        self.request_recalculation();
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Partition) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Replaces the item collection.
    ///
    /// All natural widths are invalidated and a recalculation is requested.
    pub fn set_items(&mut self, items: Vec<T>) {
        tdebug!(from = self.items.len(), to = items.len(), "set_items");
        self.items = items;
        let count = self.items.len();
        self.fit_count = self.fit_count.min(count);
        self.active.prune(count, self.fit_count);
        self.rebuild_priority();
        self.shadow.invalidate_items();
        self.request_recalculation();
    }

    /// Replaces the items while reusing the allocation of the old collection.
    pub fn update_items(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        let mut items = core::mem::take(&mut self.items);
        f(&mut items);
        self.set_items(items);
    }

    /// The externally requested active index (may be out of range; it is inert then).
    pub fn active_index(&self) -> Option<usize> {
        self.active.current()
    }

    pub fn previous_active_index(&self) -> Option<usize> {
        self.active.previous()
    }

    pub fn active_state(&self) -> ActiveIndexState {
        self.active
    }

    /// Applies the caller's active index.
    ///
    /// The priority order (and therefore the partition) updates immediately; the fit count is
    /// recomputed on the next `flush`.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        if self.active.request(index, &self.partition, self.fit_count) {
            self.rebuild_priority();
            self.request_recalculation();
        }
    }

    pub fn container_width(&self) -> Option<u32> {
        self.container_width
    }

    pub fn set_container_width(&mut self, width: u32) {
        if self.container_width == Some(width) {
            return;
        }
        self.container_width = Some(width);
        self.request_recalculation();
    }

    /// Applies a resize notification for one of the observed regions.
    ///
    /// For [`Region::Container`], `width` is the new available width. For [`Region::Shadow`],
    /// the width is informational: natural widths are re-read from the measurement provider on
    /// the next pass.
    pub fn apply_resize(&mut self, region: Region, width: u32) {
        ttrace!(?region, width, "apply_resize");
        match region {
            Region::Container => self.set_container_width(width),
            Region::Shadow => self.request_recalculation(),
        }
    }

    /// Requests a recalculation on the next `flush`. Repeated requests coalesce.
    pub fn request_recalculation(&mut self) {
        self.trigger.bump();
    }

    pub fn is_recalculation_pending(&self) -> bool {
        self.trigger.is_pending()
    }

    /// Number of recalculation requests made since creation.
    pub fn recalculation_requests(&self) -> u64 {
        self.trigger.requested()
    }

    pub fn fit_count(&self) -> usize {
        self.fit_count
    }

    /// Item indexes in the order used to decide which items survive under space pressure.
    pub fn priority_order(&self) -> &[usize] {
        &self.priority
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn shown_indices(&self) -> &[usize] {
        self.partition.shown()
    }

    pub fn overflowing_indices(&self) -> &[usize] {
        self.partition.overflowing()
    }

    pub fn has_overflow(&self) -> bool {
        self.partition.has_overflow()
    }

    /// Natural width of the whole row, as of the last pass.
    pub fn natural_width(&self) -> Option<u64> {
        self.shadow.natural_width()
    }

    pub fn natural_item_width(&self, index: usize) -> Option<u32> {
        self.shadow.item_width(index)
    }

    pub fn natural_trigger_width(&self) -> Option<u32> {
        self.shadow.trigger_width()
    }

    /// Visible items in document order.
    pub fn shown_items(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.partition
            .shown()
            .iter()
            .filter_map(|&i| self.items.get(i).map(|item| (i, item)))
    }

    /// Overflowing items in document order, or `None` when everything fits.
    pub fn overflowing_items(&self) -> Option<OverflowView<'_, T>> {
        self.partition
            .has_overflow()
            .then(|| OverflowView::new(self.partition.overflowing(), &self.items))
    }

    /// Props for the live trigger, or `None` when it must not be rendered.
    pub fn trigger_props(&self) -> Option<TriggerProps<'_>> {
        self.partition.has_overflow().then(|| TriggerProps {
            overflowing_indices: self.partition.overflowing(),
            shown: true,
        })
    }

    /// Renders the visible row into `out` (clears `out` first): shown items in document order,
    /// then the trigger if anything overflows.
    pub fn render_into<R: ToolbarRenderer<T, P>>(&self, renderer: &mut R, out: &mut Vec<R::Output>) {
        out.clear();
        for (index, item) in self.shown_items() {
            out.push(renderer.render_item(index, item));
        }
        if let (Some(props), Some(overflowing)) = (self.trigger_props(), self.overflowing_items()) {
            out.push(renderer.render_trigger(props, &self.options.trigger_params, overflowing));
        }
    }

    /// Allocating convenience wrapper around [`Self::render_into`].
    pub fn render<R: ToolbarRenderer<T, P>>(&self, renderer: &mut R) -> Vec<R::Output> {
        let mut out = Vec::with_capacity(self.partition.shown().len() + 1);
        self.render_into(renderer, &mut out);
        out
    }

    /// Runs pending recalculations.
    ///
    /// Call this once per frame after layout is committed and before paint. All requests made
    /// since the previous flush collapse into one pass; a pass that changes the priority order
    /// requests a follow-up pass, which runs here as well (bounded by
    /// `max_passes_per_flush`). Fires `on_change` at most once.
    ///
    /// A skipped pass ends the flush and is what gets reported, even if an earlier pass already
    /// updated the fit count.
    pub fn flush<M: MeasureNatural<T, P> + ?Sized>(&mut self, measure: &mut M) -> RecalcOutcome {
        let max_passes = self.options.max_passes_per_flush.max(1);
        let mut outcome = RecalcOutcome::Idle;
        self.batch_update(|tb| {
            let mut passes = 0usize;
            while tb.trigger.is_pending() && passes < max_passes {
                let pass = tb.recalculate(&mut *measure);
                outcome = merge_outcomes(outcome, pass);
                passes += 1;
                if pass.is_skipped() {
                    return;
                }
            }
            if tb.trigger.is_pending() {
                twarn!(passes, "flush: recalculation did not settle");
            }
        });
        outcome
    }

    /// Runs exactly one recalculation pass, consuming any pending request.
    ///
    /// Skipped, leaving the fit count and partition untouched, when a measurement is unavailable.
    pub fn recalculate<M: MeasureNatural<T, P> + ?Sized>(&mut self, measure: &mut M) -> RecalcOutcome {
        self.trigger.take();
        let count = self.items.len();
        let previous = self.fit_count;

        let next = if count == 0 {
            0
        } else {
            let Some(available) = self.container_width else {
                tdebug!("recalculate: container width unavailable");
                return RecalcOutcome::Skipped(crate::MissingMeasurement::ContainerWidth);
            };
            self.shadow
                .measure(&self.items, &self.options.trigger_params, measure);
            let input = match self.shadow.fit_input() {
                Ok(input) => input,
                Err(missing) => {
                    tdebug!(?missing, "recalculate: skipped");
                    return RecalcOutcome::Skipped(missing);
                }
            };
            compute_fit_count_with_total(
                &input.widths,
                input.natural_total,
                input.trigger_width,
                available,
            )
        };

        ttrace!(
            count,
            available = ?self.container_width,
            previous,
            fit_count = next,
            "recalculate"
        );

        let mut reordered = false;
        if next < previous {
            reordered |= self.active.clear_previous();
        }
        self.fit_count = next;
        reordered |= self.active.prune(count, next);

        if reordered {
            self.rebuild_priority();
            self.request_recalculation();
        } else {
            self.refresh_partition();
        }

        if next == previous {
            RecalcOutcome::Unchanged
        } else {
            RecalcOutcome::Updated {
                previous,
                fit_count: next,
            }
        }
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.partition);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    fn rebuild_priority(&mut self) {
        let count = self.items.len();
        fill_priority_order(
            count,
            self.active.effective_current(count),
            self.active.previous(),
            &mut self.priority,
        );
        self.shadow.sync(&self.priority);
        debug_assert_eq!(self.shadow.len(), count);
        self.refresh_partition();
    }

    fn refresh_partition(&mut self) {
        let next = Partition::from_priority(&self.priority, self.fit_count);
        if next != self.partition {
            self.partition = next;
            self.notify();
        }
    }
}

fn merge_outcomes(acc: RecalcOutcome, pass: RecalcOutcome) -> RecalcOutcome {
    match (acc, pass) {
        (RecalcOutcome::Updated { previous, .. }, RecalcOutcome::Updated { fit_count, .. }) => {
            if previous == fit_count {
                RecalcOutcome::Unchanged
            } else {
                RecalcOutcome::Updated {
                    previous,
                    fit_count,
                }
            }
        }
        (_, RecalcOutcome::Skipped(_)) => pass,
        (RecalcOutcome::Updated { .. }, _) => acc,
        (_, pass) => pass,
    }
}
