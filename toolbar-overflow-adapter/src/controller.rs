use alloc::vec::Vec;

use toolbar_overflow::{
    MeasureNatural, Partition, RecalcOutcome, Region, ResponsiveToolbar, ToolbarRenderer,
};

use crate::{ResizeEvent, ResizeObserver, ResizeQueue, Rounding, Subscription};

/// Pixel conversion for [`Controller`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    /// Applied to container widths. Flooring never claims space the container does not have.
    pub container_rounding: Rounding,
    /// Applied to shadow container widths.
    pub shadow_rounding: Rounding,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            container_rounding: Rounding::Floor,
            shadow_rounding: Rounding::Ceil,
        }
    }
}

impl ControllerOptions {
    pub fn rounding_for(&self, region: Region) -> Rounding {
        match region {
            Region::Container => self.container_rounding,
            Region::Shadow => self.shadow_rounding,
        }
    }
}

/// A framework-neutral controller that wires a `toolbar_overflow::ResponsiveToolbar` to a host's
/// resize primitive and measurement provider.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_resize` from the host's size-change callback
/// - `set_items` / `set_active_index` when the caller's inputs change
/// - `before_paint()` once per frame, after layout and before paint
///
/// Both regions are observed on construction and unobserved when the controller is dropped.
#[derive(Debug)]
pub struct Controller<T, P, O: ResizeObserver, M> {
    toolbar: ResponsiveToolbar<T, P>,
    measure: M,
    queue: ResizeQueue,
    options: ControllerOptions,
    subscription: Subscription<O>,
}

impl<T, P, O, M> Controller<T, P, O, M>
where
    O: ResizeObserver,
    M: MeasureNatural<T, P>,
{
    pub fn new(toolbar: ResponsiveToolbar<T, P>, observer: O, measure: M) -> Self {
        Self::with_options(toolbar, observer, measure, ControllerOptions::default())
    }

    pub fn with_options(
        toolbar: ResponsiveToolbar<T, P>,
        observer: O,
        measure: M,
        options: ControllerOptions,
    ) -> Self {
        Self {
            toolbar,
            measure,
            queue: ResizeQueue::new(),
            options,
            subscription: Subscription::new(observer),
        }
    }

    pub fn toolbar(&self) -> &ResponsiveToolbar<T, P> {
        &self.toolbar
    }

    pub fn toolbar_mut(&mut self) -> &mut ResponsiveToolbar<T, P> {
        &mut self.toolbar
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Gives access to the measurement provider, e.g. to push widths from a hidden layout pass.
    ///
    /// Request a recalculation afterwards if widths changed without a resize notification.
    pub fn measure_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn subscription(&self) -> &Subscription<O> {
        &self.subscription
    }

    pub fn partition(&self) -> &Partition {
        self.toolbar.partition()
    }

    /// Records a size change from the host. Returns `false` if it changes nothing.
    ///
    /// Events are coalesced and applied on the next `before_paint`.
    pub fn on_resize(&mut self, event: ResizeEvent) -> bool {
        if !self.subscription.is_observing(event.region) {
            return false;
        }
        let px = self.options.rounding_for(event.region).to_px(event.width);
        if event.region == Region::Container {
            // The toolbar may have been resized through `toolbar_mut`.
            self.queue
                .set_known(Region::Container, self.toolbar.container_width());
        }
        self.queue.push(event.region, px)
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.toolbar.set_items(items);
    }

    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.toolbar.set_active_index(index);
    }

    /// Applies queued resizes and runs pending recalculations.
    pub fn before_paint(&mut self) -> RecalcOutcome {
        let toolbar = &mut self.toolbar;
        self.queue
            .drain(|region, width| toolbar.apply_resize(region, width));
        self.toolbar.flush(&mut self.measure)
    }

    pub fn render<R: ToolbarRenderer<T, P>>(&self, renderer: &mut R) -> Vec<R::Output> {
        self.toolbar.render(renderer)
    }

    /// Stops observing both regions. Later resize events are ignored.
    pub fn unsubscribe(&mut self) {
        self.subscription.unsubscribe();
    }

    /// Stops observing both regions and hands back the toolbar.
    pub fn into_toolbar(self) -> ResponsiveToolbar<T, P> {
        let Self {
            toolbar,
            subscription,
            ..
        } = self;
        drop(subscription);
        toolbar
    }
}
