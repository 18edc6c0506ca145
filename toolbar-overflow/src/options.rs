use alloc::sync::Arc;

use crate::Partition;

/// A callback fired when the visible/overflowing split changes.
pub type OnChangeCallback = Arc<dyn Fn(&Partition) + Send + Sync>;

/// Configuration for [`crate::ResponsiveToolbar`].
///
/// Cheap to clone as long as `P` is: the callback is stored in an `Arc`.
pub struct ToolbarOptions<P = ()> {
    /// Extra parameters passed through verbatim to the overflow trigger (both the live trigger
    /// and its shadow copy).
    pub trigger_params: P,

    pub initial_active_index: Option<usize>,

    /// Available width before the first container resize notification arrives.
    pub initial_container_width: Option<u32>,

    /// Optional callback fired when the partition changes.
    ///
    /// Within [`crate::ResponsiveToolbar::batch_update`] and `flush`, at most one notification is
    /// fired.
    pub on_change: Option<OnChangeCallback>,

    /// Upper bound on chained recalculation passes in a single `flush`.
    ///
    /// A pass can request another one (for example when it clears the previous active index and
    /// thereby changes the priority order).
    pub max_passes_per_flush: usize,
}

impl<P: Clone> Clone for ToolbarOptions<P> {
    fn clone(&self) -> Self {
        Self {
            trigger_params: self.trigger_params.clone(),
            initial_active_index: self.initial_active_index,
            initial_container_width: self.initial_container_width,
            on_change: self.on_change.clone(),
            max_passes_per_flush: self.max_passes_per_flush,
        }
    }
}

impl<P: Default> Default for ToolbarOptions<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P> ToolbarOptions<P> {
    pub fn new(trigger_params: P) -> Self {
        Self {
            trigger_params,
            initial_active_index: None,
            initial_container_width: None,
            on_change: None,
            max_passes_per_flush: 4,
        }
    }

    pub fn with_trigger_params(mut self, trigger_params: P) -> Self {
        self.trigger_params = trigger_params;
        self
    }

    pub fn with_initial_active_index(mut self, index: Option<usize>) -> Self {
        self.initial_active_index = index;
        self
    }

    pub fn with_initial_container_width(mut self, width: Option<u32>) -> Self {
        self.initial_container_width = width;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Partition) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_max_passes_per_flush(mut self, passes: usize) -> Self {
        self.max_passes_per_flush = passes.max(1);
        self
    }
}

impl<P: core::fmt::Debug> core::fmt::Debug for ToolbarOptions<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToolbarOptions")
            .field("trigger_params", &self.trigger_params)
            .field("initial_active_index", &self.initial_active_index)
            .field("initial_container_width", &self.initial_container_width)
            .field("max_passes_per_flush", &self.max_passes_per_flush)
            .finish_non_exhaustive()
    }
}
