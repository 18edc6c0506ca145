use toolbar_overflow::Region;

/// The host's size-change notification primitive.
///
/// After `observe(region)`, the host is expected to report box size changes of that region to
/// the adapter (e.g. via [`crate::Controller::on_resize`]) until `unobserve(region)` is called.
pub trait ResizeObserver {
    fn observe(&mut self, region: Region);
    fn unobserve(&mut self, region: Region);
}

impl<O: ResizeObserver + ?Sized> ResizeObserver for &mut O {
    fn observe(&mut self, region: Region) {
        (**self).observe(region);
    }

    fn unobserve(&mut self, region: Region) {
        (**self).unobserve(region);
    }
}

impl<O: ResizeObserver + ?Sized> ResizeObserver for alloc::boxed::Box<O> {
    fn observe(&mut self, region: Region) {
        (**self).observe(region);
    }

    fn unobserve(&mut self, region: Region) {
        (**self).unobserve(region);
    }
}

/// Keeps both toolbar regions observed for as long as it is alive.
///
/// Each region is observed exactly once; everything still observed is unobserved on drop.
#[derive(Debug)]
pub struct Subscription<O: ResizeObserver> {
    observer: O,
    observed: [bool; 2],
}

impl<O: ResizeObserver> Subscription<O> {
    /// Observes [`Region::Container`] and [`Region::Shadow`].
    pub fn new(observer: O) -> Self {
        let mut sub = Self {
            observer,
            observed: [false; 2],
        };
        for region in Region::ALL {
            sub.observe(region);
        }
        sub
    }

    pub fn is_observing(&self, region: Region) -> bool {
        self.observed[slot(region)]
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    fn observe(&mut self, region: Region) {
        let observed = &mut self.observed[slot(region)];
        if *observed {
            return;
        }
        adebug!(?region, "observe");
        self.observer.observe(region);
        *observed = true;
    }

    /// Stops observing all regions. Idempotent; also runs on drop.
    pub fn unsubscribe(&mut self) {
        for region in Region::ALL {
            let observed = &mut self.observed[slot(region)];
            if *observed {
                adebug!(?region, "unobserve");
                self.observer.unobserve(region);
                *observed = false;
            }
        }
    }
}

impl<O: ResizeObserver> Drop for Subscription<O> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

pub(crate) fn slot(region: Region) -> usize {
    match region {
        Region::Container => 0,
        Region::Shadow => 1,
    }
}
