use crate::*;

use std::vec;
use std::vec::Vec;
use toolbar_overflow::{RecalcOutcome, Region, ResponsiveToolbar, ToolbarOptions};

#[derive(Debug, Default)]
struct Log {
    calls: Vec<(&'static str, Region)>,
}

impl ResizeObserver for Log {
    fn observe(&mut self, region: Region) {
        self.calls.push(("observe", region));
    }

    fn unobserve(&mut self, region: Region) {
        self.calls.push(("unobserve", region));
    }
}

#[test]
fn subscription_observes_each_region_once_and_cleans_up() {
    let mut log = Log::default();
    {
        let mut sub = Subscription::new(&mut log);
        assert!(sub.is_observing(Region::Container));
        assert!(sub.is_observing(Region::Shadow));
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_observing(Region::Container));
    }
    assert_eq!(
        log.calls,
        vec![
            ("observe", Region::Container),
            ("observe", Region::Shadow),
            ("unobserve", Region::Container),
            ("unobserve", Region::Shadow),
        ]
    );

    let mut log = Log::default();
    drop(Subscription::new(&mut log));
    assert_eq!(log.calls.len(), 4);
    assert_eq!(log.calls[3], ("unobserve", Region::Shadow));
}

#[test]
fn rounding_clamps_and_rounds() {
    assert_eq!(Rounding::Floor.to_px(249.9), 249);
    assert_eq!(Rounding::Ceil.to_px(249.1), 250);
    assert_eq!(Rounding::Ceil.to_px(250.0), 250);
    assert_eq!(Rounding::Floor.to_px(-12.0), 0);
    assert_eq!(Rounding::Ceil.to_px(f32::NAN), 0);
    assert_eq!(Rounding::Floor.to_px(f32::INFINITY), u32::MAX);
}

#[test]
fn resize_queue_keeps_latest_width_per_region() {
    let mut q = ResizeQueue::new();
    assert!(q.is_empty());
    assert!(q.push(Region::Container, 300));
    assert!(q.push(Region::Container, 280));
    assert!(!q.push(Region::Container, 280));
    assert!(q.push(Region::Shadow, 500));

    let mut seen = Vec::new();
    q.drain(|r, w| seen.push((r, w)));
    assert_eq!(seen, vec![(Region::Container, 280), (Region::Shadow, 500)]);
    assert!(q.is_empty());

    // Unchanged after drain: dropped.
    assert!(!q.push(Region::Container, 280));
    q.set_known(Region::Shadow, Some(510));
    assert!(!q.push(Region::Shadow, 510));
}

#[test]
fn container_dedupe_follows_the_toolbar_width() {
    let toolbar = ResponsiveToolbar::new(
        vec!["File", "Edit", "View", "Help"],
        ToolbarOptions::new(()).with_initial_container_width(Some(30)),
    );
    let mut c = Controller::new(toolbar, Log::default(), CellMetrics::new("..."));
    c.before_paint();
    assert_eq!(c.partition().shown(), &[0, 1, 2, 3]);

    // Same as the initial width: nothing to do.
    assert!(!c.on_resize(ResizeEvent::new(Region::Container, 30.0)));

    // Width changed behind the queue's back; the host's next report must still land.
    c.toolbar_mut().set_container_width(17);
    c.before_paint();
    assert_eq!(c.partition().shown(), &[0, 1]);

    assert!(c.on_resize(ResizeEvent::new(Region::Container, 30.0)));
    c.before_paint();
    assert_eq!(c.toolbar().container_width(), Some(30));
    assert_eq!(c.partition().shown(), &[0, 1, 2, 3]);
}

#[test]
fn cell_metrics_use_display_width() {
    let mut m = CellMetrics::new("…").with_padding(1).with_gap(1);
    assert_eq!(m.label_width("abc"), 3 + 2 + 1);
    // Wide characters take two cells each.
    assert_eq!(m.label_width("漢字"), 4 + 2 + 1);

    let w = toolbar_overflow::MeasureNatural::<&str, ()>::item_width(&mut m, 0, &"File");
    assert_eq!(w, Some(7));
    let t = toolbar_overflow::MeasureNatural::<&str, ()>::trigger_width(
        &mut m,
        toolbar_overflow::TriggerProps::closed(),
        &(),
    );
    assert_eq!(t, Some(4));
}

#[test]
fn controller_drives_toolbar_from_resize_events() {
    let mut log = Log::default();
    {
        let labels = vec!["File", "Edit", "View", "Help"];
        // Each label is 4 cells + 2 padding = 6; trigger "..." is 3 + 2 = 5.
        let toolbar = ResponsiveToolbar::new(labels, ToolbarOptions::new(()));
        let mut c = Controller::new(toolbar, &mut log, CellMetrics::new("..."));

        assert_eq!(
            c.before_paint(),
            RecalcOutcome::Skipped(toolbar_overflow::MissingMeasurement::ContainerWidth)
        );

        assert!(c.on_resize(ResizeEvent::new(Region::Container, 30.0)));
        assert_eq!(c.before_paint(), RecalcOutcome::Unchanged);
        assert_eq!(c.partition().shown(), &[0, 1, 2, 3]);

        // A burst of notifications collapses into one update. 17.9 floors to 17 = 5 + 6 + 6.
        c.on_resize(ResizeEvent::new(Region::Container, 20.0));
        c.on_resize(ResizeEvent::new(Region::Container, 17.9));
        assert_eq!(
            c.before_paint(),
            RecalcOutcome::Updated {
                previous: 4,
                fit_count: 2
            }
        );
        assert_eq!(c.partition().shown(), &[0, 1]);
        assert_eq!(c.toolbar().container_width(), Some(17));

        c.set_active_index(Some(3));
        c.before_paint();
        assert_eq!(c.partition().shown(), &[0, 3]);
        assert_eq!(c.partition().overflowing(), &[1, 2]);

        assert!(!c.on_resize(ResizeEvent::new(Region::Container, 17.2)));
        c.unsubscribe();
        assert!(!c.on_resize(ResizeEvent::new(Region::Container, 40.0)));

        let tb = c.into_toolbar();
        assert_eq!(tb.fit_count(), 2);
    }
    assert_eq!(
        log.calls,
        vec![
            ("observe", Region::Container),
            ("observe", Region::Shadow),
            ("unobserve", Region::Container),
            ("unobserve", Region::Shadow),
        ]
    );
}
