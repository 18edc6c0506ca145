// Example: a terminal menu bar that folds entries into "…" as the window narrows.
use toolbar_overflow::{
    OverflowView, Region, ResponsiveToolbar, ToolbarOptions, ToolbarRenderer, TriggerProps,
};
use toolbar_overflow_adapter::{CellMetrics, Controller, ResizeEvent, ResizeObserver};

/// Stands in for the terminal's SIGWINCH plumbing.
#[derive(Default)]
struct Terminal;

impl ResizeObserver for Terminal {
    fn observe(&mut self, region: Region) {
        println!("observe {region:?}");
    }

    fn unobserve(&mut self, region: Region) {
        println!("unobserve {region:?}");
    }
}

struct MenuBar;

impl ToolbarRenderer<&'static str, ()> for MenuBar {
    type Output = String;

    fn render_item(&mut self, _index: usize, item: &&'static str) -> String {
        format!(" {item} ")
    }

    fn render_trigger(
        &mut self,
        _props: TriggerProps<'_>,
        _params: &(),
        overflowing: OverflowView<'_, &'static str>,
    ) -> String {
        format!(" … ({})", overflowing.len())
    }
}

fn main() {
    let toolbar = ResponsiveToolbar::new(
        vec!["File", "Edit", "Selection", "View", "Go", "Run", "Terminal", "Help"],
        ToolbarOptions::new(()),
    );
    let mut c = Controller::new(toolbar, Terminal, CellMetrics::new("…"));
    c.set_active_index(Some(6));

    for cols in [80.0, 48.0, 30.0, 16.0, 6.0] {
        c.on_resize(ResizeEvent::new(Region::Container, cols));
        let outcome = c.before_paint();
        let line: String = c.render(&mut MenuBar).concat();
        println!("{cols:>4} cols {outcome:?}\n|{line}|");
    }
}
