// Example: keeping the selected item visible, and the one-cycle grace slot on deselect.
use toolbar_overflow::{
    OverflowView, ResponsiveToolbar, ToolbarOptions, ToolbarRenderer, TriggerProps, WidthTable,
};

struct Line;

impl ToolbarRenderer<&'static str, ()> for Line {
    type Output = String;

    fn render_item(&mut self, _index: usize, item: &&'static str) -> String {
        format!("[{item}]")
    }

    fn render_trigger(
        &mut self,
        props: TriggerProps<'_>,
        _params: &(),
        overflowing: OverflowView<'_, &'static str>,
    ) -> String {
        let names: Vec<&str> = overflowing.iter().map(|(_, s)| *s).collect();
        format!("[more: {} {:?}]", names.join("|"), props.overflowing_indices)
    }
}

fn print(tb: &ResponsiveToolbar<&'static str>) {
    let row = tb.render(&mut Line).join(" ");
    println!(
        "active={:?} previous={:?} -> {row}",
        tb.active_index(),
        tb.previous_active_index()
    );
}

fn main() {
    let mut widths = WidthTable::from_widths([100, 100, 100], 50);
    let mut tb = ResponsiveToolbar::new(
        vec!["Home", "Docs", "Blog"],
        ToolbarOptions::new(()).with_initial_container_width(Some(250)),
    );
    tb.flush(&mut widths);
    print(&tb);

    tb.set_active_index(Some(2));
    tb.flush(&mut widths);
    print(&tb);

    tb.set_active_index(None);
    tb.flush(&mut widths);
    print(&tb);

    tb.set_container_width(400);
    tb.flush(&mut widths);
    print(&tb);
}
