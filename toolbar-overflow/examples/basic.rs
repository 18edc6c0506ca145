// Example: fit a row of buttons into a shrinking container.
use toolbar_overflow::{ResponsiveToolbar, ToolbarOptions, WidthTable};

fn main() {
    let labels: Vec<String> = (1..=8).map(|i| format!("Button {i}")).collect();

    // Natural widths as reported by a hidden layout pass (84px per button, 110px trigger).
    let mut widths = WidthTable::from_widths(labels.iter().map(|_| 84), 110);

    let mut tb = ResponsiveToolbar::new(
        labels,
        ToolbarOptions::new(()).with_initial_container_width(Some(800)),
    );

    for width in [800u32, 700, 500, 300, 120, 0] {
        tb.set_container_width(width);
        let outcome = tb.flush(&mut widths);
        println!(
            "width={width:>4} outcome={outcome:?} shown={:?} overflowing={:?}",
            tb.shown_indices(),
            tb.overflowing_indices()
        );
    }
}
