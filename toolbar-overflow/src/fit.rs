/// Returns how many items fit into `available_width`.
///
/// `item_widths` must be in priority order. When all items fit, no space is reserved for the
/// trigger. Otherwise the trigger width is reserved up front and items are taken greedily until
/// the first one that does not fit; the boundary is inclusive.
pub fn compute_fit_count(item_widths: &[u32], trigger_width: u32, available_width: u32) -> usize {
    let natural_total = item_widths.iter().map(|&w| w as u64).sum();
    compute_fit_count_with_total(item_widths, natural_total, trigger_width, available_width)
}

/// Same as [`compute_fit_count`], but uses a precomputed natural width of the whole row for the
/// no-overflow fast path.
pub fn compute_fit_count_with_total(
    item_widths: &[u32],
    natural_total: u64,
    trigger_width: u32,
    available_width: u32,
) -> usize {
    let available = available_width as u64;
    if available >= natural_total {
        return item_widths.len();
    }

    let mut running = trigger_width as u64;
    let mut fit = 0usize;
    for &width in item_widths {
        running = running.saturating_add(width as u64);
        if running > available {
            break;
        }
        fit += 1;
    }
    fit
}
