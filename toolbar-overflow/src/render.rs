use crate::TriggerProps;

/// A borrowed view of the overflowing items, in ascending index order.
#[derive(Debug)]
pub struct OverflowView<'a, T> {
    indices: &'a [usize],
    items: &'a [T],
}

impl<T> Clone for OverflowView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OverflowView<'_, T> {}

impl<'a, T> OverflowView<'a, T> {
    pub(crate) fn new(indices: &'a [usize], items: &'a [T]) -> Self {
        Self { indices, items }
    }

    pub fn indices(&self) -> &'a [usize] {
        self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        let items = self.items;
        self.indices
            .iter()
            .filter_map(move |&i| items.get(i).map(|item| (i, item)))
    }
}

/// Caller-supplied rendering strategy.
///
/// The toolbar never draws anything itself; it tells the renderer which items go into the
/// visible row and what the trigger should receive.
pub trait ToolbarRenderer<T, P> {
    type Output;

    fn render_item(&mut self, index: usize, item: &T) -> Self::Output;

    /// Called only when at least one item overflows. `overflowing` are the trigger's children.
    fn render_trigger(
        &mut self,
        props: TriggerProps<'_>,
        params: &P,
        overflowing: OverflowView<'_, T>,
    ) -> Self::Output;
}
