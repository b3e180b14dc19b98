use alloc::vec::Vec;

use crate::{ItemGeometry, ItemSource, PositionedItem, ScrollTrack, Window};

/// The outward-facing result of rendering one window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSlice<'a, T> {
    /// Ordered by ascending `index`.
    pub items: Vec<PositionedItem<'a, T>>,
    pub track: ScrollTrack,
}

impl<T> RenderedSlice<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Produces positioned items for exactly the indices of a window.
///
/// The renderer holds no reference to host-surface nodes; it only reads the item source and
/// emits positions and heights. Rendering is exposed both as a zero-allocation iteration API
/// ([`Self::for_each`], [`Self::collect_into`]) and an allocating convenience ([`Self::render`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceRenderer {
    item: ItemGeometry,
}

impl SliceRenderer {
    pub fn new(item: ItemGeometry) -> Self {
        Self { item }
    }

    pub fn item_geometry(&self) -> ItemGeometry {
        self.item
    }

    /// Calls `f` for each index in `[start_index, end_index)`, in order.
    ///
    /// An index the source cannot serve is a wiring bug between the window and the source:
    /// it panics in debug builds and is logged and skipped otherwise.
    pub fn for_each<'a, S, F>(&self, window: Window, source: &'a S, mut f: F)
    where
        S: ItemSource + ?Sized,
        S::Item: 'a,
        F: FnMut(PositionedItem<'a, S::Item>),
    {
        for index in window.indices() {
            match source.get(index) {
                Ok(item) => f(PositionedItem {
                    index,
                    item,
                    position_px: self.item.position_of(index),
                }),
                Err(err) => {
                    vwarn!(
                        index,
                        len = source.len(),
                        "SliceRenderer: window index outside item source"
                    );
                    debug_assert!(index < source.len(), "SliceRenderer: {err}");
                }
            }
        }
    }

    /// Collects the positioned items of `window` into `out` (clears `out` first).
    ///
    /// Reuse `out` across frames to avoid allocating per scroll update.
    pub fn collect_into<'a, S>(
        &self,
        window: Window,
        source: &'a S,
        out: &mut Vec<PositionedItem<'a, S::Item>>,
    ) -> ScrollTrack
    where
        S: ItemSource + ?Sized,
        S::Item: 'a,
    {
        out.clear();
        out.reserve(window.len());
        self.for_each(window, source, |it| out.push(it));
        window.track()
    }

    pub fn render<'a, S>(&self, window: Window, source: &'a S) -> RenderedSlice<'a, S::Item>
    where
        S: ItemSource + ?Sized,
        S::Item: 'a,
    {
        let mut items = Vec::new();
        let track = self.collect_into(window, source, &mut items);
        RenderedSlice { items, track }
    }

    /// Non-virtualized baseline: materializes every item of `source`.
    ///
    /// Bypasses the window calculator entirely. Meant for comparison and testing; cost is
    /// linear in the source length.
    pub fn render_all<'a, S>(&self, source: &'a S) -> RenderedSlice<'a, S::Item>
    where
        S: ItemSource + ?Sized,
        S::Item: 'a,
    {
        self.render(Window::unvirtualized(source.len(), self.item), source)
    }
}
