use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    Align, ItemSourceAdapter, PositionedItem, RenderedSlice, ReplacePolicy, ScrollSession,
    ScrollTrack, SessionSnapshot, SliceRenderer, Window, WindowError, WindowOptions,
};

/// A framework-neutral list that wires a [`ScrollSession`], an [`ItemSourceAdapter`] and a
/// [`SliceRenderer`] together.
///
/// Adapters drive it by calling:
/// - `replace_items` whenever the upstream filter/sort result changes
/// - `on_scroll` / `on_resize` when UI events occur
/// - `visible` (or `visible_into`) to get what to draw
///
/// The source is the only authority for the item count. The session's count is updated in
/// the same call that swaps the sequence, and every mutating entry point re-applies the
/// source length, so the window never indexes past the source.
///
/// ```
/// use listwindow::{VirtualList, WindowOptions};
///
/// let items: Vec<u32> = (0..10_000).collect();
/// let mut list = VirtualList::new(WindowOptions::new(100, 600)?, items);
///
/// list.on_scroll(1000);
/// let visible = list.visible();
/// assert_eq!(visible.items.first().map(|it| it.index), Some(5));
/// assert_eq!(visible.track.total_height_px, 1_000_000);
/// # Ok::<(), listwindow::WindowError>(())
/// ```
#[derive(Clone, Debug)]
pub struct VirtualList<T> {
    session: ScrollSession,
    source: ItemSourceAdapter<T>,
}

impl<T> VirtualList<T> {
    /// Creates a list over `items`. `options.item_count` is overwritten with the real length.
    pub fn new(options: WindowOptions, items: impl Into<Arc<[T]>>) -> Self {
        let source = ItemSourceAdapter::new(items);
        let options = options.with_item_count(source.as_slice().len());
        Self {
            session: ScrollSession::new(options),
            source,
        }
    }

    pub fn session(&self) -> &ScrollSession {
        &self.session
    }

    pub fn source(&self) -> &ItemSourceAdapter<T> {
        &self.source
    }

    pub fn window(&self) -> Window {
        self.session.window()
    }

    pub fn len(&self) -> usize {
        self.source.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps in a new filtered/sorted sequence. Scroll handling follows the session's
    /// [`crate::ReplacePolicy`].
    pub fn replace_items(&mut self, items: impl Into<Arc<[T]>>) -> Window {
        let len = self.source.replace(items);
        self.session.on_items_replaced(len)
    }

    pub fn on_scroll(&mut self, offset: i64) -> Window {
        self.session.on_scroll(offset)
    }

    pub fn on_resize(&mut self, viewport_height: u32) -> Result<Window, WindowError> {
        self.session.on_resize(viewport_height)
    }

    pub fn set_item_height(&mut self, item_height: u32) -> Result<Window, WindowError> {
        self.session.set_item_height(item_height)
    }

    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Window {
        self.session.scroll_to_index(index, align)
    }

    pub fn set_overscan(&mut self, overscan: usize) -> Window {
        self.session.set_overscan(overscan)
    }

    pub fn set_replace_policy(&mut self, replace_policy: ReplacePolicy) {
        self.session.set_replace_policy(replace_policy);
    }

    /// Runs `f` against the session as one batch; at most one window is emitted.
    ///
    /// A count changed inside `f` is reset to the source length before the batch ends.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut ScrollSession)) -> Window {
        let len = self.len();
        self.session.batch_update(|session| {
            f(session);
            if session.item_count() != len {
                vwarn!(
                    item_count = session.item_count(),
                    len,
                    "VirtualList::batch_update: resyncing item count to source"
                );
                session.set_item_count(len);
            }
        });
        self.session.window()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Restores offset and geometry from `snapshot` against the current source.
    ///
    /// The snapshot's `item_count` is replaced with the source length, so an offset taken on a
    /// longer sequence is clamped to this one.
    pub fn restore_snapshot(&mut self, snapshot: SessionSnapshot) -> Result<Window, WindowError> {
        let item_count = self.len();
        self.session.restore_snapshot(SessionSnapshot {
            item_count,
            ..snapshot
        })
    }

    fn renderer(&self) -> SliceRenderer {
        SliceRenderer::new(self.session.item_geometry())
    }

    /// Positioned items for the current window plus scroll-track sizing.
    pub fn visible(&self) -> RenderedSlice<'_, T> {
        self.renderer().render(self.session.window(), &self.source)
    }

    /// Same as [`Self::visible`], reusing `out` (cleared first).
    pub fn visible_into<'a>(&'a self, out: &mut Vec<PositionedItem<'a, T>>) -> ScrollTrack {
        self.renderer()
            .collect_into(self.session.window(), &self.source, out)
    }

    /// Non-virtualized baseline over the same items, for comparison.
    pub fn render_all(&self) -> RenderedSlice<'_, T> {
        self.renderer().render_all(&self.source)
    }
}
