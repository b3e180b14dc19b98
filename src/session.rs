use core::cell::Cell;
use core::cmp;

use crate::calculator;
use crate::{
    Align, ItemGeometry, ReplacePolicy, ScrollDirection, SessionSnapshot, ViewportGeometry,
    Window, WindowError, WindowOptions,
};

/// Scroll state for one list instance.
///
/// The session is the only writer of the scroll offset. Each update stores the clamped
/// offset or geometry, recomputes the window synchronously and emits it through
/// `WindowOptions::on_change`. Offset and geometry are always read from the same `&self`,
/// so a window is never computed from a mix of old and new inputs.
///
/// It does not hold any items. Pair it with an [`crate::ItemSource`] and a
/// [`crate::SliceRenderer`] (or use [`crate::VirtualList`], which wires the three together).
#[derive(Clone, Debug)]
pub struct ScrollSession {
    options: WindowOptions,
    scroll_offset: u64,
    scroll_direction: Option<ScrollDirection>,
    window: Window,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl ScrollSession {
    /// Creates a session and computes its first window.
    ///
    /// `options.initial_offset` is clamped against the initial geometry. No emission happens
    /// here; read [`Self::window`] for the starting state.
    pub fn new(options: WindowOptions) -> Self {
        let scroll_offset = calculator::clamp_scroll_offset(
            options.initial_offset,
            options.viewport,
            options.item,
            options.item_count,
        );
        vdebug!(
            item_count = options.item_count,
            item_height = options.item.item_height(),
            viewport_height = options.viewport.viewport_height(),
            overscan = options.overscan,
            scroll_offset,
            "ScrollSession::new"
        );
        let mut s = Self {
            options,
            scroll_offset,
            scroll_direction: None,
            window: Window::EMPTY,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        s.recompute();
        s
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn item_geometry(&self) -> ItemGeometry {
        self.options.item
    }

    pub fn viewport_geometry(&self) -> ViewportGeometry {
        self.options.viewport
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn overscan(&self) -> usize {
        self.options.overscan
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    /// The window for the current offset and geometry.
    pub fn window(&self) -> Window {
        self.window
    }

    pub fn max_scroll_offset(&self) -> u64 {
        calculator::max_scroll_offset(
            self.options.viewport,
            self.options.item,
            self.options.item_count,
        )
    }

    pub fn clamp_scroll_offset(&self, offset: i64) -> u64 {
        calculator::clamp_scroll_offset(
            offset,
            self.options.viewport,
            self.options.item,
            self.options.item_count,
        )
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.window);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single emission.
    ///
    /// Only the window for the final offset/geometry is emitted, which is how a host that
    /// coalesces fast scroll or resize bursts should drive the session.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn recompute(&mut self) {
        self.window = calculator::window_at(
            self.scroll_offset,
            self.options.viewport,
            self.options.item,
            self.options.item_count,
            self.options.overscan,
        );
    }

    fn set_offset(&mut self, offset: u64) -> Window {
        if self.scroll_offset == offset {
            return self.window;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.recompute();
        self.notify();
        self.window
    }

    /// Re-clamps the stored offset after a geometry change and always emits.
    fn apply_geometry(&mut self) -> Window {
        self.scroll_offset = cmp::min(self.scroll_offset, self.max_scroll_offset());
        self.recompute();
        self.notify();
        self.window
    }

    /// Applies a scroll position reported by the host surface.
    ///
    /// Negative and past-the-end offsets (momentum overscroll) are clamped. Re-delivering an
    /// offset that clamps to the current one is a no-op and emits nothing.
    pub fn on_scroll(&mut self, offset: i64) -> Window {
        let clamped = self.clamp_scroll_offset(offset);
        vtrace!(offset, clamped, "on_scroll");
        self.set_offset(clamped)
    }

    /// Applies a new viewport height. Recomputes and emits even if the offset is unchanged.
    pub fn on_resize(&mut self, viewport_height: u32) -> Result<Window, WindowError> {
        let viewport = ViewportGeometry::new(viewport_height)?;
        vdebug!(viewport_height, "on_resize");
        self.options.viewport = viewport;
        Ok(self.apply_geometry())
    }

    /// Applies a new uniform item height. Recomputes and emits even if the offset is unchanged.
    pub fn set_item_height(&mut self, item_height: u32) -> Result<Window, WindowError> {
        let item = ItemGeometry::new(item_height)?;
        vdebug!(item_height, "set_item_height");
        self.options.item = item;
        Ok(self.apply_geometry())
    }

    /// Applies a new item count without treating it as a sequence replacement
    /// (e.g. items appended to the same sequence).
    pub fn set_item_count(&mut self, item_count: usize) -> Window {
        vdebug!(item_count, "set_item_count");
        self.options.item_count = item_count;
        self.apply_geometry()
    }

    pub fn set_overscan(&mut self, overscan: usize) -> Window {
        self.options.overscan = overscan;
        self.apply_geometry()
    }

    pub fn set_replace_policy(&mut self, replace_policy: ReplacePolicy) {
        self.options.replace_policy = replace_policy;
    }

    /// Reacts to the upstream collaborator replacing the whole sequence.
    ///
    /// The offset is handled per [`ReplacePolicy`] and then re-clamped against `item_count`.
    pub fn on_items_replaced(&mut self, item_count: usize) -> Window {
        vdebug!(
            item_count,
            policy = ?self.options.replace_policy,
            "on_items_replaced"
        );
        self.options.item_count = item_count;
        if self.options.replace_policy == ReplacePolicy::ResetToTop {
            self.scroll_offset = 0;
            self.scroll_direction = None;
        }
        self.apply_geometry()
    }

    /// Scrolls so that `index` is placed according to `align` (no animation).
    ///
    /// Out-of-range indices are clamped to the last item. Returns the new window.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Window {
        let offset = self.scroll_to_index_offset(index, align);
        vtrace!(index, offset, "scroll_to_index");
        self.set_offset(offset)
    }

    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        calculator::scroll_to_index_offset(
            index,
            align,
            self.scroll_offset,
            self.options.viewport,
            self.options.item,
            self.options.item_count,
        )
    }

    /// Captures offset and geometry as one plain-data tuple.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            scroll_offset: self.scroll_offset,
            viewport_height: self.options.viewport.viewport_height(),
            item_height: self.options.item.item_height(),
            item_count: self.options.item_count,
        }
    }

    /// Restores a snapshot in one step: geometry is validated first, then offset and geometry
    /// are applied together and a single window is emitted.
    ///
    /// On error the session is left untouched.
    pub fn restore_snapshot(&mut self, snapshot: SessionSnapshot) -> Result<Window, WindowError> {
        let item = ItemGeometry::new(snapshot.item_height)?;
        let viewport = ViewportGeometry::new(snapshot.viewport_height)?;
        vdebug!(
            scroll_offset = snapshot.scroll_offset,
            item_count = snapshot.item_count,
            "restore_snapshot"
        );
        self.options.item = item;
        self.options.viewport = viewport;
        self.options.item_count = snapshot.item_count;
        self.scroll_offset = cmp::min(snapshot.scroll_offset, self.max_scroll_offset());
        self.scroll_direction = None;
        self.recompute();
        self.notify();
        Ok(self.window)
    }
}
