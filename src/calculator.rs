//! The pure window calculator.
//!
//! Every function here is referentially transparent and runs in O(1) time and memory,
//! independent of the item count. Nothing touches the item sequence itself.

use core::cmp;

use crate::{Align, ItemGeometry, ViewportGeometry, Window, WindowError};

/// One raw input tuple for [`compute_window`], as delivered by a host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowInput {
    /// Pre-clamp scroll offset; negative values (rubber-band overscroll) are allowed.
    pub scroll_offset: i64,
    pub viewport_height: u32,
    pub item_height: u32,
    pub item_count: usize,
    pub overscan: usize,
}

/// Validates the geometry in `input` and computes its window.
///
/// Fails with [`WindowError::InvalidConfiguration`] when `item_height` or `viewport_height`
/// is zero. All other inputs are clamped.
pub fn compute_window(input: &WindowInput) -> Result<Window, WindowError> {
    let item = ItemGeometry::new(input.item_height)?;
    let viewport = ViewportGeometry::new(input.viewport_height)?;
    Ok(window_for(
        input.scroll_offset,
        viewport,
        item,
        input.item_count,
        input.overscan,
    ))
}

/// The largest valid scroll offset: `max(0, item_count * item_height - viewport_height)`.
pub fn max_scroll_offset(
    viewport: ViewportGeometry,
    item: ItemGeometry,
    item_count: usize,
) -> u64 {
    item.total_height(item_count)
        .saturating_sub(viewport.viewport_height() as u64)
}

/// Clamps a raw host offset into `[0, max_scroll_offset]`.
pub fn clamp_scroll_offset(
    scroll_offset: i64,
    viewport: ViewportGeometry,
    item: ItemGeometry,
    item_count: usize,
) -> u64 {
    let max = max_scroll_offset(viewport, item, item_count);
    cmp::min(scroll_offset.max(0) as u64, max)
}

/// Computes the window for already-validated geometry.
pub fn window_for(
    scroll_offset: i64,
    viewport: ViewportGeometry,
    item: ItemGeometry,
    item_count: usize,
    overscan: usize,
) -> Window {
    window_at(
        scroll_offset.max(0) as u64,
        viewport,
        item,
        item_count,
        overscan,
    )
}

/// Same as [`window_for`], for an offset that is already known to be non-negative.
pub fn window_at(
    scroll_offset: u64,
    viewport: ViewportGeometry,
    item: ItemGeometry,
    item_count: usize,
    overscan: usize,
) -> Window {
    if item_count == 0 {
        return Window::EMPTY;
    }

    let item_height = item.item_height() as u64;
    let view = viewport.viewport_height() as u64;
    let offset = cmp::min(scroll_offset, max_scroll_offset(viewport, item, item_count));

    let first_visible = offset / item_height;
    let last_visible = offset.saturating_add(view).div_ceil(item_height);

    let start_index = to_index(first_visible).saturating_sub(overscan);
    let end_index = cmp::min(item_count, to_index(last_visible).saturating_add(overscan));
    debug_assert!(start_index <= end_index, "window start past end");

    Window {
        start_index,
        end_index,
        offset_px: item.position_of(start_index),
        total_height_px: item.total_height(item_count),
    }
}

/// Computes the clamped offset that brings `index` into view with the given alignment.
///
/// `current_offset` only matters for [`Align::Auto`], which keeps the current offset when
/// the item is already fully visible. Out-of-range indices are clamped to the last item.
pub fn scroll_to_index_offset(
    index: usize,
    align: Align,
    current_offset: u64,
    viewport: ViewportGeometry,
    item: ItemGeometry,
    item_count: usize,
) -> u64 {
    if item_count == 0 {
        return 0;
    }
    let index = index.min(item_count - 1);
    let start = item.position_of(index);
    let end = start.saturating_add(item.item_height() as u64);
    let view = viewport.viewport_height() as u64;

    let target = match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => {
            let center = start.saturating_add(item.item_height() as u64 / 2);
            center.saturating_sub(view / 2)
        }
        Align::Auto => {
            let cur_end = current_offset.saturating_add(view);
            if start >= current_offset && end <= cur_end {
                current_offset
            } else if start < current_offset {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    };

    cmp::min(target, max_scroll_offset(viewport, item, item_count))
}

fn to_index(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}
