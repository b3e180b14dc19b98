use core::num::NonZeroU32;
use core::ops::Range;

use crate::error::{GeometryField, WindowError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Uniform per-item height in pixels. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    item_height: NonZeroU32,
}

impl ItemGeometry {
    pub fn new(item_height: u32) -> Result<Self, WindowError> {
        NonZeroU32::new(item_height)
            .map(|item_height| Self { item_height })
            .ok_or(WindowError::InvalidConfiguration {
                field: GeometryField::ItemHeight,
                value: item_height,
            })
    }

    pub fn item_height(&self) -> u32 {
        self.item_height.get()
    }

    /// Absolute position of the item at `index`.
    pub fn position_of(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.item_height.get() as u64)
    }

    /// Height of `count` stacked items.
    pub fn total_height(&self, count: usize) -> u64 {
        self.position_of(count)
    }
}

/// Height of the hosting viewport in pixels. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportGeometry {
    viewport_height: NonZeroU32,
}

impl ViewportGeometry {
    pub fn new(viewport_height: u32) -> Result<Self, WindowError> {
        NonZeroU32::new(viewport_height)
            .map(|viewport_height| Self { viewport_height })
            .ok_or(WindowError::InvalidConfiguration {
                field: GeometryField::ViewportHeight,
                value: viewport_height,
            })
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height.get()
    }
}

/// The pair a host surface needs to size its scroll container and translate the rendered
/// block into place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTrack {
    pub offset_px: u64,
    pub total_height_px: u64,
}

/// The contiguous index range (plus pixel offsets) to materialize for one scroll position.
///
/// # Invariants
/// - `start_index <= end_index <= item_count`
/// - `offset_px == start_index * item_height`
/// - `total_height_px == item_count * item_height`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    pub offset_px: u64,
    pub total_height_px: u64,
}

impl Window {
    /// The window of an empty sequence: `{0, 0, 0, 0}`.
    pub const EMPTY: Window = Window {
        start_index: 0,
        end_index: 0,
        offset_px: 0,
        total_height_px: 0,
    };

    /// A window covering every item, used by the non-virtualized baseline.
    pub fn unvirtualized(item_count: usize, item: ItemGeometry) -> Self {
        Self {
            start_index: 0,
            end_index: item_count,
            offset_px: 0,
            total_height_px: item.total_height(item_count),
        }
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }

    pub fn track(&self) -> ScrollTrack {
        ScrollTrack {
            offset_px: self.offset_px,
            total_height_px: self.total_height_px,
        }
    }
}

/// One materialized entry of a rendered slice.
#[derive(Debug, PartialEq, Eq)]
pub struct PositionedItem<'a, T> {
    pub index: usize,
    pub item: &'a T,
    /// Absolute position of this item (`index * item_height`), independent of `offset_px`.
    pub position_px: u64,
}

impl<T> Clone for PositionedItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PositionedItem<'_, T> {}
