//! A headless windowing core for very large, fixed-height lists.
//!
//! Given an ordered sequence of N items, a viewport height and a uniform item height, this
//! crate computes at any scroll position the minimal contiguous range of items to
//! materialize, plus the pixel offsets a host surface needs to keep the scroll track
//! correctly sized and the rendered block correctly placed. Window computation is O(1) in
//! time and memory regardless of N.
//!
//! It is UI-agnostic. A host surface is expected to provide:
//! - viewport height and item height
//! - a stream of scroll offsets (any direction, possibly out of range)
//! - the already-filtered, already-sorted item sequence
//!
//! Pieces, leaf-first: [`compute_window`] (pure), [`ScrollSession`] (stateful, one per list),
//! [`ItemSourceAdapter`] (indexed read-only view), [`SliceRenderer`] (positioned output), and
//! [`VirtualList`] which wires them together.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod calculator;
mod error;
mod list;
mod options;
mod session;
mod slice;
mod source;
mod state;
mod types;


#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

pub use calculator::{
    WindowInput, clamp_scroll_offset, compute_window, max_scroll_offset, scroll_to_index_offset,
    window_at, window_for,
};
pub use error::{GeometryField, WindowError};
pub use list::VirtualList;
pub use options::{DEFAULT_OVERSCAN, OnWindowChange, ReplacePolicy, WindowOptions};
pub use session::ScrollSession;
pub use slice::{RenderedSlice, SliceRenderer};
pub use source::{ItemSource, ItemSourceAdapter};
pub use state::SessionSnapshot;
pub use types::{
    Align, ItemGeometry, PositionedItem, ScrollDirection, ScrollTrack, ViewportGeometry, Window,
};
