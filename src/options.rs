use alloc::sync::Arc;

use crate::session::ScrollSession;
use crate::{ItemGeometry, ViewportGeometry, Window, WindowError};

/// Overscan used when none is configured.
pub const DEFAULT_OVERSCAN: usize = 5;

/// A callback fired with every emitted window.
///
/// Emissions are synchronous and in update order; inside
/// [`ScrollSession::batch_update`] they coalesce into one call carrying the final window.
pub type OnWindowChange = Arc<dyn Fn(&ScrollSession, Window) + Send + Sync>;

/// What a sequence replacement does to the scroll offset.
///
/// Both policies re-clamp the offset against the new item count, so a shrinking sequence
/// never leaves the offset pointing past its end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReplacePolicy {
    /// Keep the current offset (clamped). Matches a browser scroll container, which keeps
    /// `scrollTop` when its content is swapped.
    #[default]
    KeepOffset,
    /// Jump back to the top on every replacement.
    ResetToTop,
}

/// Configuration for [`ScrollSession`].
///
/// Cheap to clone: the callback lives in an `Arc`.
pub struct WindowOptions {
    pub item: ItemGeometry,
    pub viewport: ViewportGeometry,
    pub item_count: usize,
    pub overscan: usize,
    /// Raw offset applied (and clamped) when the session is created.
    pub initial_offset: i64,
    pub replace_policy: ReplacePolicy,
    pub on_change: Option<OnWindowChange>,
}

impl Clone for WindowOptions {
    fn clone(&self) -> Self {
        Self {
            item: self.item,
            viewport: self.viewport,
            item_count: self.item_count,
            overscan: self.overscan,
            initial_offset: self.initial_offset,
            replace_policy: self.replace_policy,
            on_change: self.on_change.clone(),
        }
    }
}

impl WindowOptions {
    /// Creates options for an empty list with the given pixel geometry.
    ///
    /// Fails with [`WindowError::InvalidConfiguration`] if either height is zero.
    pub fn new(item_height: u32, viewport_height: u32) -> Result<Self, WindowError> {
        Ok(Self::from_geometry(
            ItemGeometry::new(item_height)?,
            ViewportGeometry::new(viewport_height)?,
        ))
    }

    pub fn from_geometry(item: ItemGeometry, viewport: ViewportGeometry) -> Self {
        Self {
            item,
            viewport,
            item_count: 0,
            overscan: DEFAULT_OVERSCAN,
            initial_offset: 0,
            replace_policy: ReplacePolicy::default(),
            on_change: None,
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_offset(mut self, initial_offset: i64) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_replace_policy(mut self, replace_policy: ReplacePolicy) -> Self {
        self.replace_policy = replace_policy;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ScrollSession, Window) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for WindowOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WindowOptions")
            .field("item_height", &self.item.item_height())
            .field("viewport_height", &self.viewport.viewport_height())
            .field("item_count", &self.item_count)
            .field("overscan", &self.overscan)
            .field("initial_offset", &self.initial_offset)
            .field("replace_policy", &self.replace_policy)
            .finish_non_exhaustive()
    }
}
