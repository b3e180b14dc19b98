use thiserror::Error;

/// Which geometry input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryField {
    ItemHeight,
    ViewportHeight,
}

impl core::fmt::Display for GeometryField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ItemHeight => f.write_str("item height"),
            Self::ViewportHeight => f.write_str("viewport height"),
        }
    }
}

/// Errors produced by the windowing core.
///
/// Everything else (negative or overflowing scroll offsets, empty sequences, a viewport
/// taller than the content) is handled by clamping and never surfaces as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum WindowError {
    /// A pixel height that must be strictly positive was zero.
    ///
    /// Not recoverable locally: the caller has to supply a valid geometry. No default is
    /// substituted.
    #[error("invalid configuration: {field} must be > 0 (got {value})")]
    InvalidConfiguration { field: GeometryField, value: u32 },

    /// An item source was asked for an index outside `[0, len)`.
    ///
    /// Under correct wiring the slice renderer only requests indices inside the current
    /// window, so seeing this means the window and the source disagree about the length.
    #[error("index {index} out of range for item source of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl WindowError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}
