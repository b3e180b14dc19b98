/// A lightweight, serializable snapshot of one scroll session.
///
/// Offset and geometry are captured together so a restored session never pairs an offset
/// with geometry it was not computed against.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub scroll_offset: u64,
    pub viewport_height: u32,
    pub item_height: u32,
    pub item_count: usize,
}
