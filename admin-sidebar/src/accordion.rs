/// Height of one sidebar row, in pixels.
pub const ROW_UNIT: usize = 50;

/// Maximum visible extent of the collections panel.
///
/// A collapsed panel shows only its header row. An expanded panel shows the
/// header plus one row per item. This is a visual approximation rather than
/// a measured layout; styling depends on the exact linear relationship.
pub fn extent(collapsed: bool, item_count: usize) -> usize {
    if collapsed {
        ROW_UNIT
    } else {
        item_count.saturating_add(1).saturating_mul(ROW_UNIT)
    }
}

/// Flip the collapse flag.
pub fn toggle(collapsed: bool) -> bool {
    !collapsed
}
