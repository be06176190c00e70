/// Distance kept between an overflowing tooltip and the viewport's right edge.
pub const EDGE_INSET_PX: u32 = 16;

pub fn edge_inset() -> String {
    format!("{EDGE_INSET_PX}px")
}
