pub const OPEN_3X3_MAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/maps/open_3x3.txt"
));

pub const LAKE_4X4_MAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/maps/lake_4x4.txt"
));

pub const LAKE_8X8_MAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/maps/lake_8x8.txt"
));

/// The goal is walled off by holes.
pub const ENCLOSED_GOAL_MAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/maps/enclosed_goal.txt"
));

/// Cells reachable from the start of [`ENCLOSED_GOAL_MAP_TEXT`], holes
/// included.
pub const ENCLOSED_GOAL_REACHABLE_STATES: usize = 11;
