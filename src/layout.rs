//! Layout module for tooltip targets
//!
//! Lays the targets out on screen and answers which target, if any, sits
//! under a given cell.

mod layout_grid;

pub use layout_grid::target_grid;
pub use layout_hit_test::target_at;
