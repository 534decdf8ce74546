mod grid;
mod tables;

pub use self::grid::print_fret_grid;
pub use self::tables::{ranking as print_ranking_report, shapes as print_shapes_report};
