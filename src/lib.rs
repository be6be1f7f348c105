pub mod core;
pub mod fill;
pub mod perception;
pub mod bench;

pub use crate::core::{Cell, Color, FillError, Grid, Result, Strategy, EIGHT_WAY, FOUR_WAY};
pub use crate::fill::{
    apply, fill, fill_cells, fill_offsets, fill_order, fill_queue, fill_recursive, fill_stack, fill_with_offsets,
    region_size,
};
pub use crate::perception::grid::FillFixture;
