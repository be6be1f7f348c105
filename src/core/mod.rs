pub mod error;
pub mod types;

pub use error::{FillError, Result};
pub use types::{Cell, Color, Grid, Strategy, EIGHT_WAY, FOUR_WAY};
