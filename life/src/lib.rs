pub mod board;
pub mod clock;
pub mod pattern;
pub mod simulation;


pub use board::Board;
pub use clock::FixedStep;
pub use pattern::Pattern;
pub use simulation::{Mode, Simulation};

/// Edge length of the board used when none is given.
pub const DEFAULT_SIZE: usize = 64;
/// World units per cell, as used by [`Simulation::seed_toggle_cell`].
pub const DEFAULT_CELL_SIZE: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Rows and columns of the board.
    pub size: usize,
    /// Whole world units per cell, so drawn cells and clicks line up.
    pub cell_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}
