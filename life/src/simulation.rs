use std::time::Duration;

use itertools::Itertools;

use crate::{Config, board::Board, pattern::Pattern};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Running,
    /// The rule is paused and single cells can be flipped.
    Seeding,
}

/// Conway's Game of Life on a [`Board`].
#[derive(Clone, Debug)]
pub struct Simulation {
    board: Board,
    mode: Mode,
    cell_size: u32,
    generation: u64,
}

impl Simulation {
    /// A simulation started from [`Pattern::default_seed`].
    pub fn new(config: Config) -> Self {
        let seed = Pattern::default_seed();
        let size = config.size;
        Self::with_seed(config, seed.centered_on(size))
    }

    /// A simulation whose initial live cells are `seed`, in board coordinates.
    pub fn with_seed(config: Config, seed: impl IntoIterator<Item = (isize, isize)>) -> Self {
        assert!(config.cell_size > 0, "cell size must be positive");
        let mut board = Board::new(config.size);
        for (x, y) in seed {
            board.set_next_cell(x, y, true);
        }
        board.commit();
        log::debug!(
            "new {0}x{0} simulation with {1} live cells",
            config.size,
            board.population()
        );
        Self {
            board,
            mode: Mode::default(),
            cell_size: config.cell_size,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, x: isize, y: isize) -> bool {
        self.board.cell_at(x, y)
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_seeding(&self) -> bool {
        self.mode == Mode::Seeding
    }

    /// Generations computed so far. Seeding edits do not count.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle_seed_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Running => Mode::Seeding,
            Mode::Seeding => Mode::Running,
        };
        log::debug!("mode is now {:?}", self.mode);
    }

    /// Flips the cell under `(world_x, world_y)`, where a cell is `cell_size`
    /// world units wide. Ignored unless seeding.
    pub fn seed_toggle_cell(&mut self, world_x: f32, world_y: f32) {
        if !self.is_seeding() {
            return;
        }
        let cell_size = self.cell_size as f32;
        let x = (world_x / cell_size).floor() as isize;
        let y = (world_y / cell_size).floor() as isize;
        let alive = self.board.cell_at(x, y);
        self.board.copy_current_into_next();
        self.board.set_next_cell(x, y, !alive);
        self.board.commit();
        log::trace!("seeded ({x}, {y}) -> {}", !alive);
    }

    /// Computes exactly one generation, whatever `_step` is. Ignored while
    /// seeding.
    pub fn advance(&mut self, _step: Duration) {
        if self.is_seeding() {
            return;
        }
        let (columns, rows) = (self.columns() as isize, self.rows() as isize);
        for (x, y) in (0..columns).cartesian_product(0..rows) {
            let alive = self.board.cell_at(x, y);
            let count = neighbours((x, y))
                .filter(|&(nx, ny)| self.board.cell_at(nx, ny))
                .count();
            // `next` starts cleared, so only survivors and births are written.
            if let (true, 2 | 3) | (false, 3) = (alive, count) {
                self.board.set_next_cell(x, y, true);
            }
        }
        self.board.commit();
        self.generation += 1;
        log::trace!(
            "generation {}: {} live cells",
            self.generation,
            self.board.population()
        );
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn neighbours((x, y): (isize, isize)) -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dx, dy)| (x + dx, y + dy))
}
