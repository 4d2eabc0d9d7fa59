use std::fmt::{Display, Write};

const WORD_BITS: usize = u64::BITS as usize;

/// A square grid of cells whose edges wrap around in both directions.
///
/// Writes go to a back buffer (`next`) and only become visible to
/// [`Board::cell_at`] after [`Board::commit`]. Coordinates of any value are
/// valid: they are reduced with a floor-mod, so `-1` is the last row or column
/// and `size` is the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    current: Vec<u64>,
    next: Vec<u64>,
}

impl Board {
    /// An all-dead board of `size * size` cells.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be non-zero");
        let words = (size * size).div_ceil(WORD_BITS);
        Self {
            size,
            current: vec![0; words],
            next: vec![0; words],
        }
    }

    pub fn rows(&self) -> usize {
        self.size
    }

    pub fn columns(&self) -> usize {
        self.size
    }

    pub fn cell_at(&self, x: isize, y: isize) -> bool {
        let (word, mask) = self.locate(x, y);
        self.current[word] & mask != 0
    }

    pub fn set_next_cell(&mut self, x: isize, y: isize, value: bool) {
        let (word, mask) = self.locate(x, y);
        if value {
            self.next[word] |= mask;
        } else {
            self.next[word] &= !mask;
        }
    }

    /// Overwrites any pending writes with the committed state, so that a
    /// following [`Board::set_next_cell`] edits a single cell of the board
    /// rather than starting from an empty one.
    pub fn copy_current_into_next(&mut self) {
        self.next.copy_from_slice(&self.current);
    }

    /// Publishes the back buffer and leaves it cleared for the next cycle.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(0);
    }

    /// Number of live cells in the committed state.
    pub fn population(&self) -> usize {
        self.current.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Committed live cells as `(x, y)`, column by column.
    pub fn live_cells(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        let size = self.size;
        self.current
            .iter()
            .enumerate()
            .filter(|&(_, &word)| word != 0)
            .flat_map(|(i, &word)| {
                (0..WORD_BITS)
                    .filter(move |&bit| word & (1 << bit) != 0)
                    .map(move |bit| i * WORD_BITS + bit)
            })
            .map(move |off| ((off / size) as isize, (off % size) as isize))
    }
}

impl Board {
    fn wrap(&self, v: isize) -> usize {
        v.rem_euclid(self.size as isize) as usize
    }

    fn locate(&self, x: isize, y: isize) -> (usize, u64) {
        let off = self.wrap(x) * self.size + self.wrap(y);
        (off / WORD_BITS, 1 << (off % WORD_BITS))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.rows() as isize {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.columns() as isize {
                f.write_char(if self.cell_at(x, y) { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}
