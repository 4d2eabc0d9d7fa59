use std::{
    collections::HashSet,
    fmt::{Display, Write},
    ops::Range,
    str::FromStr,
};

use itertools::Itertools;

use crate::board::Board;

/// A set of live `(x, y)` cells, independent of any board.
///
/// The text form has one line per row, `o` for a live cell and ` ` or `.` for
/// a dead one.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Pattern {
    cells: HashSet<(isize, isize)>,
}

impl Pattern {
    /// The three-cell vertical line every new simulation starts from.
    pub fn default_seed() -> Self {
        [(0, -1), (0, 0), (0, 1)].into_iter().collect()
    }

    pub fn set_bit(&mut self, p: (isize, isize)) {
        self.cells.insert(p);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Moves the pattern so its bounding box is centred on the origin.
    pub fn normalize(mut self) -> Self {
        let Span::Covers { xs, ys } = self.span() else {
            return self;
        };
        let dx = xs.start + xs.len() as isize / 2;
        let dy = ys.start + ys.len() as isize / 2;
        if (dx, dy) != (0, 0) {
            for (x, y) in std::mem::take(&mut self.cells) {
                self.set_bit((x - dx, y - dy));
            }
        }
        self
    }

    /// Cells shifted onto the middle of a `size` board.
    pub fn centered_on(&self, size: usize) -> impl Iterator<Item = (isize, isize)> + '_ {
        let c = (size / 2) as isize;
        self.cells.iter().map(move |&(x, y)| (x + c, y + c))
    }
}

enum Span {
    Empty,
    Covers { xs: Range<isize>, ys: Range<isize> },
}

impl Pattern {
    fn span(&self) -> Span {
        use Span::*;
        let xs = match self.cells.iter().map(|(x, _)| *x).minmax() {
            itertools::MinMaxResult::NoElements => return Empty,
            itertools::MinMaxResult::OneElement(x) => x..x + 1,
            itertools::MinMaxResult::MinMax(x1, x2) => x1..x2 + 1,
        };
        let ys = match self.cells.iter().map(|(_, y)| *y).minmax() {
            itertools::MinMaxResult::NoElements => return Empty,
            itertools::MinMaxResult::OneElement(y) => y..y + 1,
            itertools::MinMaxResult::MinMax(y1, y2) => y1..y2 + 1,
        };
        Covers { xs, ys }
    }
}

impl From<&Board> for Pattern {
    fn from(board: &Board) -> Self {
        board.live_cells().collect()
    }
}

impl FromIterator<(isize, isize)> for Pattern {
    fn from_iter<T: IntoIterator<Item = (isize, isize)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pattern = Pattern::default();
        for (y, line) in s.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    ' ' | '.' => (),
                    'o' => {
                        pattern.set_bit((x as isize, y as isize));
                    }
                    _ => return Err(format!("Unexpected character {c}")),
                }
            }
        }
        Ok(pattern.normalize())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Span::Covers { xs, ys } = self.span() else {
            return Ok(());
        };
        let (mut current_x, mut current_y) = (xs.start, ys.start);
        for &(x, y) in self.cells.iter().sorted_by_key(|&&(x, y)| (y, x)) {
            while current_y < y {
                f.write_char('\n')?;
                current_x = xs.start;
                current_y += 1;
            }
            f.write_str(&" ".repeat(x.abs_diff(current_x)))?;
            f.write_char('o')?;
            current_x = x + 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_text() {
        let pattern = Pattern::from_str("o\no\no").unwrap();
        assert_eq!(pattern, Pattern::default_seed());
    }

    #[test]
    fn test_centered_on() {
        let cells: HashSet<_> = Pattern::default_seed().centered_on(64).collect();
        assert_eq!(cells, HashSet::from([(32, 31), (32, 32), (32, 33)]));
    }

    #[test]
    fn test_dots_are_dead() {
        let a = Pattern::from_str(".o.\n..o\nooo").unwrap();
        let b = Pattern::from_str(" o\n  o\nooo").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            Pattern::from_str("o#o"),
            Err("Unexpected character #".to_string())
        );
    }

    #[test]
    fn test_display() {
        let pattern = Pattern::from_str(" o\n  o\nooo").unwrap();
        assert_eq!(pattern.to_string(), " o\n  o\nooo");
    }

    #[test]
    fn test_empty() {
        let pattern = Pattern::from_str("   \n").unwrap();
        assert!(pattern.is_empty());
        assert_eq!(pattern.to_string(), "");
    }
}
