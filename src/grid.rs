//! Grid model: the ragged character grid, its visitation marks, and the
//! geometry queries the validator and walker are built on.

use std::fmt;

use crate::chars::Cell;

/// A cell coordinate. Rows grow downward, columns grow to the right.
///
/// Coordinates are signed so that neighbours of edge cells can be formed
/// freely; anything outside the grid simply reads as [`Cell::Empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn up(self) -> Self {
        Self::new(self.row - 1, self.col)
    }

    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    pub const fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row, self.col)
    }
}

/// Axis of travel between two orthogonally adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// True if stepping from `from` to `to` is a single move along this axis
    pub fn is_step(self, from: Position, to: Position) -> bool {
        match self {
            Axis::Horizontal => from.row == to.row && (from.col - to.col).abs() == 1,
            Axis::Vertical => from.col == to.col && (from.row - to.row).abs() == 1,
        }
    }
}

/// Character grid for one traversal attempt.
///
/// Rows may have different lengths. The visitation grid has the same shape
/// and only ever goes from unvisited to visited.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    visited: Vec<Vec<bool>>,
    current: Position,
}

impl Grid {
    /// Parse a grid from diagram text, one row per line.
    pub fn new(text: &str) -> Self {
        Self::from_lines(
            text.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line)),
        )
    }

    /// Build a grid from string-like rows.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rows(
            lines
                .into_iter()
                .map(|line| line.as_ref().chars().collect())
                .collect(),
        )
    }

    /// Build a grid from already split rows of characters.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let visited = rows.iter().map(|row| vec![false; row.len()]).collect();
        Self {
            rows,
            visited,
            current: Position::default(),
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the given row, zero for rows outside the grid
    pub fn row_len(&self, row: i32) -> usize {
        usize::try_from(row)
            .ok()
            .and_then(|r| self.rows.get(r))
            .map_or(0, Vec::len)
    }

    fn index(&self, pos: Position) -> Option<(usize, usize)> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (col < self.rows.get(row)?.len()).then_some((row, col))
    }

    /// True if the position lies inside the ragged bounds
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Character category at a position; `Empty` outside the grid.
    pub fn get(&self, pos: Position) -> Cell {
        match self.index(pos) {
            Some((row, col)) => Cell::classify(self.rows[row][col]),
            None => Cell::Empty,
        }
    }

    /// Raw character at a position; a space outside the grid.
    pub fn char_at(&self, pos: Position) -> char {
        self.get(pos).symbol()
    }

    pub fn is_traversable(&self, pos: Position) -> bool {
        self.contains(pos) && self.get(pos).is_traversable()
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.index(pos)
            .is_some_and(|(row, col)| self.visited[row][col])
    }

    /// Mark a position visited. Out of bounds positions are ignored.
    pub fn mark_visited(&mut self, pos: Position) {
        if let Some((row, col)) = self.index(pos) {
            self.visited[row][col] = true;
        }
    }

    pub fn current(&self) -> Position {
        self.current
    }

    pub fn set_current(&mut self, pos: Position) {
        self.current = pos;
    }

    /// The four orthogonal neighbours in the fixed order up, down, left, right.
    ///
    /// This order is the tie-break whenever more than one move is legal.
    pub fn candidate_moves(&self, pos: Position) -> [Position; 4] {
        [pos.up(), pos.down(), pos.left(), pos.right()]
    }

    /// Axis of the step from `prev` to `current`.
    ///
    /// Returns `None` when the two positions share neither a row nor a column.
    pub fn movement_axis(&self, prev: Position, current: Position) -> Option<Axis> {
        if prev.row == current.row {
            Some(Axis::Horizontal)
        } else if prev.col == current.col {
            Some(Axis::Vertical)
        } else {
            None
        }
    }

    /// Neighbours along `axis`: left/right for horizontal, up/down for vertical.
    pub fn straight_neighbors(&self, current: Position, axis: Axis) -> [Position; 2] {
        match axis {
            Axis::Horizontal => [current.left(), current.right()],
            Axis::Vertical => [current.up(), current.down()],
        }
    }

    /// Neighbours across `axis`.
    pub fn perpendicular_neighbors(&self, current: Position, axis: Axis) -> [Position; 2] {
        self.straight_neighbors(current, axis.perpendicular())
    }

    /// True if both cells on the incoming axis around the current position
    /// are traversable.
    pub fn is_straight_move_available(&self, prev: Position) -> bool {
        match self.movement_axis(prev, self.current) {
            Some(axis) => self
                .straight_neighbors(self.current, axis)
                .iter()
                .all(|&pos| self.is_traversable(pos)),
            None => false,
        }
    }

    /// The traversable cell straight ahead of the current position, coming
    /// from `prev`.
    pub fn next_straight_move(&self, prev: Position) -> Option<Position> {
        let axis = self.movement_axis(prev, self.current)?;
        // Right and down are tried before left and up.
        self.straight_neighbors(self.current, axis)
            .into_iter()
            .rev()
            .find(|&pos| pos != prev && self.is_traversable(pos))
    }

    /// Every position holding the given category, in row-major order.
    pub fn find(&self, cell: Cell) -> Vec<Position> {
        self.positions().filter(|&pos| self.get(pos) == cell).collect()
    }

    /// Number of non-empty cells
    pub fn traversable_count(&self) -> usize {
        self.positions()
            .filter(|&pos| self.get(pos).is_traversable())
            .count()
    }

    /// All in-bounds positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len()).map(move |col| Position::new(row as i32, col as i32))
        })
    }
}
