//! Route walking.
//!
//! The walker moves one cell at a time from the start marker, validating
//! each position before choosing where to go next, until it reaches an end
//! marker or runs out of legal moves.

use tracing::{debug, trace};

use crate::chars::Cell;
use crate::error::RouteError;
use crate::grid::{Grid, Position};
use crate::path::{Route, Trail};
use crate::validator;

/// Options for walking a diagram.
///
/// # Example
///
/// ```rust
/// use aapath::{find_path_with_options, FindOptions};
///
/// let options = FindOptions::new().with_unique_end(true);
/// let route = find_path_with_options("@-A-x", &options).unwrap();
/// assert_eq!(route.letters_string(), "A");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Reject diagrams with more than one end marker.
    pub unique_end: bool,
    /// Reject characters outside `@ x - | + A-Z` and space.
    /// By default any other character routes like a letter.
    pub strict_charset: bool,
    /// Upper bound on cell entries before the walk is declared a loop.
    /// `None` picks a bound from the number of non-empty cells.
    pub max_steps: Option<usize>,
}

impl FindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unique_end(mut self, unique_end: bool) -> Self {
        self.unique_end = unique_end;
        self
    }

    pub fn with_strict_charset(mut self, strict_charset: bool) -> Self {
        self.strict_charset = strict_charset;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    fn step_limit(&self, grid: &Grid) -> usize {
        self.max_steps
            .unwrap_or_else(|| grid.traversable_count().saturating_mul(4).saturating_add(4))
    }
}

/// Walk the route in diagram text with default options.
pub fn find_path(input: &str) -> Result<Route, RouteError> {
    find_path_with_options(input, &FindOptions::new())
}

/// Walk the route in diagram text.
pub fn find_path_with_options(input: &str, options: &FindOptions) -> Result<Route, RouteError> {
    find_route(Grid::new(input), options)
}

/// Walk the route in an already built grid.
///
/// The grid is consumed: its visitation marks belong to this one attempt.
pub fn find_route(mut grid: Grid, options: &FindOptions) -> Result<Route, RouteError> {
    if options.strict_charset {
        validator::validate_charset(&grid)?;
    }
    let start = validator::validate_endpoints(&mut grid, options.unique_end)?;

    let limit = options.step_limit(&grid);
    let mut walker = Walker::new(&mut grid, limit);

    if !walker.run(start)? {
        let position = walker.dead_end.unwrap_or(start);
        debug!(%position, "no route to an end marker");
        return Err(RouteError::BrokenPath { position });
    }

    debug!(steps = walker.steps, length = walker.trail.len(), "reached end marker");
    Ok(walker.trail.into_route())
}

/// A cell on the live branch and the moves still to try from it.
#[derive(Debug)]
struct Frame {
    pos: Position,
    prev: Option<Position>,
    /// Whether entering `pos` added a letter to the trail
    contributed: bool,
    /// Straight-ahead move, tried before `moves`
    straight: Option<Position>,
    moves: [Position; 4],
    next: usize,
}

impl Frame {
    fn next_candidate(&mut self) -> Option<Position> {
        if let Some(pos) = self.straight.take() {
            return Some(pos);
        }
        let pos = self.moves.get(self.next).copied()?;
        self.next += 1;
        Some(pos)
    }
}

/// Depth-first walker over a single grid.
///
/// The live branch is kept on an explicit stack of [`Frame`]s, so route
/// length is bounded by memory rather than by the thread's stack.
struct Walker<'a> {
    grid: &'a mut Grid,
    trail: Trail,
    stack: Vec<Frame>,
    steps: usize,
    limit: usize,
    /// First position where every move was exhausted
    dead_end: Option<Position>,
}

impl<'a> Walker<'a> {
    fn new(grid: &'a mut Grid, limit: usize) -> Self {
        Self {
            grid,
            trail: Trail::new(),
            stack: Vec::new(),
            steps: 0,
            limit,
            dead_end: None,
        }
    }

    /// Walk from `start` until an end marker is reached (`Ok(true)`) or every
    /// branch dead-ends (`Ok(false)`, with the trail fully undone).
    fn run(&mut self, start: Position) -> Result<bool, RouteError> {
        if self.enter(start, None)? {
            return Ok(true);
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                return Ok(false);
            };
            let (current, prev, contributed) = (frame.pos, frame.prev, frame.contributed);

            match frame.next_candidate() {
                Some(next) => {
                    if self.try_move(next, current, prev)? {
                        return Ok(true);
                    }
                }
                None => {
                    trace!(pos = %current, "backtrack");
                    self.dead_end.get_or_insert(current);
                    self.trail.pop(contributed);
                    self.stack.pop();
                }
            }
        }
    }

    /// Step onto `pos` coming from `prev`.
    ///
    /// Returns `Ok(true)` if `pos` is an end marker; otherwise validates the
    /// position and pushes a frame for its outgoing moves.
    fn enter(&mut self, pos: Position, prev: Option<Position>) -> Result<bool, RouteError> {
        self.steps += 1;
        if self.steps > self.limit {
            return Err(RouteError::Loop {
                position: pos,
                limit: self.limit,
            });
        }

        let cell = self.grid.get(pos);
        let letter = match cell {
            Cell::Letter(c) if !self.grid.is_visited(pos) => Some(c),
            _ => None,
        };
        let contributed = self.trail.push(cell.symbol(), letter);
        trace!(%pos, symbol = %cell.symbol(), "advance");

        self.grid.mark_visited(pos);
        self.grid.set_current(pos);

        if cell == Cell::End {
            return Ok(true);
        }

        // Straight ahead takes priority through junction-like cells.
        let mut straight = None;
        if let Some(prev) = prev {
            validator::validate_step(self.grid, prev)?;
            if cell.is_junction_like() && self.grid.is_straight_move_available(prev) {
                straight = self.grid.next_straight_move(prev);
            }
        }

        self.stack.push(Frame {
            pos,
            prev,
            contributed,
            straight,
            moves: self.grid.candidate_moves(pos),
            next: 0,
        });
        Ok(false)
    }

    fn try_move(
        &mut self,
        next: Position,
        current: Position,
        prev: Option<Position>,
    ) -> Result<bool, RouteError> {
        if validator::is_legal_step(self.grid, next)
            && validator::is_direction_consistent(self.grid, next, current, prev)
        {
            self.enter(next, Some(current))
        } else {
            Ok(false)
        }
    }
}
