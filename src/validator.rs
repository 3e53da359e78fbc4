//! Structural rules a diagram must satisfy to encode exactly one route.
//!
//! All checks are stateless: they read geometry from the [`Grid`] and the
//! position the walker arrived from. Failures are returned as [`RouteError`]
//! and abort the walk.

use tracing::debug;

use crate::chars::{self, Cell};
use crate::error::RouteError;
use crate::grid::{Axis, Grid, Position};

/// Check the start and end markers and point the grid at the start.
///
/// Fails if there is not exactly one `@`, if there is no `x` (or more than
/// one, when `unique_end` is set), or if the start can be left in more than
/// one direction.
pub fn validate_endpoints(grid: &mut Grid, unique_end: bool) -> Result<Position, RouteError> {
    let starts = grid.find(Cell::Start);
    let start = match starts.as_slice() {
        [] => return Err(RouteError::NoStart),
        [start] => *start,
        _ => {
            return Err(RouteError::MultipleStart {
                count: starts.len(),
            })
        }
    };

    let ends = grid.find(Cell::End);
    if ends.is_empty() {
        return Err(RouteError::NoEnd);
    }
    if unique_end && ends.len() > 1 {
        return Err(RouteError::MultipleEnd { count: ends.len() });
    }

    grid.set_current(start);

    let exits = grid
        .candidate_moves(start)
        .into_iter()
        .filter(|&pos| is_legal_step(grid, pos))
        .count();
    if exits > 1 {
        debug!(%start, exits, "start marker has more than one exit");
        return Err(RouteError::MultipleStartingPaths { position: start });
    }

    debug!(%start, ends = ends.len(), "located endpoints");
    Ok(start)
}

/// Reject any character outside the diagram alphabet.
pub fn validate_charset(grid: &Grid) -> Result<(), RouteError> {
    match grid.positions().find(|&pos| !chars::is_known(grid.char_at(pos))) {
        Some(position) => Err(RouteError::UnknownCharacter {
            character: grid.char_at(position),
            position,
        }),
        None => Ok(()),
    }
}

/// A step may only land on an in-bounds, non-empty cell.
pub fn is_legal_step(grid: &Grid, candidate: Position) -> bool {
    grid.is_traversable(candidate)
}

/// At most one unvisited continuation from the current position.
///
/// A straight continuation always wins, so no fork analysis happens when one
/// is available.
pub fn is_fork_free(grid: &Grid, prev: Position) -> bool {
    if grid.is_straight_move_available(prev) {
        return true;
    }

    let open = grid
        .candidate_moves(grid.current())
        .into_iter()
        .filter(|&pos| is_legal_step(grid, pos) && !grid.is_visited(pos))
        .count();
    open <= 1
}

/// A `+` must have something to turn into across the incoming axis.
pub fn is_real_turn(grid: &Grid, prev: Position) -> bool {
    let current = grid.current();
    match grid.movement_axis(prev, current) {
        Some(axis) => grid
            .perpendicular_neighbors(current, axis)
            .iter()
            .any(|&pos| grid.is_traversable(pos)),
        None => false,
    }
}

/// Checks run at every position after the start.
pub fn validate_step(grid: &Grid, prev: Position) -> Result<(), RouteError> {
    let position = grid.current();
    let cell = grid.get(position);

    if cell.is_junction_like() && !is_fork_free(grid, prev) {
        debug!(%position, "fork");
        return Err(RouteError::Fork { position });
    }

    if cell == Cell::Junction && !is_real_turn(grid, prev) {
        debug!(%position, "fake turn");
        return Err(RouteError::FakeTurn { position });
    }

    let can_continue = grid
        .candidate_moves(position)
        .into_iter()
        .any(|pos| pos != prev && is_legal_step(grid, pos));
    if !can_continue {
        debug!(%position, "broken path");
        return Err(RouteError::BrokenPath { position });
    }

    Ok(())
}

/// Whether moving from `current` to `candidate` keeps to the route.
///
/// Never allows reversing onto `prev`. On straight segments only the
/// incoming axis is allowed; junction-like cells may switch axis. The first
/// move from the start has no incoming direction and is always consistent.
pub fn is_direction_consistent(
    grid: &Grid,
    candidate: Position,
    current: Position,
    prev: Option<Position>,
) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    if candidate == prev {
        return false;
    }

    let axis = grid.movement_axis(prev, current);
    let turns = grid.get(current).is_junction_like();

    let horizontal_ok = axis == Some(Axis::Horizontal) || turns;
    let vertical_ok = axis == Some(Axis::Vertical) || turns;

    (horizontal_ok && Axis::Horizontal.is_step(current, candidate))
        || (vertical_ok && Axis::Vertical.is_step(current, candidate))
}
