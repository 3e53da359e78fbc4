//! Walk the single route drawn in an ASCII art diagram.
//!
//! A diagram is a grid of characters tracing one path from a start marker
//! `@` to an end marker `x`:
//!
//! ```text
//! @---A---+
//!         |
//! x-B-+   C
//!     |   |
//!     +---+
//! ```
//!
//! `-` and `|` are straight segments, `+` marks a turn, and uppercase
//! letters are collected the first time their cell is stepped on (they may
//! also sit on a turn). Crossing straight over another segment is allowed.
//!
//! # Example
//!
//! ```rust
//! let diagram = "@---A---+\n        |\nx-B-+   C\n    |   |\n    +---+";
//! let route = aapath::find_path(diagram).unwrap();
//! assert_eq!(route.letters_string(), "ACB");
//! assert_eq!(route.path_string(), "@---A---+|C|+---+|+-B-x");
//! ```
//!
//! Diagrams that do not encode exactly one unambiguous route fail with a
//! [`RouteError`]: a missing or repeated start, a missing end, more than one
//! way out of the start, forks, turn markers with nowhere to turn, and
//! broken paths.

pub mod chars;
pub mod error;
pub mod finder;
pub mod grid;
pub mod path;
pub mod validator;

pub use chars::Cell;
pub use error::{RouteError, RouteErrorKind};
pub use finder::{find_path, find_path_with_options, find_route, FindOptions};
pub use grid::{Axis, Grid, Position};
pub use path::{collect_letters, render_path, Route, Trail};
