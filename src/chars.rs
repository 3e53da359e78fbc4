//! Character classification for route diagrams.
//!
//! Every lookup into the grid goes through [`Cell::classify`], so the rest of
//! the crate matches on a closed set of categories instead of comparing raw
//! characters.

/// Start marker
pub const START: char = '@';

/// End marker
pub const END: char = 'x';

/// Horizontal segment
pub const HORIZONTAL: char = '-';

/// Vertical segment
pub const VERTICAL: char = '|';

/// Turn marker
pub const JUNCTION: char = '+';

/// Blank cell
pub const EMPTY: char = ' ';

/// Category of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// `@`
    Start,
    /// `x`
    End,
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `A`-`Z`, collected along the route
    Letter(char),
    /// `+`
    Junction,
    /// Any other printable character. Routes through it like a letter but
    /// is never collected.
    Other(char),
    /// Space, or anything outside the grid
    Empty,
}

impl Cell {
    /// Classify a raw character.
    pub fn classify(c: char) -> Self {
        match c {
            START => Cell::Start,
            END => Cell::End,
            HORIZONTAL => Cell::Horizontal,
            VERTICAL => Cell::Vertical,
            JUNCTION => Cell::Junction,
            EMPTY => Cell::Empty,
            'A'..='Z' => Cell::Letter(c),
            _ => Cell::Other(c),
        }
    }

    /// The character this cell was classified from. `Empty` renders as a space.
    pub fn symbol(self) -> char {
        match self {
            Cell::Start => START,
            Cell::End => END,
            Cell::Horizontal => HORIZONTAL,
            Cell::Vertical => VERTICAL,
            Cell::Junction => JUNCTION,
            Cell::Empty => EMPTY,
            Cell::Letter(c) | Cell::Other(c) => c,
        }
    }

    /// Only `-` and `|` are straight; everything else can change direction.
    pub fn is_straight(self) -> bool {
        matches!(self, Cell::Horizontal | Cell::Vertical)
    }

    /// Letters, turn markers, and the start and end markers.
    pub fn is_junction_like(self) -> bool {
        !self.is_straight()
    }

    pub fn is_traversable(self) -> bool {
        self != Cell::Empty
    }
}

/// Check if a character belongs to the recognized diagram alphabet
pub fn is_known(c: char) -> bool {
    !matches!(Cell::classify(c), Cell::Other(_))
}

/// Check if a character is a collectable letter
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}
