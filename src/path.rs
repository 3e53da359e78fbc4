//! Traversal record and the output rendering built from it.

use std::fmt;

use crate::chars;

/// The sequences a walk builds up: every character stepped on, and each
/// letter cell the first time it is entered.
///
/// Entries are pushed on the way into a cell and popped again when that cell
/// turns out to be a dead end, so the record always describes the live
/// branch only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trail {
    path: Vec<char>,
    letters: Vec<char>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step. Returns true if the step contributed a letter, which
    /// must be handed back to [`Trail::pop`] if the step is undone.
    pub fn push(&mut self, symbol: char, letter: Option<char>) -> bool {
        self.path.push(symbol);
        match letter {
            Some(c) => {
                self.letters.push(c);
                true
            }
            None => false,
        }
    }

    /// Undo the most recent step.
    pub fn pop(&mut self, contributed_letter: bool) {
        self.path.pop();
        if contributed_letter {
            self.letters.pop();
        }
    }

    pub fn path(&self) -> &[char] {
        &self.path
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn into_route(self) -> Route {
        Route {
            path: self.path,
            letters: self.letters,
        }
    }
}

/// A completed walk from `@` to `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Every character stepped on, crossings included twice
    pub path: Vec<char>,
    /// Letters in first-visit order, one per grid cell
    pub letters: Vec<char>,
}

impl Route {
    /// The path as a single string
    pub fn path_string(&self) -> String {
        render_path(&self.path)
    }

    /// The collected letters as a single string
    pub fn letters_string(&self) -> String {
        collect_letters(&self.letters)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Letters: {}", self.letters_string())?;
        write!(f, "Path: {}", self.path_string())
    }
}

/// Concatenate the visited characters.
pub fn render_path(path: &[char]) -> String {
    path.iter().collect()
}

/// Keep only `A`-`Z` and concatenate.
pub fn collect_letters(letters: &[char]) -> String {
    letters.iter().copied().filter(|&c| chars::is_letter(c)).collect()
}
