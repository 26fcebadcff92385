//! Tape specification types.
//!
//! This module defines the input side of the renderer:
//!
//! - [`TapeSpec`] - an immutable description of a tape: its symbols, the
//!   head position, the number of squares, and decoration flags.
//! - [`StyleFlags`] - the decoration switches, parseable from the compact
//!   flag string used on the command line (`c`, `l`, `r`).
//! - [`SpecError`] - validation failures detected before any markup is
//!   produced.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Validation errors for a [`TapeSpec`].
///
/// Both variants are raised synchronously by [`TapeSpec::validate`] before
/// any markup is generated, so a failing spec never produces partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("symbol sequence longer than tape ({symbols} symbols, {length} squares)")]
    SymbolsTooLong { symbols: usize, length: usize },

    #[error("head index out of range (index {head}, {length} squares)")]
    HeadOutOfRange { head: usize, length: usize },
}

/// Decoration switches for a tape diagram.
///
/// Flags map one-to-one to the characters of the compact style string:
///
/// | Flag | Character | Effect |
/// |------|-----------|--------|
/// | `center` | `c` | Wrap the picture in a `center` environment |
/// | `left_ellipsis` | `l` | Two extra squares on the left, open edge, `⋯` marker |
/// | `right_ellipsis` | `r` | Two extra squares on the right, open edge, `⋯` marker |
///
/// # Examples
///
/// ```
/// use tikztape::StyleFlags;
///
/// let flags: StyleFlags = "lc".parse().unwrap();
/// assert!(flags.center());
/// assert!(flags.left_ellipsis());
/// assert!(!flags.right_ellipsis());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StyleFlags {
    center: bool,
    left_ellipsis: bool,
    right_ellipsis: bool,
}

impl StyleFlags {
    /// Creates flags with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the picture is wrapped in a `center` environment.
    pub fn center(&self) -> bool {
        self.center
    }

    /// Returns whether the tape extends indefinitely to the left.
    pub fn left_ellipsis(&self) -> bool {
        self.left_ellipsis
    }

    /// Returns whether the tape extends indefinitely to the right.
    pub fn right_ellipsis(&self) -> bool {
        self.right_ellipsis
    }

    /// Sets the centering flag.
    pub fn set_center(&mut self, center: bool) {
        self.center = center;
    }

    /// Sets the left-ellipsis flag.
    pub fn set_left_ellipsis(&mut self, left_ellipsis: bool) {
        self.left_ellipsis = left_ellipsis;
    }

    /// Sets the right-ellipsis flag.
    pub fn set_right_ellipsis(&mut self, right_ellipsis: bool) {
        self.right_ellipsis = right_ellipsis;
    }

    /// Returns the flags with centering enabled.
    pub fn with_center(mut self) -> Self {
        self.center = true;
        self
    }

    /// Returns the flags with the left ellipsis enabled.
    pub fn with_left_ellipsis(mut self) -> Self {
        self.left_ellipsis = true;
        self
    }

    /// Returns the flags with the right ellipsis enabled.
    pub fn with_right_ellipsis(mut self) -> Self {
        self.right_ellipsis = true;
        self
    }
}

impl FromStr for StyleFlags {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::default();
        for c in s.chars() {
            match c {
                'c' => flags.center = true,
                'l' => flags.left_ellipsis = true,
                'r' => flags.right_ellipsis = true,
                _ => {
                    return Err(format!("invalid style flag `{c}`, valid flags: c, l, r"));
                }
            }
        }
        Ok(flags)
    }
}

impl fmt::Display for StyleFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.center {
            write!(f, "c")?;
        }
        if self.left_ellipsis {
            write!(f, "l")?;
        }
        if self.right_ellipsis {
            write!(f, "r")?;
        }
        Ok(())
    }
}

/// An immutable description of a Turing-machine tape to render.
///
/// A spec is constructed fresh per render call and never mutated. The two
/// invariants (`symbols.len() <= length` and `head < length`) are checked by
/// [`validate`](Self::validate) when rendering starts, not at construction,
/// so building a spec is infallible.
///
/// # Examples
///
/// ```
/// use tikztape::{StyleFlags, TapeSpec};
///
/// let spec = TapeSpec::new("AB", 0, 2, StyleFlags::new());
/// assert_eq!(spec.symbols().len(), 2);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeSpec {
    symbols: Vec<char>,
    head: usize,
    length: usize,
    style: StyleFlags,
}

impl TapeSpec {
    /// Creates a new tape spec.
    ///
    /// # Arguments
    ///
    /// * `symbols` - Characters to write on the tape, one per square,
    ///   starting at the leftmost core square.
    /// * `head` - Zero-based index of the square carrying the head
    ///   highlight, counted over the core squares.
    /// * `length` - Number of core squares (excluding ellipsis squares).
    /// * `style` - Decoration flags.
    pub fn new(symbols: &str, head: usize, length: usize, style: StyleFlags) -> Self {
        Self {
            symbols: symbols.chars().collect(),
            head,
            length,
            style,
        }
    }

    /// Returns the symbols written on the tape.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the zero-based head index.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the number of core squares.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the decoration flags.
    pub fn style(&self) -> StyleFlags {
        self.style
    }

    /// Checks the spec invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::SymbolsTooLong`] if there are more symbols than
    /// squares, and [`SpecError::HeadOutOfRange`] if the head index does not
    /// address a core square. The checks run in that order.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.symbols.len() > self.length {
            return Err(SpecError::SymbolsTooLong {
                symbols: self.symbols.len(),
                length: self.length,
            });
        }
        if self.head >= self.length {
            return Err(SpecError::HeadOutOfRange {
                head: self.head,
                length: self.length,
            });
        }
        Ok(())
    }
}
