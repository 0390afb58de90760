//! Board positions written as text pictures.

use std::collections::HashSet;
use std::fmt;

use draughts_core::{Board, Point};

use crate::traits::Occupancy;

/// A board position parsed from a text picture.
///
/// Each character maps to a square: `.` is an empty square, `b` a black
/// man, `r` the red man whose crossing is being searched (at most one).
/// Lines are separated by `'\n'` and must all have the same width. The
/// first line is the top of the picture, the highest row, so a layout
/// reads like the board with row 0 at the bottom.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    board: Board,
    start: Option<Point>,
    blacks: HashSet<Point>,
}

impl Layout {
    /// Parse a layout from its picture.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string
    /// but not from individual lines.
    pub fn new(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().collect();
        let height = lines.len() as i32;
        let width = lines.first().map_or(0, |l| l.chars().count()) as i32;

        let mut blacks = HashSet::new();
        let mut start = None;

        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != width {
                return Err(LayoutError::InconsistentSize(s.to_string()));
            }
            let y = height - 1 - i as i32;
            for (j, ch) in line.chars().enumerate() {
                let pos = Point::new(j as i32, y);
                match ch {
                    '.' => {}
                    'b' => {
                        blacks.insert(pos);
                    }
                    'r' => {
                        if start.is_some() {
                            return Err(LayoutError::DuplicateStart { pos });
                        }
                        start = Some(pos);
                    }
                    _ => {
                        return Err(LayoutError::InvalidRune {
                            ch,
                            pos,
                            content: s.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            board: Board::new(width, height),
            start,
            blacks,
        })
    }

    /// The board extent of the picture.
    pub fn board(&self) -> Board {
        self.board
    }

    /// The red man's square, if the picture places one.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The squares occupied by black men.
    pub fn blacks(&self) -> &HashSet<Point> {
        &self.blacks
    }
}

impl Occupancy for Layout {
    fn occupied(&self, p: Point) -> bool {
        self.blacks.contains(&p)
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    InconsistentSize(String),
    /// A character other than `.`, `b` or `r` was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// The picture places more than one red man.
    DuplicateStart { pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize(s) => write!(f, "layout: inconsistent line widths:\n{s}"),
            Self::InvalidRune { ch, pos, content } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                    pos.x, pos.y
                )
            }
            Self::DuplicateStart { pos } => {
                write!(f, "layout places a second red man at ({}, {})", pos.x, pos.y)
            }
        }
    }
}

impl std::error::Error for LayoutError {}
