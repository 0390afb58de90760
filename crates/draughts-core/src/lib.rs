//! **draughts-core** — board geometry for the draughts crossing crates.
//!
//! This crate provides the foundational value types used across the
//! *draughts* workspace: integer coordinates, the two diagonal forward
//! directions a man may move in, and the rectangular board extent.

pub mod geom;

pub use geom::{Board, Direction, Point};
