//! Minimum-move crossing search for draughts boards.
//!
//! Given one man on the board and a set of fixed opposing men, this crate
//! finds the fewest moves needed to reach the crownhead, the far row on
//! the opposite side, under the draughts movement rules:
//!
//! - a **step** moves one square diagonally forward and costs one move;
//! - a **capture hop** leaps a single occupied square to the empty square
//!   beyond it, advancing two rows in the same direction;
//! - consecutive hops form a **capture chain**, charged as one move no
//!   matter how many men it leaps.
//!
//! Queries go through [`Crossing`], which owns and reuses its node cache so
//! that repeated searches incur zero allocations after warm-up. The
//! opposing men are supplied per query through the [`Occupancy`] trait, and
//! positions can be written as text pictures with [`Layout`].

mod crossing;
mod layout;
mod traits;

pub use crossing::Crossing;
pub use layout::{Layout, LayoutError};
pub use traits::{Occupancy, OccupancyFn};
