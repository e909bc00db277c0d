//! Errors raised while validating caller-supplied scene grids.
//!
//! Queries in this crate never fail; out-of-range lookups resolve to
//! sentinel values. Only constructors that take ownership of grids check
//! their shape up front so later lookups can stay infallible.

use std::fmt;

/// A grid handed to the engine does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no planes, or more than the world supports.
    PlaneCount { grid: &'static str, planes: usize },
    /// Height and settings grids disagree on the number of planes.
    PlaneMismatch { heights: usize, settings: usize },
    /// A plane or column is smaller than the scene requires.
    TooSmall {
        grid: &'static str,
        plane: usize,
        required: usize,
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::PlaneCount { grid, planes } => {
                write!(f, "{grid} grid has {planes} planes")
            }
            GridError::PlaneMismatch { heights, settings } => write!(
                f,
                "height grid has {heights} planes but settings grid has {settings}"
            ),
            GridError::TooSmall {
                grid,
                plane,
                required,
                actual,
            } => write!(
                f,
                "{grid} grid plane {plane} is {actual} tiles wide, need at least {required}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
