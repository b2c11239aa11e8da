//! Error types for cloth construction.

use core::fmt;

/// Errors that can occur while setting up a cloth mesh.
///
/// Stepping never fails; only the configuration is validated.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Spacing must be positive and finite.
    InvalidSpacing,
    /// Cloth width and height must be finite and non-negative.
    InvalidClothSize,
    /// Width and height must fit at least one particle at the given spacing.
    EmptyGrid { cols: usize, rows: usize },
    /// The grid holds more particles or links than can be allocated.
    GridTooLarge { cols: usize, rows: usize },
    /// Viewport extents must be finite and non-negative.
    InvalidViewport,
    /// Drag must be in [0, 1].
    InvalidDrag,
    /// At least one relaxation pass is required.
    InvalidIterations,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidSpacing => write!(f, "spacing must be positive and finite"),
            ClothError::EmptyGrid { cols, rows } => {
                write!(f, "cloth grid is empty ({} x {} particles)", cols, rows)
            }
            ClothError::InvalidClothSize => write!(f, "cloth size must be finite and non-negative"),
            ClothError::GridTooLarge { cols, rows } => {
                write!(f, "cloth grid is too large ({} x {} particles)", cols, rows)
            }
            ClothError::InvalidViewport => write!(f, "viewport must be finite and non-negative"),
            ClothError::InvalidDrag => write!(f, "drag must be in [0, 1]"),
            ClothError::InvalidIterations => write!(f, "at least one relaxation iteration is required"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClothError {}
