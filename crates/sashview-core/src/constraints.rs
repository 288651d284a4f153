//! Per-view size bounds and layout priority.
//!
//! [`SizeConstraints`] carries the minimum/maximum extent a view accepts on
//! the primary axis. An unbounded maximum is `None`. A maximum below the
//! minimum is a programmer error and is rejected by [`validate`].
//!
//! [`validate`]: SizeConstraints::validate

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Order in which views absorb size changes during non-proportional layout.
///
/// High-priority views are resized first, low-priority views last. The
/// priority is not consulted while proportional layout is scaling views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

// ---------------------------------------------------------------------------
// SizeConstraints
// ---------------------------------------------------------------------------

/// Size bounds for one view on the primary axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeConstraints {
    /// Smallest extent the view accepts. `0` when unconstrained.
    pub minimum: u32,
    /// Largest extent the view accepts. `None` when unbounded.
    pub maximum: Option<u32>,
}

impl SizeConstraints {
    /// Bounds that accept any extent.
    pub const UNBOUNDED: Self = Self {
        minimum: 0,
        maximum: None,
    };

    /// Build bounds from a minimum and an optional maximum.
    #[must_use]
    pub const fn new(minimum: u32, maximum: Option<u32>) -> Self {
        Self { minimum, maximum }
    }

    /// Bounds that pin the view to one exact extent.
    #[must_use]
    pub const fn fixed(extent: u32) -> Self {
        Self {
            minimum: extent,
            maximum: Some(extent),
        }
    }

    /// Reject a maximum below the minimum.
    pub fn validate(self) -> Result<(), ConstraintError> {
        if let Some(maximum) = self.maximum
            && maximum < self.minimum
        {
            return Err(ConstraintError::InvalidBounds {
                minimum: self.minimum,
                maximum,
            });
        }
        Ok(())
    }

    /// Clamp an extent into these bounds.
    ///
    /// An inverted pair never reaches here when [`validate`] is honored;
    /// should it anyway, the maximum wins, matching the engine's clamp
    /// ordering.
    ///
    /// [`validate`]: Self::validate
    #[must_use]
    pub fn clamp(self, extent: u32) -> u32 {
        let raised = extent.max(self.minimum);
        match self.maximum {
            Some(maximum) => raised.min(maximum),
            None => raised,
        }
    }

    /// Whether the bounds leave any room to resize.
    #[must_use]
    pub fn is_flexible(self) -> bool {
        match self.maximum {
            Some(maximum) => maximum > self.minimum,
            None => true,
        }
    }
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Constraint validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    /// The maximum is below the minimum.
    InvalidBounds { minimum: u32, maximum: u32 },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { minimum, maximum } => {
                write!(f, "invalid size bounds: maximum {maximum} < minimum {minimum}")
            }
        }
    }
}

impl std::error::Error for ConstraintError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
