//! Draggable separators between adjacent view items.
//!
//! A [`Sash`] sits between items `i` and `i + 1`; its position on the
//! primary axis is the prefix sum of item extents through `i`. The engine
//! recomputes positions and [`SashState`]s after every layout pass. Drag
//! lifecycle state lives in [`SashDragState`], captured once at drag start
//! and replayed against every pointer change.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Stable identifier for a sash, allocated in creation order.
///
/// Ids survive reordering of the sash list; an id no longer present in the
/// engine simply no-ops when used.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SashId(u64);

impl SashId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Drag affordance of a sash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SashState {
    /// May be dragged both ways.
    #[default]
    Enabled,
    /// Inert.
    Disabled,
    /// May be dragged only in the positive direction.
    Minimum,
    /// May be dragged only in the negative direction.
    Maximum,
}

// ---------------------------------------------------------------------------
// Sash
// ---------------------------------------------------------------------------

/// One separator owned by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sash {
    id: SashId,
    state: SashState,
    position: u32,
}

impl Sash {
    pub(crate) fn new(id: SashId) -> Self {
        Self {
            id,
            state: SashState::Enabled,
            position: 0,
        }
    }

    /// Stable identity of this sash.
    #[must_use]
    pub const fn id(&self) -> SashId {
        self.id
    }

    /// Current drag affordance.
    #[must_use]
    pub const fn state(&self) -> SashState {
        self.state
    }

    /// Position on the primary axis: the prefix sum through the left
    /// neighbor.
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }

    pub(crate) fn set_state(&mut self, state: SashState) {
        self.state = state;
    }

    pub(crate) fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

// ---------------------------------------------------------------------------
// Drag state
// ---------------------------------------------------------------------------

/// A snap target armed at drag start.
///
/// `limit_delta` is the signed drag delta at which the target's visibility
/// flips: for a visible target the threshold sits half a minimum beyond the
/// drag's tight bound, for a hidden target half a minimum inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SnapTarget {
    pub index: usize,
    pub limit_delta: i64,
    pub size: u32,
}

/// Captured state of an in-progress drag.
#[derive(Debug, Clone)]
pub(crate) struct SashDragState {
    pub index: usize,
    pub start: i32,
    pub current: i32,
    pub alt: bool,
    /// Item extents at drag start; every change replays against these.
    pub sizes: Vec<u32>,
    pub overload_min_delta: i64,
    pub overload_max_delta: i64,
    pub snap_before: Option<SnapTarget>,
    pub snap_after: Option<SnapTarget>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
