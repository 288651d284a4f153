//! Events the engine queues for its host.
//!
//! The engine never calls back into the host: every observable effect is
//! queued as a [`SplitViewEvent`] and drained by the host after the call
//! that produced it. With `&mut self` mutators this makes re-entrant
//! mutation unrepresentable.

use serde::{Deserialize, Serialize};

/// One observable effect, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SplitViewEvent {
    /// An interactive drag began. Carries the extents at drag start.
    DragStart { sizes: Vec<u32> },
    /// An interactive drag ended (or was cancelled by a programmatic
    /// mutation). Carries the final extents.
    DragEnd { sizes: Vec<u32> },
    /// Extents changed: fired once after every completed drag and after
    /// every programmatic resize.
    SizesChanged { sizes: Vec<u32> },
    /// A view flipped visibility, either explicitly or through snapping.
    VisibilityChanged { index: usize, visible: bool },
    /// The sash at `index` was activated for reset; the host decides the
    /// reset policy (typically a resize to the pane's preferred extent).
    SashReset { index: usize },
}
