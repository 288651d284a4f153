//! Diagnostics: engine snapshots and invariant checking.
//!
//! [`SplitViewSnapshot`] is a serializable copy of the observable engine
//! state, cheap enough to capture after every mutation in tests. Its
//! [`state_hash`](SplitViewSnapshot::state_hash) gives a deterministic
//! fingerprint for replay comparisons, and
//! [`invariant_report`](SplitViewSnapshot::invariant_report) audits the
//! engine invariants:
//!
//! 1. Visible items sit inside their bounds.
//! 2. Hidden items have zero extent.
//! 3. The sash count is `max(0, N - 1)`.
//! 4. Sash positions are prefix sums.
//! 5. `content_size` equals the sum of extents.
//!
//! Proportions are excluded: they are an input to the next layout pass, not
//! observable state.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

use sashview_core::{Orientation, Priority};

use crate::sash::SashState;
use crate::splitview::SplitView;

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// Observable state of one view item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewItemSnapshot {
    pub size: u32,
    pub cached_visible_size: Option<u32>,
    pub minimum_size: u32,
    pub maximum_size: Option<u32>,
    pub priority: Priority,
    pub snap: bool,
}

impl ViewItemSnapshot {
    /// Visibility is derived: a view is visible iff it has no hidden-size
    /// cache.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.cached_visible_size.is_none()
    }
}

/// Observable state of one sash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SashSnapshot {
    pub position: u32,
    pub state: SashState,
}

/// Observable state of a whole engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitViewSnapshot {
    pub orientation: Orientation,
    pub size: u32,
    pub content_size: u32,
    pub proportional_layout: bool,
    pub views: Vec<ViewItemSnapshot>,
    pub sashes: Vec<SashSnapshot>,
}

impl SplitViewSnapshot {
    /// Deterministic fingerprint over the whole snapshot.
    #[must_use]
    pub fn state_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Pretty JSON rendering for bug reports.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Audit the engine invariants.
    #[must_use]
    pub fn invariant_report(&self) -> LayoutInvariantReport {
        let mut issues = Vec::new();

        for (index, view) in self.views.iter().enumerate() {
            if view.visible() {
                if view.size < view.minimum_size {
                    issues.push(LayoutInvariantIssue {
                        code: LayoutInvariantCode::SizeBelowMinimum,
                        view: Some(index),
                        message: format!(
                            "view {index} has size {} below minimum {}",
                            view.size, view.minimum_size
                        ),
                    });
                }
                if let Some(maximum) = view.maximum_size
                    && view.size > maximum
                {
                    issues.push(LayoutInvariantIssue {
                        code: LayoutInvariantCode::SizeAboveMaximum,
                        view: Some(index),
                        message: format!(
                            "view {index} has size {} above maximum {maximum}",
                            view.size
                        ),
                    });
                }
            } else if view.size != 0 {
                issues.push(LayoutInvariantIssue {
                    code: LayoutInvariantCode::HiddenSizeNonZero,
                    view: Some(index),
                    message: format!("hidden view {index} has size {}", view.size),
                });
            }
        }

        let expected_sashes = self.views.len().saturating_sub(1);
        if self.sashes.len() != expected_sashes {
            issues.push(LayoutInvariantIssue {
                code: LayoutInvariantCode::SashCountMismatch,
                view: None,
                message: format!(
                    "{} sashes for {} views, expected {expected_sashes}",
                    self.sashes.len(),
                    self.views.len()
                ),
            });
        }

        let mut position = 0u32;
        for (index, sash) in self.sashes.iter().enumerate() {
            position =
                position.saturating_add(self.views.get(index).map_or(0, |view| view.size));
            if sash.position != position {
                issues.push(LayoutInvariantIssue {
                    code: LayoutInvariantCode::SashPositionMismatch,
                    view: Some(index),
                    message: format!(
                        "sash {index} at {} but the prefix sum is {position}",
                        sash.position
                    ),
                });
            }
        }

        let sum = self
            .views
            .iter()
            .fold(0u32, |acc, view| acc.saturating_add(view.size));
        if sum != self.content_size {
            issues.push(LayoutInvariantIssue {
                code: LayoutInvariantCode::ContentSizeMismatch,
                view: None,
                message: format!(
                    "content_size {} but view sizes sum to {sum}",
                    self.content_size
                ),
            });
        }

        LayoutInvariantReport {
            snapshot_hash: self.state_hash(),
            issues,
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant report
// ---------------------------------------------------------------------------

/// Stable code for one invariant finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutInvariantCode {
    SizeBelowMinimum,
    SizeAboveMaximum,
    HiddenSizeNonZero,
    SashCountMismatch,
    SashPositionMismatch,
    ContentSizeMismatch,
}

/// One actionable invariant finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInvariantIssue {
    pub code: LayoutInvariantCode,
    pub view: Option<usize>,
    pub message: String,
}

/// Structured audit over one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInvariantReport {
    pub snapshot_hash: u64,
    pub issues: Vec<LayoutInvariantIssue>,
}

impl LayoutInvariantReport {
    /// Whether any invariant is violated.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Capture
// ---------------------------------------------------------------------------

impl SplitView {
    /// Capture the observable engine state.
    #[must_use]
    pub fn snapshot(&self) -> SplitViewSnapshot {
        SplitViewSnapshot {
            orientation: self.orientation(),
            size: self.size(),
            content_size: self.content_size(),
            proportional_layout: self.proportional_layout(),
            views: self
                .items()
                .iter()
                .map(|item| ViewItemSnapshot {
                    size: item.size(),
                    cached_visible_size: item.cached_visible_size(),
                    minimum_size: item.view_minimum_size(),
                    maximum_size: item.view_maximum_size(),
                    priority: item.priority(),
                    snap: item.snap(),
                })
                .collect(),
            sashes: self
                .sashes()
                .iter()
                .map(|sash| SashSnapshot {
                    position: sash.position(),
                    state: sash.state(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
