//! The split view engine.
//!
//! A [`SplitView`] owns an ordered list of view items and the sashes between
//! them, positions the items along its primary axis, and mediates sash drags
//! against per-view minimum/maximum bounds, priorities and snap policies.
//!
//! # Invariants
//!
//! Outside an in-progress drag:
//!
//! 1. Every visible item satisfies `minimum <= size <= maximum`.
//! 2. Every hidden item has `size == 0` and a defined hidden-size cache.
//! 3. `content_size` equals the sum of item extents.
//! 4. There are `max(0, N - 1)` sashes for `N` items.
//! 5. Each sash's position is the prefix sum through its left neighbor.
//!
//! # Failure Modes
//!
//! Index errors on operations that require a valid index surface as
//! [`SplitViewError::IndexOutOfBounds`]; reads of out-of-range extents
//! return `None`; an unknown [`SashId`] no-ops. Infeasible resizes never
//! fail, the delta is clamped to what the bounds allow.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use sashview_core::{Orientation, PointerPosition, Priority, Rect, SizeConstraints, Sizing};

use crate::event::SplitViewEvent;
use crate::item::{ItemSize, ViewItem};
use crate::sash::{Sash, SashDragState, SashId, SashState, SnapTarget};
use crate::view::View;

/// Default sash thickness in pixels.
pub const DEFAULT_SASH_SIZE: u32 = 4;

// ---------------------------------------------------------------------------
// Options and descriptor
// ---------------------------------------------------------------------------

/// Construction-time configuration.
#[derive(Debug, Clone)]
pub struct SplitViewOptions {
    /// Axis along which views are stacked.
    pub orientation: Orientation,
    /// Scale views by their last-saved fractions on container resizes.
    pub proportional_layout: bool,
    /// Invert the meaning of the alt modifier on drags.
    pub inverse_alt_behavior: bool,
    /// Sash thickness on the primary axis.
    pub sash_size: u32,
    /// Sash extent on the orthogonal axis, when known.
    pub orthogonal_sash_size: Option<u32>,
}

impl Default for SplitViewOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            proportional_layout: true,
            inverse_alt_behavior: false,
            sash_size: DEFAULT_SASH_SIZE,
            orthogonal_sash_size: None,
        }
    }
}

/// One entry of a construction-time view set.
pub struct ViewDescriptor {
    pub view: Box<dyn View>,
    pub size: u32,
    pub visible: bool,
}

impl ViewDescriptor {
    /// A visible entry.
    #[must_use]
    pub fn new(view: Box<dyn View>, size: u32) -> Self {
        Self {
            view,
            size,
            visible: true,
        }
    }

    /// A hidden entry; `size` becomes the hidden-size cache.
    #[must_use]
    pub fn hidden(view: Box<dyn View>, size: u32) -> Self {
        Self {
            view,
            size,
            visible: false,
        }
    }
}

/// Initial view set installed at construction, without running layout.
pub struct SplitViewDescriptor {
    pub size: u32,
    pub views: Vec<ViewDescriptor>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Engine operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitViewError {
    /// An index points outside the view-item list. The engine state is not
    /// mutated.
    IndexOutOfBounds { index: usize, len: usize },
    /// A sizing strategy referenced a neighbor that does not exist.
    InvalidSizingNeighbor { neighbor: usize, len: usize },
}

impl fmt::Display for SplitViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { .. } => write!(f, "Index out of bounds"),
            Self::InvalidSizingNeighbor { neighbor, len } => {
                write!(f, "invalid sizing neighbor {neighbor} for {len} views")
            }
        }
    }
}

impl std::error::Error for SplitViewError {}

// ---------------------------------------------------------------------------
// Resize plumbing
// ---------------------------------------------------------------------------

/// Parameters of one resize pass. The defaults describe a plain programmatic
/// resize: current sizes, no priority overrides, unbounded overloads, no
/// snap targets.
struct ResizeOptions {
    sizes: Option<Vec<u32>>,
    low_priority_indexes: Option<Vec<usize>>,
    high_priority_indexes: Option<Vec<usize>>,
    overload_min_delta: i64,
    overload_max_delta: i64,
    snap_before: Option<SnapTarget>,
    snap_after: Option<SnapTarget>,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            sizes: None,
            low_priority_indexes: None,
            high_priority_indexes: None,
            overload_min_delta: i64::MIN,
            overload_max_delta: i64::MAX,
            snap_before: None,
            snap_after: None,
        }
    }
}

/// Move `index` to the front of `indexes` if present, keeping the rest in
/// order.
fn push_to_start(indexes: &mut Vec<usize>, index: usize) {
    if let Some(position) = indexes.iter().position(|&i| i == index) {
        indexes.remove(position);
        indexes.insert(0, index);
    }
}

/// Move `index` to the end of `indexes` if present, keeping the rest in
/// order.
fn push_to_end(indexes: &mut Vec<usize>, index: usize) {
    if let Some(position) = indexes.iter().position(|&i| i == index) {
        indexes.remove(position);
        indexes.push(index);
    }
}

fn clamp_i64(value: i64, lo: i64, hi: i64) -> i64 {
    value.max(lo).min(hi)
}

fn as_px(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

// ---------------------------------------------------------------------------
// SplitView
// ---------------------------------------------------------------------------

/// Resizable split-pane layout engine for one container.
pub struct SplitView {
    orientation: Orientation,
    size: u32,
    content_size: u32,
    proportional_layout: bool,
    proportions: Option<Box<[Option<f64>]>>,
    inverse_alt_behavior: bool,
    sash_size: u32,
    orthogonal_sash_size: Option<u32>,
    start_snapping_enabled: bool,
    end_snapping_enabled: bool,
    items: Vec<ViewItem>,
    sashes: Vec<Sash>,
    next_sash_id: u64,
    drag: Option<SashDragState>,
    events: VecDeque<SplitViewEvent>,
}

impl SplitView {
    /// Build an empty engine.
    #[must_use]
    pub fn new(options: SplitViewOptions) -> Self {
        Self {
            orientation: options.orientation,
            size: 0,
            content_size: 0,
            proportional_layout: options.proportional_layout,
            proportions: None,
            inverse_alt_behavior: options.inverse_alt_behavior,
            sash_size: options.sash_size,
            orthogonal_sash_size: options.orthogonal_sash_size,
            start_snapping_enabled: true,
            end_snapping_enabled: true,
            items: Vec::new(),
            sashes: Vec::new(),
            next_sash_id: 0,
            drag: None,
            events: VecDeque::new(),
        }
    }

    /// Build an engine with an initial view set, without running layout.
    ///
    /// The descriptor's `size` becomes the target extent; proportions are
    /// captured from the installed sizes so that the first `layout` call
    /// scales them when proportional layout is on.
    pub fn from_descriptor(
        options: SplitViewOptions,
        descriptor: SplitViewDescriptor,
    ) -> Result<Self, SplitViewError> {
        let mut split = Self::new(options);
        split.size = descriptor.size;
        for (index, entry) in descriptor.views.into_iter().enumerate() {
            let sizing = if entry.visible {
                Sizing::exact(entry.size)
            } else {
                Sizing::invisible(entry.size)
            };
            split.do_add_view(index, entry.view, sizing, true)?;
        }
        split.content_size = split
            .items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.size()));
        split.save_proportions();
        Ok(split)
    }

    // -- accessors ---------------------------------------------------------

    /// Stacking axis.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Target extent on the primary axis.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Sum of item extents after the last layout pass.
    #[must_use]
    pub fn content_size(&self) -> u32 {
        self.content_size
    }

    /// Whether container resizes scale views proportionally.
    #[must_use]
    pub fn proportional_layout(&self) -> bool {
        self.proportional_layout
    }

    /// Number of view items.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.items.len()
    }

    /// Current extents, in order.
    #[must_use]
    pub fn sizes(&self) -> Vec<u32> {
        self.items.iter().map(ViewItem::size).collect()
    }

    /// Extent of the view at `index`, or `None` when out of range.
    #[must_use]
    pub fn view_size(&self, index: usize) -> Option<u32> {
        self.items.get(index).map(ViewItem::size)
    }

    /// Hidden-size cache of the view at `index`; `None` when visible or out
    /// of range.
    #[must_use]
    pub fn view_cached_visible_size(&self, index: usize) -> Option<u32> {
        self.items.get(index).and_then(ViewItem::cached_visible_size)
    }

    /// Sum of effective minimums.
    #[must_use]
    pub fn minimum_total_size(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.minimum_size()))
    }

    /// Sum of effective maximums; `None` when any view is unbounded.
    #[must_use]
    pub fn maximum_total_size(&self) -> Option<u32> {
        self.items.iter().try_fold(0u32, |acc, item| {
            item.maximum_size().map(|max| acc.saturating_add(max))
        })
    }

    /// The sashes, ordered; sash `i` separates items `i` and `i + 1`.
    #[must_use]
    pub fn sashes(&self) -> &[Sash] {
        &self.sashes
    }

    /// Hit rectangle of the sash at `index`, centered on the item boundary.
    #[must_use]
    pub fn sash_rect(&self, index: usize) -> Option<Rect> {
        let sash = self.sashes.get(index)?;
        let offset = sash.position().saturating_sub(self.sash_size / 2);
        let orthogonal = self.orthogonal_sash_size.unwrap_or(0);
        Some(self.orientation.place(offset, self.sash_size, orthogonal))
    }

    /// Update the orthogonal sash extent (fed by the host on cross-axis
    /// container resizes).
    pub fn set_orthogonal_sash_size(&mut self, size: Option<u32>) {
        self.orthogonal_sash_size = size;
    }

    /// Allow or forbid snapping at the start of the sequence.
    pub fn set_start_snapping_enabled(&mut self, enabled: bool) {
        if self.start_snapping_enabled != enabled {
            self.start_snapping_enabled = enabled;
            self.update_sash_enablement();
        }
    }

    /// Allow or forbid snapping at the end of the sequence.
    pub fn set_end_snapping_enabled(&mut self, enabled: bool) {
        if self.end_snapping_enabled != enabled {
            self.end_snapping_enabled = enabled;
            self.update_sash_enablement();
        }
    }

    /// Drain the queued events, in emission order.
    pub fn take_events(&mut self) -> Vec<SplitViewEvent> {
        self.events.drain(..).collect()
    }

    // -- view management ---------------------------------------------------

    /// Append a view.
    pub fn add_view(&mut self, view: Box<dyn View>, sizing: Sizing) -> Result<(), SplitViewError> {
        self.do_add_view(self.items.len(), view, sizing, false)
    }

    /// Insert a view at `index`.
    pub fn insert_view(
        &mut self,
        index: usize,
        view: Box<dyn View>,
        sizing: Sizing,
    ) -> Result<(), SplitViewError> {
        self.do_add_view(index, view, sizing, false)
    }

    fn do_add_view(
        &mut self,
        index: usize,
        view: Box<dyn View>,
        sizing: Sizing,
        skip_layout: bool,
    ) -> Result<(), SplitViewError> {
        if index > self.items.len() {
            return Err(SplitViewError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        debug_assert!(
            SizeConstraints::new(view.minimum_size(), view.maximum_size())
                .validate()
                .is_ok(),
            "view bounds must satisfy minimum <= maximum",
        );

        let sizing = match sizing {
            Sizing::Auto { neighbor } => {
                if self.are_views_distributed() {
                    Sizing::Distribute
                } else {
                    Sizing::Split { neighbor }
                }
            }
            other => other,
        };
        let item_size = match sizing {
            Sizing::Exact { size } => ItemSize::Visible(size),
            Sizing::Split { neighbor } => {
                let size = self.view_size(neighbor).ok_or(
                    SplitViewError::InvalidSizingNeighbor {
                        neighbor,
                        len: self.items.len(),
                    },
                )?;
                ItemSize::Visible(size / 2)
            }
            Sizing::Invisible { cached_visible_size } => ItemSize::Hidden { cached_visible_size },
            Sizing::Distribute | Sizing::Auto { .. } => ItemSize::Visible(view.minimum_size()),
        };

        self.cancel_active_drag();
        self.items.insert(index, ViewItem::new(view, item_size));
        if self.items.len() > 1 {
            let id = SashId::new(self.next_sash_id);
            self.next_sash_id += 1;
            self.sashes.insert(index.saturating_sub(1), Sash::new(id));
        }
        debug!(index, views = self.items.len(), "view added");

        if !skip_layout {
            let high_priority_indexes = match sizing {
                Sizing::Split { neighbor } => Some(vec![neighbor]),
                _ => None,
            };
            self.relayout(Some(vec![index]), high_priority_indexes);
            if matches!(sizing, Sizing::Distribute) {
                self.distribute_view_sizes();
            }
        }
        Ok(())
    }

    /// Remove the view at `index`, returning it. The paired sash at
    /// `max(0, index - 1)` is removed with it.
    pub fn remove_view(
        &mut self,
        index: usize,
        sizing: Option<Sizing>,
    ) -> Result<Box<dyn View>, SplitViewError> {
        if index >= self.items.len() {
            return Err(SplitViewError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.cancel_active_drag();
        let item = self.items.remove(index);
        if !self.sashes.is_empty() {
            self.sashes.remove(index.saturating_sub(1));
        }
        debug!(index, views = self.items.len(), "view removed");
        self.relayout(None, None);
        if matches!(sizing, Some(Sizing::Distribute)) {
            self.distribute_view_sizes();
        }
        Ok(item.into_view())
    }

    /// Move the view at `from` to `to`, preserving a hidden item's cached
    /// extent.
    pub fn move_view(&mut self, from: usize, to: usize) -> Result<(), SplitViewError> {
        let len = self.items.len();
        if to >= len {
            return Err(SplitViewError::IndexOutOfBounds { index: to, len });
        }
        let sizing = match self.view_cached_visible_size(from) {
            Some(cached) => Sizing::invisible(cached),
            None => Sizing::exact(self.view_size(from).ok_or(
                SplitViewError::IndexOutOfBounds { index: from, len },
            )?),
        };
        let view = self.remove_view(from, None)?;
        self.do_add_view(to, view, sizing, false)
    }

    /// Whether the view at `index` is visible.
    pub fn is_view_visible(&self, index: usize) -> Result<bool, SplitViewError> {
        self.items
            .get(index)
            .map(ViewItem::visible)
            .ok_or(SplitViewError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            })
    }

    /// Show or hide the view at `index`. Hiding caches the current extent;
    /// showing restores the cache clamped into the view's bounds.
    pub fn set_view_visible(&mut self, index: usize, visible: bool) -> Result<(), SplitViewError> {
        if index >= self.items.len() {
            return Err(SplitViewError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        self.cancel_active_drag();
        if self.items[index].set_visible(visible, None) {
            self.events
                .push_back(SplitViewEvent::VisibilityChanged { index, visible });
        }
        self.distribute_empty_space(Some(index));
        self.layout_views();
        self.save_proportions();
        Ok(())
    }

    // -- layout ------------------------------------------------------------

    /// Set the target extent and lay every item out against it.
    ///
    /// With cached proportions each scaling view is resized to its saved
    /// fraction of the new extent, clamped into bounds. Otherwise a single
    /// delta equal to the extent change is applied anchored at the last
    /// index, steered by priorities. Both paths conclude with the
    /// empty-space pass and placement.
    pub fn layout(&mut self, size: u32) {
        let previous_size = self.size.max(self.content_size);
        self.size = size;
        if self.items.is_empty() {
            return;
        }

        if let Some(proportions) = self.proportions.clone() {
            let mut total = 0.0;
            let mut remaining = f64::from(size);
            for (index, item) in self.items.iter().enumerate() {
                match proportions.get(index).copied().flatten() {
                    Some(proportion) => total += proportion,
                    None => remaining -= f64::from(item.size()),
                }
            }
            for (index, item) in self.items.iter_mut().enumerate() {
                if let Some(proportion) = proportions.get(index).copied().flatten()
                    && total > 0.0
                {
                    let target = (proportion * remaining / total).round() as i64;
                    let clamped =
                        clamp_i64(target, item.minimum_size_i64(), item.maximum_size_i64());
                    item.set_size(as_px(clamped));
                }
            }
        } else {
            let indexes: Vec<usize> = (0..self.items.len()).collect();
            let low_priority_indexes: Vec<usize> = indexes
                .iter()
                .copied()
                .filter(|&i| self.items[i].priority() == Priority::Low)
                .collect();
            let high_priority_indexes: Vec<usize> = indexes
                .iter()
                .copied()
                .filter(|&i| self.items[i].priority() == Priority::High)
                .collect();
            let delta = i64::from(size) - i64::from(previous_size);
            self.resize(
                self.items.len() - 1,
                delta,
                ResizeOptions {
                    low_priority_indexes: Some(low_priority_indexes),
                    high_priority_indexes: Some(high_priority_indexes),
                    ..ResizeOptions::default()
                },
            );
        }

        self.distribute_empty_space(None);
        self.layout_views();
    }

    /// Resize one view, letting the others absorb the slack. Out-of-range
    /// indexes are a no-op.
    pub fn resize_view(&mut self, index: usize, size: u32) {
        if index >= self.items.len() {
            return;
        }
        self.cancel_active_drag();
        let indexes: Vec<usize> = (0..self.items.len()).filter(|&i| i != index).collect();
        let mut low_priority_indexes: Vec<usize> = indexes
            .iter()
            .copied()
            .filter(|&i| self.items[i].priority() == Priority::Low)
            .collect();
        low_priority_indexes.push(index);
        let high_priority_indexes: Vec<usize> = indexes
            .iter()
            .copied()
            .filter(|&i| self.items[i].priority() == Priority::High)
            .collect();

        let total_size = self.size;
        let item = &mut self.items[index];
        let upper = match item.maximum_size() {
            Some(maximum) => maximum.min(total_size),
            None => total_size,
        };
        let clamped = size.max(item.minimum_size()).min(upper);
        item.set_size(clamped);

        self.relayout(Some(low_priority_indexes), Some(high_priority_indexes));
        let sizes = self.sizes();
        self.events.push_back(SplitViewEvent::SizesChanged { sizes });
    }

    /// Resize the view at `index` to its preferred extent, when it reports
    /// one. Out-of-range indexes and views without a preference no-op.
    pub fn resize_view_to_preferred(&mut self, index: usize) {
        let Some(preferred) = self.items.get(index).and_then(ViewItem::preferred_size) else {
            return;
        };
        self.resize_view(index, preferred);
    }

    /// Replace every extent at once, then re-run layout against the captured
    /// proportions. Surplus entries are ignored; missing entries leave the
    /// trailing views untouched.
    pub fn resize_views(&mut self, sizes: &[u32]) {
        self.cancel_active_drag();
        let total_size = self.size;
        for (item, &size) in self.items.iter_mut().zip(sizes) {
            let upper = match item.maximum_size() {
                Some(maximum) => maximum.min(total_size),
                None => total_size,
            };
            item.set_size(size.max(item.minimum_size()).min(upper));
        }
        self.content_size = self
            .items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.size()));
        self.save_proportions();
        self.layout(self.size);
        let sizes = self.sizes();
        self.events.push_back(SplitViewEvent::SizesChanged { sizes });
    }

    /// Equalize the extents of every view with room to resize.
    pub fn distribute_view_sizes(&mut self) {
        self.cancel_active_drag();
        let mut flexible: Vec<usize> = Vec::new();
        let mut flexible_size: u64 = 0;
        for (index, item) in self.items.iter().enumerate() {
            if item.is_flexible() {
                flexible.push(index);
                flexible_size += u64::from(item.size());
            }
        }
        if !flexible.is_empty() {
            let share = (flexible_size / flexible.len() as u64) as u32;
            for &index in &flexible {
                let item = &mut self.items[index];
                let size = match item.maximum_size() {
                    Some(maximum) => share.max(item.minimum_size()).min(maximum),
                    None => share.max(item.minimum_size()),
                };
                item.set_size(size);
            }
        }

        let low_priority_indexes: Vec<usize> = (0..self.items.len())
            .filter(|&i| self.items[i].priority() == Priority::Low)
            .collect();
        let high_priority_indexes: Vec<usize> = (0..self.items.len())
            .filter(|&i| self.items[i].priority() == Priority::High)
            .collect();
        self.relayout(Some(low_priority_indexes), Some(high_priority_indexes));
        let sizes = self.sizes();
        self.events.push_back(SplitViewEvent::SizesChanged { sizes });
    }

    // -- sash input --------------------------------------------------------

    /// Begin a drag on the given sash. Unknown ids and disabled sashes
    /// no-op.
    pub fn sash_drag_start(&mut self, id: SashId, pointer: PointerPosition, alt: bool) {
        let Some(index) = self.sash_index(id) else {
            trace!(id = id.get(), "drag start on unknown sash ignored");
            return;
        };
        if self.sashes[index].state() == SashState::Disabled {
            trace!(sash = index, "drag start on disabled sash ignored");
            return;
        }

        let start = self.orientation.primary(pointer);
        let sizes = self.sizes();
        let alt = alt != self.inverse_alt_behavior;

        let mut overload_min_delta = i64::MIN;
        let mut overload_max_delta = i64::MAX;
        let mut snap_before = None;
        let mut snap_after = None;

        if alt {
            // Alt drags resize only the adjacent pair; each side may give at
            // most half its headroom.
            let is_last_sash = index == self.sashes.len() - 1;
            if is_last_sash {
                let item = &self.items[index];
                overload_min_delta =
                    (item.minimum_size_i64() - i64::from(item.size())) / 2;
                overload_max_delta = match item.maximum_size() {
                    Some(maximum) => (i64::from(maximum) - i64::from(item.size())) / 2,
                    None => i64::MAX,
                };
            } else {
                let item = &self.items[index + 1];
                overload_min_delta = match item.maximum_size() {
                    Some(maximum) => (i64::from(item.size()) - i64::from(maximum)) / 2,
                    None => i64::MIN,
                };
                overload_max_delta =
                    (i64::from(item.size()) - item.minimum_size_i64()) / 2;
            }
        } else {
            let up_indexes: Vec<usize> = (0..=index).rev().collect();
            let down_indexes: Vec<usize> = (index + 1..self.items.len()).collect();
            let (min_delta, max_delta) = self.delta_bounds(&up_indexes, &down_indexes, &sizes);

            if let Some(snap_index) = self.find_first_snap_index(&up_indexes) {
                let item = &self.items[snap_index];
                let half = i64::from(item.view_minimum_size() / 2);
                snap_before = Some(SnapTarget {
                    index: snap_index,
                    limit_delta: if item.visible() {
                        min_delta - half
                    } else {
                        min_delta + half
                    },
                    size: item.size(),
                });
            }
            if let Some(snap_index) = self.find_first_snap_index(&down_indexes) {
                let item = &self.items[snap_index];
                let half = i64::from(item.view_minimum_size() / 2);
                snap_after = Some(SnapTarget {
                    index: snap_index,
                    limit_delta: if item.visible() {
                        max_delta + half
                    } else {
                        max_delta - half
                    },
                    size: item.size(),
                });
            }
        }

        debug!(sash = index, start, alt, "sash drag started");
        self.drag = Some(SashDragState {
            index,
            start,
            current: start,
            alt,
            sizes: sizes.clone(),
            overload_min_delta,
            overload_max_delta,
            snap_before,
            snap_after,
        });
        self.events.push_back(SplitViewEvent::DragStart { sizes });
    }

    /// Apply a pointer move to the in-progress drag. No-ops when idle.
    pub fn sash_drag_change(&mut self, pointer: PointerPosition) {
        let current = self.orientation.primary(pointer);
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.current = current;
        let delta = i64::from(drag.current) - i64::from(drag.start);
        let index = drag.index;
        let alt = drag.alt;
        let sizes = drag.sizes.clone();
        let overload_min_delta = drag.overload_min_delta;
        let overload_max_delta = drag.overload_max_delta;
        let snap_before = drag.snap_before;
        let snap_after = drag.snap_after;

        self.resize(
            index,
            delta,
            ResizeOptions {
                sizes: Some(sizes.clone()),
                overload_min_delta,
                overload_max_delta,
                snap_before,
                snap_after,
                ..ResizeOptions::default()
            },
        );

        if alt {
            // Mirror the applied change onto the other side of the pair.
            let is_last_sash = index == self.sashes.len() - 1;
            let item_index = if is_last_sash { index } else { index + 1 };
            let diff = i64::from(sizes[item_index]) - i64::from(self.items[item_index].size());
            let target = if is_last_sash {
                Some(index + 1)
            } else {
                index.checked_sub(1)
            };
            if let Some(target) = target {
                self.resize(
                    target,
                    -diff,
                    ResizeOptions {
                        overload_min_delta,
                        overload_max_delta,
                        ..ResizeOptions::default()
                    },
                );
            }
        }

        self.distribute_empty_space(None);
        self.layout_views();
    }

    /// Finish the in-progress drag. No-ops when idle.
    pub fn sash_drag_end(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        debug!(sash = drag.index, "sash drag ended");
        let sizes = self.sizes();
        self.events
            .push_back(SplitViewEvent::DragEnd { sizes: sizes.clone() });
        self.save_proportions();
        self.events.push_back(SplitViewEvent::SizesChanged { sizes });
    }

    /// Reset activation on a sash (e.g. a double click). Suppressed when a
    /// snap target on either side is currently hidden; otherwise surfaces
    /// [`SplitViewEvent::SashReset`] for the host to act on.
    pub fn sash_reset(&mut self, id: SashId) {
        let Some(index) = self.sash_index(id) else {
            return;
        };
        let up_indexes: Vec<usize> = (0..=index).rev().collect();
        let down_indexes: Vec<usize> = (index + 1..self.items.len()).collect();
        if let Some(snap_index) = self.find_first_snap_index(&up_indexes)
            && !self.items[snap_index].visible()
        {
            return;
        }
        if let Some(snap_index) = self.find_first_snap_index(&down_indexes)
            && !self.items[snap_index].visible()
        {
            return;
        }
        self.events.push_back(SplitViewEvent::SashReset { index });
    }

    // -- internals ---------------------------------------------------------

    fn sash_index(&self, id: SashId) -> Option<usize> {
        self.sashes.iter().position(|sash| sash.id() == id)
    }

    fn cancel_active_drag(&mut self) {
        if self.drag.is_some() {
            debug!("active drag cancelled by programmatic mutation");
            self.sash_drag_end();
        }
    }

    /// Tightest drag bounds achievable without violating any bound on
    /// either side, from the given size snapshot.
    fn delta_bounds(
        &self,
        up_indexes: &[usize],
        down_indexes: &[usize],
        sizes: &[u32],
    ) -> (i64, i64) {
        let min_delta_up: i64 = up_indexes
            .iter()
            .map(|&i| self.items[i].minimum_size_i64() - i64::from(sizes[i]))
            .sum();
        let max_delta_up: i64 = up_indexes.iter().fold(0i64, |acc, &i| {
            acc.saturating_add(
                self.items[i]
                    .maximum_size_i64()
                    .saturating_sub(i64::from(sizes[i])),
            )
        });
        let (min_delta_down, max_delta_down) = if down_indexes.is_empty() {
            (i64::MIN, i64::MAX)
        } else {
            (
                down_indexes.iter().fold(0i64, |acc, &i| {
                    acc.saturating_add(
                        i64::from(sizes[i]).saturating_sub(self.items[i].maximum_size_i64()),
                    )
                }),
                down_indexes
                    .iter()
                    .map(|&i| i64::from(sizes[i]) - self.items[i].minimum_size_i64())
                    .sum(),
            )
        };
        (
            min_delta_up.max(min_delta_down),
            max_delta_up.min(max_delta_down),
        )
    }

    /// First snap candidate along `indexes`: the first visible snapping
    /// view, or a hidden snapping view provided no flexible visible view
    /// precedes it.
    fn find_first_snap_index(&self, indexes: &[usize]) -> Option<usize> {
        for &index in indexes {
            let item = &self.items[index];
            if !item.visible() {
                continue;
            }
            if item.snap() {
                return Some(index);
            }
        }
        for &index in indexes {
            let item = &self.items[index];
            if item.visible() && item.is_flexible() {
                return None;
            }
            if !item.visible() && item.snap() {
                return Some(index);
            }
        }
        None
    }

    /// The resize pass: clamp `delta` to the feasible range, then walk both
    /// sides of the anchor applying it item by item. Snap thresholds are
    /// checked against the unclamped delta first; a visibility flip re-runs
    /// the pass with the new bounds.
    fn resize(&mut self, index: usize, delta: i64, options: ResizeOptions) -> i64 {
        if index >= self.items.len() {
            return 0;
        }
        let ResizeOptions {
            sizes,
            low_priority_indexes,
            high_priority_indexes,
            overload_min_delta,
            overload_max_delta,
            snap_before,
            snap_after,
        } = options;
        let sizes = sizes.unwrap_or_else(|| self.sizes());

        let mut up_indexes: Vec<usize> = (0..=index).rev().collect();
        let mut down_indexes: Vec<usize> = (index + 1..self.items.len()).collect();
        if let Some(high) = &high_priority_indexes {
            for &i in high {
                push_to_start(&mut up_indexes, i);
                push_to_start(&mut down_indexes, i);
            }
        }
        if let Some(low) = &low_priority_indexes {
            for &i in low {
                push_to_end(&mut up_indexes, i);
                push_to_end(&mut down_indexes, i);
            }
        }

        let (bounds_min, bounds_max) = self.delta_bounds(&up_indexes, &down_indexes, &sizes);
        let min_delta = bounds_min.max(overload_min_delta);
        let max_delta = bounds_max.min(overload_max_delta);

        let mut snapped = false;
        if let Some(snap) = snap_before {
            let visible = delta >= snap.limit_delta;
            if self.items[snap.index].set_visible(visible, Some(snap.size)) {
                snapped = true;
                debug!(view = snap.index, visible, "snap threshold crossed");
                self.events
                    .push_back(SplitViewEvent::VisibilityChanged { index: snap.index, visible });
            }
        }
        if !snapped && let Some(snap) = snap_after {
            let visible = delta < snap.limit_delta;
            if self.items[snap.index].set_visible(visible, Some(snap.size)) {
                snapped = true;
                debug!(view = snap.index, visible, "snap threshold crossed");
                self.events
                    .push_back(SplitViewEvent::VisibilityChanged { index: snap.index, visible });
            }
        }
        if snapped {
            return self.resize(
                index,
                delta,
                ResizeOptions {
                    sizes: Some(sizes),
                    low_priority_indexes,
                    high_priority_indexes,
                    overload_min_delta,
                    overload_max_delta,
                    snap_before: None,
                    snap_after: None,
                },
            );
        }

        let delta = clamp_i64(delta, min_delta, max_delta);

        let mut delta_up = delta;
        for &i in &up_indexes {
            let item = &self.items[i];
            let size = clamp_i64(
                i64::from(sizes[i]) + delta_up,
                item.minimum_size_i64(),
                item.maximum_size_i64(),
            );
            delta_up -= size - i64::from(sizes[i]);
            self.items[i].set_size(as_px(size));
        }
        let mut delta_down = delta;
        for &i in &down_indexes {
            let item = &self.items[i];
            let size = clamp_i64(
                i64::from(sizes[i]) - delta_down,
                item.minimum_size_i64(),
                item.maximum_size_i64(),
            );
            delta_down += size - i64::from(sizes[i]);
            self.items[i].set_size(as_px(size));
        }

        delta
    }

    /// Grow or shrink items until the content matches the target extent,
    /// visiting items by priority (an optional caller index goes last).
    fn distribute_empty_space(&mut self, low_priority_index: Option<usize>) {
        let content: i64 = self.items.iter().map(|item| i64::from(item.size())).sum();
        let mut empty_delta = i64::from(self.size) - content;

        let mut indexes: Vec<usize> = (0..self.items.len()).rev().collect();
        let high_priority_indexes: Vec<usize> = indexes
            .iter()
            .copied()
            .filter(|&i| self.items[i].priority() == Priority::High)
            .collect();
        let low_priority_indexes: Vec<usize> = indexes
            .iter()
            .copied()
            .filter(|&i| self.items[i].priority() == Priority::Low)
            .collect();
        for &i in &high_priority_indexes {
            push_to_start(&mut indexes, i);
        }
        for &i in &low_priority_indexes {
            push_to_end(&mut indexes, i);
        }
        if let Some(i) = low_priority_index {
            push_to_end(&mut indexes, i);
        }

        for &i in &indexes {
            if empty_delta == 0 {
                break;
            }
            let item = &self.items[i];
            let size = clamp_i64(
                i64::from(item.size()) + empty_delta,
                item.minimum_size_i64(),
                item.maximum_size_i64(),
            );
            empty_delta -= size - i64::from(item.size());
            self.items[i].set_size(as_px(size));
        }
        if empty_delta != 0 {
            trace!(remaining = empty_delta, "empty space not fully absorbable");
        }
    }

    /// Placement pass: stamp offsets, reposition sashes, re-derive sash
    /// enablement.
    fn layout_views(&mut self) {
        self.content_size = self
            .items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.size()));

        let mut offset = 0u32;
        for item in &mut self.items {
            item.layout(offset);
            offset = offset.saturating_add(item.size());
        }

        let items = &self.items;
        let mut position = 0u32;
        for (index, sash) in self.sashes.iter_mut().enumerate() {
            position = position.saturating_add(items[index].size());
            sash.set_position(position);
        }

        self.update_sash_enablement();
        trace!(
            size = self.size,
            content_size = self.content_size,
            views = self.items.len(),
            "layout pass complete",
        );
    }

    fn update_sash_enablement(&mut self) {
        let mut previous = false;
        let collapses_down: Vec<bool> = self
            .items
            .iter()
            .map(|item| {
                previous = item.size() > item.minimum_size() || previous;
                previous
            })
            .collect();
        previous = false;
        let expands_down: Vec<bool> = self
            .items
            .iter()
            .map(|item| {
                previous = item.maximum_size_i64() > i64::from(item.size()) || previous;
                previous
            })
            .collect();
        previous = false;
        let mut collapses_up: Vec<bool> = self
            .items
            .iter()
            .rev()
            .map(|item| {
                previous = item.size() > item.minimum_size() || previous;
                previous
            })
            .collect();
        collapses_up.reverse();
        previous = false;
        let mut expands_up: Vec<bool> = self
            .items
            .iter()
            .rev()
            .map(|item| {
                previous = item.maximum_size_i64() > i64::from(item.size()) || previous;
                previous
            })
            .collect();
        expands_up.reverse();

        for index in 0..self.sashes.len() {
            let blocked_start = !(collapses_down[index] && expands_up[index + 1]);
            let blocked_end = !(expands_down[index] && collapses_up[index + 1]);
            let state = if blocked_start && blocked_end {
                let up_indexes: Vec<usize> = (0..=index).rev().collect();
                let down_indexes: Vec<usize> = (index + 1..self.items.len()).collect();
                let snapped_before = self
                    .find_first_snap_index(&up_indexes)
                    .is_some_and(|i| !self.items[i].visible());
                let snapped_after = self
                    .find_first_snap_index(&down_indexes)
                    .is_some_and(|i| !self.items[i].visible());
                let position = self.sashes[index].position();
                if snapped_before
                    && collapses_up[index]
                    && (position > 0 || self.start_snapping_enabled)
                {
                    SashState::Minimum
                } else if snapped_after
                    && collapses_down[index]
                    && (position < self.content_size || self.end_snapping_enabled)
                {
                    SashState::Maximum
                } else {
                    SashState::Disabled
                }
            } else if blocked_start {
                SashState::Minimum
            } else if blocked_end {
                SashState::Maximum
            } else {
                SashState::Enabled
            };
            self.sashes[index].set_state(state);
        }
    }

    /// Bring the content back to the target extent after a mutation, then
    /// run the placement pass and re-save proportions.
    fn relayout(
        &mut self,
        low_priority_indexes: Option<Vec<usize>>,
        high_priority_indexes: Option<Vec<usize>>,
    ) {
        if !self.items.is_empty() {
            let content: i64 = self.items.iter().map(|item| i64::from(item.size())).sum();
            self.resize(
                self.items.len() - 1,
                i64::from(self.size) - content,
                ResizeOptions {
                    low_priority_indexes,
                    high_priority_indexes,
                    ..ResizeOptions::default()
                },
            );
        }
        self.distribute_empty_space(None);
        self.layout_views();
        self.save_proportions();
    }

    fn save_proportions(&mut self) {
        if self.proportional_layout && self.content_size > 0 {
            let content = f64::from(self.content_size);
            self.proportions = Some(
                self.items
                    .iter()
                    .map(|item| {
                        if item.visible() {
                            Some(f64::from(item.size()) / content)
                        } else {
                            None
                        }
                    })
                    .collect(),
            );
        }
    }

    /// Near-equality check over visible extents, used by [`Sizing::Auto`].
    fn are_views_distributed(&self) -> bool {
        let mut lo: Option<u32> = None;
        let mut hi: Option<u32> = None;
        for item in &self.items {
            if !item.visible() {
                continue;
            }
            let size = item.size();
            lo = Some(lo.map_or(size, |v| v.min(size)));
            hi = Some(hi.map_or(size, |v| v.max(size)));
            if let (Some(lo), Some(hi)) = (lo, hi)
                && hi - lo > 2
            {
                return false;
            }
        }
        true
    }

    pub(crate) fn items(&self) -> &[ViewItem] {
        &self.items
    }
}

impl fmt::Debug for SplitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitView")
            .field("orientation", &self.orientation)
            .field("size", &self.size)
            .field("content_size", &self.content_size)
            .field("proportional_layout", &self.proportional_layout)
            .field("sizes", &self.sizes())
            .field("sashes", &self.sashes)
            .field("dragging", &self.drag.is_some())
            .finish_non_exhaustive()
    }
}
