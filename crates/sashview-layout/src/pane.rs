//! Pane adapter and container-extent service.
//!
//! A [`PaneView`] is the thin adapter between a declarative pane description
//! and the engine's [`View`] contract: it forwards bounds, priority and snap
//! from its [`PaneDescriptor`] and resolves the preferred size against the
//! [`LayoutService`], which holds the one scalar the host keeps fresh: the
//! container extent on the primary axis.
//!
//! Construction hands the engine the [`PaneView`] and the host a
//! [`PaneHandle`]; both see the same shared state, so descriptor updates and
//! placement reads need no round-trip through the engine.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sashview_core::{ConstraintError, Priority, SizeConstraints};

use crate::view::View;

// ---------------------------------------------------------------------------
// LayoutService
// ---------------------------------------------------------------------------

/// Holds the current container extent on the primary axis.
///
/// The host updates it on every container-size event; percentage preferred
/// sizes resolve against it on demand.
#[derive(Debug, Default)]
pub struct LayoutService {
    extent: Cell<u32>,
}

impl LayoutService {
    /// Build a service with an initial extent.
    #[must_use]
    pub fn new(extent: u32) -> Self {
        Self {
            extent: Cell::new(extent),
        }
    }

    /// Current container extent.
    #[must_use]
    pub fn extent(&self) -> u32 {
        self.extent.get()
    }

    /// Record a new container extent.
    pub fn set_extent(&self, extent: u32) {
        self.extent.set(extent);
    }
}

// ---------------------------------------------------------------------------
// PreferredSize
// ---------------------------------------------------------------------------

/// Declarative preferred extent: absolute pixels or a container percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum PreferredSize {
    Pixels(u32),
    Percent(f64),
}

impl PreferredSize {
    /// Resolve to pixels against the service's current extent.
    #[must_use]
    pub fn resolve(self, service: &LayoutService) -> u32 {
        match self {
            Self::Pixels(px) => px,
            Self::Percent(pct) => {
                let resolved = (f64::from(service.extent()) * pct / 100.0).round();
                resolved.clamp(0.0, f64::from(u32::MAX)) as u32
            }
        }
    }
}

impl fmt::Display for PreferredSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

impl FromStr for PreferredSize {
    type Err = ParsePreferredSizeError;

    /// Accepts `"250"`, `"250px"` and `"30%"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParsePreferredSizeError {
            input: s.to_owned(),
        };
        if let Some(pct) = trimmed.strip_suffix('%') {
            let pct: f64 = pct.trim().parse().map_err(|_| invalid())?;
            if !pct.is_finite() || pct < 0.0 {
                return Err(invalid());
            }
            return Ok(Self::Percent(pct));
        }
        let px = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        px.parse().map(Self::Pixels).map_err(|_| invalid())
    }
}

/// Failure to parse a preferred-size string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePreferredSizeError {
    pub input: String,
}

impl fmt::Display for ParsePreferredSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid preferred size {:?}: expected pixels (\"250\", \"250px\") or a percentage (\"30%\")",
            self.input
        )
    }
}

impl std::error::Error for ParsePreferredSizeError {}

// ---------------------------------------------------------------------------
// PaneDescriptor
// ---------------------------------------------------------------------------

/// Declarative description of one pane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PaneDescriptor {
    pub constraints: SizeConstraints,
    pub priority: Priority,
    pub snap: bool,
    pub preferred_size: Option<PreferredSize>,
}

impl PaneDescriptor {
    /// Description with the given bounds and everything else defaulted.
    #[must_use]
    pub fn with_constraints(constraints: SizeConstraints) -> Self {
        Self {
            constraints,
            ..Self::default()
        }
    }

    /// Reject inverted bounds.
    pub fn validate(&self) -> Result<(), ConstraintError> {
        self.constraints.validate()
    }
}

// ---------------------------------------------------------------------------
// PaneView / PaneHandle
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct PaneState {
    descriptor: RefCell<PaneDescriptor>,
    service: Rc<LayoutService>,
    placement: Cell<Option<(u32, u32)>>,
    visible: Cell<bool>,
}

/// Engine-facing adapter implementing [`View`] over a [`PaneDescriptor`].
#[derive(Debug)]
pub struct PaneView {
    state: Rc<PaneState>,
}

/// Host-facing handle onto the same pane state.
#[derive(Debug, Clone)]
pub struct PaneHandle {
    state: Rc<PaneState>,
}

impl PaneView {
    /// Build the adapter/handle pair. Fails on inverted bounds.
    pub fn new(
        descriptor: PaneDescriptor,
        service: Rc<LayoutService>,
    ) -> Result<(PaneView, PaneHandle), ConstraintError> {
        descriptor.validate()?;
        let state = Rc::new(PaneState {
            descriptor: RefCell::new(descriptor),
            service,
            placement: Cell::new(None),
            visible: Cell::new(true),
        });
        Ok((
            PaneView {
                state: Rc::clone(&state),
            },
            PaneHandle { state },
        ))
    }
}

impl View for PaneView {
    fn minimum_size(&self) -> u32 {
        self.state.descriptor.borrow().constraints.minimum
    }

    fn maximum_size(&self) -> Option<u32> {
        self.state.descriptor.borrow().constraints.maximum
    }

    fn priority(&self) -> Priority {
        self.state.descriptor.borrow().priority
    }

    fn snap(&self) -> bool {
        self.state.descriptor.borrow().snap
    }

    fn preferred_size(&self) -> Option<u32> {
        self.state
            .descriptor
            .borrow()
            .preferred_size
            .map(|preferred| preferred.resolve(&self.state.service))
    }

    fn layout(&mut self, size: u32, offset: u32) {
        self.state.placement.set(Some((size, offset)));
    }

    fn set_visible(&mut self, visible: bool) {
        self.state.visible.set(visible);
    }
}

impl PaneHandle {
    /// Last `(size, offset)` the engine assigned, `None` before the first
    /// layout pass.
    #[must_use]
    pub fn placement(&self) -> Option<(u32, u32)> {
        self.state.placement.get()
    }

    /// Visibility as last reported by the engine.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.state.visible.get()
    }

    /// Current descriptor.
    #[must_use]
    pub fn descriptor(&self) -> PaneDescriptor {
        *self.state.descriptor.borrow()
    }

    /// Replace the descriptor (host-side re-registration on prop change).
    /// The engine picks the new bounds up on its next pass.
    pub fn set_descriptor(&self, descriptor: PaneDescriptor) -> Result<(), ConstraintError> {
        descriptor.validate()?;
        *self.state.descriptor.borrow_mut() = descriptor;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_all_three_forms() {
        assert_eq!("250".parse(), Ok(PreferredSize::Pixels(250)));
        assert_eq!("250px".parse(), Ok(PreferredSize::Pixels(250)));
        assert_eq!("30%".parse(), Ok(PreferredSize::Percent(30.0)));
        assert_eq!(" 45 % ".parse(), Ok(PreferredSize::Percent(45.0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "px", "%", "abc", "-3px", "12.5px", "NaN%"] {
            assert!(
                input.parse::<PreferredSize>().is_err(),
                "{input:?} should not parse",
            );
        }
    }

    #[test]
    fn parse_error_carries_the_input() {
        let err = "12q".parse::<PreferredSize>().unwrap_err();
        assert_eq!(err.input, "12q");
        assert!(err.to_string().contains("12q"));
    }

    #[test]
    fn percent_resolves_against_the_service() {
        let service = LayoutService::new(900);
        assert_eq!(PreferredSize::Percent(30.0).resolve(&service), 270);
        assert_eq!(PreferredSize::Pixels(250).resolve(&service), 250);

        service.set_extent(1000);
        assert_eq!(PreferredSize::Percent(30.0).resolve(&service), 300);
    }

    #[test]
    fn percent_resolution_rounds() {
        let service = LayoutService::new(333);
        // 333 * 50% = 166.5, rounds away from zero.
        assert_eq!(PreferredSize::Percent(50.0).resolve(&service), 167);
    }

    #[test]
    fn pane_forwards_descriptor_fields() {
        let service = Rc::new(LayoutService::new(800));
        let descriptor = PaneDescriptor {
            constraints: SizeConstraints::new(40, Some(400)),
            priority: Priority::High,
            snap: true,
            preferred_size: Some(PreferredSize::Percent(25.0)),
        };
        let (view, _handle) = PaneView::new(descriptor, service).unwrap();
        assert_eq!(view.minimum_size(), 40);
        assert_eq!(view.maximum_size(), Some(400));
        assert_eq!(view.priority(), Priority::High);
        assert!(view.snap());
        assert_eq!(view.preferred_size(), Some(200));
    }

    #[test]
    fn pane_rejects_inverted_bounds() {
        let service = Rc::new(LayoutService::new(800));
        let descriptor =
            PaneDescriptor::with_constraints(SizeConstraints::new(100, Some(50)));
        assert!(PaneView::new(descriptor, service).is_err());
    }

    #[test]
    fn handle_sees_placement_and_visibility() {
        let service = Rc::new(LayoutService::new(800));
        let (mut view, handle) = PaneView::new(PaneDescriptor::default(), service).unwrap();
        assert_eq!(handle.placement(), None);
        assert!(handle.visible());

        view.layout(120, 60);
        view.set_visible(false);
        assert_eq!(handle.placement(), Some((120, 60)));
        assert!(!handle.visible());
    }

    #[test]
    fn descriptor_updates_flow_through_the_handle() {
        let service = Rc::new(LayoutService::new(800));
        let (view, handle) = PaneView::new(PaneDescriptor::default(), service).unwrap();
        let updated = PaneDescriptor {
            constraints: SizeConstraints::new(64, None),
            ..handle.descriptor()
        };
        handle.set_descriptor(updated).unwrap();
        assert_eq!(view.minimum_size(), 64);
    }
}
