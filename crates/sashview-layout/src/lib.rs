#![forbid(unsafe_code)]

//! Resizable split-pane layout engine.
//!
//! A [`SplitView`] positions an ordered sequence of views along one axis,
//! mediates drags on the sashes between them, enforces per-view bounds and
//! priorities, supports snap-to-hidden, and reacts to container resizes,
//! insertions, removals, reorderings and visibility toggles. It is the
//! algorithmic core only: rendering, pointer capture and size observation
//! belong to the host, which feeds the engine through [`SplitView::layout`]
//! and the sash input methods and drains [`SplitViewEvent`]s after each
//! call.
//!
//! Everything is single-threaded and synchronous; no call suspends.
//!
//! ```
//! use sashview_core::Sizing;
//! use sashview_layout::{SplitView, SplitViewOptions, View};
//!
//! #[derive(Debug)]
//! struct Pane;
//!
//! impl View for Pane {
//!     fn minimum_size(&self) -> u32 {
//!         30
//!     }
//!     fn maximum_size(&self) -> Option<u32> {
//!         None
//!     }
//!     fn layout(&mut self, _size: u32, _offset: u32) {}
//! }
//!
//! let mut split = SplitView::new(SplitViewOptions::default());
//! split.add_view(Box::new(Pane), Sizing::exact(150)).unwrap();
//! split.add_view(Box::new(Pane), Sizing::exact(250)).unwrap();
//! split.layout(400);
//! split.resize_views(&[150, 250]);
//!
//! assert_eq!(split.view_size(0), Some(150));
//! assert_eq!(split.view_size(1), Some(250));
//! assert_eq!(split.sashes()[0].position(), 150);
//! ```

pub mod debug;
pub mod event;
mod item;
pub mod pane;
pub mod sash;
pub mod splitview;
pub mod view;

pub use event::SplitViewEvent;
pub use pane::{
    LayoutService, PaneDescriptor, PaneHandle, PaneView, ParsePreferredSizeError, PreferredSize,
};
pub use sash::{Sash, SashId, SashState};
pub use splitview::{
    DEFAULT_SASH_SIZE, SplitView, SplitViewDescriptor, SplitViewError, SplitViewOptions,
    ViewDescriptor,
};
pub use view::View;
