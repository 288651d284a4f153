//! End-to-end scenarios exercising the public engine surface the way a host
//! binding drives it: descriptor installation, container resizes, sash
//! drags, distribution and programmatic resizes.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use sashview_core::{PointerPosition, Priority, SizeConstraints, Sizing};
use sashview_layout::{
    LayoutService, PaneDescriptor, PaneView, PreferredSize, SplitView, SplitViewDescriptor,
    SplitViewOptions, View, ViewDescriptor,
};

#[derive(Debug)]
struct TestView {
    minimum: u32,
    maximum: Option<u32>,
    priority: Priority,
    snap: bool,
}

impl TestView {
    fn new(minimum: u32) -> Self {
        Self {
            minimum,
            maximum: None,
            priority: Priority::Normal,
            snap: false,
        }
    }

    fn snapping(mut self) -> Self {
        self.snap = true;
        self
    }

    fn boxed(self) -> Box<dyn View> {
        Box::new(self)
    }
}

impl View for TestView {
    fn minimum_size(&self) -> u32 {
        self.minimum
    }

    fn maximum_size(&self) -> Option<u32> {
        self.maximum
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn snap(&self) -> bool {
        self.snap
    }

    fn layout(&mut self, _size: u32, _offset: u32) {}
}

fn options(proportional: bool) -> SplitViewOptions {
    SplitViewOptions {
        proportional_layout: proportional,
        ..SplitViewOptions::default()
    }
}

#[test]
fn default_sizes_then_proportional_growth() {
    let mut split = SplitView::from_descriptor(
        options(true),
        SplitViewDescriptor {
            size: 400,
            views: vec![
                ViewDescriptor::new(TestView::new(30).boxed(), 150),
                ViewDescriptor::new(TestView::new(30).boxed(), 250),
            ],
        },
    )
    .unwrap();
    split.layout(400);
    assert_eq!(split.sizes(), vec![150, 250]);
    assert_eq!(split.sashes()[0].position(), 150);

    split.layout(500);
    assert_eq!(split.sizes(), vec![188, 312]);
    assert_eq!(split.content_size(), 500);
}

#[test]
fn distribute_equalizes_three_panes() {
    let service = Rc::new(LayoutService::new(900));
    let mut split = SplitView::new(options(true));
    split.layout(900);

    let mut handles = Vec::new();
    for _ in 0..3 {
        let descriptor = PaneDescriptor {
            preferred_size: Some(PreferredSize::Pixels(250)),
            ..PaneDescriptor::default()
        };
        let (pane, handle) = PaneView::new(descriptor, Rc::clone(&service)).unwrap();
        split.add_view(Box::new(pane), Sizing::Distribute).unwrap();
        handles.push(handle);
    }

    split.distribute_view_sizes();
    assert_eq!(split.sizes(), vec![300, 300, 300]);
    assert_eq!(handles[0].placement(), Some((300, 0)));
    assert_eq!(handles[1].placement(), Some((300, 300)));
    assert_eq!(handles[2].placement(), Some((300, 600)));
}

#[test]
fn drag_against_a_minimum_clamps_and_redistributes() {
    let mut split = SplitView::from_descriptor(
        options(false),
        SplitViewDescriptor {
            size: 600,
            views: vec![
                ViewDescriptor::new(TestView::new(100).boxed(), 200),
                ViewDescriptor::new(TestView::new(200).boxed(), 300),
                ViewDescriptor::new(TestView::new(50).boxed(), 100),
            ],
        },
    )
    .unwrap();
    split.layout(600);
    assert_eq!(split.sashes()[0].position(), 200);
    assert_eq!(split.sashes()[1].position(), 500);

    let sash = split.sashes()[0].id();
    split.sash_drag_start(sash, PointerPosition::new(0, 200), false);
    split.sash_drag_change(PointerPosition::new(0, 80));
    split.sash_drag_end();

    assert_eq!(split.sizes(), vec![100, 400, 100]);
    assert_eq!(split.content_size(), 600);
}

#[test]
fn snap_hides_and_restores_across_the_threshold() {
    let mut split = SplitView::from_descriptor(
        options(false),
        SplitViewDescriptor {
            size: 600,
            views: vec![
                ViewDescriptor::new(TestView::new(0).snapping().boxed(), 200),
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
            ],
        },
    )
    .unwrap();
    split.layout(600);

    let sash = split.sashes()[0].id();
    split.sash_drag_start(sash, PointerPosition::new(0, 300), false);

    // Past the threshold: the snapping view collapses to hidden.
    split.sash_drag_change(PointerPosition::new(0, 39));
    assert_eq!(split.is_view_visible(0), Ok(false));
    assert_eq!(split.view_cached_visible_size(0), Some(200));
    assert_eq!(split.sizes(), vec![0, 400, 200]);

    // Back across the same threshold within the same drag: restored.
    split.sash_drag_change(PointerPosition::new(0, 300));
    assert_eq!(split.is_view_visible(0), Ok(true));
    assert_eq!(split.sizes(), vec![200, 200, 200]);

    split.sash_drag_end();
    assert_eq!(split.content_size(), 600);
}

#[test]
fn proportional_shrink_halves_every_view() {
    let mut split = SplitView::from_descriptor(
        options(true),
        SplitViewDescriptor {
            size: 600,
            views: vec![
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
            ],
        },
    )
    .unwrap();
    split.layout(300);
    assert_eq!(split.sizes(), vec![100, 100, 100]);
}

#[test]
fn resize_views_clamps_to_the_nearest_feasible() {
    let mut split = SplitView::from_descriptor(
        options(true),
        SplitViewDescriptor {
            size: 600,
            views: vec![
                ViewDescriptor::new(TestView::new(30).snapping().boxed(), 200),
                ViewDescriptor::new(TestView::new(30).boxed(), 200),
                ViewDescriptor::new(TestView::new(30).snapping().boxed(), 200),
            ],
        },
    )
    .unwrap();
    split.layout(600);

    split.resize_views(&[0, 600, 0]);
    assert_eq!(split.sizes(), vec![30, 540, 30]);
    assert_eq!(split.content_size(), 600);
}

#[test]
fn proportional_layout_is_idempotent() {
    let mut split = SplitView::from_descriptor(
        options(true),
        SplitViewDescriptor {
            size: 700,
            views: vec![
                ViewDescriptor::new(TestView::new(50).boxed(), 300),
                ViewDescriptor::new(TestView::new(50).boxed(), 250),
                ViewDescriptor::new(TestView::new(50).boxed(), 150),
            ],
        },
    )
    .unwrap();
    split.layout(530);
    let first = split.sizes();
    split.layout(530);
    assert_eq!(split.sizes(), first);
    assert_eq!(split.content_size(), 530);
}

#[test]
fn hidden_views_survive_proportional_resizes() {
    let mut split = SplitView::from_descriptor(
        options(true),
        SplitViewDescriptor {
            size: 600,
            views: vec![
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
                ViewDescriptor::new(TestView::new(0).boxed(), 200),
            ],
        },
    )
    .unwrap();
    split.layout(600);
    split.set_view_visible(1, false).unwrap();
    split.layout(900);
    assert_eq!(split.view_size(1), Some(0));
    assert_eq!(split.content_size(), 900);

    split.set_view_visible(1, true).unwrap();
    assert_eq!(split.is_view_visible(1), Ok(true));
    assert_eq!(split.view_size(1), Some(200));
    assert_eq!(split.content_size(), 900);
}

#[test]
fn preferred_sizes_resolve_pixels_and_percent() {
    let service = Rc::new(LayoutService::new(800));
    let mut split = SplitView::new(options(false));
    split.layout(800);

    let (pixels, _) = PaneView::new(
        PaneDescriptor {
            preferred_size: Some("250px".parse().unwrap()),
            ..PaneDescriptor::default()
        },
        Rc::clone(&service),
    )
    .unwrap();
    let (percent, _) = PaneView::new(
        PaneDescriptor {
            constraints: SizeConstraints::new(0, None),
            preferred_size: Some("25%".parse().unwrap()),
            ..PaneDescriptor::default()
        },
        Rc::clone(&service),
    )
    .unwrap();
    split.add_view(Box::new(pixels), Sizing::exact(400)).unwrap();
    split.add_view(Box::new(percent), Sizing::exact(400)).unwrap();

    split.resize_view_to_preferred(0);
    assert_eq!(split.sizes(), vec![250, 550]);

    split.resize_view_to_preferred(1);
    assert_eq!(split.sizes(), vec![600, 200]);
}
