//! Scroll region layout tests.
//!
//! These tests pin down how a scroll region negotiates with its parent and
//! its children for every combination of scrolling axes.

use core::cell::RefCell;

use crate::{
    AxisSet, Layout, Point, ProposalSize, Rect, ScrollLayout, ScrollView, Size, StretchAxis,
    SubView, scroll, scroll_both, scroll_horizontal,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A mock SubView that returns a fixed size regardless of proposal.
/// This simulates a "rigid" view like an icon or fixed-size image.
#[derive(Clone, Copy)]
struct FixedSizeView {
    size: Size,
}

impl FixedSizeView {
    const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }
}

impl SubView for FixedSizeView {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        self.size
    }
}

/// A mock SubView that respects width proposals (like Text).
/// When given a width constraint, it wraps and increases height.
/// When given None, it returns intrinsic single-line size.
struct FlexibleTextView {
    intrinsic_size: Size,
    line_height: f32,
}

impl FlexibleTextView {
    const fn new(text_width: f32, line_height: f32) -> Self {
        Self {
            intrinsic_size: Size::new(text_width, line_height),
            line_height,
        }
    }
}

impl SubView for FlexibleTextView {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        match proposal.width {
            Some(max_width) if max_width < self.intrinsic_size.width => {
                let lines = (self.intrinsic_size.width / max_width).ceil();
                Size::new(max_width, lines * self.line_height)
            }
            _ => self.intrinsic_size,
        }
    }
}

/// A mock view that fills whatever it is offered, falling back to a fixed
/// extent on unspecified axes.
struct GreedyView {
    fallback: Size,
}

impl SubView for GreedyView {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        proposal.replacing_unspecified_dimensions(self.fallback)
    }

    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::Both
    }
}

/// A mock view that records every proposal it is asked about.
#[derive(Default)]
struct RecordingView {
    size: Size,
    proposals: RefCell<Vec<ProposalSize>>,
}

impl SubView for RecordingView {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.proposals.borrow_mut().push(proposal);
        self.size
    }
}

fn children<'a>(views: &'a [FixedSizeView]) -> Vec<&'a dyn SubView> {
    views.iter().map(|view| view as &dyn SubView).collect()
}

// ============================================================================
// Sizing
// ============================================================================

#[test]
fn test_non_scrolling_axis_fits_largest_child() {
    let views = [
        FixedSizeView::new(40.0, 10.0),
        FixedSizeView::new(90.0, 25.0),
        FixedSizeView::new(60.0, 70.0),
    ];
    let proposal = ProposalSize::new(300.0, 500.0);

    let vertical = ScrollLayout::new(AxisSet::VERTICAL).size_that_fits(proposal, &children(&views));
    assert_eq!(vertical, Size::new(90.0, 500.0));

    let horizontal =
        ScrollLayout::new(AxisSet::HORIZONTAL).size_that_fits(proposal, &children(&views));
    assert_eq!(horizontal, Size::new(300.0, 70.0));
}

#[test]
fn test_empty_axis_set_fits_content_exactly() {
    let views = [FixedSizeView::new(40.0, 10.0), FixedSizeView::new(20.0, 30.0)];
    let layout = ScrollLayout::new(AxisSet::empty());

    let size = layout.size_that_fits(ProposalSize::new(300.0, 500.0), &children(&views));
    assert_eq!(size, Size::new(40.0, 30.0));
}

#[test]
fn test_single_child_sets_non_scrolling_extent() {
    let views = [FixedSizeView::new(123.0, 45.0)];
    let layout = ScrollLayout::new(AxisSet::VERTICAL);

    let size = layout.size_that_fits(ProposalSize::new(400.0, 400.0), &children(&views));
    assert_eq!(size.width, 123.0);
}

#[test]
fn test_zero_children_fit_to_zero() {
    let layout = ScrollLayout::new(AxisSet::empty());
    assert_eq!(
        layout.size_that_fits(ProposalSize::new(300.0, 500.0), &[]),
        Size::zero()
    );

    let vertical = ScrollLayout::new(AxisSet::VERTICAL);
    assert_eq!(
        vertical.size_that_fits(ProposalSize::new(300.0, 500.0), &[]),
        Size::new(0.0, 500.0)
    );
}

#[test]
fn test_both_axes_take_resolved_proposal() {
    let views = [FixedSizeView::new(1000.0, 2000.0)];
    let layout = ScrollLayout::new(AxisSet::ALL);

    let size = layout.size_that_fits(ProposalSize::new(320.0, 480.0), &children(&views));
    assert_eq!(size, Size::new(320.0, 480.0));
}

#[test]
fn test_unspecified_proposal_resolves_to_default_size() {
    let layout = ScrollLayout::new(AxisSet::ALL);
    assert_eq!(
        layout.size_that_fits(ProposalSize::UNSPECIFIED, &[]),
        Size::new(10.0, 10.0)
    );

    let custom = ScrollLayout::new(AxisSet::ALL).with_default_size(Size::new(375.0, 667.0));
    assert_eq!(
        custom.size_that_fits(ProposalSize::new(None, 200.0), &[]),
        Size::new(375.0, 200.0)
    );
}

#[test]
fn test_scrolling_axis_is_unspecified_for_children() {
    let view = RecordingView {
        size: Size::new(10.0, 10.0),
        ..RecordingView::default()
    };
    let layout = ScrollLayout::new(AxisSet::VERTICAL);

    layout.size_that_fits(ProposalSize::new(300.0, 500.0), &[&view]);
    layout.size_that_fits(ProposalSize::UNSPECIFIED, &[&view]);

    let proposals = view.proposals.borrow();
    assert_eq!(proposals[0], ProposalSize::new(300.0, None));
    // Unspecified width is resolved before it reaches children.
    assert_eq!(proposals[1], ProposalSize::new(10.0, None));
}

#[test]
fn test_text_wraps_to_width_of_vertical_scroll() {
    let text = FlexibleTextView::new(500.0, 20.0);
    let layout = ScrollLayout::new(AxisSet::VERTICAL);

    let size = layout.size_that_fits(ProposalSize::new(200.0, 100.0), &[&text]);
    assert_eq!(size, Size::new(200.0, 100.0));

    let placements = layout.place(
        Rect::from_size(size),
        ProposalSize::new(200.0, 100.0),
        &[&text],
    );
    // Three lines of text overflow the 100pt viewport; that is what scrolls.
    assert_eq!(*placements[0].rect.size(), Size::new(200.0, 60.0));
}

#[test]
fn test_text_keeps_single_line_in_horizontal_scroll() {
    let text = FlexibleTextView::new(500.0, 20.0);
    let layout = ScrollLayout::new(AxisSet::HORIZONTAL);

    let size = layout.size_that_fits(ProposalSize::new(200.0, 100.0), &[&text]);
    assert_eq!(size, Size::new(200.0, 20.0));
}

#[test]
fn test_greedy_child_fills_cross_axis() {
    let greedy = GreedyView {
        fallback: Size::new(5.0, 5.0),
    };
    let layout = ScrollLayout::new(AxisSet::VERTICAL);

    let size = layout.size_that_fits(ProposalSize::new(250.0, 400.0), &[&greedy]);
    assert_eq!(size, Size::new(250.0, 400.0));
}

#[test]
fn test_sizing_is_repeatable() {
    let views = [FixedSizeView::new(40.0, 10.0), FixedSizeView::new(90.0, 25.0)];
    let layout = ScrollLayout::new(AxisSet::HORIZONTAL);
    let proposal = ProposalSize::new(None, 80.0);

    let first = layout.size_that_fits(proposal, &children(&views));
    let second = layout.size_that_fits(proposal, &children(&views));
    assert_eq!(first, second);
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_single_axis_places_children_at_origin() {
    let views = [FixedSizeView::new(40.0, 10.0), FixedSizeView::new(90.0, 25.0)];
    let bounds = Rect::new(Point::new(12.0, 34.0), Size::new(100.0, 200.0));
    let proposal = ProposalSize::new(100.0, 200.0);

    for axes in [AxisSet::VERTICAL, AxisSet::HORIZONTAL, AxisSet::empty()] {
        let placements = ScrollLayout::new(axes).place(bounds, proposal, &children(&views));

        assert_eq!(placements.len(), 2);
        for (placement, view) in placements.iter().zip(&views) {
            assert_eq!(placement.origin(), bounds.origin(), "axes {axes:?}");
            assert_eq!(*placement.rect.size(), view.size);
        }
    }
}

#[test]
fn test_both_axes_center_children() {
    let views = [FixedSizeView::new(40.0, 10.0), FixedSizeView::new(300.0, 600.0)];
    let bounds = Rect::new(Point::new(0.0, 0.0), Size::new(100.0, 200.0));
    let placements =
        ScrollLayout::new(AxisSet::ALL).place(bounds, ProposalSize::new(100.0, 200.0), &children(&views));

    assert_eq!(placements[0].origin(), Point::new(30.0, 95.0));
    assert_eq!(placements[0].rect.center(), bounds.center());
    // Oversized content is centered too, extending past the bounds on every side.
    assert_eq!(placements[1].origin(), Point::new(-100.0, -200.0));
    assert_eq!(placements[1].rect.center(), bounds.center());
}

#[test]
fn test_placement_proposals_drop_scrolling_axes() {
    let views = [FixedSizeView::new(40.0, 10.0)];
    let bounds = Rect::from_size(Size::new(100.0, 200.0));
    let proposal = ProposalSize::new(100.0, 200.0);

    let cases = [
        (AxisSet::empty(), ProposalSize::new(100.0, 200.0)),
        (AxisSet::VERTICAL, ProposalSize::new(100.0, None)),
        (AxisSet::HORIZONTAL, ProposalSize::new(None, 200.0)),
        (AxisSet::ALL, ProposalSize::UNSPECIFIED),
    ];

    for (axes, expected) in cases {
        let placements = ScrollLayout::new(axes).place(bounds, proposal, &children(&views));
        assert_eq!(placements[0].proposal, expected, "axes {axes:?}");
    }
}

#[test]
fn test_placement_keeps_unresolved_proposal() {
    let view = RecordingView {
        size: Size::new(10.0, 10.0),
        ..RecordingView::default()
    };
    let layout = ScrollLayout::new(AxisSet::VERTICAL);

    let placements = layout.place(
        Rect::from_size(Size::new(50.0, 50.0)),
        ProposalSize::UNSPECIFIED,
        &[&view],
    );

    assert_eq!(placements[0].proposal, ProposalSize::UNSPECIFIED);
    assert_eq!(view.proposals.borrow()[0], ProposalSize::UNSPECIFIED);
}

#[test]
fn test_place_without_children() {
    let placements = ScrollLayout::new(AxisSet::ALL).place(
        Rect::from_size(Size::new(10.0, 10.0)),
        ProposalSize::UNSPECIFIED,
        &[],
    );
    assert!(placements.is_empty());
}

// ============================================================================
// ScrollView
// ============================================================================

#[test]
fn test_scroll_view_constructors() {
    assert_eq!(scroll(FixedSizeView::new(1.0, 1.0)).axes(), AxisSet::VERTICAL);
    assert_eq!(
        scroll_horizontal(FixedSizeView::new(1.0, 1.0)).axes(),
        AxisSet::HORIZONTAL
    );
    assert_eq!(scroll_both(FixedSizeView::new(1.0, 1.0)).axes(), AxisSet::ALL);
    assert_eq!(ScrollView::default().axes(), AxisSet::VERTICAL);
}

#[test]
fn test_scroll_view_indicators() {
    let view = ScrollView::vertical();
    assert!(view.shows_indicators());
    assert!(!view.indicators(false).shows_indicators());
}

#[test]
fn test_scroll_view_runs_its_layout() {
    let view = ScrollView::vertical()
        .child(FixedSizeView::new(80.0, 300.0))
        .child(FixedSizeView::new(120.0, 40.0));
    let proposal = ProposalSize::new(200.0, 150.0);

    let size = view.size_that_fits(proposal);
    assert_eq!(size, Size::new(120.0, 150.0));

    let placements = view.place(Rect::from_size(size), proposal);
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[1].origin(), Point::zero());
    assert_eq!(view.stretch_axis(), StretchAxis::Both);
}

#[test]
fn test_nested_scroll_views_negotiate() {
    let inner = scroll_horizontal(FixedSizeView::new(900.0, 60.0));
    let outer = ScrollView::vertical().child(inner).default_size(Size::new(320.0, 480.0));

    // The outer view measures the inner one with width 320 and no height; the
    // inner view scrolls horizontally, so it accepts 320 and hugs 60pt of height.
    let size = outer.size_that_fits(ProposalSize::UNSPECIFIED);
    assert_eq!(size, Size::new(320.0, 480.0));

    let placements = outer.place(Rect::from_size(size), ProposalSize::new(320.0, 480.0));
    assert_eq!(*placements[0].rect.size(), Size::new(320.0, 60.0));
}
