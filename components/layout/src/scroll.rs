//! Scrollable regions.
//!
//! A scroll region negotiates differently per axis. Along an axis it scrolls,
//! it takes whatever extent its parent proposes, since overflowing content is
//! clipped and scrolled rather than squeezed. Along an axis it does not scroll,
//! it hugs its content: the size is the largest extent any child reports.

use core::fmt;

use crate::{
    Anchor, AxisSet, ChildPlacement, DEFAULT_PROPOSAL_DIMENSION, Layout, ProposalSize, Rect,
    Size, StretchAxis, SubView,
};

/// Layout algorithm backing [`ScrollView`].
///
/// # Sizing
///
/// Unspecified proposal dimensions are first resolved to
/// [`default_size`](Self::with_default_size). Children are then measured with a
/// content proposal where every scrolling axis is left unspecified, so they
/// may grow freely in the scroll direction. The region's size takes the
/// resolved proposal on scrolling axes and the maximum child extent on the
/// others (zero when there are no children).
///
/// # Placement
///
/// Children are offered the content proposal derived from the placement
/// proposal. They are pinned to the bounds' origin, or centered in the bounds
/// when scrolling is enabled on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollLayout {
    axes: AxisSet,
    default_size: Size,
}

impl ScrollLayout {
    /// Creates a layout that scrolls along `axes`.
    #[must_use]
    pub const fn new(axes: AxisSet) -> Self {
        Self {
            axes,
            default_size: Size::square(DEFAULT_PROPOSAL_DIMENSION),
        }
    }

    /// Sets the extent substituted for unspecified proposal dimensions.
    #[must_use]
    pub const fn with_default_size(mut self, size: Size) -> Self {
        self.default_size = size;
        self
    }

    /// Returns the scrolling axes.
    #[must_use]
    pub const fn axes(&self) -> AxisSet {
        self.axes
    }

    /// Returns the extent used for unspecified proposal dimensions.
    #[must_use]
    pub const fn default_size(&self) -> Size {
        self.default_size
    }

    /// The proposal children receive for a given container proposal.
    #[must_use]
    pub const fn content_proposal(&self, proposal: ProposalSize) -> ProposalSize {
        proposal.unspecifying(self.axes)
    }
}

impl Default for ScrollLayout {
    fn default() -> Self {
        Self::new(AxisSet::VERTICAL)
    }
}

impl Layout for ScrollLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let resolved = proposal.replacing_unspecified_dimensions(self.default_size);
        let content_proposal = self.content_proposal(resolved.into());

        let content = children
            .iter()
            .map(|child| child.size_that_fits(content_proposal))
            .fold(Size::zero(), Size::union);

        let size = Size::new(
            if self.axes.contains(AxisSet::HORIZONTAL) {
                resolved.width
            } else {
                content.width
            },
            if self.axes.contains(AxisSet::VERTICAL) {
                resolved.height
            } else {
                content.height
            },
        );

        tracing::trace!(axes = ?self.axes, ?proposal, ?content, ?size, "measured scroll region");
        size
    }

    fn place(
        &self,
        bounds: Rect,
        proposal: ProposalSize,
        children: &[&dyn SubView],
    ) -> Vec<ChildPlacement> {
        let content_proposal = self.content_proposal(proposal);

        let (position, anchor) = if self.axes.contains(AxisSet::ALL) {
            (bounds.center(), Anchor::Center)
        } else {
            (bounds.origin(), Anchor::TopLeading)
        };

        children
            .iter()
            .map(|child| {
                let size = child.size_that_fits(content_proposal);
                ChildPlacement::anchored(position, anchor, size, content_proposal)
            })
            .collect()
    }

    /// Scroll regions stretch in both directions to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::Both
    }
}

/// A scrollable view that displays content larger than its frame.
///
/// Use a `ScrollView` when content might not fit in the available space.
///
/// ```ignore
/// scroll(column_of_rows)
/// ```
///
/// By default, `ScrollView` scrolls vertically. For horizontal scrolling:
///
/// ```ignore
/// scroll_horizontal(long_content)
/// ```
///
/// Or both directions, which also centers the content:
///
/// ```ignore
/// scroll_both(large_image)
/// ```
///
/// Along a non-scrolling axis the view only grows to fit its children. To make
/// it fill its parent on that axis, give it a child that stretches.
pub struct ScrollView {
    layout: ScrollLayout,
    shows_indicators: bool,
    content: Vec<Box<dyn SubView>>,
}

impl ScrollView {
    /// Creates an empty `ScrollView` scrolling along `axes`.
    #[must_use]
    pub fn new(axes: AxisSet) -> Self {
        Self {
            layout: ScrollLayout::new(axes),
            shows_indicators: true,
            content: Vec::new(),
        }
    }

    /// Creates an empty `ScrollView` with horizontal scrolling.
    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(AxisSet::HORIZONTAL)
    }

    /// Creates an empty `ScrollView` with vertical scrolling.
    #[must_use]
    pub fn vertical() -> Self {
        Self::new(AxisSet::VERTICAL)
    }

    /// Creates an empty `ScrollView` with scrolling in both directions.
    #[must_use]
    pub fn both() -> Self {
        Self::new(AxisSet::ALL)
    }

    /// Appends a child to the scrolled content.
    #[must_use]
    pub fn child(mut self, child: impl SubView + 'static) -> Self {
        self.content.push(Box::new(child));
        self
    }

    /// Sets whether scroll indicators are shown. Defaults to `true`.
    #[must_use]
    pub fn indicators(mut self, visible: bool) -> Self {
        self.shows_indicators = visible;
        self
    }

    /// Overrides the extent used for unspecified proposal dimensions.
    #[must_use]
    pub fn default_size(mut self, size: Size) -> Self {
        self.layout = self.layout.with_default_size(size);
        self
    }

    /// Returns the scrolling axes.
    #[must_use]
    pub const fn axes(&self) -> AxisSet {
        self.layout.axes()
    }

    /// Returns whether scroll indicators are shown.
    #[must_use]
    pub const fn shows_indicators(&self) -> bool {
        self.shows_indicators
    }

    /// Returns the layout driving this view.
    #[must_use]
    pub const fn layout(&self) -> &ScrollLayout {
        &self.layout
    }

    /// Returns the scrolled children as layout proxies.
    #[must_use]
    pub fn children(&self) -> Vec<&dyn SubView> {
        self.content
            .iter()
            .map(|child| child.as_ref() as &dyn SubView)
            .collect()
    }

    /// Places the children within `bounds`, see [`ScrollLayout`].
    #[must_use]
    pub fn place(&self, bounds: Rect, proposal: ProposalSize) -> Vec<ChildPlacement> {
        self.layout.place(bounds, proposal, &self.children())
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::vertical()
    }
}

impl fmt::Debug for ScrollView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollView")
            .field("layout", &self.layout)
            .field("shows_indicators", &self.shows_indicators)
            .field("children", &self.content.len())
            .finish()
    }
}

impl SubView for ScrollView {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.layout.size_that_fits(proposal, &self.children())
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.layout.stretch_axis()
    }
}

/// Creates a vertical `ScrollView` with the given content.
///
/// This is the most common scroll direction for lists and long content.
pub fn scroll(content: impl SubView + 'static) -> ScrollView {
    ScrollView::vertical().child(content)
}

/// Creates a horizontal `ScrollView` with the given content.
pub fn scroll_horizontal(content: impl SubView + 'static) -> ScrollView {
    ScrollView::horizontal().child(content)
}

/// Creates a `ScrollView` that can scroll in both directions.
///
/// Useful for large content like images or tables.
pub fn scroll_both(content: impl SubView + 'static) -> ScrollView {
    ScrollView::both().child(content)
}
