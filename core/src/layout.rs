//! Layout primitives and geometry types for the Eddy layout system.
//!
//! # Logical Pixels (Points)
//!
//! All layout values use **logical pixels** (points/dp). Backends convert to
//! physical pixels; nothing in this module knows about screen density.
//!
//! # Negotiation
//!
//! Layout is a conversation between a container and its children:
//!
//! 1. The parent hands the container a [`ProposalSize`], where either
//!    dimension may be left unspecified.
//! 2. The container asks each child "if I propose this, how big are you?"
//!    through [`SubView::size_that_fits`], as many times as it needs.
//! 3. The container answers with its own [`Size`].
//! 4. Once the parent has settled on final bounds, the container computes a
//!    [`ChildPlacement`] for every child via [`Layout::place`].
//!
//! Ancestors may repeat this conversation several times per frame, so both
//! steps must be free of side effects.
//!
//! ```ignore
//! let size = layout.size_that_fits(proposal, &children);
//! let placements = layout.place(Rect::from_size(size), proposal, &children);
//! ```

use core::{
    fmt::Debug,
    ops::{Add, Sub},
};

// ============================================================================
// StretchAxis - Specifies which axis a view stretches on
// ============================================================================

/// Specifies which axis (or axes) a view wants to stretch to fill available space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StretchAxis {
    /// No stretching - view uses its intrinsic size
    #[default]
    None,
    /// Stretch horizontally only (expand width, use intrinsic height)
    Horizontal,
    /// Stretch vertically only (expand height, use intrinsic width)
    Vertical,
    /// Stretch in both directions (expand width and height)
    Both,
}

// ============================================================================
// AxisSet
// ============================================================================

bitflags::bitflags! {
    /// Orientations along which a container scrolls or expands.
    ///
    /// An empty set means neither direction; [`AxisSet::ALL`] means both.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AxisSet: u8 {
        /// The horizontal (x) axis.
        const HORIZONTAL = 0b01;
        /// The vertical (y) axis.
        const VERTICAL = 0b10;
        /// Both axes.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

// ============================================================================
// SubView Trait - Child View Proxy
// ============================================================================

/// A proxy for querying child view sizes during layout.
///
/// This trait allows layout containers to negotiate with children by asking
/// "if I propose this size, how big would you be?" multiple times with
/// different proposals.
///
/// # Pure Functions
///
/// All methods take `&self` and must not have side effects. Caching of
/// measurement results belongs to whoever owns the view tree.
pub trait SubView {
    /// Query the child's size for a given proposal.
    ///
    /// This method may be called multiple times with different proposals
    /// to probe the child's flexibility:
    ///
    /// - `ProposalSize::new(None, None)` - ideal/intrinsic size
    /// - `ProposalSize::new(Some(0.0), None)` - minimum width
    /// - `ProposalSize::new(Some(f32::INFINITY), None)` - maximum width
    /// - `ProposalSize::new(Some(200.0), None)` - constrained width
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// Which axis (or axes) this view stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

impl<T: SubView + ?Sized> SubView for Box<T> {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        (**self).size_that_fits(proposal)
    }

    fn stretch_axis(&self) -> StretchAxis {
        (**self).stretch_axis()
    }
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A layout algorithm for arranging child views.
///
/// Layouts receive a size proposal from their parent, query their children
/// to determine sizes, and then place children within the final bounds.
///
/// # Two-Phase Layout
///
/// 1. **Sizing** ([`size_that_fits`](Self::size_that_fits)): Determine how big
///    this container should be given a proposal
/// 2. **Placement** ([`place`](Self::place)): Position children within the
///    final bounds
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    ///
    /// Must be a pure function of `proposal` and the sizes children report.
    ///
    /// # Arguments
    ///
    /// * `proposal` - The size proposed by the parent
    /// * `children` - References to child proxies for size queries
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds.
    ///
    /// Called after sizing is complete, with the same proposal that was used
    /// for sizing. Returns one [`ChildPlacement`] per child, in child order.
    ///
    /// # Arguments
    ///
    /// * `bounds` - The rectangle this layout should fill
    /// * `proposal` - The proposal the parent used when sizing this layout
    /// * `children` - References to child proxies (may query sizes again)
    fn place(
        &self,
        bounds: Rect,
        proposal: ProposalSize,
        children: &[&dyn SubView],
    ) -> Vec<ChildPlacement>;

    /// Which axis this container stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

// ============================================================================
// Placement
// ============================================================================

/// Which point of a child's frame a placement position refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// The position is the frame's top-leading corner.
    #[default]
    TopLeading,
    /// The position is the frame's center.
    Center,
}

impl Anchor {
    /// Returns the top-leading origin of a frame of `size` anchored at `position`.
    #[must_use]
    pub fn origin(self, position: Point, size: Size) -> Point {
        match self {
            Self::TopLeading => position,
            Self::Center => Point::new(
                position.x - size.width / 2.0,
                position.y - size.height / 2.0,
            ),
        }
    }
}

/// Result of placing a child view.
///
/// Layouts only compute placements; applying them to a concrete child frame is
/// up to the owner of the view tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildPlacement {
    /// The rectangle the child should occupy.
    pub rect: Rect,
    /// The proposal the child was measured with, to be re-offered on placement.
    pub proposal: ProposalSize,
}

impl ChildPlacement {
    /// Creates a new child placement.
    #[must_use]
    pub const fn new(rect: Rect, proposal: ProposalSize) -> Self {
        Self { rect, proposal }
    }

    /// Creates a placement for a child of `size` whose `anchor` sits at `position`.
    #[must_use]
    pub fn anchored(position: Point, anchor: Anchor, size: Size, proposal: ProposalSize) -> Self {
        Self::new(Rect::new(anchor.origin(position, size), size), proposal)
    }

    /// Returns the top-leading corner of the placed child.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.rect.origin()
    }
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the minimum x-coordinate (left edge).
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the minimum y-coordinate (top edge).
    #[must_use]
    pub const fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the midpoint x-coordinate.
    #[must_use]
    pub const fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Returns the midpoint y-coordinate.
    #[must_use]
    pub const fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Creates a [`Size`] whose width and height are both `side`.
    #[must_use]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Returns the per-axis maximum of two sizes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Self;

    fn add(self, rhs: Vector) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// ============================================================================
// Vector
// ============================================================================

/// Signed two-dimensional offset, such as a translation or a velocity.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector {
    /// The zero offset.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Constructs a [`Vector`] from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the offset.
    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl_component_ops!(Vector, x, y);

// ============================================================================
// ProposalSize
// ============================================================================

/// Extent substituted for an unspecified proposal dimension.
pub const DEFAULT_PROPOSAL_DIMENSION: f32 = 10.0;

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(0.0)` - "Tell me your minimum size"
/// - `Some(f32::INFINITY)` - "Tell me your maximum size"
/// - `Some(value)` - "I suggest you use this size"
///
/// Children are free to return any size; the proposal is just a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified, `Some(f32)` = suggested width
    pub width: Option<f32>,
    /// Height proposal: `None` = unspecified, `Some(f32)` = suggested height
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Zero proposal - asks for minimum size.
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    /// Infinite proposal - asks for maximum size.
    pub const INFINITY: Self = Self {
        width: Some(f32::INFINITY),
        height: Some(f32::INFINITY),
    };

    /// Returns the width or a default value if unspecified.
    #[must_use]
    pub fn width_or(&self, default: f32) -> f32 {
        self.width.unwrap_or(default)
    }

    /// Returns the height or a default value if unspecified.
    #[must_use]
    pub fn height_or(&self, default: f32) -> f32 {
        self.height.unwrap_or(default)
    }

    /// Replace only the width, keeping the height.
    #[must_use]
    pub const fn with_width(self, width: Option<f32>) -> Self {
        Self {
            width,
            height: self.height,
        }
    }

    /// Replace only the height, keeping the width.
    #[must_use]
    pub const fn with_height(self, height: Option<f32>) -> Self {
        Self {
            width: self.width,
            height,
        }
    }

    /// Returns true when both dimensions carry a value.
    #[must_use]
    pub const fn is_fully_specified(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Turns the proposal into a concrete size, filling unspecified dimensions from `by`.
    #[must_use]
    pub fn replacing_unspecified_dimensions(&self, by: Size) -> Size {
        Size::new(self.width_or(by.width), self.height_or(by.height))
    }

    /// Like [`replacing_unspecified_dimensions`](Self::replacing_unspecified_dimensions),
    /// but keeps the result as a proposal. Resolving twice is the same as resolving once.
    #[must_use]
    pub fn resolved(self, by: Size) -> Self {
        let size = self.replacing_unspecified_dimensions(by);
        Self::new(size.width, size.height)
    }

    /// Clears the dimensions named in `axes`, leaving the others untouched.
    #[must_use]
    pub const fn unspecifying(self, axes: AxisSet) -> Self {
        Self {
            width: if axes.contains(AxisSet::HORIZONTAL) {
                None
            } else {
                self.width
            },
            height: if axes.contains(AxisSet::VERTICAL) {
                None
            } else {
                self.height
            },
        }
    }
}

impl From<Size> for ProposalSize {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

// ============================================================================
// Tests
// ============================================================================
