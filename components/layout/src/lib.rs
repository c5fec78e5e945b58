//! Layout containers for `Eddy`.
//!
//! This crate implements concrete containers on top of the negotiation
//! protocol defined in [`eddy_core::layout`]: a container is asked what size
//! fits a [`ProposalSize`], then asked to place its children inside the bounds
//! its parent settled on.
//!
//! # Logical Pixels (Points)
//!
//! All layout values use **logical pixels** (points/dp), the same unit as
//! design tools. Backends handle conversion to physical pixels.
//!
//! # Example
//!
//! ```rust,ignore
//! use eddy_layout::{scroll, Layout, ProposalSize, Rect};
//!
//! let list = scroll(rows);
//! let size = list.size_that_fits(ProposalSize::new(320.0, 480.0));
//! let placements = list.place(Rect::from_size(size), ProposalSize::new(320.0, 480.0));
//! ```

pub use eddy_core::layout::*;

pub mod scroll;
pub use scroll::{ScrollLayout, ScrollView, scroll, scroll_both, scroll_horizontal};

#[cfg(test)]
mod tests;
