//! Core contracts for `Eddy`.
//!
//! This crate holds the pieces every other Eddy crate agrees on:
//!
//! - geometry value types and the proposed-size negotiation protocol
//!   ([`layout`]),
//! - the gesture phase model, callback slots and the [`Gesture`](gesture::Gesture)
//!   capability ([`gesture`]),
//! - time sources used by recognizers ([`clock`]),
//! - the shared error type ([`error`]).
//!
//! Nothing here renders or owns a view tree; containers and recognizers are
//! plain values driven by whoever owns the tree.

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod gesture;
pub mod layout;

pub use clock::{Clock, InstantClock, ManualClock};
pub use error::GestureError;
pub use gesture::{Callback, Gesture, GesturePhase};
pub use layout::{
    Anchor, AxisSet, ChildPlacement, DEFAULT_PROPOSAL_DIMENSION, Layout, Point, ProposalSize,
    Rect, Size, StretchAxis, SubView, Vector,
};
