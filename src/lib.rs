#![doc = include_str!("../README.md")]

pub mod gesture;
pub mod logging;

pub use gesture::{
    DragConfig, DragGesture, DragValue, EndedGesture, Gesture, GestureExt, GesturePhase,
    GestureSession,
};

#[doc(inline)]
pub use eddy_core::{Callback, Clock, GestureError, InstantClock, ManualClock};
pub use eddy_layout as layout;

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! ```rust
    //! use eddy::prelude::*;
    //!
    //! let drag = DragGesture::new().on_ended(|value| {
    //!     let _ = value.translation;
    //! });
    //! let _session = GestureSession::new(&drag);
    //! ```
    pub use super::gesture::{
        DragGesture, DragValue, EndedGesture, Gesture, GestureExt, GesturePhase, GestureSession,
    };
    pub use eddy_core::{Callback, GestureError};
    pub use eddy_layout::{
        AxisSet, ChildPlacement, Layout, Point, ProposalSize, Rect, ScrollLayout, ScrollView,
        Size, SubView, Vector, scroll, scroll_both, scroll_horizontal,
    };
}
