//! UI layer for camconf.
//!
//! [`ControlSet`] is the flat, range-bounded view of a projection that UI
//! widgets display; [`build_projection_section`] draws it with egui and
//! reports edits as a [`ProjectionAction`] instead of writing them back.

pub mod controls;
pub mod panels;

pub use controls::*;
pub use panels::*;
