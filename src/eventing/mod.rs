//! Eventing - Component Output Events
//!
//! Components never call host code from inside a state transition. Each
//! transition returns an event value; the component forwards it to the
//! handler the host registered.

pub mod component_event;

pub use component_event::{InputEvent, TableEvent};
