//! State - Component State Modules
//!
//! Plain state objects owned by the GPUI components. Each transition is a
//! method that updates the state and returns the event to forward, if any.

pub mod data_table_state;
pub mod input_field_state;

pub use data_table_state::DataTableState;
pub use input_field_state::{InputFieldProps, InputFieldState, InputType, TrailingAffordance};
