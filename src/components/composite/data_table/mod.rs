//! DataTable Component
//!
//! A reusable data table with sorting and row selection.

pub mod column;
pub mod data_table;

pub use column::Column;
pub use data_table::{data_table, DataTable};
