//! FormKit GUI Library
//!
//! Form and data-display components for GPUI: a labeled `InputField` and a
//! sortable, selectable `DataTable`. The sorting and selection rules live in
//! `domain` and `state` and have no GPUI dependency beyond color types.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;

pub use components::composite::data_table::{Column, DataTable};
pub use components::primitives::{Checkbox, InputField};
pub use domain::{CellValue, ColumnDef, Record, RowKey, RowKeySpec, SortDirection, SortState};
pub use error::{Error, Result};
pub use eventing::{InputEvent, TableEvent};
