//! Domain - Table Core
//!
//! Row access, identity, sorting and selection. Nothing here depends on GPUI;
//! the components in `crate::components` render what these functions compute.

pub mod column;
pub mod config;
pub mod row_key;
pub mod selection;
pub mod sort;
pub mod value;

pub use column::{ColumnDef, ColumnWidth};
pub use row_key::{resolve_key, resolve_keys, RowKey, RowKeySpec};
pub use selection::{
    header_check_state, is_all_selected, is_partially_selected, materialize, select_all,
    toggle_row, CheckState, SelectionSet,
};
pub use sort::{sort_order, sort_rows, SortDirection, SortState};
pub use value::{compare_values, locale_compare, CellValue, Record};
