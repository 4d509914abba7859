//! DataTableState - Sort and Selection State of One Table
//!
//! Owned by the `DataTable` component. Rows and columns stay with the host;
//! every method that needs them borrows them for the duration of the call,
//! so replacing the row set never clears the selection.

use crate::domain::column::ColumnDef;
use crate::domain::row_key::{resolve_key, RowKey, RowKeySpec};
use crate::domain::selection::{self, CheckState, SelectionSet};
use crate::domain::sort::{sort_order, SortState};
use crate::domain::value::Record;
use crate::eventing::TableEvent;

/// Sort and selection state for a table of `R` rows
pub struct DataTableState<R> {
    sort: SortState,
    selection: SelectionSet,
    row_key: RowKeySpec<R>,
    selectable: bool,
}

impl<R: Record + Clone> DataTableState<R> {
    /// Create an unsorted state with nothing selected
    pub fn new() -> Self {
        Self {
            sort: SortState::new(),
            selection: SelectionSet::new(),
            row_key: RowKeySpec::default(),
            selectable: false,
        }
    }

    // ==================== Getters ====================

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn row_key_spec(&self) -> &RowKeySpec<R> {
        &self.row_key
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    // ==================== Setters ====================

    pub fn set_row_key(&mut self, spec: RowKeySpec<R>) {
        self.row_key = spec;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    // ==================== Derived View ====================

    /// Display order as indices into `rows`
    pub fn display_order<C: AsRef<ColumnDef>>(&self, rows: &[R], columns: &[C]) -> Vec<usize> {
        sort_order(rows, columns, &self.sort)
    }

    /// Key of the row at `index` of the host's input order
    pub fn row_key(&self, row: &R, index: usize) -> RowKey {
        resolve_key(row, index, &self.row_key)
    }

    pub fn is_row_selected(&self, row: &R, index: usize) -> bool {
        self.selection.contains(&self.row_key(row, index))
    }

    /// State of the select-all checkbox
    pub fn header_check_state(&self, rows: &[R]) -> CheckState {
        selection::header_check_state(rows.iter().enumerate(), &self.selection, &self.row_key)
    }

    /// Selected rows in display order
    pub fn selected_rows<C: AsRef<ColumnDef>>(&self, rows: &[R], columns: &[C]) -> Vec<R> {
        let order = self.display_order(rows, columns);
        selection::materialize(
            order.iter().map(|&i| (i, &rows[i])),
            &self.selection,
            &self.row_key,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    // ==================== Transitions ====================

    /// Header click. Emits `SortChanged` unless the column is unsortable.
    pub fn activate_column(&mut self, column: &ColumnDef) -> Option<TableEvent<R>> {
        let next = self.sort.activate(column);
        if next == self.sort {
            return None;
        }

        tracing::debug!(
            column = %column.key,
            direction = ?next.direction(),
            "DataTable sort changed"
        );
        self.sort = next;
        Some(TableEvent::SortChanged {
            sort: self.sort.clone(),
        })
    }

    /// Row or row-checkbox click on the row at input position `index`.
    pub fn toggle_row<C: AsRef<ColumnDef>>(
        &mut self,
        rows: &[R],
        columns: &[C],
        index: usize,
    ) -> Option<TableEvent<R>> {
        if !self.selectable {
            return None;
        }
        let row = rows.get(index)?;
        let key = self.row_key(row, index);

        tracing::debug!(%key, "DataTable row toggled");
        self.selection = selection::toggle_row(&self.selection, key);
        Some(self.selection_changed(rows, columns))
    }

    /// Select-all checkbox click.
    pub fn toggle_all<C: AsRef<ColumnDef>>(&mut self, rows: &[R], columns: &[C]) -> Option<TableEvent<R>> {
        if !self.selectable {
            return None;
        }

        self.selection = selection::select_all(rows.iter().enumerate(), &self.selection, &self.row_key);
        tracing::debug!(selected = self.selection.len(), "DataTable select all toggled");
        Some(self.selection_changed(rows, columns))
    }

    fn selection_changed<C: AsRef<ColumnDef>>(&self, rows: &[R], columns: &[C]) -> TableEvent<R> {
        TableEvent::SelectionChanged {
            rows: self.selected_rows(rows, columns),
        }
    }
}

impl<R: Record + Clone> Default for DataTableState<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sort::SortDirection;
    use serde_json::{json, Value};

    fn users() -> Vec<Value> {
        vec![
            json!({ "id": 1, "name": "John Doe", "email": "john@example.com", "role": "Admin" }),
            json!({ "id": 2, "name": "Jane Smith", "email": "jane@example.com", "role": "User" }),
            json!({ "id": 3, "name": "Bob Johnson", "email": "bob@example.com", "role": "Editor" }),
        ]
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("name", "Name").sortable(),
            ColumnDef::new("email", "Email").sortable(),
            ColumnDef::new("role", "Role"),
        ]
    }

    fn selectable_state() -> DataTableState<Value> {
        let mut state = DataTableState::new();
        state.set_selectable(true);
        state
    }

    #[test]
    fn test_header_clicks_cycle_sort() {
        let rows = users();
        let cols = columns();
        let mut state: DataTableState<Value> = DataTableState::new();

        assert!(matches!(
            state.activate_column(&cols[0]),
            Some(TableEvent::SortChanged { .. })
        ));
        assert_eq!(state.display_order(&rows, &cols), vec![2, 1, 0]);

        state.activate_column(&cols[0]);
        assert_eq!(state.sort().direction(), SortDirection::Descending);
        assert_eq!(state.display_order(&rows, &cols), vec![0, 1, 2]);

        state.activate_column(&cols[0]);
        assert!(!state.sort().is_sorted());
        assert_eq!(state.display_order(&rows, &cols), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsortable_header_changes_nothing() {
        let rows = users();
        let cols = columns();
        let mut state: DataTableState<Value> = DataTableState::new();

        assert!(state.activate_column(&cols[2]).is_none());
        assert_eq!(state.sort(), &SortState::new());
        assert_eq!(state.display_order(&rows, &cols), vec![0, 1, 2]);
    }

    #[test]
    fn test_toggle_row_emits_selected_rows() {
        let rows = users();
        let cols = columns();
        let mut state = selectable_state();

        let event = state.toggle_row(&rows, &cols, 0);
        assert_eq!(
            event,
            Some(TableEvent::SelectionChanged { rows: vec![rows[0].clone()] })
        );
        assert!(state.is_row_selected(&rows[0], 0));
        assert_eq!(state.header_check_state(&rows), CheckState::Indeterminate);
    }

    #[test]
    fn test_toggle_all_round_trip() {
        let rows = users();
        let cols = columns();
        let mut state = selectable_state();

        let all = state.toggle_all(&rows, &cols);
        assert_eq!(all.as_ref().and_then(|e| e.selected_rows()).map(<[Value]>::len), Some(3));
        assert_eq!(state.header_check_state(&rows), CheckState::Checked);

        let none = state.toggle_all(&rows, &cols);
        assert_eq!(none, Some(TableEvent::SelectionChanged { rows: Vec::new() }));
        assert_eq!(state.header_check_state(&rows), CheckState::Unchecked);
    }

    #[test]
    fn test_selection_is_emitted_in_sorted_order() {
        let rows = users();
        let cols = columns();
        let mut state = selectable_state();

        state.activate_column(&cols[0]);
        let event = state.toggle_all(&rows, &cols);
        let names: Vec<String> = event
            .as_ref()
            .and_then(|e| e.selected_rows())
            .unwrap_or_default()
            .iter()
            .map(|r| r.field("name").to_string())
            .collect();
        assert_eq!(names, vec!["Bob Johnson", "Jane Smith", "John Doe"]);
    }

    #[test]
    fn test_selection_survives_resort() {
        let rows = users();
        let cols = columns();
        let mut state = selectable_state();

        state.toggle_row(&rows, &cols, 1);
        state.activate_column(&cols[0]);
        state.activate_column(&cols[0]);
        assert!(state.is_row_selected(&rows[1], 1));
        assert_eq!(state.selected_rows(&rows, &cols), vec![rows[1].clone()]);
    }

    #[test]
    fn test_not_selectable_is_inert() {
        let rows = users();
        let cols = columns();
        let mut state: DataTableState<Value> = DataTableState::new();

        assert!(state.toggle_row(&rows, &cols, 0).is_none());
        assert!(state.toggle_all(&rows, &cols).is_none());
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_replacing_rows_keeps_stale_keys() {
        let rows = users();
        let cols = columns();
        let mut state = selectable_state();
        state.toggle_row(&rows, &cols, 0);

        let fresh = vec![json!({ "id": 10, "name": "Zoe" }), json!({ "id": 11, "name": "Yan" })];
        assert_eq!(state.selection().len(), 1);
        assert_eq!(state.header_check_state(&fresh), CheckState::Indeterminate);
        assert!(state.selected_rows(&fresh, &cols).is_empty());

        // A select-all recomputes against the new rows and drops the stale key
        state.toggle_all(&fresh, &cols);
        assert_eq!(state.selected_rows(&fresh, &cols).len(), 2);
        assert!(!state.selection().contains(&RowKey::Number(1)));
    }

    #[test]
    fn test_custom_row_key() {
        let rows = users();
        let cols = columns();
        let mut state = selectable_state();
        state.set_row_key(RowKeySpec::resolver(|r: &Value| {
            RowKey::Text(format!("user-{}", r.field("id")))
        }));

        let event = state.toggle_row(&rows, &cols, 0);
        assert_eq!(event.and_then(|e| e.selected_rows().map(<[Value]>::to_vec)), Some(vec![rows[0].clone()]));
        assert!(state.selection().contains(&RowKey::from("user-1")));
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let rows = users();
        let cols = columns();
        let mut state = selectable_state();
        assert!(state.toggle_row(&rows, &cols, 99).is_none());
    }
}
