//! Selection Tracker - Row Selection by Key
//!
//! Selection is a set of [`RowKey`]s. Every transition here is pure and
//! returns a new set; the table state owns the current one.
//!
//! Rows are passed as `(index, &row)` pairs so the caller decides which
//! index feeds the key resolver and in which order rows are visited.

use ahash::AHashSet;

use super::row_key::{resolve_key, RowKey, RowKeySpec};
use super::value::Record;

/// Set of currently selected row keys.
///
/// Keys of rows that are no longer displayed are kept until they are
/// toggled off or replaced by a select-all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    keys: AHashSet<RowKey>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowKey> {
        self.keys.iter()
    }
}

impl FromIterator<RowKey> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = RowKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Selection with `key` flipped in or out.
pub fn toggle_row(current: &SelectionSet, key: RowKey) -> SelectionSet {
    let mut next = current.clone();
    if !next.keys.remove(&key) {
        next.keys.insert(key);
    }
    next
}

/// Select-all checkbox transition.
///
/// Clears the selection when it holds exactly the live rows' keys, otherwise
/// selects every live row. Stale keys make the sizes differ, so they lead to a
/// full select rather than a clear.
pub fn select_all<'a, R, I>(rows: I, current: &SelectionSet, spec: &RowKeySpec<R>) -> SelectionSet
where
    R: Record + 'a,
    I: IntoIterator<Item = (usize, &'a R)>,
{
    let mut row_count = 0;
    let live: AHashSet<RowKey> = rows
        .into_iter()
        .map(|(index, row)| {
            row_count += 1;
            resolve_key(row, index, spec)
        })
        .collect();

    let all_selected = current.len() == row_count && current.iter().all(|key| live.contains(key));

    if all_selected {
        SelectionSet::new()
    } else {
        SelectionSet { keys: live }
    }
}

/// Selected rows, in the order `rows` are visited.
pub fn materialize<'a, R, I>(rows: I, selected: &SelectionSet, spec: &RowKeySpec<R>) -> Vec<&'a R>
where
    R: Record + 'a,
    I: IntoIterator<Item = (usize, &'a R)>,
{
    rows.into_iter()
        .filter(|(index, row)| selected.contains(&resolve_key(*row, *index, spec)))
        .map(|(_, row)| row)
        .collect()
}

/// Header checkbox "checked": every live row selected and nothing else.
pub fn is_all_selected<'a, R, I>(rows: I, selected: &SelectionSet, spec: &RowKeySpec<R>) -> bool
where
    R: Record + 'a,
    I: IntoIterator<Item = (usize, &'a R)>,
{
    let mut row_count = 0;
    for (index, row) in rows {
        row_count += 1;
        if !selected.contains(&resolve_key(row, index, spec)) {
            return false;
        }
    }
    row_count > 0 && selected.len() == row_count
}

/// Header checkbox "indeterminate".
///
/// Only compares counts, so stale keys can make this disagree with
/// [`is_all_selected`].
pub fn is_partially_selected(row_count: usize, selected: &SelectionSet) -> bool {
    !selected.is_empty() && selected.len() < row_count
}

/// Visual state of a checkbox
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckState {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

/// State of the select-all checkbox; checked wins over indeterminate.
pub fn header_check_state<'a, R, I>(rows: I, selected: &SelectionSet, spec: &RowKeySpec<R>) -> CheckState
where
    R: Record + 'a,
    I: IntoIterator<Item = (usize, &'a R)>,
{
    let rows: Vec<(usize, &'a R)> = rows.into_iter().collect();
    let row_count = rows.len();
    if is_all_selected(rows, selected, spec) {
        CheckState::Checked
    } else if is_partially_selected(row_count, selected) {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn users() -> Vec<Value> {
        vec![
            json!({ "id": 1, "name": "John Doe" }),
            json!({ "id": 2, "name": "Jane Smith" }),
            json!({ "id": 3, "name": "Bob Johnson" }),
        ]
    }

    fn indexed(rows: &[Value]) -> impl Iterator<Item = (usize, &Value)> {
        rows.iter().enumerate()
    }

    #[test]
    fn test_toggle_single_row() {
        let rows = users();
        let spec = RowKeySpec::default();

        let selected = toggle_row(&SelectionSet::new(), RowKey::Number(1));
        assert_eq!(selected.len(), 1);
        assert!(selected.contains(&RowKey::Number(1)));

        let picked = materialize(indexed(&rows), &selected, &spec);
        assert_eq!(picked, vec![&rows[0]]);

        let cleared = toggle_row(&selected, RowKey::Number(1));
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_select_all_then_deselect() {
        let rows = users();
        let spec = RowKeySpec::default();

        let all = select_all(indexed(&rows), &SelectionSet::new(), &spec);
        assert_eq!(all.len(), 3);
        assert!(is_all_selected(indexed(&rows), &all, &spec));
        assert_eq!(materialize(indexed(&rows), &all, &spec).len(), 3);

        let none = select_all(indexed(&rows), &all, &spec);
        assert!(none.is_empty());
        assert!(materialize(indexed(&rows), &none, &spec).is_empty());
    }

    #[test]
    fn test_partial_selection_selects_all() {
        let rows = users();
        let spec = RowKeySpec::default();
        let partial = toggle_row(&SelectionSet::new(), RowKey::Number(2));

        assert!(is_partially_selected(rows.len(), &partial));
        assert!(!is_all_selected(indexed(&rows), &partial, &spec));
        assert_eq!(select_all(indexed(&rows), &partial, &spec).len(), 3);
    }

    #[test]
    fn test_stale_keys_are_not_all_selected() {
        let rows = users();
        let spec = RowKeySpec::default();
        // Same size as the row set, but one key belongs to a previous row set
        let selected: SelectionSet =
            [RowKey::Number(1), RowKey::Number(2), RowKey::Number(99)].into_iter().collect();

        assert!(!is_all_selected(indexed(&rows), &selected, &spec));
        assert!(!is_partially_selected(rows.len(), &selected));

        let next = select_all(indexed(&rows), &selected, &spec);
        assert_eq!(next.len(), 3);
        assert!(!next.contains(&RowKey::Number(99)));
    }

    #[test]
    fn test_stale_extra_key_partial_by_count_only() {
        let rows = users();
        let selected: SelectionSet = [RowKey::Number(42)].into_iter().collect();
        assert!(is_partially_selected(rows.len(), &selected));
        assert!(materialize(indexed(&rows), &selected, &RowKeySpec::default()).is_empty());
    }

    #[test]
    fn test_header_check_state() {
        let rows = users();
        let spec = RowKeySpec::default();
        let none = SelectionSet::new();
        let one = toggle_row(&none, RowKey::Number(3));
        let all = select_all(indexed(&rows), &none, &spec);

        assert_eq!(header_check_state(indexed(&rows), &none, &spec), CheckState::Unchecked);
        assert_eq!(header_check_state(indexed(&rows), &one, &spec), CheckState::Indeterminate);
        assert_eq!(header_check_state(indexed(&rows), &all, &spec), CheckState::Checked);
    }

    #[test]
    fn test_empty_rows_never_all_selected() {
        let rows: Vec<Value> = Vec::new();
        assert!(!is_all_selected(indexed(&rows), &SelectionSet::new(), &RowKeySpec::default()));
        assert!(!is_partially_selected(0, &SelectionSet::new()));
    }

    #[test]
    fn test_materialize_follows_visit_order() {
        let rows = users();
        let spec = RowKeySpec::default();
        let selected: SelectionSet = [RowKey::Number(1), RowKey::Number(3)].into_iter().collect();

        let reversed = [2usize, 1, 0].map(|i| (i, &rows[i]));
        let picked = materialize(reversed, &selected, &spec);
        assert_eq!(picked, vec![&rows[2], &rows[0]]);
    }

    #[test]
    fn test_custom_resolver() {
        let rows = users();
        let spec = RowKeySpec::resolver(|r: &Value| RowKey::Text(format!("user-{}", r.field("id"))));
        let selected = toggle_row(&SelectionSet::new(), RowKey::from("user-1"));
        assert_eq!(materialize(indexed(&rows), &selected, &spec), vec![&rows[0]]);
    }

    proptest! {
        #[test]
        fn prop_materialize_is_ordered_subsequence(toggles in prop::collection::vec(1i64..8, 0..30)) {
            let rows: Vec<Value> = (1..=6).map(|id| json!({ "id": id })).collect();
            let spec = RowKeySpec::default();

            let mut selected = SelectionSet::new();
            for id in toggles {
                selected = toggle_row(&selected, RowKey::Number(id));
            }

            let picked = materialize(indexed(&rows), &selected, &spec);
            let positions: Vec<usize> = picked
                .iter()
                .filter_map(|p| rows.iter().position(|r| std::ptr::eq(r, *p)))
                .collect();
            prop_assert_eq!(positions.len(), picked.len());
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_select_all_twice_round_trips(count in 1usize..10) {
            let rows: Vec<Value> = (1..=count).map(|id| json!({ "id": id })).collect();
            let spec = RowKeySpec::default();

            let all = select_all(indexed(&rows), &SelectionSet::new(), &spec);
            prop_assert_eq!(all.len(), count);
            let none = select_all(indexed(&rows), &all, &spec);
            prop_assert!(none.is_empty());
        }
    }
}
