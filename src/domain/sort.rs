//! Sort Engine - Single-Column Client-Side Sorting
//!
//! Sorting never touches the host's rows. It produces a permutation of row
//! indices (or an ordered view of borrowed rows) from the current [`SortState`].

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::column::{find_column, ColumnDef};
use super::value::{compare_values, CellValue, Record};

/// Sort direction of the active column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator glyph
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::None => "",
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction.
///
/// A column is active exactly when the direction is not `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    /// Unsorted state
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort ascending by `key`
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            active: Some((key.into(), SortDirection::Ascending)),
        }
    }

    /// Sort descending by `key`
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            active: Some((key.into(), SortDirection::Descending)),
        }
    }

    /// Key of the active column, if any
    pub fn active_column(&self) -> Option<&str> {
        self.active.as_ref().map(|(key, _)| key.as_str())
    }

    /// Current direction; `None` when unsorted
    pub fn direction(&self) -> SortDirection {
        self.active.as_ref().map_or(SortDirection::None, |(_, dir)| *dir)
    }

    /// Direction shown for a given column's header
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match &self.active {
            Some((active, dir)) if active == key => *dir,
            _ => SortDirection::None,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.active.is_some()
    }

    /// State after the header of `column` is activated.
    ///
    /// The same column cycles ascending → descending → unsorted → ascending.
    /// A different column always starts ascending. Unsortable columns leave
    /// the state untouched.
    pub fn activate(&self, column: &ColumnDef) -> SortState {
        if !column.sortable {
            return self.clone();
        }

        match &self.active {
            Some((key, SortDirection::Ascending)) if *key == column.key => {
                SortState::descending(column.key.clone())
            }
            Some((key, SortDirection::Descending)) if *key == column.key => SortState::new(),
            _ => SortState::ascending(column.key.clone()),
        }
    }
}

/// Row order for `state` as indices into `rows`.
///
/// Without an active column, or when the active column is not among
/// `columns`, the input order is returned. Equal rows keep their relative
/// order in both directions.
pub fn sort_order<R, C>(rows: &[R], columns: &[C], state: &SortState) -> Vec<usize>
where
    R: Record,
    C: AsRef<ColumnDef>,
{
    let mut order: Vec<usize> = (0..rows.len()).collect();

    let Some(column) = state.active_column().and_then(|key| find_column(columns, key)) else {
        return order;
    };

    let values: Vec<CellValue> = rows.iter().map(|row| row.field(&column.data_index)).collect();
    let descending = state.direction() == SortDirection::Descending;

    stable_sort_by(&mut order, |a, b| {
        let ord = compare_values(&values[*a], &values[*b]);
        if descending { ord.reverse() } else { ord }
    });
    keep_identical_in_input_order(&mut order, &values);

    order
}

/// Hashable identity of a cell value. All NaNs share one key, as do both zeros.
#[derive(PartialEq, Eq, Hash)]
enum ValueKey<'a> {
    Null,
    Bool(bool),
    Number(u64),
    Text(&'a str),
}

impl<'a> From<&'a CellValue> for ValueKey<'a> {
    fn from(value: &'a CellValue) -> Self {
        match value {
            CellValue::Null => ValueKey::Null,
            CellValue::Bool(b) => ValueKey::Bool(*b),
            CellValue::Number(n) if n.is_nan() => ValueKey::Number(f64::NAN.to_bits()),
            CellValue::Number(n) if *n == 0.0 => ValueKey::Number(0),
            CellValue::Number(n) => ValueKey::Number(n.to_bits()),
            CellValue::Text(s) => ValueKey::Text(s),
        }
    }
}

/// Reassign rows holding the same value to that value's output slots in
/// input order.
///
/// Under a total order the merge sort already does this. Mixed-type columns
/// compare numbers numerically but numbers against text by their text, which
/// is not transitive, and the merge can then swap two identical values.
fn keep_identical_in_input_order(order: &mut [usize], values: &[CellValue]) {
    let mut slots: AHashMap<ValueKey<'_>, Vec<usize>> = AHashMap::new();
    for (slot, &row) in order.iter().enumerate() {
        slots.entry(ValueKey::from(&values[row])).or_default().push(slot);
    }

    for positions in slots.values().filter(|p| p.len() > 1) {
        let mut rows: Vec<usize> = positions.iter().map(|&slot| order[slot]).collect();
        rows.sort_unstable();
        for (&slot, row) in positions.iter().zip(rows) {
            order[slot] = row;
        }
    }
}

/// Rows in sorted order, borrowed from `rows`.
pub fn sort_rows<'a, R, C>(rows: &'a [R], columns: &[C], state: &SortState) -> Vec<&'a R>
where
    R: Record,
    C: AsRef<ColumnDef>,
{
    sort_order(rows, columns, state)
        .into_iter()
        .map(|i| &rows[i])
        .collect()
}

/// Bottom-up merge sort over indices.
///
/// Mixed-type columns compare by text in some pairs and by number in others,
/// which is not a total order; this sort stays stable and terminates anyway.
fn stable_sort_by<F>(order: &mut Vec<usize>, mut cmp: F)
where
    F: FnMut(&usize, &usize) -> Ordering,
{
    let len = order.len();
    let mut buf = order.clone();
    let mut width = 1;

    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j, mut k) = (start, mid, start);

            while i < mid && j < end {
                if cmp(&order[j], &order[i]) == Ordering::Less {
                    buf[k] = order[j];
                    j += 1;
                } else {
                    buf[k] = order[i];
                    i += 1;
                }
                k += 1;
            }

            let left = mid - i;
            buf[k..k + left].copy_from_slice(&order[i..mid]);
            k += left;
            buf[k..k + (end - j)].copy_from_slice(&order[j..end]);

            start = end;
        }
        std::mem::swap(order, &mut buf);
        width *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use proptest::prelude::*;
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

    fn mixed_value() -> impl Strategy<Value = CellValue> {
        prop_oneof![
            Just(CellValue::Null),
            any::<bool>().prop_map(CellValue::Bool),
            (-12i32..12).prop_map(|n| CellValue::Number(f64::from(n))),
            "[a-cA-Cé0-9]{0,2}".prop_map(CellValue::Text),
        ]
    }

    fn names(rows: &[&Value]) -> Vec<String> {
        rows.iter().map(|r| r.field("name").to_string()).collect()
    }

    #[test]
    fn test_basic_sort_by_name() {
        let rows = users();
        let cols = columns();

        let asc = sort_rows(&rows, &cols, &SortState::ascending("name"));
        assert_eq!(names(&asc), vec!["Bob Johnson", "Jane Smith", "John Doe"]);

        let desc = sort_rows(&rows, &cols, &SortState::descending("name"));
        assert_eq!(names(&desc), vec!["John Doe", "Jane Smith", "Bob Johnson"]);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let rows = vec![
            json!({ "name": "Frank" }),
            json!({ "name": "Émile" }),
            json!({ "name": "bob" }),
            json!({ "name": "ángel" }),
            json!({ "name": "Eve" }),
        ];
        let cols = vec![ColumnDef::new("name", "Name").sortable()];

        let asc = sort_rows(&rows, &cols, &SortState::ascending("name"));
        assert_eq!(names(&asc), vec!["ángel", "bob", "Émile", "Eve", "Frank"]);

        let desc = sort_rows(&rows, &cols, &SortState::descending("name"));
        assert_eq!(names(&desc), vec!["Frank", "Eve", "Émile", "bob", "ángel"]);
    }

    #[test]
    fn test_unsorted_and_unknown_column_keep_order() {
        let rows = users();
        let cols = columns();
        assert_eq!(sort_order(&rows, &cols, &SortState::new()), vec![0, 1, 2]);
        assert_eq!(
            sort_order(&rows, &cols, &SortState::ascending("missing")),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_absent_values_first_ascending_last_descending() {
        let rows = vec![json!({ "n": 2 }), json!({}), json!({ "n": 1 })];
        let cols = vec![ColumnDef::new("n", "N").sortable()];
        assert_eq!(sort_order(&rows, &cols, &SortState::ascending("n")), vec![1, 2, 0]);
        assert_eq!(sort_order(&rows, &cols, &SortState::descending("n")), vec![0, 2, 1]);
    }

    #[test]
    fn test_descending_keeps_equal_rows_in_input_order() {
        let rows = vec![
            json!({ "g": "b", "i": 0 }),
            json!({ "g": "a", "i": 1 }),
            json!({ "g": "b", "i": 2 }),
            json!({ "g": "a", "i": 3 }),
        ];
        let cols = vec![ColumnDef::new("g", "G").sortable()];
        assert_eq!(sort_order(&rows, &cols, &SortState::ascending("g")), vec![1, 3, 0, 2]);
        assert_eq!(sort_order(&rows, &cols, &SortState::descending("g")), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_sort_cycle() {
        let name = ColumnDef::new("name", "Name").sortable();
        let email = ColumnDef::new("email", "Email").sortable();

        let first = SortState::new().activate(&name);
        assert_eq!(first, SortState::ascending("name"));
        let second = first.activate(&name);
        assert_eq!(second.direction(), SortDirection::Descending);
        let third = second.activate(&name);
        assert_eq!(third, SortState::new());
        assert_eq!(third.active_column(), None);
        assert_eq!(third.activate(&name), first);

        // Switching columns resets to ascending
        assert_eq!(second.activate(&email), SortState::ascending("email"));
    }

    #[test]
    fn test_unsortable_column_is_noop() {
        let role = ColumnDef::new("role", "Role");
        let state = SortState::ascending("name");
        assert_eq!(state.activate(&role), state);
        assert_eq!(SortState::new().activate(&role), SortState::new());
    }

    #[test]
    fn test_mixed_column_does_not_panic() {
        let rows = vec![
            json!({ "v": 10 }),
            json!({ "v": "9" }),
            json!({ "v": 9 }),
            json!({ "v": true }),
            json!({ "v": null }),
            json!({ "v": "abc" }),
        ];
        let cols = vec![ColumnDef::new("v", "V").sortable()];
        let order = sort_order(&rows, &cols, &SortState::ascending("v"));
        assert_eq!(order.len(), rows.len());
        assert_eq!(order[0], 4);
    }

    proptest! {
        #[test]
        fn prop_equal_keys_keep_relative_order(groups in prop::collection::vec(0u8..4, 0..40)) {
            let rows: Vec<Value> = groups
                .iter()
                .enumerate()
                .map(|(i, g)| json!({ "g": *g as i64, "i": i }))
                .collect();
            let cols = vec![ColumnDef::new("g", "G").sortable()];

            for state in [SortState::ascending("g"), SortState::descending("g")] {
                let order = sort_order(&rows, &cols, &state);
                for pair in order.windows(2) {
                    if groups[pair[0]] == groups[pair[1]] {
                        prop_assert!(pair[0] < pair[1]);
                    }
                }
            }
        }

        #[test]
        fn prop_mixed_values_sort_to_stable_permutation(values in prop::collection::vec(mixed_value(), 0..40)) {
            let rows: Vec<HashMap<String, CellValue>> = values
                .iter()
                .map(|v| HashMap::from([("v".to_string(), v.clone())]))
                .collect();
            let cols = vec![ColumnDef::new("v", "V").sortable()];

            for state in [SortState::ascending("v"), SortState::descending("v")] {
                let order = sort_order(&rows, &cols, &state);

                let mut seen = order.clone();
                seen.sort_unstable();
                prop_assert_eq!(seen, (0..values.len()).collect::<Vec<_>>());

                for (i, &earlier) in order.iter().enumerate() {
                    for &later in &order[i + 1..] {
                        if values[earlier] == values[later] {
                            prop_assert!(earlier < later);
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_sorting_sorted_rows_is_identity(words in prop::collection::vec("[a-zA-Z]{0,6}", 0..30)) {
            let rows: Vec<Value> = words.iter().map(|w| json!({ "w": w })).collect();
            let cols = vec![ColumnDef::new("w", "W").sortable()];
            let state = SortState::ascending("w");

            let sorted: Vec<Value> = sort_rows(&rows, &cols, &state).into_iter().cloned().collect();
            let again: Vec<Value> = sort_rows(&sorted, &cols, &state).into_iter().cloned().collect();
            prop_assert_eq!(sorted, again);
        }

        #[test]
        fn prop_distinct_keys_reverse_exactly(raw in prop::collection::vec(-1000i64..1000, 0..30)) {
            let mut nums = raw;
            nums.sort_unstable();
            nums.dedup();
            let rows: Vec<Value> = nums.iter().rev().map(|n| json!({ "n": n })).collect();
            let cols = vec![ColumnDef::new("n", "N").sortable()];

            let asc = sort_order(&rows, &cols, &SortState::ascending("n"));
            let mut desc = sort_order(&rows, &cols, &SortState::descending("n"));
            desc.reverse();
            prop_assert_eq!(asc, desc);
        }
    }
}
