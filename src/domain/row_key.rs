//! Row Identity - Stable Keys for Table Rows

use std::fmt;
use std::sync::Arc;

use super::value::{CellValue, Record};

/// Identifier of a row, used to track selection across re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
    Number(i64),
    Text(String),
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Number(n) => write!(f, "{n}"),
            RowKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowKey {
    fn from(value: i64) -> Self {
        RowKey::Number(value)
    }
}

impl From<usize> for RowKey {
    fn from(value: usize) -> Self {
        RowKey::Number(value as i64)
    }
}

impl From<&str> for RowKey {
    fn from(value: &str) -> Self {
        RowKey::Text(value.to_string())
    }
}

impl From<String> for RowKey {
    fn from(value: String) -> Self {
        RowKey::Text(value)
    }
}

// -2^63 and 2^63, both exact in f64
const I64_LOWER: f64 = i64::MIN as f64;
const I64_UPPER: f64 = -(i64::MIN as f64);

impl RowKey {
    /// Key for a present field value; integral numbers in `i64` range stay
    /// numeric, larger ones keep their text so they do not saturate.
    fn from_cell(value: &CellValue) -> Self {
        match value {
            CellValue::Number(n) if n.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(n) => {
                RowKey::Number(*n as i64)
            }
            other => RowKey::Text(other.to_string()),
        }
    }
}

/// How a row's key is derived.
pub enum RowKeySpec<R> {
    /// Read the key from a field, falling back to the row index when falsy
    Field(String),
    /// Compute the key from the row
    Resolver(Arc<dyn Fn(&R) -> RowKey + Send + Sync>),
}

impl<R> RowKeySpec<R> {
    /// Key taken from a named field
    pub fn field(name: impl Into<String>) -> Self {
        RowKeySpec::Field(name.into())
    }

    /// Key computed by a callback
    pub fn resolver(f: impl Fn(&R) -> RowKey + Send + Sync + 'static) -> Self {
        RowKeySpec::Resolver(Arc::new(f))
    }
}

impl<R> Default for RowKeySpec<R> {
    fn default() -> Self {
        RowKeySpec::Field("id".to_string())
    }
}

impl<R> Clone for RowKeySpec<R> {
    fn clone(&self) -> Self {
        match self {
            RowKeySpec::Field(name) => RowKeySpec::Field(name.clone()),
            RowKeySpec::Resolver(f) => RowKeySpec::Resolver(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for RowKeySpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKeySpec::Field(name) => f.debug_tuple("Field").field(name).finish(),
            RowKeySpec::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Derive the key of `row` at position `index`.
///
/// A field whose value is falsy (`0`, `""`, `false`, null) falls back to the
/// index, so such rows can collide with index-derived keys of other rows.
pub fn resolve_key<R: Record>(row: &R, index: usize, spec: &RowKeySpec<R>) -> RowKey {
    match spec {
        RowKeySpec::Field(name) => {
            let value = row.field(name);
            if value.is_truthy() {
                RowKey::from_cell(&value)
            } else {
                RowKey::from(index)
            }
        }
        RowKeySpec::Resolver(f) => f(row),
    }
}

/// Keys for every row, in row order.
pub fn resolve_keys<R: Record>(rows: &[R], spec: &RowKeySpec<R>) -> Vec<RowKey> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| resolve_key(row, index, spec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_key() {
        let row = json!({ "id": 7, "name": "Ada" });
        assert_eq!(resolve_key(&row, 0, &RowKeySpec::default()), RowKey::Number(7));

        let spec = RowKeySpec::field("name");
        assert_eq!(resolve_key(&row, 0, &spec), RowKey::from("Ada"));
    }

    #[test]
    fn test_missing_field_falls_back_to_index() {
        let row = json!({ "name": "Ada" });
        assert_eq!(resolve_key(&row, 4, &RowKeySpec::default()), RowKey::Number(4));
    }

    #[test]
    fn test_falsy_field_collides_with_index() {
        let rows = vec![json!({ "id": 1 }), json!({ "id": 0 })];
        let keys = resolve_keys(&rows, &RowKeySpec::default());
        // Row 1 has id 0, which is falsy, so it takes its index 1 and
        // collides with row 0's real id.
        assert_eq!(keys, vec![RowKey::Number(1), RowKey::Number(1)]);
    }

    #[test]
    fn test_resolver_has_no_fallback() {
        let row = json!({ "id": 0 });
        let spec = RowKeySpec::resolver(|r: &serde_json::Value| {
            RowKey::Text(format!("user-{}", r.field("id")))
        });
        assert_eq!(resolve_key(&row, 9, &spec), RowKey::from("user-0"));
    }

    #[test]
    fn test_true_key_is_text() {
        let row = json!({ "id": true });
        assert_eq!(resolve_key(&row, 3, &RowKeySpec::default()), RowKey::from("true"));
    }

    #[test]
    fn test_non_integral_number_key_is_text() {
        let row = json!({ "id": 1.5 });
        assert_eq!(resolve_key(&row, 0, &RowKeySpec::default()), RowKey::from("1.5"));
    }

    #[test]
    fn test_out_of_range_integral_keys_stay_distinct() {
        let spec = RowKeySpec::default();
        let a = resolve_key(&json!({ "id": 1e19 }), 0, &spec);
        let b = resolve_key(&json!({ "id": 2e19 }), 1, &spec);
        assert!(matches!(a, RowKey::Text(_)));
        assert!(matches!(b, RowKey::Text(_)));
        assert_ne!(a, b);

        let max = resolve_key(&json!({ "id": 9_007_199_254_740_992i64 }), 0, &spec);
        assert_eq!(max, RowKey::Number(9_007_199_254_740_992));
        let below = resolve_key(&json!({ "id": -9.0e18 }), 0, &spec);
        assert_eq!(below, RowKey::Number(-9_000_000_000_000_000_000));
    }
}
