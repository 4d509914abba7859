//! Cell Values - Dynamic Field Access and Ordering
//!
//! Rows are opaque to the table. Anything implementing [`Record`] can be
//! displayed, sorted and selected.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use feruca::{Collator, Locale as CollationLocale, Tailoring};
use serde::{Deserialize, Serialize};

/// A single field value read out of a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing field or explicit null
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Whether the value is absent (null or missing)
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Truthiness: null, `false`, `0`, `NaN` and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
        }
    }

    /// Text shown in a cell without a custom renderer. Falsy values render empty.
    pub fn display_text(&self) -> String {
        if self.is_truthy() {
            self.to_string()
        } else {
            String::new()
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Null, Into::into)
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            // Nested structures are shown as compact JSON
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// A row that exposes its fields by name.
pub trait Record {
    /// Read a field; missing fields are [`CellValue::Null`].
    fn field(&self, name: &str) -> CellValue;
}

impl Record for HashMap<String, CellValue> {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map(CellValue::from).unwrap_or_default()
    }
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> CellValue {
        self.get(name).map(CellValue::from).unwrap_or_default()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> CellValue {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for std::sync::Arc<R> {
    fn field(&self, name: &str) -> CellValue {
        (**self).field(name)
    }
}

thread_local! {
    // CLDR root collation, punctuation not ignored, byte order as the final tiebreak
    static COLLATOR: RefCell<Collator> =
        RefCell::new(Collator::new(Tailoring::Cldr(CollationLocale::Root), false, true));
}

/// Locale-aware string ordering.
///
/// Unicode collation with the CLDR root tailoring: accents and case only
/// break ties between otherwise equal letters, lowercase before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.borrow_mut().collate(a, b))
}

/// Ascending comparison of two cell values.
///
/// Equal values compare equal, absent values come first, strings compare
/// with [`locale_compare`], numbers numerically, anything else by its text.
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match (a, b) {
        (CellValue::Null, _) => Ordering::Less,
        (_, CellValue::Null) => Ordering::Greater,
        (CellValue::Text(x), CellValue::Text(y)) => locale_compare(x, y),
        // NaN has no place in the order; treat it like an equal pair
        (CellValue::Number(x), CellValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => locale_compare(&a.to_string(), &b.to_string()),
    }
}
