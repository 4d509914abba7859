//! Column Descriptor
//!
//! The rendering-independent half of a table column. The GPUI column in
//! `components::composite::data_table` wraps one of these with a cell renderer.

use serde::{Deserialize, Serialize};

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl ColumnWidth {
    /// Resolve to pixels against the table's available width
    pub fn resolve(&self, available: f32) -> f32 {
        match self {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min, max } => {
                let w = min.unwrap_or(120.0);
                max.map_or(w, |max| w.min(max))
            }
            ColumnWidth::Percent(p) => available * p / 100.0,
        }
    }
}

/// Column metadata: identity, label, data field and sortability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Unique column key
    pub key: String,
    /// Header label
    pub title: String,
    /// Field read from each row
    pub data_index: String,
    /// Whether clicking the header sorts by this column
    #[serde(default)]
    pub sortable: bool,
    /// Optional width; flexible when absent
    #[serde(default)]
    pub width: Option<ColumnWidth>,
}

impl ColumnDef {
    /// Create a column whose key and data field share a name
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
            width: None,
        }
    }

    /// Read a different field than the column key
    pub fn data_index(mut self, field: impl Into<String>) -> Self {
        self.data_index = field.into();
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column width
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }
}

impl AsRef<ColumnDef> for ColumnDef {
    fn as_ref(&self) -> &ColumnDef {
        self
    }
}

/// Find a column by key
pub fn find_column<'a, C: AsRef<ColumnDef>>(columns: &'a [C], key: &str) -> Option<&'a ColumnDef> {
    columns.iter().map(AsRef::as_ref).find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let col = ColumnDef::new("name", "Name").sortable();
        assert_eq!(col.data_index, "name");
        assert!(col.sortable);

        let col = ColumnDef::new("user", "User").data_index("name");
        assert_eq!(col.key, "user");
        assert_eq!(col.data_index, "name");
        assert!(!col.sortable);
    }

    #[test]
    fn test_width_resolve() {
        assert_eq!(ColumnWidth::Fixed(80.0).resolve(1000.0), 80.0);
        assert_eq!(ColumnWidth::Percent(25.0).resolve(800.0), 200.0);
        assert_eq!(
            ColumnWidth::Flex { min: Some(300.0), max: Some(200.0) }.resolve(0.0),
            200.0
        );
    }

    #[test]
    fn test_find_column() {
        let cols = vec![ColumnDef::new("a", "A"), ColumnDef::new("b", "B")];
        assert_eq!(find_column(&cols, "b").map(|c| c.title.as_str()), Some("B"));
        assert!(find_column(&cols, "z").is_none());
    }
}
