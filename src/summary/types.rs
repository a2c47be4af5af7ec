use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Most frequent values of a column, in descending frequency order.
pub type TopValues = IndexMap<String, usize>;

/// Descriptive record for one column.
///
/// Serialized field order is `name`, `dtype`, `n_missing`, `pct_missing`,
/// followed by the flattened [`ColumnStats`] fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub n_missing: usize,
    /// Fraction in `[0, 1]`; `0.0` for a table without rows.
    pub pct_missing: f64,
    #[serde(flatten)]
    pub stats: ColumnStats,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Categorical { top: TopValues },
}

/// Moments of the present values. Every float is `None` when `count == 0`;
/// `std` is also `None` when `count == 1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Shape plus one [`ColumnSummary`] per column, in column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// `(rows, columns)`, serialized as a two-element array.
    pub shape: (usize, usize),
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    pub fn column_count(&self) -> usize {
        self.shape.1
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}
