//! In-memory tabular dataset.
//!
//! A [`Table`] is an ordered list of named columns of equal length. The
//! value type of each column is decided once, when the table is loaded, and
//! stored as a closed [`ColumnValues`] variant; downstream stages branch on
//! that tag instead of inspecting individual cells.

use crate::error::{ProfilerError, Result};

/// Cells of one column, tagged with the type the loader inferred.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnValues {
    /// Integer or floating point column; `None` marks a missing cell.
    /// Only finite values are ever stored.
    Numeric(Vec<Option<f64>>),
    /// `true`/`false` column. Summarized as numbers (share of `true`),
    /// plotted as categories.
    Boolean(Vec<Option<bool>>),
    /// Any other column, stringified by the loader; `None` marks a missing cell.
    Text(Vec<Option<String>>),
    /// Column whose every cell is absent, so no type could be inferred.
    Missing(usize),
}

impl ColumnValues {
    /// Numeric cells; NaN and infinite values are stored as missing.
    pub fn numeric(cells: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::Numeric(
            cells
                .into_iter()
                .map(|v| v.filter(|x| x.is_finite()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Boolean(v) => v.len(),
            Self::Text(v) => v.len(),
            Self::Missing(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn null_count(&self) -> usize {
        match self {
            Self::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Boolean(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Text(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Missing(n) => *n,
        }
    }

    /// Numeric, boolean and all-missing columns are summarized as numbers.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Text and boolean columns are plotted as value counts, the rest as histograms.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Boolean(_))
    }

    /// Present values as numbers in row order (`true` is 1.0); empty for text columns.
    pub fn present_numbers(&self) -> Vec<f64> {
        match self {
            Self::Numeric(v) => v.iter().flatten().copied().collect(),
            Self::Boolean(v) => v.iter().flatten().map(|&b| f64::from(u8::from(b))).collect(),
            Self::Text(_) | Self::Missing(_) => Vec::new(),
        }
    }

    /// Present values as text in row order; empty for numeric columns.
    pub fn present_text(&self) -> impl Iterator<Item = &str> {
        let text: &[Option<String>] = match self {
            Self::Text(v) => v.as_slice(),
            Self::Numeric(_) | Self::Boolean(_) | Self::Missing(_) => &[],
        };
        let flags: &[Option<bool>] = match self {
            Self::Boolean(v) => v.as_slice(),
            Self::Numeric(_) | Self::Text(_) | Self::Missing(_) => &[],
        };
        text.iter()
            .flatten()
            .map(String::as_str)
            .chain(flags.iter().flatten().map(|&b| if b { "true" } else { "false" }))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    /// Type name reported by the loader (`i64`, `f64`, `str`, ...).
    pub dtype: String,
    pub values: ColumnValues,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            dtype: "f64".to_owned(),
            values: ColumnValues::numeric(values),
        }
    }

    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<Option<S>>) -> Self {
        Self {
            name: name.into(),
            dtype: "str".to_owned(),
            values: ColumnValues::Text(values.into_iter().map(|v| v.map(Into::into)).collect()),
        }
    }

    pub fn boolean(name: impl Into<String>, values: Vec<Option<bool>>) -> Self {
        Self {
            name: name.into(),
            dtype: "bool".to_owned(),
            values: ColumnValues::Boolean(values),
        }
    }

    pub fn missing(name: impl Into<String>, len: usize) -> Self {
        Self {
            name: name.into(),
            dtype: "null".to_owned(),
            values: ColumnValues::Missing(len),
        }
    }

    pub fn with_dtype(mut self, dtype: impl Into<String>) -> Self {
        self.dtype = dtype.into();
        self
    }
}

/// Loaded dataset. Never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    row_count: usize,
    columns: Vec<Column>,
}

impl Table {
    /// Creates a table, checking that every column holds `row_count` cells.
    ///
    /// # Errors
    ///
    /// Returns [`ProfilerError::Parse`] when a column length differs.
    pub fn new(row_count: usize, columns: Vec<Column>) -> Result<Self> {
        if let Some(bad) = columns.iter().find(|c| c.values.len() != row_count) {
            return Err(ProfilerError::Parse(format!(
                "column '{}' has {} values, expected {row_count}",
                bad.name,
                bad.values.len()
            )));
        }
        Ok(Self { row_count, columns })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}
