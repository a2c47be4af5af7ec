//! CSV loading.
//!
//! Polars parses the file and infers one type per column; the result is
//! converted into a [`Table`] so the rest of the pipeline never touches the
//! dataframe API.

use crate::error::{ProfilerError, Result, ResultExt as _};
use crate::table::{Column, ColumnValues, Table};
use polars::prelude::*;
use std::path::Path;

/// Rows scanned for schema inference.
pub const INFER_SCHEMA_ROWS: usize = 10_000;

/// Cell contents read as missing, in every column.
pub const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads a headed CSV file into a [`Table`], keeping at most `max_rows` data rows.
///
/// # Errors
///
/// - [`ProfilerError::File`] if `path` does not exist or cannot be read
/// - [`ProfilerError::Parse`] if the content is not valid delimited text
pub fn load_table(path: &Path, max_rows: Option<usize>) -> Result<Table> {
    ensure_readable(path)?;

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_n_rows(max_rows)
        .with_null_values(Some(NullValues::AllColumns(
            NULL_TOKENS.iter().map(|&t| t.into()).collect(),
        )))
        .finish()
        .and_then(LazyFrame::collect)
        .with_context(|| format!("Failed to parse CSV {}", path.display()))?;

    let table = dataframe_to_table(&df)?;
    tracing::info!(
        "Loaded {} ({} rows x {} columns)",
        path.display(),
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

fn ensure_readable(path: &Path) -> Result<()> {
    let meta = std::fs::metadata(path).map_err(|e| ProfilerError::file(path, &e))?;
    if !meta.is_file() {
        return Err(ProfilerError::File(format!(
            "{}: not a regular file",
            path.display()
        )));
    }
    std::fs::File::open(path).map_err(|e| ProfilerError::file(path, &e))?;
    Ok(())
}

/// Converts a polars frame into a [`Table`], resolving each column's variant once.
pub fn dataframe_to_table(df: &DataFrame) -> Result<Table> {
    let row_count = df.height();
    let columns = df
        .get_columns()
        .iter()
        .map(|col| convert_column(col.as_materialized_series(), row_count))
        .collect::<Result<Vec<_>>>()?;
    Table::new(row_count, columns)
}

fn convert_column(series: &Series, row_count: usize) -> Result<Column> {
    let name = series.name().to_string();
    let dtype = series.dtype();

    let values = if row_count > 0 && series.null_count() == row_count {
        ColumnValues::Missing(row_count)
    } else if matches!(dtype, DataType::Boolean) {
        ColumnValues::Boolean(series.bool()?.into_iter().collect())
    } else if is_numeric_dtype(dtype) {
        let cast = series.cast(&DataType::Float64)?;
        ColumnValues::numeric(cast.f64()?.into_iter())
    } else {
        let cast = series.cast(&DataType::String)?;
        let ca = cast.str()?;
        ColumnValues::Text(ca.into_iter().map(|v| v.map(str::to_owned)).collect())
    };

    let dtype = match values {
        ColumnValues::Missing(_) => "null".to_owned(),
        ColumnValues::Numeric(_) | ColumnValues::Boolean(_) | ColumnValues::Text(_) => {
            dtype.to_string()
        }
    };
    tracing::debug!("Column '{name}' resolved as {dtype}");

    Ok(Column {
        name,
        dtype,
        values,
    })
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int32
            | DataType::Int64
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_infers_numeric_and_text() -> Result<()> {
        let file = csv_file("age,city\n20,NY\n30,LA\n,NY\n40,SF\n50,LA\n");
        let table = load_table(file.path(), None)?;

        assert_eq!(table.shape(), (5, 2));
        let age = &table.columns()[0];
        assert_eq!(age.name, "age");
        assert_eq!(age.dtype, "i64");
        assert_eq!(
            age.values,
            ColumnValues::Numeric(vec![Some(20.0), Some(30.0), None, Some(40.0), Some(50.0)])
        );
        let city = &table.columns()[1];
        assert!(!city.values.is_numeric());
        assert_eq!(city.values.null_count(), 0);
        Ok(())
    }

    #[test]
    fn test_load_respects_max_rows() -> Result<()> {
        let file = csv_file("x\n1\n2\n3\n4\n");
        let table = load_table(file.path(), Some(2))?;
        assert_eq!(table.row_count(), 2);
        Ok(())
    }

    #[test]
    fn test_all_empty_column_is_missing() -> Result<()> {
        let file = csv_file("x,empty\n1,\n2,\n");
        let table = load_table(file.path(), None)?;
        assert_eq!(table.columns()[1].values, ColumnValues::Missing(2));
        assert_eq!(table.columns()[1].dtype, "null");
        Ok(())
    }

    #[test]
    fn test_null_tokens_keep_column_numeric() -> Result<()> {
        let file = csv_file("age,city\n20,NY\nNA,N/A\n30,null\nN/A,LA\n");
        let table = load_table(file.path(), None)?;

        let age = &table.columns()[0];
        assert!(matches!(age.values, ColumnValues::Numeric(_)), "got {:?}", age.values);
        assert_eq!(age.values.null_count(), 2);
        assert_eq!(age.values.present_numbers(), vec![20.0, 30.0]);

        let city = &table.columns()[1];
        assert_eq!(city.values.null_count(), 2);
        assert_eq!(city.values.present_text().collect::<Vec<_>>(), vec!["NY", "LA"]);
        Ok(())
    }

    #[test]
    fn test_infinite_cells_are_missing() -> Result<()> {
        let file = csv_file("x\n1\ninf\n3\n-inf\n");
        let table = load_table(file.path(), None)?;

        let x = &table.columns()[0];
        assert_eq!(x.values.null_count(), 2);
        assert_eq!(x.values.present_numbers(), vec![1.0, 3.0]);
        Ok(())
    }

    #[test]
    fn test_boolean_column() -> Result<()> {
        let file = csv_file("flag,n\ntrue,1\nfalse,2\n,3\ntrue,4\n");
        let table = load_table(file.path(), None)?;

        let flag = &table.columns()[0];
        assert_eq!(flag.dtype, "bool");
        assert_eq!(
            flag.values,
            ColumnValues::Boolean(vec![Some(true), Some(false), None, Some(true)])
        );
        Ok(())
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let result = load_table(Path::new("definitely/not/here.csv"), None);
        assert!(matches!(result, Err(ProfilerError::File(_))));
    }

    #[test]
    fn test_directory_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_table(dir.path(), None);
        assert!(matches!(result, Err(ProfilerError::File(_))));
    }
}
