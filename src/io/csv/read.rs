//! CSV reading operations.
//!
//! Every column is read as text so numeric coercion stays under the dataset's control.

use std::{fs::File, io::Cursor, path::Path};

use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader}};

use crate::LoadError;

fn text_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Reads a CSV file from `path` into a DataFrame of string columns.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    let file = File::open(path)
        .map_err(|source| LoadError::Unreadable { path: path.to_path_buf(), source })?;
    Ok(CsvReader::new(file).with_options(text_options()).finish()?)
}

/// Reads a CSV from a string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame, LoadError> {
    read_csv_bytes(csv.as_bytes())
}

/// Reads a CSV from raw bytes.
pub(crate) fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame, LoadError> {
    Ok(CsvReader::new(Cursor::new(bytes)).with_options(text_options()).finish()?)
}
