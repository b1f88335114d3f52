use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::{ReaderBuilder, StringRecord};
use crate::error::{AppError, Result};

const USER_STORY_COLUMN: usize = 0;
const ACCEPTANCE_CRITERION_COLUMN: usize = 1;

/// One data line of the input CSV, with its two text columns named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub user_story: String,
    pub acceptance_criterion: String,
}

/// Reads every data row of the CSV file at `path`, in file order.
/// The first line is treated as a header.
pub fn load_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| AppError::InputError(format!("Cannot open '{}': {}", path.display(), e)))?;

    read_rows(file)
}

pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        rows.push(Row {
            user_story: field(&record, index, USER_STORY_COLUMN)?,
            acceptance_criterion: field(&record, index, ACCEPTANCE_CRITERION_COLUMN)?,
        });
    }

    Ok(rows)
}

fn field(record: &StringRecord, row: usize, column: usize) -> Result<String> {
    record
        .get(column)
        .map(str::to_string)
        .ok_or(AppError::RowError { row, column })
}
