use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::epicor::users::error::{Result, SyncError};
use crate::epicor::users::model::Employee;

const FIELDS_PER_RECORD: usize = 2;

/// Lazy, single-pass iterator over the employees listed in a CSV file.
///
/// The first line is treated as a header and never yielded; its content is
/// not checked. The underlying file handle is owned by the iterator and is
/// closed as soon as the iterator is dropped.
pub struct EmployeeRecords {
    path: PathBuf,
    records: StringRecordsIntoIter<File>,
}

impl EmployeeRecords {
    /// Opens `path` for reading. Fails if the file is missing or unreadable.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => SyncError::MissingInput(path.to_path_buf()),
            _ => SyncError::Io(error),
        })?;

        let records = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file)
            .into_records();

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    fn to_employee(&self, record: &StringRecord) -> Result<Employee> {
        if record.len() != FIELDS_PER_RECORD {
            return Err(SyncError::MalformedRecord {
                path: self.path.clone(),
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                fields: record.len(),
            });
        }
        Ok(Employee::new(&record[0], &record[1]))
    }
}

impl Iterator for EmployeeRecords {
    type Item = Result<Employee>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map_err(SyncError::from)
                .and_then(|record| self.to_employee(&record)),
        )
    }
}
