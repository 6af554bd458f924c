//! Student roster reader with iterator interface
//!
//! Provides a streaming iterator over `NewStudent` rows from a roster CSV
//! file, and `import_roster` which feeds those rows into a store.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! RosterReader implements the Iterator trait, yielding
//! `Result<NewStudent, SchoolError>` for each CSV row:
//!
//! ```no_run
//! use school_fees_engine::io::RosterReader;
//! use std::path::Path;
//!
//! let reader = RosterReader::new(Path::new("roster.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(student) => println!("Read {}", student.admission_number),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants carrying the line
//!   number, and iteration continues with the next row

use crate::core::SchoolStorage;
use crate::io::csv_format::{convert_roster_record, RosterRecord};
use crate::types::{NewStudent, SchoolError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Streaming roster reader
#[derive(Debug)]
pub struct RosterReader {
    reader: csv::Reader<File>,
    line_num: u64,
}

impl RosterReader {
    /// Open a roster file for streaming iteration
    ///
    /// The CSV reader trims whitespace from all fields and tolerates rows
    /// that omit trailing optional columns.
    ///
    /// # Errors
    ///
    /// * [`SchoolError::FileNotFound`] if the path does not exist
    /// * [`SchoolError::IoError`] if the file could not be opened
    pub fn new(path: &Path) -> Result<Self, SchoolError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SchoolError::file_not_found(&path.display().to_string()),
            _ => SchoolError::from(e),
        })?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 1,
        })
    }
}

impl Iterator for RosterReader {
    type Item = Result<NewStudent, SchoolError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<RosterRecord>();
        let row = deserializer.next()?;
        // Header occupies line 1
        self.line_num += 1;

        Some(match row {
            Ok(record) => convert_roster_record(record)
                .map_err(|message| SchoolError::invalid_record(self.line_num, &message)),
            Err(e) => Err(SchoolError::CsvError {
                line: Some(self.line_num),
                message: e.to_string(),
            }),
        })
    }
}

/// Outcome of a roster import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Import every usable roster row into `storage`
///
/// Rows that fail to parse, and rows whose admission number is already
/// present in the store (including earlier rows of the same file), are
/// skipped with a warning.
///
/// # Errors
///
/// Only failures to open the file are returned; row problems are counted.
pub fn import_roster<S: SchoolStorage + ?Sized>(
    storage: &mut S,
    path: &Path,
) -> Result<ImportSummary, SchoolError> {
    let reader = RosterReader::new(path)?;
    let mut summary = ImportSummary::default();

    for row in reader {
        match row {
            Ok(student) => {
                if storage
                    .get_student_by_admission_number(&student.admission_number)
                    .is_some()
                {
                    warn!(
                        admission_number = %student.admission_number,
                        "skipping roster row with existing admission number"
                    );
                    summary.skipped += 1;
                    continue;
                }
                storage.create_student(student);
                summary.imported += 1;
            }
            Err(e) => {
                warn!(error = %e, "skipping roster row");
                summary.skipped += 1;
            }
        }
    }

    info!(
        path = %path.display(),
        imported = summary.imported,
        skipped = summary.skipped,
        "imported student roster"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemStorage;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "admission_number,student_name,grade,section,roll_number,parent_name,\
        contact_number,email,fee_category,transportation_route_id,pickup_point,admission_date\n";

    /// Helper function to create a temporary roster file for testing
    fn create_temp_csv(rows: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(HEADER.as_bytes())
            .expect("Failed to write header");
        file.write_all(rows.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_roster_reader_fails_on_missing_file() {
        let result = RosterReader::new(Path::new("nonexistent_roster.csv"));

        assert!(matches!(
            result.unwrap_err(),
            SchoolError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_roster_reader_iterates_rows() {
        let file = create_temp_csv(
            "ADM2024101,Kavya Reddy,4,C,17,Mr. Srinivas Reddy,9876500001,,Regular,2,Bus Stand,2024-06-03\n\
             ADM2024102,Arjun Rao,Nursery,A,,Mrs. Lakshmi Rao,9876500002,lakshmi@example.com,,,,2024-06-04\n",
        );

        let students: Vec<_> = RosterReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(students.len(), 2);
        assert_eq!(students[0].student_name, "Kavya Reddy");
        assert_eq!(students[0].email, None);
        assert_eq!(students[0].transportation_route_id, Some(2));
        assert_eq!(students[1].grade, "Nursery");
        assert_eq!(students[1].roll_number, None);
        assert_eq!(students[1].fee_category, "Regular");
    }

    #[test]
    fn test_roster_reader_handles_whitespace() {
        let file = create_temp_csv(
            "  ADM1  , Meera Iyer ,  6 , B , 3 , Mr. Iyer , 9876500003 ,,,,, 2023-06-01 \n",
        );

        let students: Vec<_> = RosterReader::new(file.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].admission_number, "ADM1");
        assert_eq!(students[0].grade, "6");
        assert_eq!(students[0].roll_number, Some(3));
    }

    #[test]
    fn test_roster_reader_reports_line_numbers_and_continues() {
        let file = create_temp_csv(
            "ADM1,A,1,A,,P,1,,,,,2023-06-01\n\
             ADM2,B,13,A,,P,2,,,,,2023-06-01\n\
             ADM3,C,2,A,,P,3,,,,,2023-06-01\n",
        );

        let rows: Vec<_> = RosterReader::new(file.path()).unwrap().collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_ok());
        assert!(rows[2].is_ok());
        match &rows[1] {
            Err(SchoolError::InvalidRecord { line, message }) => {
                assert_eq!(*line, 3);
                assert!(message.contains("Unknown grade"));
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_roster_reader_handles_empty_file_after_header() {
        let file = create_temp_csv("");

        let rows: Vec<_> = RosterReader::new(file.path()).unwrap().collect();

        assert!(rows.is_empty());
    }

    #[test]
    fn test_import_roster_skips_duplicates_and_invalid_rows() {
        let mut storage = MemStorage::with_demo_data();
        let file = create_temp_csv(
            "ADM2024101,Kavya Reddy,4,C,17,Mr. Srinivas Reddy,9876500001,,,,,2024-06-03\n\
             ADM2023042,Duplicate Aditya,5,A,,Someone,9876500009,,,,,2024-06-03\n\
             ADM2024102,Bad Date,4,C,,Someone,9876500010,,,,,June 3\n\
             ADM2024101,Same File Twice,4,C,,Someone,9876500011,,,,,2024-06-03\n",
        );

        let summary = import_roster(&mut storage, file.path()).unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                imported: 1,
                skipped: 3
            }
        );
        assert_eq!(storage.total_students(), 7);
        assert_eq!(
            storage
                .get_student_by_admission_number("ADM2023042")
                .map(|s| s.student_name),
            Some("Aditya Sharma".to_string())
        );
        assert_eq!(
            storage
                .get_student_by_admission_number("ADM2024101")
                .map(|s| s.student_name),
            Some("Kavya Reddy".to_string())
        );
    }

    #[test]
    fn test_import_roster_missing_file() {
        let mut storage = MemStorage::new();

        let result = import_roster(&mut storage, Path::new("missing.csv"));

        assert!(result.is_err());
        assert_eq!(storage.total_students(), 0);
    }
}
