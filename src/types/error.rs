//! Error types for the school fees engine
//!
//! Store lookups never fail: absence is reported as `None` or `false`. The
//! errors here cover the edges of the system instead.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: roster or config file missing, unreadable, etc.
//! - **CSV Errors**: malformed roster rows, output write failures
//! - **Configuration Errors**: unparsable or out-of-range settings
//! - **Search Form Errors**: no criteria given, class id not a number

use thiserror::Error;

/// Main error type for the school fees engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchoolError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV structure could not be read or written
    #[error("CSV error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    CsvError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        message: String,
    },

    /// A roster row parsed as CSV but holds unusable values
    ///
    /// Recoverable: the row is skipped and the import continues.
    #[error("Invalid roster record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The search form was submitted with every field empty
    #[error("Enter a class, section or admission number to search")]
    NoSearchCriteria,

    /// The class field holds something other than a positive integer
    #[error("Invalid class id '{value}'")]
    InvalidClassId { value: String },
}

impl From<std::io::Error> for SchoolError {
    fn from(error: std::io::Error) -> Self {
        SchoolError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for SchoolError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SchoolError::CsvError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<figment::Error> for SchoolError {
    fn from(error: figment::Error) -> Self {
        SchoolError::Config {
            message: error.to_string(),
        }
    }
}

impl SchoolError {
    pub fn file_not_found(path: &str) -> Self {
        SchoolError::FileNotFound {
            path: path.to_string(),
        }
    }

    pub fn invalid_record(line: u64, message: &str) -> Self {
        SchoolError::InvalidRecord {
            line,
            message: message.to_string(),
        }
    }

    pub fn config(message: &str) -> Self {
        SchoolError::Config {
            message: message.to_string(),
        }
    }

    pub fn invalid_class_id(value: &str) -> Self {
        SchoolError::InvalidClassId {
            value: value.to_string(),
        }
    }
}
