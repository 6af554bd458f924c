//! Student search form
//!
//! Collects the three optional filters offered on the receipt screen (class,
//! section, admission number), decides whether a search may be submitted and
//! hands the parsed criteria to a search handler.
//!
//! Field values arrive as raw text. A value counts as present once trimmed,
//! unless it is blank or the `"none"` placeholder a select box reports when
//! nothing is chosen.

use crate::types::{grade_for_class, SchoolError, Student};
use serde::{Deserialize, Serialize};

/// Value a select box reports when no option is chosen
pub const NO_SELECTION: &str = "none";

/// Raw form input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub class_id: String,
    pub section: String,
    pub admission_number: String,
}

/// Parsed, validated search filters
///
/// Every present criterion must match for a student to be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub class_id: Option<u32>,
    pub section: Option<String>,
    pub admission_number: Option<String>,
}

fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(NO_SELECTION) {
        None
    } else {
        Some(value)
    }
}

impl SearchForm {
    pub fn new(class_id: &str, section: &str, admission_number: &str) -> Self {
        SearchForm {
            class_id: class_id.to_string(),
            section: section.to_string(),
            admission_number: admission_number.to_string(),
        }
    }

    /// Whether the search button should be enabled
    pub fn is_search_enabled(&self) -> bool {
        present(&self.class_id).is_some()
            || present(&self.section).is_some()
            || present(&self.admission_number).is_some()
    }

    /// Parse the form into search criteria
    ///
    /// # Errors
    ///
    /// - [`SchoolError::NoSearchCriteria`] if every field is empty
    /// - [`SchoolError::InvalidClassId`] if the class is not a positive integer
    pub fn validate(&self) -> Result<SearchCriteria, SchoolError> {
        if !self.is_search_enabled() {
            return Err(SchoolError::NoSearchCriteria);
        }

        let class_id = match present(&self.class_id) {
            Some(raw) => match raw.parse::<u32>() {
                Ok(id) if id > 0 => Some(id),
                _ => return Err(SchoolError::invalid_class_id(raw)),
            },
            None => None,
        };

        Ok(SearchCriteria {
            class_id,
            section: present(&self.section).map(str::to_string),
            admission_number: present(&self.admission_number).map(str::to_string),
        })
    }

    /// Validate the form and pass the criteria to `on_search`
    ///
    /// The callback runs at most once and only when validation succeeds; its
    /// return value is handed back to the caller.
    pub fn submit<F, R>(&self, on_search: F) -> Result<R, SchoolError>
    where
        F: FnOnce(SearchCriteria) -> R,
    {
        let criteria = self.validate()?;
        Ok(on_search(criteria))
    }
}

impl SearchCriteria {
    /// Whether `student` satisfies every present criterion
    ///
    /// A class id outside the class catalog matches nobody. Sections compare
    /// exactly; admission numbers ignore ASCII case.
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(class_id) = self.class_id {
            match grade_for_class(class_id) {
                Some(grade) if grade == student.grade => {}
                _ => return false,
            }
        }

        if let Some(section) = &self.section {
            if *section != student.section {
                return false;
            }
        }

        if let Some(admission_number) = &self.admission_number {
            if !admission_number.eq_ignore_ascii_case(&student.admission_number) {
                return false;
            }
        }

        true
    }
}
