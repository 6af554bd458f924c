//! Student records and the fixed class catalog

use super::patch::{double_option, merge};
use super::transport::RouteId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Student identifier
pub type StudentId = u32;

/// Grades taught by the school, lowest first
///
/// A grade's class id is its 1-based position in this list.
pub const GRADES: [&str; 14] = [
    "Nursery", "KG", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Sections each grade is split into
pub const SECTIONS: [&str; 3] = ["A", "B", "C"];

/// A class as offered to the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchoolClass {
    pub id: u32,
    pub name: &'static str,
}

/// All classes, ordered by id
pub fn class_catalog() -> Vec<SchoolClass> {
    GRADES
        .iter()
        .zip(1u32..)
        .map(|(name, id)| SchoolClass { id, name })
        .collect()
}

/// Resolve a class id to its grade name
///
/// Returns `None` for `0` or any id past the end of the catalog.
pub fn grade_for_class(class_id: u32) -> Option<&'static str> {
    let index = usize::try_from(class_id.checked_sub(1)?).ok()?;
    GRADES.get(index).copied()
}

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub admission_number: String,
    pub student_name: String,
    pub grade: String,
    pub section: String,
    pub roll_number: Option<u32>,
    pub parent_name: String,
    pub contact_number: String,
    pub email: Option<String>,
    pub fee_category: String,
    pub transportation_route_id: Option<RouteId>,
    pub pickup_point: Option<String>,
    pub admission_date: NaiveDate,
}

/// Fields supplied when enrolling a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub admission_number: String,
    pub student_name: String,
    pub grade: String,
    pub section: String,
    #[serde(default)]
    pub roll_number: Option<u32>,
    pub parent_name: String,
    pub contact_number: String,
    #[serde(default)]
    pub email: Option<String>,
    pub fee_category: String,
    #[serde(default)]
    pub transportation_route_id: Option<RouteId>,
    #[serde(default)]
    pub pickup_point: Option<String>,
    pub admission_date: NaiveDate,
}

impl NewStudent {
    pub(crate) fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            admission_number: self.admission_number,
            student_name: self.student_name,
            grade: self.grade,
            section: self.section,
            roll_number: self.roll_number,
            parent_name: self.parent_name,
            contact_number: self.contact_number,
            email: self.email,
            fee_category: self.fee_category,
            transportation_route_id: self.transportation_route_id,
            pickup_point: self.pickup_point,
            admission_date: self.admission_date,
        }
    }
}

/// Partial update for a student
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub admission_number: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub roll_number: Option<Option<u32>>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,
    #[serde(default)]
    pub fee_category: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub transportation_route_id: Option<Option<RouteId>>,
    #[serde(default, deserialize_with = "double_option")]
    pub pickup_point: Option<Option<String>>,
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
}

impl StudentPatch {
    /// Merge the provided fields into `student`
    pub fn apply(self, student: &mut Student) {
        merge(&mut student.admission_number, self.admission_number);
        merge(&mut student.student_name, self.student_name);
        merge(&mut student.grade, self.grade);
        merge(&mut student.section, self.section);
        merge(&mut student.roll_number, self.roll_number);
        merge(&mut student.parent_name, self.parent_name);
        merge(&mut student.contact_number, self.contact_number);
        merge(&mut student.email, self.email);
        merge(&mut student.fee_category, self.fee_category);
        merge(
            &mut student.transportation_route_id,
            self.transportation_route_id,
        );
        merge(&mut student.pickup_point, self.pickup_point);
        merge(&mut student.admission_date, self.admission_date);
    }
}
