//! Fee structure items, fee dues and the enumerations they share
//!
//! A fee structure item describes what a grade is charged for one fee type
//! (for example grade 5 tuition, monthly, due on the 10th). A fee due is a
//! concrete obligation raised against one student for one period.

use super::patch::{double_option, merge};
use super::student::StudentId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fee structure item identifier
pub type FeeStructureId = u32;

/// Fee due identifier
pub type FeeDueId = u32;

/// Kind of fee charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeType {
    Tuition,
    Admission,
    Library,
    Laboratory,
    Sports,
    Examination,
    Transportation,
    Miscellaneous,
}

impl FeeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeType::Tuition => "Tuition",
            FeeType::Admission => "Admission",
            FeeType::Library => "Library",
            FeeType::Laboratory => "Laboratory",
            FeeType::Sports => "Sports",
            FeeType::Examination => "Examination",
            FeeType::Transportation => "Transportation",
            FeeType::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a fee structure item is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeFrequency {
    Monthly,
    Term,
    Annual,
    #[serde(rename = "One-Time")]
    OneTime,
}

/// Settlement state of a fee due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Due,
    Overdue,
    Partial,
}

impl PaymentStatus {
    /// Due or overdue: the student appears on the defaulter list
    pub fn is_defaulting(&self) -> bool {
        matches!(self, PaymentStatus::Due | PaymentStatus::Overdue)
    }

    /// Anything not fully paid counts towards pending payments
    pub fn is_pending(&self) -> bool {
        !matches!(self, PaymentStatus::Paid)
    }
}

/// One line of a grade's fee schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeStructureItem {
    pub id: FeeStructureId,
    pub grade: String,
    pub fee_type: FeeType,
    pub amount: Decimal,
    pub frequency: FeeFrequency,
    /// Day of the month the fee falls due
    pub due_day: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeeStructureItem {
    pub grade: String,
    pub fee_type: FeeType,
    pub amount: Decimal,
    pub frequency: FeeFrequency,
    #[serde(default)]
    pub due_day: Option<u8>,
}

impl NewFeeStructureItem {
    pub(crate) fn into_item(self, id: FeeStructureId) -> FeeStructureItem {
        FeeStructureItem {
            id,
            grade: self.grade,
            fee_type: self.fee_type,
            amount: self.amount,
            frequency: self.frequency,
            due_day: self.due_day,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeeStructurePatch {
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub fee_type: Option<FeeType>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub frequency: Option<FeeFrequency>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_day: Option<Option<u8>>,
}

impl FeeStructurePatch {
    pub fn apply(self, item: &mut FeeStructureItem) {
        merge(&mut item.grade, self.grade);
        merge(&mut item.fee_type, self.fee_type);
        merge(&mut item.amount, self.amount);
        merge(&mut item.frequency, self.frequency);
        merge(&mut item.due_day, self.due_day);
    }
}

/// An outstanding payment obligation for a student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeDue {
    pub id: FeeDueId,
    pub student_id: StudentId,
    pub fee_type: FeeType,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    pub period: Option<String>,
    pub amount_paid: Decimal,
}

impl FeeDue {
    /// Amount still owed, never negative
    pub fn outstanding(&self) -> Decimal {
        (self.amount - self.amount_paid).max(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFeeDue {
    pub student_id: StudentId,
    pub fee_type: FeeType,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: PaymentStatus,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub amount_paid: Decimal,
}

impl NewFeeDue {
    pub(crate) fn into_due(self, id: FeeDueId) -> FeeDue {
        FeeDue {
            id,
            student_id: self.student_id,
            fee_type: self.fee_type,
            description: self.description,
            amount: self.amount,
            due_date: self.due_date,
            status: self.status,
            period: self.period,
            amount_paid: self.amount_paid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeeDuePatch {
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub fee_type: Option<FeeType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub period: Option<Option<String>>,
    #[serde(default)]
    pub amount_paid: Option<Decimal>,
}

impl FeeDuePatch {
    pub fn apply(self, due: &mut FeeDue) {
        merge(&mut due.student_id, self.student_id);
        merge(&mut due.fee_type, self.fee_type);
        merge(&mut due.description, self.description);
        merge(&mut due.amount, self.amount);
        merge(&mut due.due_date, self.due_date);
        merge(&mut due.status, self.status);
        merge(&mut due.period, self.period);
        merge(&mut due.amount_paid, self.amount_paid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::paid(PaymentStatus::Paid, false, false)]
    #[case::due(PaymentStatus::Due, true, true)]
    #[case::overdue(PaymentStatus::Overdue, true, true)]
    #[case::partial(PaymentStatus::Partial, false, true)]
    fn test_status_classification(
        #[case] status: PaymentStatus,
        #[case] defaulting: bool,
        #[case] pending: bool,
    ) {
        assert_eq!(status.is_defaulting(), defaulting);
        assert_eq!(status.is_pending(), pending);
    }

    #[rstest]
    #[case::unpaid(Decimal::new(3000, 0), Decimal::ZERO, Decimal::new(3000, 0))]
    #[case::partly_paid(Decimal::new(3000, 0), Decimal::new(1200, 0), Decimal::new(1800, 0))]
    #[case::overpaid(Decimal::new(500, 0), Decimal::new(700, 0), Decimal::ZERO)]
    fn test_outstanding(#[case] amount: Decimal, #[case] paid: Decimal, #[case] expected: Decimal) {
        let due = NewFeeDue {
            student_id: 1,
            fee_type: FeeType::Tuition,
            description: "Tuition Fee (May 2023)".to_string(),
            amount,
            due_date: NaiveDate::from_ymd_opt(2023, 5, 10).unwrap(),
            status: PaymentStatus::Partial,
            period: None,
            amount_paid: paid,
        }
        .into_due(1);

        assert_eq!(due.outstanding(), expected);
    }

    #[test]
    fn test_labels_round_trip_through_serde() {
        assert_eq!(
            serde_json::to_string(&FeeFrequency::OneTime).unwrap(),
            r#""One-Time""#
        );
        let fee_type: FeeType = serde_json::from_str(r#""Laboratory""#).unwrap();
        assert_eq!(fee_type.to_string(), "Laboratory");
    }
}
