//! Reporting views over the store
//!
//! Joins receipts and fee dues with their students and aggregates the
//! dashboard figures. All functions here are pure: the storage layer hands
//! them records and a student lookup, so they can be tested without a store.
//!
//! A receipt or due whose student no longer exists is still reported, with
//! `"Unknown"` in place of the student's details.

use crate::types::{FeeDue, Receipt, Student, StudentId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Placeholder shown when a referenced student is missing
pub const UNKNOWN: &str = "Unknown";

/// A receipt joined with the student it was issued to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentReceipt {
    #[serde(flatten)]
    pub receipt: Receipt,
    pub student_name: String,
    pub grade: String,
    pub section: String,
}

/// A due or overdue fee joined with the student who owes it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Defaulter {
    #[serde(flatten)]
    pub fee_due: FeeDue,
    pub student_name: String,
    pub grade: String,
    pub admission_number: String,
}

/// Headline figures for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Sum of receipts dated on the reporting day
    pub today_collection: Decimal,
    pub receipts_generated: usize,
    /// Fee dues that are due, overdue or partially paid
    pub pending_payments: usize,
    pub total_students: usize,
}

/// Newest receipts first, at most `limit` of them
///
/// Receipts are ordered by `created_at` descending; receipts created in the
/// same instant fall back to the higher id first.
pub fn recent_receipts<'a, F>(
    mut receipts: Vec<Receipt>,
    limit: usize,
    student_lookup: F,
) -> Vec<RecentReceipt>
where
    F: Fn(StudentId) -> Option<&'a Student>,
{
    receipts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    receipts.truncate(limit);

    receipts
        .into_iter()
        .map(|receipt| {
            let (student_name, grade, section) = match student_lookup(receipt.student_id) {
                Some(student) => (
                    student.student_name.clone(),
                    student.grade.clone(),
                    student.section.clone(),
                ),
                None => (UNKNOWN.to_string(), UNKNOWN.to_string(), UNKNOWN.to_string()),
            };
            RecentReceipt {
                receipt,
                student_name,
                grade,
                section,
            }
        })
        .collect()
}

/// Join defaulting fee dues with their students
///
/// Dues that are paid or only partially paid are dropped; input order is kept.
pub fn defaulters<'a, F>(fee_dues: Vec<FeeDue>, student_lookup: F) -> Vec<Defaulter>
where
    F: Fn(StudentId) -> Option<&'a Student>,
{
    fee_dues
        .into_iter()
        .filter(|due| due.status.is_defaulting())
        .map(|fee_due| {
            let (student_name, grade, admission_number) = match student_lookup(fee_due.student_id)
            {
                Some(student) => (
                    student.student_name.clone(),
                    student.grade.clone(),
                    student.admission_number.clone(),
                ),
                None => (UNKNOWN.to_string(), UNKNOWN.to_string(), UNKNOWN.to_string()),
            };
            Defaulter {
                fee_due,
                student_name,
                grade,
                admission_number,
            }
        })
        .collect()
}

/// Aggregate dashboard figures for `day`
pub fn dashboard_stats<'a>(
    receipts: impl Iterator<Item = &'a Receipt>,
    fee_dues: impl Iterator<Item = &'a FeeDue>,
    total_students: usize,
    day: NaiveDate,
) -> DashboardStats {
    let (today_collection, receipts_generated) =
        receipts.fold((Decimal::ZERO, 0usize), |(sum, count), receipt| {
            let sum = if receipt.receipt_date == day {
                sum + receipt.total_amount
            } else {
                sum
            };
            (sum, count + 1)
        });

    let pending_payments = fee_dues.filter(|due| due.status.is_pending()).count();

    DashboardStats {
        today_collection,
        receipts_generated,
        pending_payments,
        total_students,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FeeType, PaymentMethod, PaymentStatus, ReceiptStatus};
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stamp(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_683_000_000 + seconds, 0).unwrap()
    }

    fn student(id: StudentId) -> Student {
        Student {
            id,
            admission_number: format!("ADM{:04}", id),
            student_name: format!("Student {}", id),
            grade: "5".to_string(),
            section: "A".to_string(),
            roll_number: None,
            parent_name: "Parent".to_string(),
            contact_number: "9876543210".to_string(),
            email: None,
            fee_category: "Regular".to_string(),
            transportation_route_id: None,
            pickup_point: None,
            admission_date: date(2020, 4, 1),
        }
    }

    fn receipt(id: u32, student_id: StudentId, day: NaiveDate, amount: i64, created: i64) -> Receipt {
        Receipt {
            id,
            receipt_number: format!("REC{:03}", id),
            student_id,
            receipt_date: day,
            total_amount: Decimal::new(amount, 0),
            payment_method: PaymentMethod::Cash,
            payment_reference: None,
            remarks: None,
            status: ReceiptStatus::Completed,
            created_at: stamp(created),
        }
    }

    fn due(id: u32, student_id: StudentId, status: PaymentStatus) -> FeeDue {
        FeeDue {
            id,
            student_id,
            fee_type: FeeType::Tuition,
            description: "Tuition Fee".to_string(),
            amount: Decimal::new(3000, 0),
            due_date: date(2023, 5, 10),
            status,
            period: None,
            amount_paid: Decimal::ZERO,
        }
    }

    #[test]
    fn test_recent_receipts_newest_first_with_id_tie_break() {
        let students = [student(1)];
        let lookup = |id: StudentId| students.iter().find(|s| s.id == id);
        let day = date(2023, 5, 12);
        let receipts = vec![
            receipt(1, 1, day, 100, 0),
            receipt(2, 1, day, 200, 10),
            receipt(3, 1, day, 300, 10),
            receipt(4, 1, day, 400, 5),
        ];

        let ids: Vec<u32> = recent_receipts(receipts, 10, lookup)
            .iter()
            .map(|r| r.receipt.id)
            .collect();

        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::fewer_than_available(2, 2)]
    #[case::more_than_available(10, 3)]
    fn test_recent_receipts_limit(#[case] limit: usize, #[case] expected: usize) {
        let day = date(2023, 5, 12);
        let receipts = (1..=3).map(|id| receipt(id, 1, day, 100, 0)).collect();

        let recent = recent_receipts(receipts, limit, |_| None);

        assert_eq!(recent.len(), expected);
    }

    #[test]
    fn test_recent_receipts_unknown_student() {
        let recent = recent_receipts(vec![receipt(1, 99, date(2023, 5, 12), 100, 0)], 5, |_| None);

        assert_eq!(recent[0].student_name, UNKNOWN);
        assert_eq!(recent[0].grade, UNKNOWN);
        assert_eq!(recent[0].section, UNKNOWN);
    }

    #[test]
    fn test_defaulters_keep_only_due_and_overdue() {
        let students = [student(1)];
        let lookup = |id: StudentId| students.iter().find(|s| s.id == id);
        let dues = vec![
            due(1, 1, PaymentStatus::Overdue),
            due(2, 1, PaymentStatus::Paid),
            due(3, 1, PaymentStatus::Partial),
            due(4, 2, PaymentStatus::Due),
        ];

        let list = defaulters(dues, lookup);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].fee_due.id, 1);
        assert_eq!(list[0].student_name, "Student 1");
        assert_eq!(list[0].admission_number, "ADM0001");
        assert_eq!(list[1].fee_due.id, 4);
        assert_eq!(list[1].student_name, UNKNOWN);
    }

    #[test]
    fn test_dashboard_stats() {
        let today = date(2023, 5, 12);
        let receipts = [
            receipt(1, 1, today, 5900, 0),
            receipt(2, 2, today, 4200, 1),
            receipt(3, 3, date(2023, 5, 11), 3800, 2),
        ];
        let dues = [
            due(1, 1, PaymentStatus::Overdue),
            due(2, 1, PaymentStatus::Due),
            due(3, 1, PaymentStatus::Partial),
            due(4, 1, PaymentStatus::Paid),
        ];

        let stats = dashboard_stats(receipts.iter(), dues.iter(), 6, today);

        assert_eq!(stats.today_collection, Decimal::new(10100, 0));
        assert_eq!(stats.receipts_generated, 3);
        assert_eq!(stats.pending_payments, 3);
        assert_eq!(stats.total_students, 6);
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = dashboard_stats(std::iter::empty(), std::iter::empty(), 0, date(2024, 1, 1));

        assert_eq!(stats.today_collection, Decimal::ZERO);
        assert_eq!(stats.receipts_generated, 0);
        assert_eq!(stats.pending_payments, 0);
    }

    #[test]
    fn test_defaulter_serializes_flat() {
        let students = [student(1)];
        let list = defaulters(vec![due(1, 1, PaymentStatus::Due)], |id| {
            students.iter().find(|s| s.id == id)
        });

        let json = serde_json::to_value(&list[0]).unwrap();
        assert_eq!(json["status"], "Due");
        assert_eq!(json["student_name"], "Student 1");
        assert_eq!(json["amount"], "3000");
    }
}
