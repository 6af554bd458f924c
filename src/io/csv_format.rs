//! CSV format handling for the student roster and report output
//!
//! This module centralizes all CSV format concerns, providing:
//! - RosterRecord structure for deserialization
//! - Conversion from roster records to `NewStudent`
//! - Listing and report serialization
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::reports::{DashboardStats, Defaulter, RecentReceipt};
use crate::types::{
    FeeType, NewStudent, PaymentMethod, PaymentStatus, ReceiptStatus, RouteId, SchoolError, GRADES,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Fee category given to roster rows that leave it blank
pub const DEFAULT_FEE_CATEGORY: &str = "Regular";

/// Date format used in roster files
pub const ROSTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV record structure for roster deserialization
///
/// Every column is read as text so that conversion can report which value
/// was unusable.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct RosterRecord {
    pub admission_number: String,
    pub student_name: String,
    pub grade: String,
    pub section: String,
    #[serde(default)]
    pub roll_number: Option<String>,
    pub parent_name: String,
    pub contact_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub fee_category: Option<String>,
    #[serde(default)]
    pub transportation_route_id: Option<String>,
    #[serde(default)]
    pub pickup_point: Option<String>,
    pub admission_date: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: &str, column: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("missing {}", column))
    } else {
        Ok(value.to_string())
    }
}

/// Convert a RosterRecord to a NewStudent
///
/// This function:
/// - Requires admission number, name, grade, section, parent and contact
/// - Checks the grade against the grade catalog
/// - Parses roll number and route id when present
/// - Parses the admission date as `YYYY-MM-DD`
///
/// # Returns
///
/// * `Ok(NewStudent)` - Successfully converted record
/// * `Err(String)` - Message describing the first unusable value
pub fn convert_roster_record(record: RosterRecord) -> Result<NewStudent, String> {
    let admission_number = required(&record.admission_number, "admission_number")?;
    let student_name = required(&record.student_name, "student_name")?;
    let section = required(&record.section, "section")?;
    let parent_name = required(&record.parent_name, "parent_name")?;
    let contact_number = required(&record.contact_number, "contact_number")?;

    let grade = required(&record.grade, "grade")?;
    if !GRADES.contains(&grade.as_str()) {
        return Err(format!(
            "Unknown grade '{}' for {}",
            grade, admission_number
        ));
    }

    let roll_number = match non_blank(record.roll_number) {
        Some(raw) => Some(
            raw.parse::<u32>()
                .map_err(|_| format!("Invalid roll number '{}' for {}", raw, admission_number))?,
        ),
        None => None,
    };

    let transportation_route_id = match non_blank(record.transportation_route_id) {
        Some(raw) => Some(raw.parse::<RouteId>().map_err(|_| {
            format!("Invalid route id '{}' for {}", raw, admission_number)
        })?),
        None => None,
    };

    let admission_date = NaiveDate::parse_from_str(record.admission_date.trim(), ROSTER_DATE_FORMAT)
        .map_err(|_| {
            format!(
                "Invalid admission date '{}' for {}",
                record.admission_date, admission_number
            )
        })?;

    Ok(NewStudent {
        admission_number,
        student_name,
        grade,
        section,
        roll_number,
        parent_name,
        contact_number,
        email: non_blank(record.email),
        fee_category: non_blank(record.fee_category)
            .unwrap_or_else(|| DEFAULT_FEE_CATEGORY.to_string()),
        transportation_route_id,
        pickup_point: non_blank(record.pickup_point),
        admission_date,
    })
}

/// Write serializable rows as CSV with a header taken from the field names
///
/// Rows must be flat records. An empty listing produces no output.
pub fn write_csv<T, I>(rows: I, output: &mut dyn Write) -> Result<(), SchoolError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::Writer::from_writer(output);

    for row in rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Flat CSV shape of a recent receipt
#[derive(Debug, Serialize)]
struct RecentReceiptRow<'a> {
    receipt_number: &'a str,
    receipt_date: NaiveDate,
    student_name: &'a str,
    grade: &'a str,
    section: &'a str,
    total_amount: Decimal,
    payment_method: PaymentMethod,
    status: ReceiptStatus,
}

/// Write recent receipts joined with their students
pub fn write_recent_receipts_csv(
    receipts: &[RecentReceipt],
    output: &mut dyn Write,
) -> Result<(), SchoolError> {
    write_csv(
        receipts.iter().map(|recent| RecentReceiptRow {
            receipt_number: &recent.receipt.receipt_number,
            receipt_date: recent.receipt.receipt_date,
            student_name: &recent.student_name,
            grade: &recent.grade,
            section: &recent.section,
            total_amount: recent.receipt.total_amount,
            payment_method: recent.receipt.payment_method,
            status: recent.receipt.status,
        }),
        output,
    )
}

/// Flat CSV shape of a defaulter
#[derive(Debug, Serialize)]
struct DefaulterRow<'a> {
    admission_number: &'a str,
    student_name: &'a str,
    grade: &'a str,
    fee_type: FeeType,
    description: &'a str,
    amount: Decimal,
    amount_paid: Decimal,
    outstanding: Decimal,
    due_date: NaiveDate,
    status: PaymentStatus,
    period: Option<&'a str>,
}

/// Write defaulting fee dues joined with their students
pub fn write_defaulters_csv(
    defaulters: &[Defaulter],
    output: &mut dyn Write,
) -> Result<(), SchoolError> {
    write_csv(
        defaulters.iter().map(|defaulter| DefaulterRow {
            admission_number: &defaulter.admission_number,
            student_name: &defaulter.student_name,
            grade: &defaulter.grade,
            fee_type: defaulter.fee_due.fee_type,
            description: &defaulter.fee_due.description,
            amount: defaulter.fee_due.amount,
            amount_paid: defaulter.fee_due.amount_paid,
            outstanding: defaulter.fee_due.outstanding(),
            due_date: defaulter.fee_due.due_date,
            status: defaulter.fee_due.status,
            period: defaulter.fee_due.period.as_deref(),
        }),
        output,
    )
}

/// Write the dashboard figures as a single-row CSV
pub fn write_dashboard_csv(stats: &DashboardStats, output: &mut dyn Write) -> Result<(), SchoolError> {
    write_csv([stats], output)
}
