//! Demonstration data set
//!
//! Populates a store with four transport routes, an administrator account,
//! six students, the per-grade fee structure, open dues for one student and
//! a handful of receipts so that every report has something to show.
//!
//! Seeding only adds records. The demonstration school profile is a separate
//! settings patch so that configured settings are left alone.

use crate::core::traits::SchoolStorage;
use crate::types::{
    FeeFrequency, FeeType, NewFeeDue, NewFeeStructureItem, NewReceipt, NewReceiptItem, NewStudent,
    NewTransportationRoute, NewUser, PaymentMethod, PaymentStatus, ReceiptStatus, RouteId,
    SettingsPatch, GRADES,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

// Seed dates are fixed literals
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn rupees(amount: i64) -> Decimal {
    Decimal::new(amount, 0)
}

/// Populate `storage` with the demonstration data set
///
/// Intended for an empty store: routes are assumed to receive ids 1 to 4.
pub fn seed_demo_data<S: SchoolStorage + ?Sized>(storage: &mut S) {
    seed_routes(storage);

    storage.create_user(NewUser {
        username: "admin".to_string(),
        password: "admin123".to_string(),
        role: "Administrator".to_string(),
        full_name: "Admin Staff".to_string(),
        email: Some("admin@school.com".to_string()),
    });

    let students = demo_students();
    let student_count = students.len();
    let mut ids = Vec::with_capacity(student_count);
    for student in students {
        ids.push(storage.create_student(student).id);
    }

    seed_fee_structure(storage);

    if let Some(&first) = ids.first() {
        seed_fee_dues(storage, first);
    }
    if let Some(&second) = ids.get(1) {
        seed_itemised_receipt(storage, second);
    }

    for (admission_number, receipt_number, day, amount, method) in [
        ("ADM7B0038", "REC7B0038", date(2023, 5, 12), 5900, PaymentMethod::OnlineTransfer),
        ("ADM2023002", "REC3A0041", date(2023, 5, 12), 4200, PaymentMethod::Cash),
        ("ADMKG0040", "RECKG0040", date(2023, 5, 11), 3800, PaymentMethod::Upi),
        ("ADM10B0039", "REC10B0039", date(2023, 5, 10), 6700, PaymentMethod::Card),
    ] {
        seed_split_receipt(storage, admission_number, receipt_number, day, rupees(amount), method);
    }

    info!(
        students = student_count,
        fee_structure_items = storage.get_all_fee_structure().len(),
        "seeded demonstration data"
    );
}

/// Settings patch describing the demonstration school
pub fn demo_school_profile() -> SettingsPatch {
    SettingsPatch {
        school_name: Some("Krishnaveni Talent School Ramannapet".to_string()),
        address: Some("Near Old Bus stand, Ramannapet, 508113".to_string()),
        phone: Some("+91-7386685333".to_string()),
        email: Some("ktsramannapet@gmail.com".to_string()),
        website: Some("www.globalexcellence.edu".to_string()),
        principal_name: Some("Dr. Rajendra Kumar".to_string()),
        receipt_prefix: Some("GES".to_string()),
        ..Default::default()
    }
}

fn seed_routes<S: SchoolStorage + ?Sized>(storage: &mut S) {
    let routes = [
        (
            "North Zone",
            "Covers northern residential areas including Model Town and Civil Lines",
            Decimal::new(52, 1),
            1200,
        ),
        (
            "South Zone",
            "Covers southern residential areas including Lajpat Nagar and GK",
            Decimal::new(75, 1),
            1500,
        ),
        (
            "East Zone",
            "Covers eastern residential areas including Mayur Vihar and Noida",
            Decimal::new(108, 1),
            1800,
        ),
        (
            "West Zone",
            "Covers western residential areas including Dwarka and Janakpuri",
            Decimal::new(83, 1),
            1600,
        ),
    ];

    for (name, description, distance, fare) in routes {
        storage.create_transportation_route(NewTransportationRoute {
            route_name: name.to_string(),
            description: Some(description.to_string()),
            distance,
            fare: rupees(fare),
            is_active: true,
        });
    }
}

#[allow(clippy::too_many_arguments)]
fn student(
    admission_number: &str,
    student_name: &str,
    grade: &str,
    section: &str,
    roll_number: u32,
    parent_name: &str,
    contact_number: &str,
    email: &str,
    fee_category: &str,
    route: Option<(RouteId, &str)>,
    admission_date: NaiveDate,
) -> NewStudent {
    NewStudent {
        admission_number: admission_number.to_string(),
        student_name: student_name.to_string(),
        grade: grade.to_string(),
        section: section.to_string(),
        roll_number: Some(roll_number),
        parent_name: parent_name.to_string(),
        contact_number: contact_number.to_string(),
        email: Some(email.to_string()),
        fee_category: fee_category.to_string(),
        transportation_route_id: route.map(|(id, _)| id),
        pickup_point: route.map(|(_, point)| point.to_string()),
        admission_date,
    }
}

fn demo_students() -> Vec<NewStudent> {
    vec![
        student(
            "ADM2023042",
            "Aditya Sharma",
            "5",
            "A",
            12,
            "Mr. Suresh Sharma",
            "9876543210",
            "suresh@example.com",
            "Regular",
            None,
            date(2020, 4, 10),
        ),
        student(
            "ADM2023001",
            "Rahul Sharma",
            "5",
            "A",
            1,
            "Mr. Ramesh Sharma",
            "9876543211",
            "ramesh@example.com",
            "Regular",
            None,
            date(2020, 4, 5),
        ),
        student(
            "ADM2023002",
            "Priya Patel",
            "3",
            "B",
            8,
            "Mrs. Meena Patel",
            "9876543212",
            "meena@example.com",
            "Scholarship (25%)",
            Some((1, "Model Town Market")),
            date(2021, 4, 15),
        ),
        student(
            "ADMKG0040",
            "Aarav Kumar",
            "KG",
            "A",
            5,
            "Mr. Deepak Kumar",
            "9876543213",
            "deepak@example.com",
            "Regular",
            Some((2, "Lajpat Nagar Central Market")),
            date(2022, 4, 10),
        ),
        student(
            "ADM7B0038",
            "Neha Patel",
            "7",
            "B",
            14,
            "Mr. Rajesh Patel",
            "9876543214",
            "rajesh@example.com",
            "Regular",
            Some((3, "Mayur Vihar Metro Station")),
            date(2019, 4, 12),
        ),
        student(
            "ADM10B0039",
            "Sneha Verma",
            "10",
            "B",
            6,
            "Mrs. Anita Verma",
            "9876543215",
            "anita@example.com",
            "Regular",
            Some((4, "Dwarka Sector 10 Market")),
            date(2016, 4, 8),
        ),
    ]
}

/// Numeric grade level, `None` for Nursery and KG
fn grade_level(grade: &str) -> Option<i64> {
    grade.parse().ok()
}

fn seed_fee_structure<S: SchoolStorage + ?Sized>(storage: &mut S) {
    for grade in GRADES {
        let level = grade_level(grade);

        let tuition = match (grade, level) {
            ("KG", _) => 2200,
            (_, Some(level)) => level * 300 + 2000,
            _ => 2000,
        };
        let examination = level.map_or(500, |level| level * 100 + 400);

        let mut items = vec![
            (FeeType::Tuition, tuition, FeeFrequency::Monthly, 10),
            (FeeType::Library, 500, FeeFrequency::Annual, 15),
        ];
        // Laboratory fees start from grade 4
        if level.is_some_and(|level| level > 3) {
            items.push((FeeType::Laboratory, 700, FeeFrequency::Term, 15));
        }
        items.extend([
            (FeeType::Sports, 500, FeeFrequency::Annual, 15),
            (FeeType::Examination, examination, FeeFrequency::Term, 20),
            (FeeType::Transportation, 1200, FeeFrequency::Monthly, 10),
        ]);

        for (fee_type, amount, frequency, due_day) in items {
            storage.create_fee_structure(NewFeeStructureItem {
                grade: grade.to_string(),
                fee_type,
                amount: rupees(amount),
                frequency,
                due_day: Some(due_day),
            });
        }
    }
}

fn seed_fee_dues<S: SchoolStorage + ?Sized>(storage: &mut S, student_id: u32) {
    let dues = [
        (FeeType::Tuition, "Tuition Fee (May 2023)", 3000, date(2023, 5, 10), PaymentStatus::Overdue, "May 2023"),
        (FeeType::Library, "Library Fee (Annual)", 500, date(2023, 4, 15), PaymentStatus::Overdue, "2023-2024"),
        (FeeType::Laboratory, "Laboratory Fee (Term 1)", 700, date(2023, 4, 15), PaymentStatus::Overdue, "Term 1 2023"),
        (FeeType::Sports, "Sports Fee (Annual)", 500, date(2023, 4, 15), PaymentStatus::Overdue, "2023-2024"),
        (FeeType::Transportation, "Transportation Fee (May 2023)", 1200, date(2023, 5, 10), PaymentStatus::Due, "May 2023"),
    ];

    for (fee_type, description, amount, due_date, status, period) in dues {
        storage.create_fee_due(NewFeeDue {
            student_id,
            fee_type,
            description: description.to_string(),
            amount: rupees(amount),
            due_date,
            status,
            period: Some(period.to_string()),
            amount_paid: Decimal::ZERO,
        });
    }
}

fn seed_itemised_receipt<S: SchoolStorage + ?Sized>(storage: &mut S, student_id: u32) {
    let receipt = storage.create_receipt(NewReceipt {
        receipt_number: "REC5A001".to_string(),
        student_id,
        receipt_date: date(2023, 4, 5),
        total_amount: rupees(5900),
        payment_method: PaymentMethod::OnlineTransfer,
        payment_reference: Some("UTR123456".to_string()),
        remarks: None,
        status: ReceiptStatus::Completed,
    });

    let items = [
        (FeeType::Tuition, "Tuition Fee (April 2023)", 3000, "April 2023"),
        (FeeType::Library, "Library Fee (Annual)", 500, "2023-2024"),
        (FeeType::Laboratory, "Laboratory Fee (Term 1)", 700, "Term 1 2023"),
        (FeeType::Sports, "Sports Fee (Annual)", 500, "2023-2024"),
        (FeeType::Transportation, "Transportation Fee (April 2023)", 1200, "April 2023"),
    ];

    for (fee_type, description, amount, period) in items {
        storage.create_receipt_item(NewReceiptItem {
            receipt_id: receipt.id,
            fee_type,
            description: description.to_string(),
            amount: rupees(amount),
            period: Some(period.to_string()),
        });
    }
}

/// Receipt split 60/40 between tuition and transportation
fn seed_split_receipt<S: SchoolStorage + ?Sized>(
    storage: &mut S,
    admission_number: &str,
    receipt_number: &str,
    day: NaiveDate,
    amount: Decimal,
    method: PaymentMethod,
) {
    let Some(student) = storage.get_student_by_admission_number(admission_number) else {
        return;
    };

    let payment_reference = match method {
        PaymentMethod::Cash => None,
        _ => Some(format!("REF{}", receipt_number.trim_start_matches("REC"))),
    };

    let receipt = storage.create_receipt(NewReceipt {
        receipt_number: receipt_number.to_string(),
        student_id: student.id,
        receipt_date: day,
        total_amount: amount,
        payment_method: method,
        payment_reference,
        remarks: None,
        status: ReceiptStatus::Completed,
    });

    let period = day.format("%B %Y").to_string();
    let tuition = (amount * Decimal::new(6, 1)).normalize();

    for (fee_type, share) in [
        (FeeType::Tuition, tuition),
        (FeeType::Transportation, amount - tuition),
    ] {
        storage.create_receipt_item(NewReceiptItem {
            receipt_id: receipt.id,
            fee_type,
            description: format!("{} Fee ({})", fee_type, period),
            amount: share,
            period: Some(period.clone()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::seed_demo_data;
    use crate::core::reports::UNKNOWN;
    use crate::core::{MemStorage, SchoolStorage};
    use crate::types::{FeeType, PaymentStatus, SchoolSettings};
    use rust_decimal::Decimal;

    #[test]
    fn test_seed_counts() {
        let storage = MemStorage::with_demo_data();

        assert_eq!(storage.get_all_transportation_routes(true).len(), 4);
        assert_eq!(storage.total_students(), 6);
        // 14 grades x 5 items, plus laboratory for grades 4 through 12
        assert_eq!(storage.get_all_fee_structure().len(), 14 * 5 + 9);
        assert_eq!(storage.get_recent_receipts(100).len(), 5);
        assert!(storage.get_user_by_username("admin").is_some());
    }

    #[test]
    fn test_seed_fee_structure_amounts() {
        let storage = MemStorage::with_demo_data();

        let tuition = |grade: &str| {
            storage
                .get_fee_structure_by_grade(grade)
                .into_iter()
                .find(|item| item.fee_type == FeeType::Tuition)
                .map(|item| item.amount)
        };

        assert_eq!(tuition("Nursery"), Some(Decimal::new(2000, 0)));
        assert_eq!(tuition("KG"), Some(Decimal::new(2200, 0)));
        assert_eq!(tuition("5"), Some(Decimal::new(3500, 0)));
        assert!(storage
            .get_fee_structure_by_grade("3")
            .iter()
            .all(|item| item.fee_type != FeeType::Laboratory));
    }

    #[test]
    fn test_seed_defaulters_belong_to_first_student() {
        let storage = MemStorage::with_demo_data();

        let defaulters = storage.get_defaulters();

        assert_eq!(defaulters.len(), 5);
        assert!(defaulters
            .iter()
            .all(|d| d.admission_number == "ADM2023042" && d.student_name != UNKNOWN));
        assert_eq!(
            defaulters
                .iter()
                .filter(|d| d.fee_due.status == PaymentStatus::Due)
                .count(),
            1
        );
    }

    #[test]
    fn test_seed_split_receipt_items() {
        let storage = MemStorage::with_demo_data();
        let receipt = storage.get_receipt_by_number("REC7B0038").unwrap();

        let items = storage.get_receipt_items(receipt.id);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].amount, Decimal::new(3540, 0));
        assert_eq!(items[1].amount, Decimal::new(2360, 0));
        assert_eq!(items[0].description, "Tuition Fee (May 2023)");
        assert_eq!(receipt.payment_reference.as_deref(), Some("REF7B0038"));

        let cash = storage.get_receipt_by_number("REC3A0041").unwrap();
        assert_eq!(cash.payment_reference, None);
    }

    #[test]
    fn test_demo_store_uses_school_profile() {
        let storage = MemStorage::with_demo_data();

        let settings = storage.get_school_settings();

        assert_eq!(settings.school_name, "Krishnaveni Talent School Ramannapet");
        assert_eq!(settings.receipt_prefix, "GES");
        assert_eq!(settings.receipt_copies, 2);
    }

    #[test]
    fn test_seed_keeps_existing_settings() {
        let mut storage = MemStorage::new();

        seed_demo_data(&mut storage);

        assert_eq!(storage.get_school_settings(), SchoolSettings::default());
        assert_eq!(storage.total_students(), 6);
    }
}
