//! Benchmark suite for store queries and reports
//!
//! Measures the linear-scan queries and report joins of the in-memory store
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each benchmark runs against a store holding the demonstration data plus
//! `n` generated students, each with one receipt and one fee due.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use school_fees_engine::form::SearchForm;
use school_fees_engine::types::{
    FeeType, NewFeeDue, NewReceipt, NewStudent, PaymentMethod, PaymentStatus, ReceiptStatus,
    GRADES, SECTIONS,
};
use school_fees_engine::{MemStorage, SchoolStorage};

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn populated_store(n: usize) -> MemStorage {
    let mut storage = MemStorage::with_demo_data();
    let day = NaiveDate::from_ymd_opt(2023, 5, 12).expect("valid date");

    for i in 0..n {
        let student = storage.create_student(NewStudent {
            admission_number: format!("BENCH{:06}", i),
            student_name: format!("Student {}", i),
            grade: GRADES[i % GRADES.len()].to_string(),
            section: SECTIONS[i % SECTIONS.len()].to_string(),
            roll_number: Some((i % 40) as u32 + 1),
            parent_name: format!("Parent {}", i),
            contact_number: "9876500000".to_string(),
            email: None,
            fee_category: "Regular".to_string(),
            transportation_route_id: Some((i % 4) as u32 + 1),
            pickup_point: None,
            admission_date: day,
        });

        storage.create_receipt(NewReceipt {
            receipt_number: format!("RECB{:06}", i),
            student_id: student.id,
            receipt_date: day,
            total_amount: Decimal::new(1200, 0),
            payment_method: PaymentMethod::Cash,
            payment_reference: None,
            remarks: None,
            status: ReceiptStatus::Completed,
        });

        storage.create_fee_due(NewFeeDue {
            student_id: student.id,
            fee_type: FeeType::Tuition,
            description: "Tuition Fee (June 2023)".to_string(),
            amount: Decimal::new(3000, 0),
            due_date: day,
            status: if i % 3 == 0 {
                PaymentStatus::Overdue
            } else {
                PaymentStatus::Paid
            },
            period: Some("June 2023".to_string()),
            amount_paid: Decimal::ZERO,
        });
    }

    storage
}

#[divan::bench(args = SIZES)]
fn search_students(bencher: divan::Bencher, n: usize) {
    let storage = populated_store(n);
    bencher.bench_local(|| storage.search_students(divan::black_box("student 9"), Some("5")));
}

#[divan::bench(args = SIZES)]
fn search_form(bencher: divan::Bencher, n: usize) {
    let storage = populated_store(n);
    let form = SearchForm::new("7", "A", "");
    bencher.bench_local(|| form.submit(|criteria| storage.find_students(&criteria)));
}

#[divan::bench(args = SIZES)]
fn recent_receipts(bencher: divan::Bencher, n: usize) {
    let storage = populated_store(n);
    bencher.bench_local(|| storage.get_recent_receipts(divan::black_box(5)));
}

#[divan::bench(args = SIZES)]
fn defaulters(bencher: divan::Bencher, n: usize) {
    let storage = populated_store(n);
    bencher.bench_local(|| storage.get_defaulters());
}

#[divan::bench(args = SIZES)]
fn dashboard_stats(bencher: divan::Bencher, n: usize) {
    let storage = populated_store(n);
    let day = NaiveDate::from_ymd_opt(2023, 5, 12).expect("valid date");
    bencher.bench_local(|| storage.get_dashboard_stats_on(day));
}
