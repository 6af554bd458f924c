// CLI module
// Command-line interface, store setup and command dispatch

mod args;

pub use args::{CliArgs, Command};

use crate::config::Config;
use crate::core::{seed_demo_data, MemStorage, SchoolStorage};
use crate::form::SearchForm;
use crate::io::{
    import_roster, write_csv, write_dashboard_csv, write_defaulters_csv,
    write_recent_receipts_csv,
};
use crate::types::{SchoolError, Student};
use clap::Parser;
use std::io::Write;
use tracing::info;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints a message and exits the
/// process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Build the store the command runs against
///
/// Starts from the configured settings, adds the demonstration records
/// unless disabled by config or `--no-demo-data`, then imports the roster
/// given on the command line (or in the config).
pub fn build_storage(args: &CliArgs, config: &Config) -> Result<MemStorage, SchoolError> {
    let mut storage = MemStorage::with_settings(config.settings.clone());

    if config.data.seed_demo_data && !args.no_demo_data {
        seed_demo_data(&mut storage);
    }

    if let Some(path) = args.roster.as_ref().or(config.data.roster_path.as_ref()) {
        let summary = import_roster(&mut storage, path)?;
        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "roster ready"
        );
    }

    Ok(storage)
}

/// Run one command against `storage`, writing its result to `output`
///
/// Listings are written as CSV; settings are written as JSON.
pub fn execute<S: SchoolStorage + ?Sized>(
    command: &Command,
    storage: &S,
    config: &Config,
    output: &mut dyn Write,
) -> Result<(), SchoolError> {
    match command {
        Command::Dashboard { date } => {
            let stats = match date {
                Some(day) => storage.get_dashboard_stats_on(*day),
                None => storage.get_dashboard_stats(),
            };
            write_dashboard_csv(&stats, output)
        }
        Command::Defaulters => write_defaulters_csv(&storage.get_defaulters(), output),
        Command::RecentReceipts { limit } => {
            let limit = limit.unwrap_or(config.reports.recent_receipts_limit);
            write_recent_receipts_csv(&storage.get_recent_receipts(limit), output)
        }
        Command::Students {
            query,
            grade,
            route,
        } => write_csv(
            list_students(storage, query.as_deref(), grade.as_deref(), *route),
            output,
        ),
        Command::Search {
            class_id,
            section,
            admission_number,
        } => {
            let form = SearchForm::new(class_id, section, admission_number);
            let students = form.submit(|criteria| storage.find_students(&criteria))?;
            write_csv(students, output)
        }
        Command::FeeStructure { grade } => {
            let items = match grade {
                Some(grade) => storage.get_fee_structure_by_grade(grade),
                None => storage.get_all_fee_structure(),
            };
            write_csv(items, output)
        }
        Command::Routes { active_only } => {
            write_csv(storage.get_all_transportation_routes(*active_only), output)
        }
        Command::Receipts { student, number } => {
            let receipts = match (student, number) {
                (Some(student_id), _) => storage.get_receipts_by_student(*student_id),
                (None, Some(number)) => storage.get_receipt_by_number(number).into_iter().collect(),
                (None, None) => Vec::new(),
            };
            write_csv(receipts, output)
        }
        Command::ReceiptItems { receipt } => write_csv(storage.get_receipt_items(*receipt), output),
        Command::Dues { student } => write_csv(storage.get_fee_dues_by_student(*student), output),
        Command::Settings => {
            serde_json::to_writer_pretty(&mut *output, &storage.get_school_settings()).map_err(
                |e| SchoolError::IoError {
                    message: e.to_string(),
                },
            )?;
            writeln!(output)?;
            Ok(())
        }
    }
}

fn list_students<S: SchoolStorage + ?Sized>(
    storage: &S,
    query: Option<&str>,
    grade: Option<&str>,
    route: Option<u32>,
) -> Vec<Student> {
    match (query, grade, route) {
        (None, None, Some(route)) => storage.get_students_by_transportation_route(route),
        (None, Some(grade), None) => storage.get_students_by_grade(grade),
        (query, grade, route) => {
            let mut students = storage.search_students(query.unwrap_or(""), grade);
            if let Some(route) = route {
                students.retain(|student| student.transportation_route_id == Some(route));
            }
            students
        }
    }
}
