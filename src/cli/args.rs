use crate::types::{ReceiptId, RouteId, StudentId};
use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Query school fee records: students, fee dues, receipts and reports
#[derive(Parser, Debug)]
#[command(name = "school-fees")]
#[command(about = "Query school fee records and reports", long_about = None)]
pub struct CliArgs {
    /// TOML configuration file
    #[arg(long, value_name = "PATH", help = "Path to the TOML config file")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Student roster CSV to import before running the command
    #[arg(long, value_name = "CSV")]
    pub roster: Option<PathBuf>,

    /// Start from an empty store instead of the demonstration data
    #[arg(long = "no-demo-data")]
    pub no_demo_data: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Collection and receipt totals for a day
    Dashboard {
        /// Reporting day, defaults to today
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Students with due or overdue fees
    Defaulters,

    /// Newest receipts with student details
    RecentReceipts {
        /// Number of receipts, defaults to the configured limit
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List or search students
    Students {
        /// Substring of name, admission number or parent name
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        /// Transportation route id
        #[arg(long)]
        route: Option<RouteId>,
    },

    /// Find students by class, section and admission number
    Search {
        /// Class id from the class catalog (1 = Nursery, 2 = KG, 3 = grade 1, ...)
        #[arg(long = "class", value_name = "ID", default_value = "")]
        class_id: String,
        #[arg(long, default_value = "")]
        section: String,
        #[arg(long, default_value = "")]
        admission_number: String,
    },

    /// Fee structure items, optionally for one grade
    FeeStructure {
        #[arg(long)]
        grade: Option<String>,
    },

    /// Transportation routes
    Routes {
        #[arg(long)]
        active_only: bool,
    },

    /// Receipts for a student, or one receipt by number
    #[command(group(ArgGroup::new("receipt_filter").required(true).args(["student", "number"])))]
    Receipts {
        /// Student id
        #[arg(long)]
        student: Option<StudentId>,
        /// Receipt number
        #[arg(long)]
        number: Option<String>,
    },

    /// Line items of a receipt
    ReceiptItems {
        /// Receipt id
        #[arg(long)]
        receipt: ReceiptId,
    },

    /// Fee dues of a student
    Dues {
        /// Student id
        #[arg(long)]
        student: StudentId,
    },

    /// School settings as JSON
    Settings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::dashboard(&["program", "dashboard"], Command::Dashboard { date: None })]
    #[case::dashboard_with_date(
        &["program", "dashboard", "--date", "2023-05-12"],
        Command::Dashboard { date: NaiveDate::from_ymd_opt(2023, 5, 12) }
    )]
    #[case::defaulters(&["program", "defaulters"], Command::Defaulters)]
    #[case::recent_receipts(
        &["program", "recent-receipts", "--limit", "3"],
        Command::RecentReceipts { limit: Some(3) }
    )]
    #[case::students(
        &["program", "students", "--query", "sharma", "--grade", "5"],
        Command::Students { query: Some("sharma".to_string()), grade: Some("5".to_string()), route: None }
    )]
    #[case::search(
        &["program", "search", "--class", "7", "--section", "A"],
        Command::Search { class_id: "7".to_string(), section: "A".to_string(), admission_number: String::new() }
    )]
    #[case::routes(&["program", "routes", "--active-only"], Command::Routes { active_only: true })]
    #[case::receipts_by_number(
        &["program", "receipts", "--number", "REC5A001"],
        Command::Receipts { student: None, number: Some("REC5A001".to_string()) }
    )]
    #[case::receipt_items(&["program", "receipt-items", "--receipt", "1"], Command::ReceiptItems { receipt: 1 })]
    #[case::dues(&["program", "dues", "--student", "1"], Command::Dues { student: 1 })]
    #[case::settings(&["program", "settings"], Command::Settings)]
    fn test_command_parsing(#[case] args: &[&str], #[case] expected: Command) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command, expected);
    }

    #[rstest]
    #[case::defaults(&["program", "settings"], None, 0, false, None, false)]
    #[case::all_options(
        &["program", "--config", "school.toml", "-vv", "--roster", "roster.csv", "--no-demo-data", "settings"],
        Some("school.toml"),
        2,
        false,
        Some("roster.csv"),
        true
    )]
    #[case::quiet(&["program", "-q", "settings"], None, 0, true, None, false)]
    fn test_global_options(
        #[case] args: &[&str],
        #[case] config: Option<&str>,
        #[case] verbose: u8,
        #[case] quiet: bool,
        #[case] roster: Option<&str>,
        #[case] no_demo_data: bool,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.config, config.map(PathBuf::from));
        assert_eq!(parsed.verbose, verbose);
        assert_eq!(parsed.quiet, quiet);
        assert_eq!(parsed.roster, roster.map(PathBuf::from));
        assert_eq!(parsed.no_demo_data, no_demo_data);
    }

    // Error handling tests
    #[rstest]
    #[case::missing_command(&["program"])]
    #[case::unknown_command(&["program", "refunds"])]
    #[case::bad_date(&["program", "dashboard", "--date", "12/05/2023"])]
    #[case::receipts_without_filter(&["program", "receipts"])]
    #[case::receipts_with_both_filters(&["program", "receipts", "--student", "1", "--number", "REC1"])]
    #[case::dues_without_student(&["program", "dues"])]
    #[case::quiet_and_verbose(&["program", "-q", "-v", "settings"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
