//! Core trait for the school data-access interface
//!
//! `SchoolStorage` is the request/response surface an external routing layer
//! exposes: create/read/update/delete per entity kind plus the named filtered
//! queries and reports. [`MemStorage`](crate::core::MemStorage) is the
//! in-memory implementation.
//!
//! Absence is never an error. Reads of a missing id return `None`, updates of
//! a missing id return `None` without creating anything, and deletes report
//! whether a record was actually removed.

use crate::core::reports::{DashboardStats, Defaulter, RecentReceipt};
use crate::form::SearchCriteria;
use crate::types::{
    FeeDue, FeeDueId, FeeDuePatch, FeeStructureId, FeeStructureItem, FeeStructurePatch, NewFeeDue,
    NewFeeStructureItem, NewReceipt, NewReceiptItem, NewStudent, NewTransportationRoute, NewUser,
    Receipt, ReceiptId, ReceiptItem, ReceiptItemId, ReceiptItemPatch, ReceiptPatch, RouteId,
    SchoolSettings, SettingsPatch, Student, StudentId, StudentPatch, TransportationRoute,
    TransportationRoutePatch, User, UserId, UserPatch,
};
use chrono::{Local, NaiveDate};

/// Data-access operations over students, fees, receipts, routes and users
pub trait SchoolStorage {
    // Transportation routes

    fn get_transportation_route(&self, id: RouteId) -> Option<TransportationRoute>;

    /// All routes, or only those marked active
    fn get_all_transportation_routes(&self, active_only: bool) -> Vec<TransportationRoute>;

    fn create_transportation_route(&mut self, route: NewTransportationRoute)
        -> TransportationRoute;

    fn update_transportation_route(
        &mut self,
        id: RouteId,
        patch: TransportationRoutePatch,
    ) -> Option<TransportationRoute>;

    fn delete_transportation_route(&mut self, id: RouteId) -> bool;

    fn get_students_by_transportation_route(&self, route_id: RouteId) -> Vec<Student>;

    // Students

    fn get_student(&self, id: StudentId) -> Option<Student>;

    fn get_student_by_admission_number(&self, admission_number: &str) -> Option<Student>;

    /// Case-insensitive substring search over name, admission number and
    /// parent name, optionally restricted to one grade
    fn search_students(&self, query: &str, grade: Option<&str>) -> Vec<Student>;

    fn get_students_by_grade(&self, grade: &str) -> Vec<Student>;

    /// Students matching every criterion submitted through the search form
    fn find_students(&self, criteria: &SearchCriteria) -> Vec<Student>;

    fn create_student(&mut self, student: NewStudent) -> Student;

    fn update_student(&mut self, id: StudentId, patch: StudentPatch) -> Option<Student>;

    fn delete_student(&mut self, id: StudentId) -> bool;

    fn total_students(&self) -> usize;

    // Fee structure

    fn get_fee_structure(&self, id: FeeStructureId) -> Option<FeeStructureItem>;

    fn get_fee_structure_by_grade(&self, grade: &str) -> Vec<FeeStructureItem>;

    fn get_all_fee_structure(&self) -> Vec<FeeStructureItem>;

    fn create_fee_structure(&mut self, item: NewFeeStructureItem) -> FeeStructureItem;

    fn update_fee_structure(
        &mut self,
        id: FeeStructureId,
        patch: FeeStructurePatch,
    ) -> Option<FeeStructureItem>;

    fn delete_fee_structure(&mut self, id: FeeStructureId) -> bool;

    // Receipts

    fn get_receipt(&self, id: ReceiptId) -> Option<Receipt>;

    fn get_receipt_by_number(&self, receipt_number: &str) -> Option<Receipt>;

    fn get_receipts_by_student(&self, student_id: StudentId) -> Vec<Receipt>;

    fn create_receipt(&mut self, receipt: NewReceipt) -> Receipt;

    fn update_receipt(&mut self, id: ReceiptId, patch: ReceiptPatch) -> Option<Receipt>;

    fn delete_receipt(&mut self, id: ReceiptId) -> bool;

    /// Newest receipts joined with their students
    fn get_recent_receipts(&self, limit: usize) -> Vec<RecentReceipt>;

    // Receipt items

    fn get_receipt_items(&self, receipt_id: ReceiptId) -> Vec<ReceiptItem>;

    fn create_receipt_item(&mut self, item: NewReceiptItem) -> ReceiptItem;

    fn update_receipt_item(
        &mut self,
        id: ReceiptItemId,
        patch: ReceiptItemPatch,
    ) -> Option<ReceiptItem>;

    fn delete_receipt_item(&mut self, id: ReceiptItemId) -> bool;

    // Fee dues

    fn get_fee_due(&self, id: FeeDueId) -> Option<FeeDue>;

    fn get_fee_dues_by_student(&self, student_id: StudentId) -> Vec<FeeDue>;

    fn create_fee_due(&mut self, fee_due: NewFeeDue) -> FeeDue;

    fn update_fee_due(&mut self, id: FeeDueId, patch: FeeDuePatch) -> Option<FeeDue>;

    fn delete_fee_due(&mut self, id: FeeDueId) -> bool;

    /// Due and overdue fees joined with their students
    fn get_defaulters(&self) -> Vec<Defaulter>;

    // Users

    fn get_user(&self, id: UserId) -> Option<User>;

    fn get_user_by_username(&self, username: &str) -> Option<User>;

    fn create_user(&mut self, user: NewUser) -> User;

    fn update_user(&mut self, id: UserId, patch: UserPatch) -> Option<User>;

    fn delete_user(&mut self, id: UserId) -> bool;

    // Dashboard

    /// Dashboard figures with `day` as "today"
    fn get_dashboard_stats_on(&self, day: NaiveDate) -> DashboardStats;

    /// Dashboard figures for the current local day
    fn get_dashboard_stats(&self) -> DashboardStats {
        self.get_dashboard_stats_on(Local::now().date_naive())
    }

    // Settings

    fn get_school_settings(&self) -> SchoolSettings;

    /// Shallow-merge `patch` into the settings and return the merged record
    fn update_school_settings(&mut self, patch: SettingsPatch) -> SchoolSettings;
}
