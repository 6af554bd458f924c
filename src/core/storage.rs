//! In-memory school store
//!
//! This module provides `MemStorage`, the [`SchoolStorage`] implementation
//! that keeps one [`EntityTable`] per entity kind plus the singleton settings
//! record.
//!
//! MemStorage is responsible for:
//! - Minting sequential identifiers and stamping creation times
//! - Shallow-merge updates through the per-entity patch types
//! - Linear-scan filters (by grade, route, student, status, ...)
//! - Feeding the report functions in [`crate::core::reports`]
//!
//! There is no referential enforcement: deleting a student leaves its
//! receipts and dues in place, and creating a receipt for an unknown student
//! succeeds.

use crate::core::entity_table::EntityTable;
use crate::core::reports::{self, DashboardStats, Defaulter, RecentReceipt};
use crate::core::seed;
use crate::core::traits::SchoolStorage;
use crate::form::SearchCriteria;
use crate::types::{
    FeeDue, FeeDueId, FeeDuePatch, FeeStructureId, FeeStructureItem, FeeStructurePatch, NewFeeDue,
    NewFeeStructureItem, NewReceipt, NewReceiptItem, NewStudent, NewTransportationRoute, NewUser,
    Receipt, ReceiptId, ReceiptItem, ReceiptItemId, ReceiptItemPatch, ReceiptPatch, RouteId,
    SchoolSettings, SettingsPatch, Student, StudentId, StudentPatch, TransportationRoute,
    TransportationRoutePatch, User, UserId, UserPatch,
};
use chrono::{NaiveDate, Utc};
use tracing::debug;

/// Holds every entity table and the school settings
#[derive(Debug, Clone, Default)]
pub struct MemStorage {
    students: EntityTable<Student>,
    fee_structure: EntityTable<FeeStructureItem>,
    receipts: EntityTable<Receipt>,
    receipt_items: EntityTable<ReceiptItem>,
    fee_dues: EntityTable<FeeDue>,
    users: EntityTable<User>,
    transportation_routes: EntityTable<TransportationRoute>,
    school_settings: SchoolSettings,
}

impl MemStorage {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given settings
    pub fn with_settings(school_settings: SchoolSettings) -> Self {
        MemStorage {
            school_settings,
            ..Self::default()
        }
    }

    /// Create a store populated with the demonstration data set and school
    /// profile
    pub fn with_demo_data() -> Self {
        let mut storage = Self::new();
        storage.update_school_settings(seed::demo_school_profile());
        seed::seed_demo_data(&mut storage);
        storage
    }

    fn student_ref(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id)
    }
}

impl SchoolStorage for MemStorage {
    fn get_transportation_route(&self, id: RouteId) -> Option<TransportationRoute> {
        self.transportation_routes.get(id).cloned()
    }

    fn get_all_transportation_routes(&self, active_only: bool) -> Vec<TransportationRoute> {
        self.transportation_routes
            .filter(|route| !active_only || route.is_active)
    }

    fn create_transportation_route(
        &mut self,
        route: NewTransportationRoute,
    ) -> TransportationRoute {
        let created = self
            .transportation_routes
            .insert_with(|id| route.into_route(id, Utc::now()));
        debug!(id = created.id, name = %created.route_name, "created transportation route");
        created
    }

    fn update_transportation_route(
        &mut self,
        id: RouteId,
        patch: TransportationRoutePatch,
    ) -> Option<TransportationRoute> {
        let updated = self
            .transportation_routes
            .update(id, |route| patch.apply(route));
        debug!(id, found = updated.is_some(), "updated transportation route");
        updated
    }

    fn delete_transportation_route(&mut self, id: RouteId) -> bool {
        let removed = self.transportation_routes.remove(id);
        debug!(id, removed, "deleted transportation route");
        removed
    }

    fn get_students_by_transportation_route(&self, route_id: RouteId) -> Vec<Student> {
        self.students
            .filter(|student| student.transportation_route_id == Some(route_id))
    }

    fn get_student(&self, id: StudentId) -> Option<Student> {
        self.students.get(id).cloned()
    }

    fn get_student_by_admission_number(&self, admission_number: &str) -> Option<Student> {
        self.students
            .find(|student| student.admission_number == admission_number)
    }

    fn search_students(&self, query: &str, grade: Option<&str>) -> Vec<Student> {
        let query = query.to_lowercase();
        self.students.filter(|student| {
            let matches_query = student.student_name.to_lowercase().contains(&query)
                || student.admission_number.to_lowercase().contains(&query)
                || student.parent_name.to_lowercase().contains(&query);

            match grade {
                Some(grade) => matches_query && student.grade == grade,
                None => matches_query,
            }
        })
    }

    fn get_students_by_grade(&self, grade: &str) -> Vec<Student> {
        self.students.filter(|student| student.grade == grade)
    }

    fn find_students(&self, criteria: &SearchCriteria) -> Vec<Student> {
        self.students.filter(|student| criteria.matches(student))
    }

    fn create_student(&mut self, student: NewStudent) -> Student {
        let created = self.students.insert_with(|id| student.into_student(id));
        debug!(
            id = created.id,
            admission_number = %created.admission_number,
            "created student"
        );
        created
    }

    fn update_student(&mut self, id: StudentId, patch: StudentPatch) -> Option<Student> {
        let updated = self.students.update(id, |student| patch.apply(student));
        debug!(id, found = updated.is_some(), "updated student");
        updated
    }

    fn delete_student(&mut self, id: StudentId) -> bool {
        let removed = self.students.remove(id);
        debug!(id, removed, "deleted student");
        removed
    }

    fn total_students(&self) -> usize {
        self.students.len()
    }

    fn get_fee_structure(&self, id: FeeStructureId) -> Option<FeeStructureItem> {
        self.fee_structure.get(id).cloned()
    }

    fn get_fee_structure_by_grade(&self, grade: &str) -> Vec<FeeStructureItem> {
        self.fee_structure.filter(|item| item.grade == grade)
    }

    fn get_all_fee_structure(&self) -> Vec<FeeStructureItem> {
        self.fee_structure.all()
    }

    fn create_fee_structure(&mut self, item: NewFeeStructureItem) -> FeeStructureItem {
        let created = self.fee_structure.insert_with(|id| item.into_item(id));
        debug!(
            id = created.id,
            grade = %created.grade,
            fee_type = %created.fee_type,
            "created fee structure item"
        );
        created
    }

    fn update_fee_structure(
        &mut self,
        id: FeeStructureId,
        patch: FeeStructurePatch,
    ) -> Option<FeeStructureItem> {
        let updated = self.fee_structure.update(id, |item| patch.apply(item));
        debug!(id, found = updated.is_some(), "updated fee structure item");
        updated
    }

    fn delete_fee_structure(&mut self, id: FeeStructureId) -> bool {
        let removed = self.fee_structure.remove(id);
        debug!(id, removed, "deleted fee structure item");
        removed
    }

    fn get_receipt(&self, id: ReceiptId) -> Option<Receipt> {
        self.receipts.get(id).cloned()
    }

    fn get_receipt_by_number(&self, receipt_number: &str) -> Option<Receipt> {
        self.receipts
            .find(|receipt| receipt.receipt_number == receipt_number)
    }

    fn get_receipts_by_student(&self, student_id: StudentId) -> Vec<Receipt> {
        self.receipts
            .filter(|receipt| receipt.student_id == student_id)
    }

    fn create_receipt(&mut self, receipt: NewReceipt) -> Receipt {
        let created = self
            .receipts
            .insert_with(|id| receipt.into_receipt(id, Utc::now()));
        debug!(
            id = created.id,
            receipt_number = %created.receipt_number,
            student_id = created.student_id,
            "created receipt"
        );
        created
    }

    fn update_receipt(&mut self, id: ReceiptId, patch: ReceiptPatch) -> Option<Receipt> {
        let updated = self.receipts.update(id, |receipt| patch.apply(receipt));
        debug!(id, found = updated.is_some(), "updated receipt");
        updated
    }

    fn delete_receipt(&mut self, id: ReceiptId) -> bool {
        let removed = self.receipts.remove(id);
        debug!(id, removed, "deleted receipt");
        removed
    }

    fn get_recent_receipts(&self, limit: usize) -> Vec<RecentReceipt> {
        reports::recent_receipts(self.receipts.all(), limit, |id| self.student_ref(id))
    }

    fn get_receipt_items(&self, receipt_id: ReceiptId) -> Vec<ReceiptItem> {
        self.receipt_items
            .filter(|item| item.receipt_id == receipt_id)
    }

    fn create_receipt_item(&mut self, item: NewReceiptItem) -> ReceiptItem {
        let created = self.receipt_items.insert_with(|id| item.into_item(id));
        debug!(
            id = created.id,
            receipt_id = created.receipt_id,
            "created receipt item"
        );
        created
    }

    fn update_receipt_item(
        &mut self,
        id: ReceiptItemId,
        patch: ReceiptItemPatch,
    ) -> Option<ReceiptItem> {
        let updated = self.receipt_items.update(id, |item| patch.apply(item));
        debug!(id, found = updated.is_some(), "updated receipt item");
        updated
    }

    fn delete_receipt_item(&mut self, id: ReceiptItemId) -> bool {
        let removed = self.receipt_items.remove(id);
        debug!(id, removed, "deleted receipt item");
        removed
    }

    fn get_fee_due(&self, id: FeeDueId) -> Option<FeeDue> {
        self.fee_dues.get(id).cloned()
    }

    fn get_fee_dues_by_student(&self, student_id: StudentId) -> Vec<FeeDue> {
        self.fee_dues.filter(|due| due.student_id == student_id)
    }

    fn create_fee_due(&mut self, fee_due: NewFeeDue) -> FeeDue {
        let created = self.fee_dues.insert_with(|id| fee_due.into_due(id));
        debug!(
            id = created.id,
            student_id = created.student_id,
            "created fee due"
        );
        created
    }

    fn update_fee_due(&mut self, id: FeeDueId, patch: FeeDuePatch) -> Option<FeeDue> {
        let updated = self.fee_dues.update(id, |due| patch.apply(due));
        debug!(id, found = updated.is_some(), "updated fee due");
        updated
    }

    fn delete_fee_due(&mut self, id: FeeDueId) -> bool {
        let removed = self.fee_dues.remove(id);
        debug!(id, removed, "deleted fee due");
        removed
    }

    fn get_defaulters(&self) -> Vec<Defaulter> {
        reports::defaulters(self.fee_dues.all(), |id| self.student_ref(id))
    }

    fn get_user(&self, id: UserId) -> Option<User> {
        self.users.get(id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|user| user.username == username)
    }

    fn create_user(&mut self, user: NewUser) -> User {
        let created = self.users.insert_with(|id| user.into_user(id, Utc::now()));
        debug!(id = created.id, username = %created.username, "created user");
        created
    }

    fn update_user(&mut self, id: UserId, patch: UserPatch) -> Option<User> {
        let updated = self.users.update(id, |user| patch.apply(user));
        debug!(id, found = updated.is_some(), "updated user");
        updated
    }

    fn delete_user(&mut self, id: UserId) -> bool {
        let removed = self.users.remove(id);
        debug!(id, removed, "deleted user");
        removed
    }

    fn get_dashboard_stats_on(&self, day: NaiveDate) -> DashboardStats {
        reports::dashboard_stats(
            self.receipts.iter(),
            self.fee_dues.iter(),
            self.students.len(),
            day,
        )
    }

    fn get_school_settings(&self) -> SchoolSettings {
        self.school_settings.clone()
    }

    fn update_school_settings(&mut self, patch: SettingsPatch) -> SchoolSettings {
        patch.apply(&mut self.school_settings);
        debug!("updated school settings");
        self.school_settings.clone()
    }
}
