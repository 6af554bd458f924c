//! Types module
//!
//! Contains the entity records stored by the school fees engine.
//! Each entity comes in three shapes: the stored record, a `New*` insert
//! shape without store-assigned fields, and a `*Patch` for partial updates.
//! - `student`: students and the class catalog
//! - `fees`: fee structure items, fee dues and fee enumerations
//! - `receipt`: receipts and receipt line items
//! - `transport`: transportation routes
//! - `user`: staff accounts
//! - `settings`: the singleton school settings record
//! - `error`: error types

pub mod error;
pub mod fees;
mod patch;
pub mod receipt;
pub mod settings;
pub mod student;
pub mod transport;
pub mod user;

pub use error::SchoolError;
pub use fees::{
    FeeDue, FeeDueId, FeeDuePatch, FeeFrequency, FeeStructureId, FeeStructureItem,
    FeeStructurePatch, FeeType, NewFeeDue, NewFeeStructureItem, PaymentStatus,
};
pub use receipt::{
    NewReceipt, NewReceiptItem, PaymentMethod, Receipt, ReceiptId, ReceiptItem, ReceiptItemId,
    ReceiptItemPatch, ReceiptPatch, ReceiptStatus,
};
pub use settings::{SchoolSettings, SettingsPatch, Theme};
pub use student::{
    class_catalog, grade_for_class, NewStudent, SchoolClass, Student, StudentId, StudentPatch,
    GRADES, SECTIONS,
};
pub use transport::{
    NewTransportationRoute, RouteId, TransportationRoute, TransportationRoutePatch,
};
pub use user::{NewUser, User, UserId, UserPatch};
