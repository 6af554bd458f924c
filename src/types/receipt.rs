//! Payment receipts and their line items

use super::fees::FeeType;
use super::patch::{double_option, merge};
use super::student::StudentId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Receipt identifier
pub type ReceiptId = u32;

/// Receipt line item identifier
pub type ReceiptItemId = u32;

/// How a payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Cheque,
    #[serde(rename = "Online Transfer")]
    OnlineTransfer,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Credit/Debit Card")]
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiptStatus {
    Completed,
    Cancelled,
}

/// A record of a completed payment
///
/// The amounts that make up `total_amount` are stored separately as
/// [`ReceiptItem`]s referencing this receipt's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: ReceiptId,
    pub receipt_number: String,
    pub student_id: StudentId,
    pub receipt_date: NaiveDate,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_reference: Option<String>,
    pub remarks: Option<String>,
    pub status: ReceiptStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReceipt {
    pub receipt_number: String,
    pub student_id: StudentId,
    pub receipt_date: NaiveDate,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_reference: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    pub status: ReceiptStatus,
}

impl NewReceipt {
    pub(crate) fn into_receipt(self, id: ReceiptId, created_at: DateTime<Utc>) -> Receipt {
        Receipt {
            id,
            receipt_number: self.receipt_number,
            student_id: self.student_id,
            receipt_date: self.receipt_date,
            total_amount: self.total_amount,
            payment_method: self.payment_method,
            payment_reference: self.payment_reference,
            remarks: self.remarks,
            status: self.status,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReceiptPatch {
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub student_id: Option<StudentId>,
    #[serde(default)]
    pub receipt_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, deserialize_with = "double_option")]
    pub payment_reference: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub remarks: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<ReceiptStatus>,
}

impl ReceiptPatch {
    pub fn apply(self, receipt: &mut Receipt) {
        merge(&mut receipt.receipt_number, self.receipt_number);
        merge(&mut receipt.student_id, self.student_id);
        merge(&mut receipt.receipt_date, self.receipt_date);
        merge(&mut receipt.total_amount, self.total_amount);
        merge(&mut receipt.payment_method, self.payment_method);
        merge(&mut receipt.payment_reference, self.payment_reference);
        merge(&mut receipt.remarks, self.remarks);
        merge(&mut receipt.status, self.status);
    }
}

/// One fee paid on a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub id: ReceiptItemId,
    pub receipt_id: ReceiptId,
    pub fee_type: FeeType,
    pub description: String,
    pub amount: Decimal,
    pub period: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReceiptItem {
    pub receipt_id: ReceiptId,
    pub fee_type: FeeType,
    pub description: String,
    pub amount: Decimal,
    #[serde(default)]
    pub period: Option<String>,
}

impl NewReceiptItem {
    pub(crate) fn into_item(self, id: ReceiptItemId) -> ReceiptItem {
        ReceiptItem {
            id,
            receipt_id: self.receipt_id,
            fee_type: self.fee_type,
            description: self.description,
            amount: self.amount,
            period: self.period,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReceiptItemPatch {
    #[serde(default)]
    pub receipt_id: Option<ReceiptId>,
    #[serde(default)]
    pub fee_type: Option<FeeType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub period: Option<Option<String>>,
}

impl ReceiptItemPatch {
    pub fn apply(self, item: &mut ReceiptItem) {
        merge(&mut item.receipt_id, self.receipt_id);
        merge(&mut item.fee_type, self.fee_type);
        merge(&mut item.description, self.description);
        merge(&mut item.amount, self.amount);
        merge(&mut item.period, self.period);
    }
}
