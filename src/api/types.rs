use serde::Deserialize;

use crate::fees::{Child, FeeBuckets, StudentRef};

/// Every backend response wraps its payload in a `data` field.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Payload of `GET /v1/parent/fees` and `GET /v1/admin/parents/{id}` —
/// both nest the same `studentFee` bucket shape under a parent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentFeesData {
    #[serde(default)]
    pub parent: ParentInfo,
    #[serde(default)]
    pub student_fee: FeeBuckets,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl ParentInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Payload of `GET /v1/admin/payment` — raw payment transactions, not
/// billing-period aggregates.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPage {
    #[serde(default)]
    pub payments: Vec<PaymentTransaction>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_records: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTransaction {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub student: Option<StudentRef>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub payment_date: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub status: String,
}
