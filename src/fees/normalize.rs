use chrono::NaiveDate;

use super::due_date::estimate_due_date;
use super::record::{Child, FeeBuckets, FeeRecord};
use super::status::{classify, FeeStatus};

/// Placeholder for a missing class name.
pub const NO_CLASS: &str = "-";

/// One display-ready fee line, derived from a [`FeeRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeeItem {
    pub child_name: String,
    pub child_class: String,
    pub fee_name: String,
    pub amount: f64,
    pub total_paid: f64,
    /// Positive balance only; overpayment collapses to zero.
    pub outstanding: f64,
    pub due_date: Option<NaiveDate>,
    pub status: FeeStatus,
    pub paid_date: Option<String>,
    pub payment_method: Option<String>,
}

/// Flatten the three buckets into display items, in `past ++ current ++
/// upcoming` order with the order inside each bucket preserved.
///
/// Never fails: missing names, classes, and amounts degrade to defaults.
pub fn normalize(buckets: &FeeBuckets, children: &[Child], today: NaiveDate) -> Vec<FeeItem> {
    buckets
        .past
        .iter()
        .chain(&buckets.current)
        .chain(&buckets.upcoming)
        .map(|record| fee_item(record, children, today))
        .collect()
}

fn fee_item(record: &FeeRecord, children: &[Child], today: NaiveDate) -> FeeItem {
    // Prefer the parent's children list for the display name; fall back to
    // the names embedded in the record itself.
    let by_id = record.student.as_ref().and_then(|s| {
        if s.id.is_empty() {
            return None;
        }
        children.iter().find(|c| c.id == s.id)
    });
    let child_name = match (by_id, record.student.as_ref()) {
        (Some(child), _) => child.full_name(),
        (None, Some(student)) => student.full_name(),
        (None, None) => String::new(),
    };

    let child_class = record
        .student
        .as_ref()
        .and_then(|s| s.class.as_ref())
        .map(|c| c.class_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| NO_CLASS.to_string());

    let fee_name = format!(
        "School Fees - {} Term {}",
        record.term.label(),
        record.session.name()
    )
    .trim_end()
    .to_string();

    let amount_owed = record.amount_owed();
    let due_date = estimate_due_date(record.term, &record.session);
    let status = classify(amount_owed, record.computed_status, due_date, today);

    let first_payment = record.payments.first();

    FeeItem {
        child_name,
        child_class,
        fee_name,
        amount: record.total_amount,
        total_paid: record.total_paid,
        outstanding: record.outstanding(),
        due_date,
        status,
        paid_date: first_payment.map(|p| p.date.clone()),
        payment_method: first_payment.map(|p| p.method.clone()),
    }
}
