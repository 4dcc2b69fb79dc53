use super::record::FeeBuckets;

/// Aggregate financial position across a fee set.
///
/// Only `past` and `current` records are billable; `upcoming` never
/// contributes to any figure here, including `total_fees`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialSummary {
    /// Sum of positive outstanding balances.
    pub total_owing: f64,
    /// Sum of amounts actually paid.
    pub total_paid: f64,
    /// Sum of billed amounts.
    pub total_fees: f64,
    /// Outstanding restricted to the `past` bucket.
    pub overdue_amount: f64,
    pub overdue_count: usize,
    pub unpaid_count: usize,
    pub paid_count: usize,
}

pub fn summarize(buckets: &FeeBuckets) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for record in buckets.past.iter().chain(&buckets.current) {
        let owed = record.amount_owed();
        if owed > 0.0 {
            summary.total_owing += owed;
            summary.unpaid_count += 1;
        }
        if record.total_paid > 0.0 {
            summary.total_paid += record.total_paid;
            summary.paid_count += 1;
        }
        summary.total_fees += record.total_amount;
    }

    // Overdue figures are scoped to records the server filed as past;
    // an unpaid current-term record counts as owing but not overdue here.
    for record in &buckets.past {
        let owed = record.amount_owed();
        if owed > 0.0 {
            summary.overdue_amount += owed;
            summary.overdue_count += 1;
        }
    }

    summary
}
