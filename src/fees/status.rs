use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::FeesError;

use super::record::ComputedStatus;

/// Display status of a fee item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStatus {
    Paid,
    Pending,
    Overdue,
}

impl fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeeStatus::Paid => "PAID",
            FeeStatus::Pending => "PENDING",
            FeeStatus::Overdue => "OVERDUE",
        };
        write!(f, "{s}")
    }
}

impl FromStr for FeeStatus {
    type Err = FeesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paid" => Ok(FeeStatus::Paid),
            "pending" => Ok(FeeStatus::Pending),
            "overdue" => Ok(FeeStatus::Overdue),
            _ => Err(FeesError::InvalidStatusFilter(s.to_string())),
        }
    }
}

/// Classify one fee, first match wins:
///
/// 1. Nothing owed (including overpayment) is paid.
/// 2. Past the due date is overdue.
/// 3. Unpaid and the server already filed it under past or current is
///    overdue, even when the locally estimated due date hasn't passed —
///    the server's period classification wins as a safety net.
/// 4. Anything else (upcoming, or an unrecognized classification) is
///    pending.
///
/// `today` is injected so the result is deterministic under test.
pub fn classify(
    amount_owed: f64,
    computed_status: ComputedStatus,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> FeeStatus {
    if amount_owed <= 0.0 {
        return FeeStatus::Paid;
    }

    if let Some(due) = due_date {
        if today > due {
            return FeeStatus::Overdue;
        }
    }

    match computed_status {
        ComputedStatus::Past | ComputedStatus::Current => FeeStatus::Overdue,
        ComputedStatus::Upcoming | ComputedStatus::Unknown => FeeStatus::Pending,
    }
}
