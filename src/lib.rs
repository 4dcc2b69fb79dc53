pub mod api;
pub mod config;
pub mod error;
pub mod fees;

pub use api::{ApiClient, ParentFeesData, PaymentPage};
pub use error::{FeesError, Result};
pub use fees::{
    classify, estimate_due_date, normalize, summarize, FeeBuckets, FeeItem, FeeRecord, FeeStatus,
    FinancialSummary,
};
