mod due_date;
mod normalize;
mod record;
mod status;
mod summary;

pub use due_date::estimate_due_date;
pub use normalize::{normalize, FeeItem, NO_CLASS};
pub use record::{
    Child, ClassRef, ComputedStatus, FeeBuckets, FeeRecord, PaymentEvent, SessionDetail,
    SessionRef, StudentRef, Term, TermDates,
};
pub use status::{classify, FeeStatus};
pub use summary::{summarize, FinancialSummary};
