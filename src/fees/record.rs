use serde::{Deserialize, Serialize};

/// One billing period's charge for one student, as returned by the backend.
///
/// Backend records can be partially populated, so every field tolerates
/// absence; missing amounts read as zero and missing references as empty.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRecord {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub student: Option<StudentRef>,
    #[serde(default)]
    pub term: Term,
    #[serde(default)]
    pub session: SessionRef,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub total_paid: f64,
    #[serde(default)]
    pub payments: Vec<PaymentEvent>,
    #[serde(default)]
    pub computed_status: ComputedStatus,
}

impl FeeRecord {
    /// Signed balance: negative means overpaid.
    pub fn amount_owed(&self) -> f64 {
        self.total_amount - self.total_paid
    }

    /// Balance clamped at zero; overpayment surplus is not credited anywhere.
    pub fn outstanding(&self) -> f64 {
        self.amount_owed().max(0.0)
    }
}

/// Academic sub-period within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    First,
    Second,
    Third,
    /// Anything the backend sends that we don't recognize.
    #[default]
    #[serde(other)]
    Other,
}

impl Term {
    pub fn label(&self) -> &'static str {
        match self {
            Term::First => "First",
            Term::Second => "Second",
            Term::Third => "Third",
            Term::Other => "Unknown",
        }
    }
}

/// Server-assigned classification of a record relative to the present
/// academic period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputedStatus {
    Past,
    Current,
    Upcoming,
    #[default]
    #[serde(other)]
    Unknown,
}

/// The session field arrives either as a bare year string ("2023/2024") or
/// as an object carrying the name plus optional term boundary dates.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SessionRef {
    Name(String),
    Detailed(SessionDetail),
}

impl Default for SessionRef {
    fn default() -> Self {
        SessionRef::Name(String::new())
    }
}

impl SessionRef {
    /// Academic-year identifier, e.g. "2023/2024".
    pub fn name(&self) -> &str {
        match self {
            SessionRef::Name(s) => s,
            SessionRef::Detailed(d) => &d.session,
        }
    }

    /// Explicit end date of the given term, when the backend supplied one.
    pub fn term_end(&self, term: Term) -> Option<&str> {
        let detail = match self {
            SessionRef::Name(_) => return None,
            SessionRef::Detailed(d) => d,
        };
        let dates = match term {
            Term::First => detail.first_term.as_ref(),
            Term::Second => detail.second_term.as_ref(),
            Term::Third => detail.third_term.as_ref(),
            Term::Other => None,
        };
        dates.and_then(|d| d.end_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub first_term: Option<TermDates>,
    #[serde(default)]
    pub second_term: Option<TermDates>,
    #[serde(default)]
    pub third_term: Option<TermDates>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermDates {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Student reference embedded in a fee record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRef {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub class: Option<ClassRef>,
}

impl StudentRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRef {
    #[serde(default)]
    pub class_name: String,
}

/// A single payment event recorded against a fee.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEvent {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub method: String,
}

/// A child as listed under the parent account, used to resolve display
/// names for fee records.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub class: Option<ClassRef>,
}

impl Child {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Fee records grouped by the server's period classification.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeeBuckets {
    #[serde(default)]
    pub past: Vec<FeeRecord>,
    #[serde(default)]
    pub current: Vec<FeeRecord>,
    #[serde(default)]
    pub upcoming: Vec<FeeRecord>,
}
