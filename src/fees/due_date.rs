use chrono::NaiveDate;

use super::record::{SessionRef, Term};

/// Estimate when a fee falls due.
///
/// Prefers the session's explicit term end date when the backend supplied
/// one. Otherwise falls back to a fixed calendar heuristic keyed off the
/// session's starting year: first term due Sep 30, second term Jan 31 of the
/// following year, third term May 31 of the following year. A session string
/// that yields no starting year produces `None` rather than an error — fee
/// data is best-effort by design.
pub fn estimate_due_date(term: Term, session: &SessionRef) -> Option<NaiveDate> {
    if let Some(raw) = session.term_end(term) {
        if let Some(date) = parse_backend_date(raw) {
            return Some(date);
        }
        // Unparseable boundary date falls through to the heuristic.
    }

    let start = session_start_year(session.name())?;
    match term {
        Term::First => NaiveDate::from_ymd_opt(start, 9, 30),
        Term::Second => NaiveDate::from_ymd_opt(start + 1, 1, 31),
        Term::Third => NaiveDate::from_ymd_opt(start + 1, 5, 31),
        Term::Other => NaiveDate::from_ymd_opt(start, 12, 31),
    }
}

/// Starting year of a "YYYY/YYYY+1" session identifier.
fn session_start_year(session: &str) -> Option<i32> {
    session.split('/').next()?.trim().parse().ok()
}

/// Backend dates arrive as "YYYY-MM-DD" or full ISO-8601 timestamps; only
/// the date part matters here.
fn parse_backend_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
