//! Date parsing, comparators and de-duplication helpers shared by loaders
//! and views.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a CMS date string into a UTC instant.
///
/// Strings carrying an offset are converted to UTC. Date-only strings and
/// datetimes without an offset are taken to already be UTC; the CMS gives no
/// timezone for them and none is inferred.
pub fn parse_cms_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Comparators over optional dates. Undated entries sort after dated ones
/// in both directions.
pub mod sort {
    use std::cmp::Ordering;

    use chrono::{DateTime, Utc};

    pub fn date_asc(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    pub fn date_desc(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Keep the first item for every key, preserving order
pub fn uniq_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Human readable show date, e.g. "Fri 02 Feb 2024, 20:00"
pub fn format_show_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%a %d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| "TBA".to_string())
}
