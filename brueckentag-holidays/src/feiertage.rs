//! Parser for the feiertage-api.de response format:
//!
//! ```json
//! { "Neujahr": { "datum": "2025-01-01", "hinweis": "" }, ... }
//! ```

use brueckentag_core::HolidayMap;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::HolidayError;

#[derive(Debug, Deserialize)]
struct FeiertagEntry {
    datum: Option<String>,
}

/// Parse a feiertage-api.de document into a holiday map. Entries without a
/// `datum` are skipped.
pub fn parse_feiertage_json(json: &str) -> Result<HolidayMap, HolidayError> {
    let raw: BTreeMap<String, FeiertagEntry> = serde_json::from_str(json)?;
    let mut map = HolidayMap::new();
    for (name, entry) in raw {
        let Some(value) = entry.datum else { continue };
        let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map_err(|_| HolidayError::InvalidDate { name: name.clone(), value: value.clone() })?;
        map.insert(date, name);
    }
    Ok(map)
}
