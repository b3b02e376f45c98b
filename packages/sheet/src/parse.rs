//! Best-effort CSV parser for the facilities sheet.
//!
//! The sheet's schema is positional: the header row is read only to
//! establish the expected column count, and data rows are mapped into
//! [`FacilityRecord`] fields by position. Field splitting honors
//! double-quoted fields so facility names containing commas survive
//! intact. Malformed rows vanish without erroring; the caller gets drop
//! counts via [`ParseStats`].

use care_map_facility_models::FacilityRecord;

/// Counters for rows excluded during parsing.
///
/// Diagnostic only — drops never appear in the API response shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Rows that parsed into a record.
    pub parsed: usize,
    /// Lines that were blank after trimming.
    pub dropped_blank: usize,
    /// Rows with fewer fields than the header has columns.
    pub dropped_short: usize,
    /// Rows whose name field was empty.
    pub dropped_unnamed: usize,
}

impl ParseStats {
    /// Total number of dropped rows.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped_blank + self.dropped_short + self.dropped_unnamed
    }
}

/// Parses the full text of the sheet's CSV export into facility records,
/// preserving source row order.
///
/// Returns an empty list if the input has fewer than two lines (header
/// plus at least one data row required). Record ids are derived from the
/// row's 1-based line position in this fetch.
#[must_use]
pub fn parse_facilities(csv_text: &str) -> (Vec<FacilityRecord>, ParseStats) {
    let lines: Vec<&str> = csv_text.lines().collect();
    let mut stats = ParseStats::default();

    if lines.len() < 2 {
        return (Vec::new(), stats);
    }

    let header_len = split_fields(lines[0]).len();
    let mut records = Vec::new();

    for (i, raw) in lines.iter().enumerate().skip(1) {
        let line = raw.trim();
        if line.is_empty() {
            stats.dropped_blank += 1;
            continue;
        }

        let values = split_fields(line);
        if values.len() < header_len {
            stats.dropped_short += 1;
            continue;
        }

        // Name is the one required field.
        if values[0].is_empty() {
            stats.dropped_unnamed += 1;
            continue;
        }

        let field = |n: usize| values.get(n).cloned().unwrap_or_default();

        records.push(FacilityRecord {
            id: format!("facility-{i}"),
            name: field(0),
            added_by: field(1),
            address: field(2),
            city: field(3),
            zip: field(4),
            phone: field(5),
            contact_person: field(6),
            facility_type: field(7),
            available_beds: field(8),
            price_min: field(9),
            price_max: field(10),
            altcs_accepted: field(11),
            special_services: field(12),
            notes: field(13),
            date_added: field(14),
        });
        stats.parsed += 1;
    }

    (records, stats)
}

/// Splits one CSV line into field values.
///
/// A double quote toggles the "inside quotes" state; a comma separates
/// fields only when outside quotes. Any stray quotes remaining in field
/// text are stripped and fields are trimmed of surrounding whitespace.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);

    fields
        .iter()
        .map(|f| f.replace('"', "").trim().to_owned())
        .collect()
}
