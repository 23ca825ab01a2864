use crate::models::{FIRST_YEAR, LAST_YEAR, NameTotal, NameYearCounts, RegistrationRecord};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

const JUNK_NAMES: [&str; 12] = [
    "",
    "UNKNOWN",
    "N/A",
    "NA",
    "DOG",
    "NONE",
    "NULL",
    "UNNAMED",
    "NAME NOT PROVIDED",
    "NOT PROVIDED",
    "NO NAME",
    "NOTNAMED",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn is_junk(name: &str) -> bool {
    JUNK_NAMES.contains(&name)
}

pub fn parse_year(raw: &str) -> Option<i32> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return Some(stamp.year());
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(stamp.year());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.year());
        }
    }

    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse().ok();
    }

    None
}

fn in_window(year: i32) -> bool {
    (FIRST_YEAR..=LAST_YEAR).contains(&year)
}

pub fn aggregate<'a, I>(records: I) -> NameYearCounts
where
    I: IntoIterator<Item = &'a RegistrationRecord>,
{
    let mut counts = NameYearCounts::new();
    let mut dropped = 0usize;

    for record in records {
        let name = normalize_name(&record.name);
        if is_junk(&name) {
            dropped += 1;
            continue;
        }

        let Some(year) = parse_year(&record.issued_date).filter(|year| in_window(*year)) else {
            dropped += 1;
            continue;
        };

        let bucket = counts.entry(name).or_default().entry(year).or_default();
        *bucket = bucket.saturating_add(1);
    }

    debug!(names = counts.len(), dropped, "aggregated registrations");
    counts
}

pub fn totals(counts: &NameYearCounts) -> Vec<NameTotal> {
    let mut totals: Vec<NameTotal> = counts
        .iter()
        .map(|(name, years)| NameTotal {
            name: name.clone(),
            total: years
                .iter()
                .filter(|(year, _)| in_window(**year))
                .map(|(_, count)| *count)
                .sum(),
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    totals
}

pub fn rank_top(counts: &NameYearCounts, n: usize) -> Vec<String> {
    totals(counts)
        .into_iter()
        .take(n)
        .map(|entry| entry.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(name: &str, date: &str, times: usize) -> Vec<RegistrationRecord> {
        (0..times).map(|_| RegistrationRecord::new(name, date)).collect()
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize_name("  bella \t"), "BELLA");
        assert_eq!(normalize_name("Max"), "MAX");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn junk_names_are_recognized_after_normalizing() {
        for raw in ["", " unknown ", "n/a", "Name Not Provided", "notnamed", "dog"] {
            assert!(is_junk(&normalize_name(raw)), "{raw:?} should be junk");
        }
        assert!(!is_junk("BELLA"));
        assert!(!is_junk("DOGGO"));
    }

    #[test]
    fn parse_year_accepts_common_shapes() {
        assert_eq!(parse_year("2020-05-01"), Some(2020));
        assert_eq!(parse_year("09/12/2014"), Some(2014));
        assert_eq!(parse_year("2016-03-08T00:00:00.000"), Some(2016));
        assert_eq!(parse_year("2016-03-08T10:11:12"), Some(2016));
        assert_eq!(parse_year("2019-01-01T00:00:00Z"), Some(2019));
        assert_eq!(parse_year("12/31/2018 11:59:00 PM"), Some(2018));
        assert_eq!(parse_year("2011/07/04"), Some(2011));
        assert_eq!(parse_year("2004"), Some(2004));
    }

    #[test]
    fn parse_year_rejects_garbage() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("not a date"), None);
        assert_eq!(parse_year("2020-13-45"), None);
        assert_eq!(parse_year("20"), None);
    }

    #[test]
    fn aggregate_drops_junk_and_empty_names() {
        let mut records = repeat("Bella", "2020-05-01", 2);
        records.extend(repeat("UNKNOWN", "2020-05-01", 4));
        records.extend(repeat("  ", "2020-05-01", 1));
        records.extend(repeat("none", "2020-05-01", 1));

        let counts = aggregate(&records);
        assert_eq!(counts.keys().collect::<Vec<_>>(), vec!["BELLA"]);
        assert_eq!(counts["BELLA"][&2020], 2);
    }

    #[test]
    fn aggregate_drops_years_outside_window() {
        let mut records = repeat("Rex", "1999-12-31", 3);
        records.extend(repeat("Rex", "2026-01-01", 2));
        records.extend(repeat("Rex", "2000-01-01", 1));
        records.extend(repeat("Rex", "2025-12-31", 1));
        records.extend(repeat("Rex", "garbage", 5));

        let counts = aggregate(&records);
        let years: Vec<i32> = counts["REX"].keys().copied().collect();
        assert_eq!(years, vec![2000, 2025]);
        assert_eq!(counts["REX"].values().sum::<u64>(), 2);
    }

    #[test]
    fn aggregate_merges_case_variants() {
        let mut records = repeat("bella", "2020-01-01", 1);
        records.extend(repeat(" BELLA", "2020-06-01", 1));
        records.extend(repeat("Bella ", "2021-06-01", 1));

        let counts = aggregate(&records);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["BELLA"][&2020], 2);
        assert_eq!(counts["BELLA"][&2021], 1);
    }

    #[test]
    fn rank_breaks_ties_by_name() {
        let mut records = repeat("Luna", "2010-01-01", 4);
        records.extend(repeat("Bella", "2011-01-01", 4));
        records.extend(repeat("Max", "2012-01-01", 4));
        records.extend(repeat("Coco", "2012-01-01", 4));
        records.extend(repeat("Rocky", "2012-01-01", 9));

        let counts = aggregate(&records);
        assert_eq!(rank_top(&counts, 3), vec!["ROCKY", "BELLA", "COCO"]);
    }

    #[test]
    fn rank_returns_what_is_available() {
        let records = repeat("Max", "2021-01-01", 3);
        let counts = aggregate(&records);
        assert_eq!(rank_top(&counts, 3), vec!["MAX"]);
        assert!(rank_top(&NameYearCounts::new(), 3).is_empty());
    }

    #[test]
    fn totals_sum_every_year() {
        let mut records = repeat("Max", "2001-01-01", 2);
        records.extend(repeat("Max", "2024-01-01", 5));
        let counts = aggregate(&records);

        assert_eq!(
            totals(&counts),
            vec![NameTotal { name: "MAX".to_string(), total: 7 }]
        );
    }
}
