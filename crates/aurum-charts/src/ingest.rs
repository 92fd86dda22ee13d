//! CSV ingest and normalization for the five dashboard sources
//!
//! Every loader resolves columns through a normalized header map (trimmed,
//! BOM-stripped, ASCII-lowercased), reports missing required columns by
//! name, and recovers from bad individual cells by dropping the row and
//! recording a [`RowError`]. The exceptions are spelled out per source:
//! empty `date`/`price` cells in the price table and non-numeric amounts in
//! the usage table are hard validation failures.

use aurum_common::{
    DashboardError, HeadlineRecord, InvestmentRecord, PriceRecord, ReserveRecord, Result,
    UsageRecord,
};
use chrono::{Datelike, NaiveDate};
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// A row-level defect encountered during ingest, recovered by dropping the row
#[derive(Debug, Clone)]
pub struct RowError {
    /// 1-based CSV line number (header is line 1)
    pub line: usize,
    /// What was wrong with the row
    pub message: String,
}

/// Ingest output: surviving records plus data-quality bookkeeping
#[derive(Debug, Clone)]
pub struct Ingested<T> {
    /// Rows that survived normalization
    pub records: Vec<T>,
    /// Total data rows read from the file
    pub rows_read: usize,
    /// Rows dropped with their reasons
    pub row_errors: Vec<RowError>,
}

impl<T> Ingested<T> {
    /// True when the file had rows but every one of them was dropped
    pub fn emptied_by_defects(&self) -> bool {
        self.rows_read > 0 && self.records.is_empty()
    }
}

/// Load the monthly price table
///
/// Unparseable dates are dropped as data-quality defects; an empty `date`
/// or `price` cell is a hard validation failure naming the field, because
/// the yearly aggregator refuses to run on a partially valid series.
pub fn load_prices(path: &Path) -> Result<Ingested<PriceRecord>> {
    load_source(path, "prices", &["date", "price"], &[], |row, lookup| {
        let date_raw = match lookup.get(row.record, "date") {
            Some(s) => s,
            None => {
                return RowParse::Fatal(DashboardError::validation_field(
                    format!("missing value in required field 'date' (row {})", row.line),
                    "date",
                ))
            }
        };
        let price_raw = match lookup.get(row.record, "price") {
            Some(s) => s,
            None => {
                return RowParse::Fatal(DashboardError::validation_field(
                    format!("missing value in required field 'price' (row {})", row.line),
                    "price",
                ))
            }
        };

        let date = match parse_month(date_raw) {
            Some(d) => d,
            None => return RowParse::Dropped(format!("unparseable date '{}'", date_raw)),
        };
        let price = match parse_f64(price_raw) {
            Some(p) => p,
            None => return RowParse::Dropped(format!("non-numeric price '{}'", price_raw)),
        };

        RowParse::Ok(PriceRecord { date, price })
    })
}

/// Load the sector usage table
///
/// A non-numeric amount is a hard validation failure naming the offending
/// row; the chart ordering would otherwise silently misrepresent the data.
pub fn load_usage(path: &Path) -> Result<Ingested<UsageRecord>> {
    load_source(
        path,
        "usage",
        &["sector", "tonnes"],
        &[("sector", "category"), ("tonnes", "amount")],
        |row, lookup| {
            let sector = match lookup.get(row.record, "sector") {
                Some(s) => s.to_string(),
                None => return RowParse::Dropped("missing sector name".to_string()),
            };
            let tonnes_raw = match lookup.get(row.record, "tonnes") {
                Some(s) => s,
                None => {
                    return RowParse::Fatal(DashboardError::validation_row(
                        "missing usage amount",
                        row.line,
                    ))
                }
            };
            let tonnes = match parse_f64(tonnes_raw) {
                Some(v) => v,
                None => {
                    return RowParse::Fatal(DashboardError::validation_row(
                        format!("non-numeric usage amount '{}'", tonnes_raw),
                        row.line,
                    ))
                }
            };
            RowParse::Ok(UsageRecord { sector, tonnes })
        },
    )
}

/// Load the long-format regional investment table
pub fn load_investment(path: &Path) -> Result<Ingested<InvestmentRecord>> {
    load_source(
        path,
        "investment",
        &["region", "year", "volume"],
        &[],
        |row, lookup| {
            let region = match lookup.get(row.record, "region") {
                Some(s) => s.to_string(),
                None => return RowParse::Dropped("missing region name".to_string()),
            };
            let year = match lookup.get(row.record, "year").and_then(|s| s.parse::<i32>().ok()) {
                Some(y) => y,
                None => return RowParse::Dropped("missing or non-numeric year".to_string()),
            };
            let volume = match lookup.get(row.record, "volume").and_then(parse_f64) {
                Some(v) => v,
                None => return RowParse::Dropped("missing or non-numeric volume".to_string()),
            };
            RowParse::Ok(InvestmentRecord { region, year, volume })
        },
    )
}

/// Load the headline table
pub fn load_headlines(path: &Path) -> Result<Ingested<HeadlineRecord>> {
    load_source(
        path,
        "headlines",
        &["country", "headline"],
        &[("headline", "title")],
        |row, lookup| {
            let country = match lookup.get(row.record, "country") {
                Some(s) => s.to_string(),
                None => return RowParse::Dropped("missing country".to_string()),
            };
            let headline = match lookup.get(row.record, "headline") {
                Some(s) => s.to_string(),
                None => return RowParse::Dropped("empty headline".to_string()),
            };
            RowParse::Ok(HeadlineRecord { country, headline })
        },
    )
}

/// Load the national reserves table
///
/// Country names are trimmed before use so that `" United States "`
/// matches `"United States"` downstream.
pub fn load_reserves(path: &Path) -> Result<Ingested<ReserveRecord>> {
    load_source(
        path,
        "reserves",
        &["country", "tonnes"],
        &[],
        |row, lookup| {
            let country = match lookup.get(row.record, "country") {
                Some(s) => s.trim().to_string(),
                None => return RowParse::Dropped("missing country".to_string()),
            };
            let tonnes = match lookup.get(row.record, "tonnes").and_then(parse_f64) {
                Some(v) => v,
                None => return RowParse::Dropped("missing or non-numeric tonnes".to_string()),
            };
            RowParse::Ok(ReserveRecord { country, tonnes })
        },
    )
}

/// Outcome of parsing a single data row
enum RowParse<T> {
    Ok(T),
    Dropped(String),
    Fatal(DashboardError),
}

/// One row handed to a per-source parser
struct RawRow<'a> {
    record: &'a StringRecord,
    line: usize,
}

/// Resolved column lookup for one source file
struct ColumnLookup {
    indices: HashMap<&'static str, usize>,
}

impl ColumnLookup {
    /// Fetch a trimmed, non-empty cell by canonical column name
    fn get<'a>(&self, record: &'a StringRecord, name: &str) -> Option<&'a str> {
        let idx = self.indices.get(name)?;
        record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Shared loader: open, resolve headers, iterate rows through `parse_row`
fn load_source<T>(
    path: &Path,
    source_name: &str,
    required: &[&'static str],
    aliases: &[(&'static str, &'static str)],
    parse_row: impl Fn(RawRow<'_>, &ColumnLookup) -> RowParse<T>,
) -> Result<Ingested<T>> {
    if !path.exists() {
        return Err(DashboardError::source_missing(source_name, path));
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let header_map = build_header_map(&headers);
    let lookup = resolve_columns(source_name, &header_map, required, aliases)?;

    let mut records = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header row; CSV lines are 1-based
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {}", e),
                });
                continue;
            }
        };

        match parse_row(RawRow { record: &record, line }, &lookup) {
            RowParse::Ok(value) => records.push(value),
            RowParse::Dropped(message) => {
                debug!(source = source_name, line, %message, "dropping row");
                row_errors.push(RowError { line, message });
            }
            RowParse::Fatal(err) => return Err(err),
        }
    }

    if !row_errors.is_empty() {
        warn!(
            source = source_name,
            dropped = row_errors.len(),
            rows_read,
            "data-quality defects during ingest"
        );
    }
    debug!(
        source = source_name,
        rows = records.len(),
        "ingest complete"
    );

    Ok(Ingested {
        records,
        rows_read,
        row_errors,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes emit a UTF-8 BOM on the first header and
    // incidental padding around the rest; both would defeat column matching.
    let name = name.trim().trim_start_matches('\u{feff}').trim();
    name.to_ascii_lowercase()
}

/// Map canonical column names to indices, honoring aliases; every missing
/// required column is reported at once
fn resolve_columns(
    source_name: &str,
    header_map: &HashMap<String, usize>,
    required: &[&'static str],
    aliases: &[(&'static str, &'static str)],
) -> Result<ColumnLookup> {
    let mut indices = HashMap::new();
    let mut missing = Vec::new();

    for &name in required {
        let alias = aliases
            .iter()
            .find(|(canonical, _)| *canonical == name)
            .map(|(_, alias)| *alias);

        let idx = header_map
            .get(name)
            .or_else(|| alias.and_then(|a| header_map.get(a)));

        match idx {
            Some(&idx) => {
                indices.insert(name, idx);
            }
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(DashboardError::schema(source_name, missing));
    }
    Ok(ColumnLookup { indices })
}

/// Parse a month-granularity date; accepted layouts: `YYYY-MM`,
/// `YYYY-MM-DD` (day discarded), `YYYY/MM`
fn parse_month(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.with_day(1);
    }
    // Month-granularity forms get a synthetic first-of-month day
    let padded = format!("{}-01", s.replace('/', "-"));
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

fn parse_f64(s: &str) -> Option<f64> {
    let v = s.replace(',', "").parse::<f64>().ok()?;
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}
