//! Data aggregation for turning raw source rows into chart-ready shapes
//!
//! Each aggregator is a pure transform: sources are read-only snapshots and
//! every derived shape is computed fresh on each render. Field-level
//! validation happens at ingest; the aggregators here only fail on
//! conditions that cannot be detected row by row (the pivot key collision).

use aurum_common::{
    DashboardError, HeadlineRecord, InvestmentRecord, PriceRecord, Result, UsageRecord,
};
use chrono::Datelike;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, instrument};

/// Default trailing window for the price trend, in years
pub const DEFAULT_WINDOW_YEARS: u32 = 20;

/// One year's average price, derived from the monthly series
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyPricePoint {
    /// Calendar year
    pub year: i32,
    /// Arithmetic mean of the year's surviving monthly prices
    pub average_price: f64,
}

/// Aggregator for the yearly average price series
///
/// Groups monthly prices by calendar year, averages each group, then keeps
/// only years inside the trailing window measured from `reference_year` —
/// the current calendar year at render time, not the newest year in the
/// data, so the window stays put even when the source lags.
#[derive(Debug)]
pub struct YearlyAverageAggregator {
    /// Year the trailing window is measured from
    pub reference_year: i32,
    /// Window length in years
    pub window_years: u32,
}

impl YearlyAverageAggregator {
    /// Create an aggregator with the default 20-year window
    pub fn new(reference_year: i32) -> Self {
        Self {
            reference_year,
            window_years: DEFAULT_WINDOW_YEARS,
        }
    }

    /// Create an aggregator with a caller-supplied window
    pub fn with_window(reference_year: i32, window_years: u32) -> Self {
        Self {
            reference_year,
            window_years,
        }
    }

    /// Aggregate monthly prices into windowed yearly averages
    ///
    /// Empty input yields empty output; a window larger than the data span
    /// yields every year present.
    #[instrument(skip(self, records))]
    pub fn aggregate(&self, records: &[PriceRecord]) -> Vec<YearlyPricePoint> {
        let mut sums: HashMap<i32, (f64, u32)> = HashMap::new();

        for record in records {
            let entry = sums.entry(record.date.year()).or_insert((0.0, 0));
            entry.0 += record.price;
            entry.1 += 1;
        }

        let cutoff = self.reference_year - self.window_years as i32;
        let mut result: Vec<YearlyPricePoint> = sums
            .into_iter()
            .filter(|(year, _)| *year >= cutoff)
            .map(|(year, (sum, count))| YearlyPricePoint {
                year,
                average_price: sum / f64::from(count),
            })
            .collect();

        result.sort_by_key(|point| point.year);

        debug!("aggregated {} yearly price points", result.len());
        result
    }
}

impl Default for YearlyAverageAggregator {
    fn default() -> Self {
        // Reference year must come from the caller's clock; a default of
        // year zero keeps accidental use visible in tests
        Self::new(0)
    }
}

/// Aggregator fixing the presentation order of the sector usage chart
///
/// Sorts by amount descending with a stable sort, so equal amounts keep
/// their input order and the chart is deterministic across runs. The set
/// and multiset of rows never change.
#[derive(Debug, Default)]
pub struct SectorUsageAggregator;

impl SectorUsageAggregator {
    /// Create a new sector usage aggregator
    pub fn new() -> Self {
        Self
    }

    /// Return the records sorted by amount descending, ties in input order
    #[instrument(skip(self, records))]
    pub fn aggregate(&self, records: &[UsageRecord]) -> Vec<UsageRecord> {
        let mut result = records.to_vec();
        result.sort_by(|a, b| {
            b.tonnes
                .partial_cmp(&a.tonnes)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        debug!("ordered {} usage rows", result.len());
        result
    }
}

/// Region-by-year investment grid
///
/// Rows are the sorted distinct regions, columns the sorted distinct years.
/// A cell holds `Some(volume)` when the input had that pair and `None` when
/// it did not — zero is a valid recorded volume and is never used to mean
/// absence.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentGrid {
    regions: Vec<String>,
    years: Vec<i32>,
    cells: Vec<Option<f64>>,
}

impl InvestmentGrid {
    /// Grid with no rows and no columns
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
            years: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Row keys, sorted
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Column keys, sorted
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Cell value by row and column index
    pub fn value(&self, region_idx: usize, year_idx: usize) -> Option<f64> {
        self.cells.get(region_idx * self.years.len() + year_idx).copied().flatten()
    }

    /// True when the grid has no cells at all
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() || self.years.is_empty()
    }

    /// Minimum and maximum recorded volume, if any cell is populated
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for value in self.cells.iter().flatten() {
            range = Some(match range {
                None => (*value, *value),
                Some((lo, hi)) => (lo.min(*value), hi.max(*value)),
            });
        }
        range
    }
}

/// Aggregator pivoting long-format investment rows into an [`InvestmentGrid`]
///
/// A duplicate `(region, year)` pair is ambiguous — summing and overwriting
/// are both domain-significant — so it is rejected as a validation failure
/// rather than resolved silently.
#[derive(Debug, Default)]
pub struct InvestmentPivotAggregator;

impl InvestmentPivotAggregator {
    /// Create a new pivot aggregator
    pub fn new() -> Self {
        Self
    }

    /// Pivot the rows; empty input yields an empty grid
    #[instrument(skip(self, records))]
    pub fn aggregate(&self, records: &[InvestmentRecord]) -> Result<InvestmentGrid> {
        if records.is_empty() {
            return Ok(InvestmentGrid::empty());
        }

        let mut values: HashMap<(&str, i32), f64> = HashMap::new();
        let mut regions: BTreeSet<&str> = BTreeSet::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();

        for record in records {
            let key = (record.region.as_str(), record.year);
            if values.insert(key, record.volume).is_some() {
                return Err(DashboardError::validation(format!(
                    "duplicate investment entry for region '{}' and year {}",
                    record.region, record.year
                )));
            }
            regions.insert(&record.region);
            years.insert(record.year);
        }

        let regions: Vec<String> = regions.into_iter().map(str::to_string).collect();
        let years: Vec<i32> = years.into_iter().collect();

        let mut cells = Vec::with_capacity(regions.len() * years.len());
        for region in &regions {
            for year in &years {
                cells.push(values.get(&(region.as_str(), *year)).copied());
            }
        }

        debug!(
            regions = regions.len(),
            years = years.len(),
            "pivoted investment grid"
        );
        Ok(InvestmentGrid {
            regions,
            years,
            cells,
        })
    }
}

/// Fixed stop-word set for headline tokenization
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "after", "again", "all", "also", "amid", "an", "and", "are", "as", "at",
        "be", "been", "but", "by", "can", "could", "did", "do", "does", "for", "from", "had",
        "has", "have", "he", "her", "his", "how", "if", "in", "into", "is", "it", "its", "may",
        "more", "most", "new", "no", "not", "of", "off", "on", "or", "our", "over", "said",
        "says", "she", "should", "since", "so", "than", "that", "the", "their", "them", "then",
        "there", "they", "this", "to", "under", "up", "was", "were", "what", "when", "which",
        "while", "who", "why", "will", "with", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Aggregator computing per-country word frequencies from headlines
///
/// The caller filters headlines to the selected country first; this
/// transform only cleans, de-noises and counts.
#[derive(Debug, Default)]
pub struct WordFrequencyAggregator;

impl WordFrequencyAggregator {
    /// Create a new word frequency aggregator
    pub fn new() -> Self {
        Self
    }

    /// Count normalized tokens across the given headlines
    ///
    /// Lowercases, strips everything that is not an ASCII lowercase letter
    /// or whitespace, removes whole-word occurrences of `country`
    /// (case-insensitive), then drops stop-words and single-character
    /// tokens. An empty result is a legitimate "nothing to display" state.
    #[instrument(skip(self, headlines))]
    pub fn aggregate(&self, country: &str, headlines: &[HeadlineRecord]) -> HashMap<String, u32> {
        let mut blob = String::new();
        for record in headlines {
            blob.push_str(&record.headline);
            blob.push(' ');
        }

        let tokens = tokenize(&blob);
        let country_tokens = tokenize(country);

        let mut counts: HashMap<String, u32> = HashMap::new();
        let mut i = 0;
        while i < tokens.len() {
            // Whole-word removal of the filter term, matched as a token
            // sequence so multi-word countries are handled too
            if !country_tokens.is_empty()
                && tokens[i..].len() >= country_tokens.len()
                && tokens[i..i + country_tokens.len()] == country_tokens[..]
            {
                i += country_tokens.len();
                continue;
            }

            let token = &tokens[i];
            if token.len() > 1 && !STOP_WORDS.contains(token.as_str()) {
                *counts.entry(token.clone()).or_insert(0) += 1;
            }
            i += 1;
        }

        debug!(country, distinct = counts.len(), "counted headline tokens");
        counts
    }
}

/// Lowercase, strip non-letters, collapse whitespace, split
fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}
