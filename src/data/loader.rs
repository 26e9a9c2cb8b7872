//! Dataset loading from the source CSV file.
//!
//! Parses the raw emissions table into a [`Dataset`] of typed rows. The file
//! is read once at startup; a failed load is fatal and there is no retry
//! policy. Columns beyond the required ten are ignored.

use crate::constants::REQUIRED_COLUMNS;
use crate::data::error::{DataError, DataResult};
use crate::types::{Dataset, EmissionSource, RawRecord};
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Load the dataset from a CSV file.
///
/// Fails with [`DataError::Io`] if the file is missing or unreadable,
/// [`DataError::EmptyFile`] / [`DataError::MissingColumns`] if the header is
/// unusable, and [`DataError::BadRow`] on a malformed data row.
pub fn load_dataset(path: &Path) -> DataResult<Dataset> {
    let start = std::time::Instant::now();
    let content = std::fs::read_to_string(path)?;
    let dataset = parse_dataset(&content)?;

    info!(
        rows = dataset.len(),
        countries = dataset.countries().len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "loaded emissions dataset"
    );
    Ok(dataset)
}

/// Parse CSV content into a [`Dataset`].
pub fn parse_dataset(content: &str) -> DataResult<Dataset> {
    let mut lines = content.lines().enumerate();

    let (_, header_line) = lines.next().ok_or(DataError::EmptyFile)?;
    let headers = split_csv_line(header_line);
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut records = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells = split_csv_line(line);
        // Header is line 1; `idx` is zero-based over all lines
        records.push(layout.parse_row(&cells, idx + 1)?);
    }

    Ok(Dataset::from_records(records))
}

/// Indices of the required columns within the header row
struct ColumnLayout {
    country: usize,
    iso_code: usize,
    year: usize,
    co2_per_capita: usize,
    sources: [usize; 6],
}

impl ColumnLayout {
    fn from_headers(headers: &[Cow<'_, str>]) -> DataResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataError::MissingColumns { columns: missing });
        }

        let mut sources = [0usize; 6];
        for (slot, source) in sources.iter_mut().zip(EmissionSource::ALL) {
            // Presence verified above
            *slot = find(source.raw_key()).unwrap_or_default();
        }

        Ok(Self {
            country: find("country").unwrap_or_default(),
            iso_code: find("iso_code").unwrap_or_default(),
            year: find("year").unwrap_or_default(),
            co2_per_capita: find("co2_per_capita").unwrap_or_default(),
            sources,
        })
    }

    fn parse_row(&self, cells: &[Cow<'_, str>], line: usize) -> DataResult<RawRecord> {
        let cell = |i: usize| cells.get(i).map(|s| s.trim()).unwrap_or("");

        let year_cell = cell(self.year);
        let year: i32 = year_cell.parse().map_err(|_| DataError::BadRow {
            line,
            reason: format!("unparseable year {:?}", year_cell),
        })?;

        let number = |i: usize| -> DataResult<Option<f64>> {
            let raw = cell(i);
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse::<f64>().map(Some).map_err(|_| DataError::BadRow {
                line,
                reason: format!("unparseable number {:?}", raw),
            })
        };

        Ok(RawRecord {
            country: cell(self.country).to_string(),
            iso_code: cell(self.iso_code).to_string(),
            year,
            co2_per_capita: number(self.co2_per_capita)?,
            coal: number(self.sources[0])?,
            oil: number(self.sources[1])?,
            gas: number(self.sources[2])?,
            cement: number(self.sources[3])?,
            flaring: number(self.sources[4])?,
            other_industry: number(self.sources[5])?,
        })
    }
}

/// Split a CSV line respecting quoted fields
fn split_csv_line(line: &str) -> Vec<Cow<'_, str>> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            result.push(unquote(&line[start..i]));
            start = i + 1;
        }
    }
    result.push(unquote(&line[start..]));

    result
}

/// Remove surrounding quotes from a field and collapse escaped `""` pairs
fn unquote(s: &str) -> Cow<'_, str> {
    let trimmed = s.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        let inner = &trimmed[1..trimmed.len() - 1];
        if inner.contains("\"\"") {
            Cow::Owned(inner.replace("\"\"", "\""))
        } else {
            Cow::Borrowed(inner)
        }
    } else {
        Cow::Borrowed(trimmed)
    }
}
