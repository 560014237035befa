use crate::error::{AppError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Load every record of a CSV file, header included as record 0.
///
/// Records may have any number of fields; width filtering is left to the
/// caller.
#[instrument(name = "Reading CSV", skip_all, fields(path = %path.display()))]
pub fn read_records(path: &Path) -> Result<Vec<StringRecord>> {
    let data = fs::read(path).map_err(|e| {
        AppError::Config(format!("Unable to read CSV file {}: {}", path.display(), e))
    })?;

    let records = parse_records(&data)?;
    debug!(records = records.len(), "Parsed CSV");

    Ok(records)
}

fn parse_records(data: &[u8]) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}
