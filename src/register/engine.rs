use crate::config::SheetLayout;
use crate::error::{AppError, Result};
use crate::models::{CellAddress, TransactionRow};
use crate::sheets::SheetOperations;
use csv::StringRecord;
use indicatif::ProgressStyle;
use tracing::{Span, debug, info, instrument};
use tracing_indicatif::span_ext::IndicatifSpanExt;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSummary {
    pub written: usize,
    pub skipped: usize,
    /// First free cell once all rows are written.
    pub next: CellAddress,
}

pub struct RegisterEngine<SC> {
    layout: SheetLayout,
    sheets_client: SC,
}

impl<SC> RegisterEngine<SC>
where
    SC: SheetOperations + Sync,
{
    pub fn new(layout: SheetLayout, sheets_client: SC) -> Self {
        Self {
            layout,
            sheets_client,
        }
    }

    /// First unoccupied row below the existing transactions.
    #[instrument(name = "Locating next row", skip_all)]
    pub async fn locate_next_address(&self) -> Result<CellAddress> {
        let range = self.layout.existing_rows_range();
        let existing = self.sheets_client.count_rows(&range).await?;

        let row = u32::try_from(existing)
            .ok()
            .and_then(|existing| existing.checked_add(self.layout.first_row))
            .ok_or_else(|| {
                AppError::Sheets(format!("Range '{}' returned {} rows", range, existing))
            })?;

        let next = CellAddress::new(self.layout.tab.clone(), self.layout.write_column, row)?;
        info!(%next, existing, "Located next row");

        Ok(next)
    }

    /// Write every 4-field record after the header, one row per call,
    /// starting at `start`. Stops at the first failed write.
    #[instrument(name = "Register", skip_all, fields(start = %start))]
    pub async fn register(
        &self,
        start: CellAddress,
        records: &[StringRecord],
    ) -> Result<RegisterSummary> {
        let span = Span::current();
        span.pb_set_style(
            &ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
            )
            .map_err(|e| AppError::Other(e.into()))?,
        );
        span.pb_set_message("Writing rows");
        span.pb_set_length(records.len().saturating_sub(1) as u64);

        let mut next = start;
        let mut written = 0;
        let mut skipped = 0;

        // Record 0 is the header
        for (idx, record) in records.iter().enumerate().skip(1) {
            match TransactionRow::from_record(record) {
                Some(row) => {
                    self.sheets_client.write_row(&next, &row).await?;
                    debug!(address = %next, line = idx + 1, "Row written");
                    next = next.next_row()?;
                    written += 1;
                }
                None => {
                    debug!(line = idx + 1, fields = record.len(), "Skipping record");
                    skipped += 1;
                }
            }
            span.pb_inc(1);
        }

        Ok(RegisterSummary {
            written,
            skipped,
            next,
        })
    }
}
