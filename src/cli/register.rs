use crate::config::Config;
use crate::error::Result;
use crate::register::{RegisterEngine, read_records};
use crate::sheets::SheetsClient;
use tracing::info;

pub async fn execute(config: &Config) -> Result<()> {
    let sheets_client = SheetsClient::new(config).await?;
    let url = sheets_client.spreadsheet_url();

    let engine = RegisterEngine::new(config.layout.clone(), sheets_client);
    let next = engine.locate_next_address().await?;

    let records = read_records(&config.csv_path)?;
    let summary = engine.register(next, &records).await?;

    info!(
        url = url,
        written = summary.written,
        skipped = summary.skipped,
        next = %summary.next,
        "Register completed"
    );

    Ok(())
}
