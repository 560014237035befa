use super::SheetOperations;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{CellAddress, TransactionRow};
use crate::sheets::auth::create_and_verify_authenticator;
use async_trait::async_trait;
use google_sheets4::api::{Scope, Sheets, ValueRange};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::{debug, instrument};

// Read and write access to spreadsheets
pub(crate) const AUTH_SCOPE: Scope = Scope::Spreadsheet;

pub struct SheetsClient {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Create a new SheetsClient with authenticated access
    pub async fn new(config: &Config) -> Result<Self> {
        let auth =
            create_and_verify_authenticator(&config.credentials_path, &config.token_cache_path)
                .await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|e| AppError::Sheets(format!("Failed to load native TLS roots: {}", e)))?
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

        Ok(Self {
            hub: Sheets::new(client, auth),
            spreadsheet_id: config.spreadsheet_id.clone(),
        })
    }

    pub fn spreadsheet_url(&self) -> String {
        format!("https://docs.google.com/spreadsheets/d/{}", self.spreadsheet_id)
    }
}

#[async_trait]
impl SheetOperations for SheetsClient {
    #[instrument(name = "Reading range", skip(self))]
    async fn count_rows(&self, range: &str) -> Result<usize> {
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range)
            .major_dimension("ROWS")
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| {
                AppError::Sheets(format!("Unable to retrieve data from '{}': {}", range, e))
            })?;

        let rows = response.values.map(|values| values.len()).unwrap_or(0);
        debug!(rows, "Read existing rows");

        Ok(rows)
    }

    #[instrument(name = "Writing row", skip(self, row))]
    async fn write_row(&self, address: &CellAddress, row: &TransactionRow) -> Result<()> {
        let range = address.to_string();
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: Some(range.clone()),
            values: Some(vec![row.cells().iter().cloned().map(Into::into).collect()]),
        };

        self.hub
            .spreadsheets()
            .values_update(value_range, &self.spreadsheet_id, &range)
            .value_input_option("RAW")
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Unable to write row at {}: {}", range, e)))?;

        Ok(())
    }
}
