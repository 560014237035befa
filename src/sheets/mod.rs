mod auth;
mod client;

pub use client::SheetsClient;

use crate::error::Result;
use crate::models::{CellAddress, TransactionRow};
use async_trait::async_trait;

#[async_trait]
pub trait SheetOperations {
    /// Number of rows returned for an A1 range. Empty ranges yield zero.
    async fn count_rows(&self, range: &str) -> Result<usize>;

    /// Write a single row starting at `address`, stored verbatim.
    async fn write_row(&self, address: &CellAddress, row: &TransactionRow) -> Result<()>;
}
