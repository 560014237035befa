mod register;

use crate::config::Config;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheet-register")]
#[command(about = "Append transactions from a CSV file to a Google Sheets spreadsheet", long_about = None)]
#[command(version)]
pub struct Cli {
    /// ID of the target spreadsheet
    pub spreadsheet_id: String,

    /// CSV file of transactions; the first line is treated as a header
    pub csv_path: PathBuf,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config::new(self.spreadsheet_id.clone(), self.csv_path.clone())
    }

    pub async fn run(&self) -> Result<()> {
        register::execute(&self.config()).await
    }
}
