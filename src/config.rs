use std::path::PathBuf;

/// OAuth client secret downloaded from the Google Cloud console.
pub const CREDENTIALS_FILE: &str = "credentials.json";

/// Token cache written after the first interactive authorization.
pub const TOKEN_CACHE_FILE: &str = "token.json";

/// Run configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    pub csv_path: PathBuf,
    pub credentials_path: PathBuf,
    pub token_cache_path: PathBuf,
    pub layout: SheetLayout,
}

impl Config {
    pub fn new(spreadsheet_id: impl Into<String>, csv_path: impl Into<PathBuf>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            csv_path: csv_path.into(),
            credentials_path: PathBuf::from(CREDENTIALS_FILE),
            token_cache_path: PathBuf::from(TOKEN_CACHE_FILE),
            layout: SheetLayout::default(),
        }
    }
}

/// Where transactions live inside the spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub tab: String,
    /// First row holding transaction data (1-based).
    pub first_row: u32,
    /// Column each row is written from.
    pub write_column: char,
    /// Last column of the range scanned for existing rows.
    pub last_column: char,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            tab: "Transactions".to_string(),
            first_row: 5,
            write_column: 'B',
            last_column: 'E',
        }
    }
}

impl SheetLayout {
    /// Range covering previously written rows, e.g. `Transactions!B5:E`.
    pub fn existing_rows_range(&self) -> String {
        format!(
            "{}!{}{}:{}",
            self.tab, self.write_column, self.first_row, self.last_column
        )
    }
}
