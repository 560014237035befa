use crate::error::{AppError, Result};
use std::fmt;
use std::str::FromStr;

/// A single cell in A1 notation scoped to a tab, e.g. `Transactions!B12`.
///
/// Only single-letter columns are supported; the cursor never moves
/// horizontally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAddress {
    pub tab: String,
    pub column: char,
    pub row: u32,
}

impl CellAddress {
    pub fn new(tab: impl Into<String>, column: char, row: u32) -> Result<Self> {
        let address = Self {
            tab: tab.into(),
            column,
            row,
        };

        if address.tab.is_empty() || !column.is_ascii_uppercase() || row == 0 {
            return Err(AppError::MalformedAddress(address.to_string()));
        }

        Ok(address)
    }

    /// The cell directly below this one.
    pub fn next_row(&self) -> Result<Self> {
        let row = self
            .row
            .checked_add(1)
            .ok_or_else(|| AppError::MalformedAddress(self.to_string()))?;

        Ok(Self {
            tab: self.tab.clone(),
            column: self.column,
            row,
        })
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}!{}{}", self.tab, self.column, self.row)
    }
}

impl FromStr for CellAddress {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || AppError::MalformedAddress(s.to_string());

        let (tab, cell) = s.split_once('!').ok_or_else(malformed)?;

        let mut chars = cell.chars();
        let column = chars.next().ok_or_else(malformed)?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let row: u32 = digits.parse().map_err(|_| malformed())?;

        Self::new(tab, column, row).map_err(|_| malformed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let address: CellAddress = "Transactions!B12".parse().unwrap();
        assert_eq!(address.tab, "Transactions");
        assert_eq!(address.column, 'B');
        assert_eq!(address.row, 12);
        assert_eq!(address.to_string(), "Transactions!B12");
    }

    #[test]
    fn test_tab_with_spaces() {
        let address: CellAddress = "Monthly Budget!C7".parse().unwrap();
        assert_eq!(address.tab, "Monthly Budget");
        assert_eq!(address.to_string(), "Monthly Budget!C7");
    }

    fn advance_address(address: &str) -> Result<String> {
        Ok(address.parse::<CellAddress>()?.next_row()?.to_string())
    }

    #[test]
    fn test_advance_address() {
        assert_eq!(advance_address("Transactions!B5").unwrap(), "Transactions!B6");
        assert_eq!(advance_address("T!Z9").unwrap(), "T!Z10");
        assert_eq!(advance_address("T!A99").unwrap(), "T!A100");
    }

    #[test]
    fn test_repeated_advance_is_deterministic() {
        let start: CellAddress = "Transactions!B5".parse().unwrap();

        let walk = |n: u32| {
            let mut address = start.clone();
            for _ in 0..n {
                address = address.next_row().unwrap();
            }
            address
        };

        assert_eq!(walk(10), walk(10));
        assert_eq!(walk(10).to_string(), "Transactions!B15");
        assert_eq!(start.to_string(), "Transactions!B5");
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        let cases = [
            "",
            "Transactions",
            "Transactions!",
            "Transactions!B",
            "Transactions!12",
            "Transactions!AB12",
            "Transactions!b12",
            "Transactions!B0",
            "Transactions!B-1",
            "Transactions!B1:E",
            "!B5",
            "A!B!C5",
            "Transactions!B99999999999",
        ];

        for case in cases {
            match case.parse::<CellAddress>() {
                Err(AppError::MalformedAddress(raw)) => assert_eq!(raw, case),
                other => panic!("expected MalformedAddress for {:?}, got {:?}", case, other),
            }
        }
    }

    #[test]
    fn test_next_row_overflow() {
        let address = CellAddress::new("T", 'B', u32::MAX).unwrap();
        assert!(matches!(
            address.next_row(),
            Err(AppError::MalformedAddress(_))
        ));
    }
}
