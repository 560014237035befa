use csv::StringRecord;

/// Number of fields a CSV record must carry to be written.
pub const RECORD_WIDTH: usize = 4;

/// A CSV record rearranged into sheet column order.
///
/// Input `[f0, f1, f2, f3]` lands in the sheet as `[f0, f3, f2, f1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow([String; RECORD_WIDTH]);

impl TransactionRow {
    /// Returns `None` unless the record has exactly four fields.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        if record.len() != RECORD_WIDTH {
            return None;
        }

        Some(Self([
            record[0].to_string(),
            record[3].to_string(),
            record[2].to_string(),
            record[1].to_string(),
        ]))
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }
}


#[cfg(test)]
mod tests {
    use super::test_helpers::record;
    use super::*;

    #[test]
    fn test_reorders_fields() {
        let row = TransactionRow::from_record(&record(&["a", "b", "c", "d"])).unwrap();
        assert_eq!(row.cells(), ["a", "d", "c", "b"]);
    }

    #[test]
    fn test_reorder_keeps_values_verbatim() {
        let row =
            TransactionRow::from_record(&record(&["2024-01-01", "m1", "10.00", "food"])).unwrap();
        assert_eq!(row.cells(), ["2024-01-01", "food", "10.00", "m1"]);
    }

    #[test]
    fn test_rejects_other_widths() {
        assert!(TransactionRow::from_record(&record(&[])).is_none());
        assert!(TransactionRow::from_record(&record(&[""])).is_none());
        assert!(TransactionRow::from_record(&record(&["a", "b", "c"])).is_none());
        assert!(TransactionRow::from_record(&record(&["a", "b", "c", "d", "e"])).is_none());
    }

    #[test]
    fn test_accepts_empty_fields() {
        let row = TransactionRow::from_record(&record(&["", "", "", ""])).unwrap();
        assert_eq!(row.cells(), ["", "", "", ""]);
    }
}
