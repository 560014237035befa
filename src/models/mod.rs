pub mod address;
pub mod row;

pub use address::CellAddress;
pub use row::TransactionRow;
