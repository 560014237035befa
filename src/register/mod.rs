mod engine;
mod reader;

pub use engine::RegisterEngine;
pub use reader::read_records;
