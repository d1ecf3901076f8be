pub mod loaders;
pub mod record;

pub use loaders::load_csv_records;
pub use record::{RawRecord, Record};
