pub mod records;
pub mod sink;

pub use records::{Record, build_records};
pub use sink::{FnImporter, Importer, run_import};
