pub mod column;
pub mod error;
pub mod mapping;
pub mod report;
pub mod table;

pub use column::{ColumnDef, ColumnType, ColumnValidator, Validity};
pub use error::{IntakeError, Result};
pub use mapping::{Mapping, MappingSet};
pub use report::{ImportReport, ValidationIssue};
pub use table::ParsedFile;
