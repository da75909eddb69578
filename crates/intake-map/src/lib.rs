pub mod engine;
pub mod summary;

pub use engine::{auto_map, required_targets_mapped, unmapped_required};
pub use summary::MappingSummary;
