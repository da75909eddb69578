pub mod checks;
pub mod engine;

pub use checks::check_type;
pub use engine::validate_rows;
