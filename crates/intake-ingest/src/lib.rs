pub mod accept;
pub mod parser;

pub use accept::{AcceptPolicy, accept_file, accept_text};
pub use parser::{parse_line, parse_text};
