// Parsing utilities
pub mod parse_flag;
pub mod parse_int;

pub use parse_flag::{parse_flag, parse_optional_flag};
pub use parse_int::{parse_optional_id, parse_optional_int};
