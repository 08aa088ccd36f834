pub mod amount;
pub mod model;
pub mod text;

pub use amount::{format_amount, parse_amount, try_parse_amount};
