//! Small helpers shared across layers.

pub mod int_parser;

pub use int_parser::parse_leading_int;
