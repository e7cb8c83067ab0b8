//! Fix-stream processing: sentence parsing and geodesic distance

pub mod geodesy;
pub mod parser;

pub use geodesy::{distance_between_m, distance_m, distance_to_point_m};
pub use parser::{ParseError, ParseResult, SentenceParser};
