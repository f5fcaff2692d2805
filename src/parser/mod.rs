pub mod kml;

pub use crate::error::ParseError;
pub use kml::{parse_kml_file, parse_kml_str};
