pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use self::csv::{export_csv, write_routes};
pub use self::json::export_json;
