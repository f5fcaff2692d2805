use crate::error::ExportError;
use crate::model::{InventoryReport, InventorySummary};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct Bundle<'a> {
    report: &'a InventoryReport,
    summary: &'a InventorySummary,
}

/// Writes records, warnings and summaries as one pretty-printed JSON object.
pub fn export_json<P: AsRef<Path>>(
    report: &InventoryReport,
    summary: &InventorySummary,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(&Bundle { report, summary })?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
