use crate::error::ExportError;
use crate::model::{InventoryReport, LineStyle, RouteStatus};
use std::fs::File;
use std::path::Path;

/// Writes the route table, one row per route record, in document order.
pub fn export_csv<P: AsRef<Path>>(report: &InventoryReport, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    write_routes(report, file)
}

/// Same table as [`export_csv`], to any writer.
pub fn write_routes<W: std::io::Write>(
    report: &InventoryReport,
    out: W,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record([
        "Folder",
        "Group",
        "Item",
        "Distance (m)",
        "Color",
        "Line Style",
        "Status",
    ])?;

    for route in &report.routes {
        writer.write_record([
            route.folder.as_str(),
            route.group.as_deref().unwrap_or(""),
            route.item.as_str(),
            format!("{:.0}", route.distance_m).as_str(),
            route.color.as_str(),
            match route.line_style {
                LineStyle::Solid => "solid",
                LineStyle::Dashed => "dashed",
            },
            match route.status {
                RouteStatus::InProgress => "in_progress",
                RouteStatus::Completed => "completed",
                RouteStatus::Other => "other",
            },
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
