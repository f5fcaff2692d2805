//! Error and warning types for KML Inventory.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a KML document.
///
/// These are the only fatal failures: once a document tree exists, every
/// per-item problem becomes a [`Warning`] instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the KML file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The markup is not well-formed XML.
    #[error("invalid XML: {message}")]
    InvalidXml { message: String },

    /// The XML has no `kml`, `Document` or `Folder` root to walk.
    #[error("no KML document found in input")]
    MissingDocument,
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}

/// Recoverable problems found while building an inventory.
///
/// The affected folder or item is skipped (or given a placeholder) and
/// processing continues with its siblings.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A folder or placemark has no `<name>`.
    #[error("{element} without a name, using placeholder")]
    MissingName { element: String },

    /// A style color is not 8 hex digits.
    #[error("style '{style}' has malformed color '{value}'")]
    MalformedColor { style: String, value: String },

    /// A coordinate list could not be read; the item was skipped.
    #[error("item '{item}' in '{folder}' skipped: {reason}")]
    MalformedCoordinate {
        folder: String,
        item: String,
        reason: String,
    },

    /// Folder nesting went past the configured limit; the subtree was not visited.
    #[error("folder '{folder}' at depth {depth} exceeds the nesting limit")]
    DepthExceeded { folder: String, depth: usize },
}
