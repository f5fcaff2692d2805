//! # KML Inventory
//!
//! Builds a fiber network inventory from a KML document.
//!
//! ## Features
//!
//! - Classify folders by name (`LINK`, `LINK PARCEIROS`, `CIDADES`, `GPON`, `CTO'S`, ...)
//! - Geodesic length of every route, with per-folder completion status
//! - POP / cabinet / nested route counts under distribution hubs
//! - City markers with resolved style colors
//! - Folder, hub and grand totals; export to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use kml_inventory::inventory::{build_inventory, summarize, InventoryOptions};
//! use kml_inventory::parser::parse_kml_file;
//!
//! let document = parse_kml_file("rede.kml").expect("Failed to parse");
//! let report = build_inventory(&document, &InventoryOptions::default());
//! let summary = summarize(&report);
//! println!("Routes: {}", report.routes.len());
//! println!("Trunk total: {:.0} m", summary.trunk_total_m);
//! ```

pub mod error;
pub mod export;
pub mod inventory;
pub mod model;
pub mod parser;
