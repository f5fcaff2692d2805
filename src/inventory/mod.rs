//! Single pass over a [`KmlDocument`] producing an [`InventoryReport`].
//!
//! Folders are classified by name on every visit ([`classify`]) and handed
//! to the matching extractor:
//!
//! - `LINK` / `LINK PARCEIROS` folders to the route extractor
//! - `GPON` folders to the hub walker (POPs, `CTO'S` cabinets)
//! - `CIDADES` folders to the city marker extractor
//!
//! Anything else is descended into. Per-item problems never abort the pass;
//! they are collected as [`Warning`]s next to the partial results.

pub mod aggregate;
pub mod cities;
pub mod classify;
pub mod geometry;
pub mod hubs;
pub mod routes;
pub mod style;

use crate::error::Warning;
use crate::model::{Folder, InventoryReport, KmlDocument, Placemark};
use tracing::{debug, warn};

pub use aggregate::{completion_pct, summarize};
pub use classify::{classify, Category};
pub use geometry::{parse_coordinates, path_length};
pub use style::{AbgrColor, StyleTable};

/// Name used for folders and items without a `<name>`.
pub const PLACEHOLDER_NAME: &str = "(sem nome)";

/// Tunables of an inventory pass.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryOptions {
    /// Folders nested deeper than this are not visited.
    pub max_depth: usize,
    /// Trunk route color when neither the item style nor the folder name gives one.
    pub trunk_color: String,
    /// Color forced on every partner route.
    pub partner_color: String,
    /// City marker color when the item has no style color.
    pub city_color: Option<String>,
}

impl Default for InventoryOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            trunk_color: "#0000FF".to_string(),
            partner_color: "#FF00FF".to_string(),
            city_color: Some("#FF0000".to_string()),
        }
    }
}

/// Builds the inventory of one document.
///
/// # Example
///
/// ```no_run
/// use kml_inventory::inventory::{build_inventory, summarize, InventoryOptions};
/// use kml_inventory::parser::parse_kml_file;
///
/// let document = parse_kml_file("rede.kml")?;
/// let report = build_inventory(&document, &InventoryOptions::default());
/// let summary = summarize(&report);
/// println!("trunk total: {:.0} m", summary.trunk_total_m);
/// # Ok::<(), kml_inventory::error::ParseError>(())
/// ```
#[must_use]
pub fn build_inventory(document: &KmlDocument, options: &InventoryOptions) -> InventoryReport {
    let mut warnings = Vec::new();
    let styles = StyleTable::from_document(document, &mut warnings);
    debug!(styles = styles.len(), "style table built");

    let mut pass = Pass {
        options,
        styles,
        report: InventoryReport {
            document: document
                .name
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            warnings,
            ..InventoryReport::default()
        },
    };

    // The root container itself is never classified, only its folders.
    for folder in document.root.folders() {
        pass.visit(folder, 1);
    }

    pass.report
}

/// State shared by the extractors during one pass.
pub(crate) struct Pass<'a> {
    options: &'a InventoryOptions,
    styles: StyleTable,
    report: InventoryReport,
}

impl Pass<'_> {
    fn visit(&mut self, folder: &Folder, depth: usize) {
        let Some(name) = self.enter(folder, depth) else {
            return;
        };

        let category = classify(&name);
        debug!(folder = %name, ?category, depth, "visiting folder");

        match category {
            Category::TrunkRoute | Category::PartnerRoute => {
                routes::extract_routes(self, folder, &name, category, depth);
            }
            Category::DistributionHub => hubs::walk_hub(self, folder, &name, depth),
            Category::CityGroup => cities::extract_cities(self, folder, depth),
            _ => {
                for child in folder.folders() {
                    self.visit(child, depth + 1);
                }
            }
        }
    }

    fn warn(&mut self, warning: Warning) {
        warn!("{warning}");
        self.report.warnings.push(warning);
    }

    /// Name of a folder about to be visited at `depth`, or `None` (with a
    /// warning) when it lies past the depth limit. Folders the parser had to
    /// cut short are still visited but warned about.
    fn enter(&mut self, folder: &Folder, depth: usize) -> Option<String> {
        let name = self.folder_name(folder);
        if depth > self.options.max_depth {
            self.warn(Warning::DepthExceeded {
                folder: name,
                depth,
            });
            return None;
        }
        if folder.truncated {
            self.warn(Warning::DepthExceeded {
                folder: name.clone(),
                depth: depth + 1,
            });
        }
        Some(name)
    }

    fn folder_name(&mut self, folder: &Folder) -> String {
        if let Some(name) = &folder.name {
            return name.clone();
        }
        self.warn(Warning::MissingName {
            element: "folder".to_string(),
        });
        PLACEHOLDER_NAME.to_string()
    }

    fn item_name(&mut self, placemark: &Placemark) -> String {
        if let Some(name) = &placemark.name {
            return name.clone();
        }
        self.warn(Warning::MissingName {
            element: "placemark".to_string(),
        });
        PLACEHOLDER_NAME.to_string()
    }

    /// Rounded length of each line of a placemark, in document order.
    /// Points are ignored; unreadable lines are skipped with a warning.
    fn measure_lines(&mut self, folder: &str, item: &str, placemark: &Placemark) -> Vec<f64> {
        let mut lengths = Vec::new();
        for raw in placemark.lines() {
            match parse_coordinates(raw) {
                Ok(coords) => lengths.push(path_length(&coords).round()),
                Err(e) => self.warn(Warning::MalformedCoordinate {
                    folder: folder.to_string(),
                    item: item.to_string(),
                    reason: e.to_string(),
                }),
            }
        }
        lengths
    }
}
