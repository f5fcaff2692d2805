pub mod document;
pub mod records;
pub mod summary;

pub use document::{Feature, Folder, Geometry, KmlDocument, Placemark, StyleDef, StyleMapDef};
pub use records::{
    CabinetRecord, CityMarker, Coordinate, InventoryReport, LineStyle, NestedRoute, PopRecord,
    RouteKind, RouteRecord, RouteStatus,
};
pub use summary::{FolderSummary, HubSummary, InventorySummary, PopSummary};
