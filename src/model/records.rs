use crate::error::Warning;
use serde::Serialize;

/// WGS84 position in degrees, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Trunk,
    Partner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Completion bucket of a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    InProgress,
    Completed,
    Other,
}

/// One path geometry found under a route folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRecord {
    pub folder: String,
    /// Sub-folder of `folder` the item was found under, if any.
    pub group: Option<String>,
    pub item: String,
    pub kind: RouteKind,
    /// Whole meters.
    pub distance_m: f64,
    pub color: String,
    pub line_style: LineStyle,
    pub status: RouteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NestedRoute {
    pub name: String,
    pub item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CabinetRecord {
    pub name: String,
    pub routes: Vec<NestedRoute>,
}

/// Point of presence under a distribution hub.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopRecord {
    pub hub: String,
    pub name: String,
    pub cabinets: Vec<CabinetRecord>,
    /// Length of the POP's own paths, whole meters.
    pub fiber_length_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityMarker {
    pub name: String,
    pub coordinate: Coordinate,
    pub color: Option<String>,
}

/// Everything extracted from one document in a single pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryReport {
    pub document: String,
    pub routes: Vec<RouteRecord>,
    pub pops: Vec<PopRecord>,
    pub cities: Vec<CityMarker>,
    pub warnings: Vec<Warning>,
}

impl CabinetRecord {
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.routes.iter().map(|r| r.item_count).sum()
    }
}

impl PopRecord {
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.cabinets.iter().map(|c| c.routes.len()).sum()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.cabinets.iter().map(CabinetRecord::item_count).sum()
    }
}
