use super::RouteKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderSummary {
    pub folder: String,
    pub kind: RouteKind,
    pub route_count: usize,
    pub subtotal_m: f64,
    pub completed_m: f64,
    pub in_progress_m: f64,
    /// Completed share of `subtotal_m`, 0..=100.
    pub completion_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopSummary {
    pub hub: String,
    pub pop: String,
    pub cabinet_count: usize,
    pub route_count: usize,
    pub item_count: usize,
    pub fiber_length_m: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubSummary {
    pub hub: String,
    pub pop_count: usize,
    pub cabinet_count: usize,
    pub route_count: usize,
    pub item_count: usize,
    pub fiber_length_m: f64,
}

/// Aggregates derived from an [`InventoryReport`](super::InventoryReport).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventorySummary {
    pub folders: Vec<FolderSummary>,
    pub trunk_total_m: f64,
    pub partner_total_m: f64,
    pub pops: Vec<PopSummary>,
    pub hubs: Vec<HubSummary>,
    pub total_routes: usize,
    pub total_items: usize,
    pub total_fiber_m: f64,
    pub city_count: usize,
}
