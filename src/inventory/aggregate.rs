//! Summaries rebuilt from the extracted records.
//!
//! Nothing here is updated incrementally: every call to [`summarize`] starts
//! from the record lists, so totals cannot drift from the records.

use crate::model::{
    FolderSummary, HubSummary, InventoryReport, InventorySummary, PopRecord, PopSummary,
    RouteKind, RouteRecord, RouteStatus,
};
use std::collections::HashMap;

#[must_use]
pub fn summarize(report: &InventoryReport) -> InventorySummary {
    let folders = summarize_folders(&report.routes);

    let trunk_total_m = total_for(&folders, RouteKind::Trunk);
    let partner_total_m = total_for(&folders, RouteKind::Partner);

    let pops: Vec<PopSummary> = report.pops.iter().map(summarize_pop).collect();
    let hubs = summarize_hubs(&pops);

    InventorySummary {
        trunk_total_m,
        partner_total_m,
        total_routes: hubs.iter().map(|h| h.route_count).sum(),
        total_items: hubs.iter().map(|h| h.item_count).sum(),
        total_fiber_m: hubs.iter().map(|h| h.fiber_length_m).sum(),
        city_count: report.cities.len(),
        folders,
        pops,
        hubs,
    }
}

/// Completed share of a folder, in percent.
///
/// 0 for an empty (or non-finite) subtotal; never NaN and never above 100.
#[must_use]
pub fn completion_pct(completed_m: f64, subtotal_m: f64) -> f64 {
    if subtotal_m.is_nan() || subtotal_m <= 0.0 {
        return 0.0;
    }
    let pct = completed_m / subtotal_m * 100.0;
    if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// One summary per route folder, in order of first appearance.
fn summarize_folders(routes: &[RouteRecord]) -> Vec<FolderSummary> {
    let mut index: HashMap<(&str, RouteKind), usize> = HashMap::new();
    let mut folders: Vec<FolderSummary> = Vec::new();

    for route in routes {
        let slot = *index
            .entry((route.folder.as_str(), route.kind))
            .or_insert_with(|| {
                folders.push(FolderSummary {
                    folder: route.folder.clone(),
                    kind: route.kind,
                    route_count: 0,
                    subtotal_m: 0.0,
                    completed_m: 0.0,
                    in_progress_m: 0.0,
                    completion_pct: 0.0,
                });
                folders.len() - 1
            });

        let summary = &mut folders[slot];
        summary.route_count += 1;
        summary.subtotal_m += route.distance_m;
        match route.status {
            RouteStatus::Completed => summary.completed_m += route.distance_m,
            RouteStatus::InProgress => summary.in_progress_m += route.distance_m,
            RouteStatus::Other => {}
        }
    }

    for summary in &mut folders {
        summary.completion_pct = completion_pct(summary.completed_m, summary.subtotal_m);
    }
    folders
}

fn total_for(folders: &[FolderSummary], kind: RouteKind) -> f64 {
    folders
        .iter()
        .filter(|f| f.kind == kind)
        .map(|f| f.subtotal_m)
        .sum()
}

fn summarize_pop(pop: &PopRecord) -> PopSummary {
    PopSummary {
        hub: pop.hub.clone(),
        pop: pop.name.clone(),
        cabinet_count: pop.cabinets.len(),
        route_count: pop.route_count(),
        item_count: pop.item_count(),
        fiber_length_m: pop.fiber_length_m,
    }
}

fn summarize_hubs(pops: &[PopSummary]) -> Vec<HubSummary> {
    let mut hubs: Vec<HubSummary> = Vec::new();
    for pop in pops {
        let slot = match hubs.iter().position(|h| h.hub == pop.hub) {
            Some(slot) => slot,
            None => {
                hubs.push(HubSummary {
                    hub: pop.hub.clone(),
                    pop_count: 0,
                    cabinet_count: 0,
                    route_count: 0,
                    item_count: 0,
                    fiber_length_m: 0.0,
                });
                hubs.len() - 1
            }
        };
        let hub = &mut hubs[slot];
        hub.pop_count += 1;
        hub.cabinet_count += pop.cabinet_count;
        hub.route_count += pop.route_count;
        hub.item_count += pop.item_count;
        hub.fiber_length_m += pop.fiber_length_m;
    }
    hubs
}
