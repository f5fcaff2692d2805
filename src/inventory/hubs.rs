use super::classify::{classify, Category};
use super::Pass;
use crate::model::{CabinetRecord, Folder, NestedRoute, PopRecord};
use std::collections::HashSet;
use tracing::debug;

/// Walks a `GPON` folder: one [`PopRecord`] per direct sub-folder.
///
/// Each POP gets two independent figures from the same traversal: its
/// cabinets (searched through the whole POP subtree) and the length of the
/// lines the POP folder holds directly.
pub(super) fn walk_hub(pass: &mut Pass<'_>, hub: &Folder, hub_name: &str, depth: usize) {
    for pop in hub.folders() {
        let Some(pop_name) = pass.enter(pop, depth + 1) else {
            continue;
        };

        // Per POP: the same cabinet name under another POP is another cabinet.
        let mut seen = HashSet::new();
        let mut cabinets = Vec::new();
        find_cabinets(pass, pop, depth + 1, &mut seen, &mut cabinets);

        let fiber_length_m = pop_fiber_length(pass, pop, &pop_name);

        debug!(
            hub = %hub_name,
            pop = %pop_name,
            cabinets = cabinets.len(),
            fiber_length_m,
            "pop walked"
        );
        pass.report.pops.push(PopRecord {
            hub: hub_name.to_string(),
            name: pop_name,
            cabinets,
            fiber_length_m,
        });
    }
}

fn find_cabinets(
    pass: &mut Pass<'_>,
    folder: &Folder,
    depth: usize,
    seen: &mut HashSet<String>,
    cabinets: &mut Vec<CabinetRecord>,
) {
    for child in folder.folders() {
        let Some(name) = pass.enter(child, depth + 1) else {
            continue;
        };

        if classify(&name) != Category::CabinetGroup {
            find_cabinets(pass, child, depth + 1, seen, cabinets);
            continue;
        }

        if !seen.insert(name.clone()) {
            debug!(cabinet = %name, "cabinet already counted in this pop");
            continue;
        }
        let record = cabinet_record(pass, child, name, depth + 1);
        cabinets.push(record);
    }
}

/// A cabinet's direct sub-folders are its routes; each counts the placemarks
/// with a point or line it holds directly.
fn cabinet_record(
    pass: &mut Pass<'_>,
    cabinet: &Folder,
    name: String,
    depth: usize,
) -> CabinetRecord {
    let mut routes = Vec::new();
    for route in cabinet.folders() {
        let Some(route_name) = pass.enter(route, depth + 1) else {
            continue;
        };
        routes.push(NestedRoute {
            name: route_name,
            item_count: route.placemarks().filter(|p| p.has_geometry()).count(),
        });
    }
    CabinetRecord { name, routes }
}

fn pop_fiber_length(pass: &mut Pass<'_>, pop: &Folder, pop_name: &str) -> f64 {
    let mut total = 0.0;
    for placemark in pop.placemarks() {
        if placemark.lines().next().is_none() {
            continue;
        }
        let item = pass.item_name(placemark);
        total += pass.measure_lines(pop_name, &item, placemark).iter().sum::<f64>();
    }
    total
}
