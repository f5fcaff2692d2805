use super::classify::{classify, trunk_default_color, Category};
use super::Pass;
use crate::model::{Feature, Folder, LineStyle, Placemark, RouteKind, RouteRecord, RouteStatus};
use tracing::debug;

/// Everything a record inherits from the folders above its placemark.
#[derive(Debug, Clone)]
struct RouteScope {
    folder: String,
    group: Option<String>,
    kind: RouteKind,
    color: String,
    forced_color: bool,
    line_style: LineStyle,
    status: RouteStatus,
}

/// Emits one [`RouteRecord`] per line under a `LINK` or `LINK PARCEIROS` folder.
///
/// Trunk folders look one level down for `EM ANDAMENTO` / `CONCLUÍDO`
/// sub-folders: lines below them are dashed/in progress and solid/completed
/// respectively. Lines anywhere else are solid with status `Other`. Partner
/// folders are flattened, solid, and always drawn in the partner color.
pub(super) fn extract_routes(
    pass: &mut Pass<'_>,
    folder: &Folder,
    name: &str,
    category: Category,
    depth: usize,
) {
    let scope = if category == Category::PartnerRoute {
        RouteScope {
            folder: name.to_string(),
            group: None,
            kind: RouteKind::Partner,
            color: pass.options.partner_color.clone(),
            forced_color: true,
            line_style: LineStyle::Solid,
            status: RouteStatus::Other,
        }
    } else {
        RouteScope {
            folder: name.to_string(),
            group: None,
            kind: RouteKind::Trunk,
            color: trunk_default_color(name, &pass.options.trunk_color).to_string(),
            forced_color: false,
            line_style: LineStyle::Solid,
            status: RouteStatus::Other,
        }
    };

    for child in &folder.children {
        match child {
            Feature::Placemark(placemark) => emit(pass, &scope, placemark),
            Feature::Folder(sub) => {
                let Some(sub_name) = pass.enter(sub, depth + 1) else {
                    continue;
                };

                let (line_style, status) = match (scope.kind, classify(&sub_name)) {
                    (RouteKind::Trunk, Category::InProgress) => {
                        (LineStyle::Dashed, RouteStatus::InProgress)
                    }
                    (RouteKind::Trunk, Category::Completed) => {
                        (LineStyle::Solid, RouteStatus::Completed)
                    }
                    _ => (LineStyle::Solid, RouteStatus::Other),
                };
                debug!(folder = %name, group = %sub_name, ?status, "route group");

                let sub_scope = RouteScope {
                    group: Some(sub_name),
                    line_style,
                    status,
                    ..scope.clone()
                };
                collect(pass, sub, &sub_scope, depth + 1);
            }
        }
    }
}

/// Every line at or below `folder`, in document order.
fn collect(pass: &mut Pass<'_>, folder: &Folder, scope: &RouteScope, depth: usize) {
    for child in &folder.children {
        match child {
            Feature::Placemark(placemark) => emit(pass, scope, placemark),
            Feature::Folder(sub) => {
                if pass.enter(sub, depth + 1).is_some() {
                    collect(pass, sub, scope, depth + 1);
                }
            }
        }
    }
}

/// One record per line of the placemark; a `MultiGeometry` with two lines
/// gives two records under the same item name.
fn emit(pass: &mut Pass<'_>, scope: &RouteScope, placemark: &Placemark) {
    if placemark.lines().next().is_none() {
        return;
    }
    let item = pass.item_name(placemark);
    let lengths = pass.measure_lines(&scope.folder, &item, placemark);

    let color = if scope.forced_color {
        scope.color.clone()
    } else {
        pass.styles
            .resolve(placemark.style_url.as_deref())
            .unwrap_or(scope.color.as_str())
            .to_string()
    };

    for distance_m in lengths {
        pass.report.routes.push(RouteRecord {
            folder: scope.folder.clone(),
            group: scope.group.clone(),
            item: item.clone(),
            kind: scope.kind,
            distance_m,
            color: color.clone(),
            line_style: scope.line_style,
            status: scope.status,
        });
    }
}
