use super::geometry::parse_coordinates;
use super::{Pass, PLACEHOLDER_NAME};
use crate::error::Warning;
use crate::model::{CityMarker, Feature, Folder};

/// Collects single-point placemarks at any depth below a `CIDADES` folder.
pub(super) fn extract_cities(pass: &mut Pass<'_>, folder: &Folder, depth: usize) {
    for child in &folder.children {
        let placemark = match child {
            Feature::Placemark(p) => p,
            Feature::Folder(sub) => {
                if pass.enter(sub, depth + 1).is_some() {
                    extract_cities(pass, sub, depth + 1);
                }
                continue;
            }
        };
        let Some(raw) = placemark.point() else {
            continue;
        };

        let name = pass.item_name(placemark);
        let coordinate = match parse_coordinates(raw) {
            Ok(coords) => coords[0],
            Err(e) => {
                pass.warn(Warning::MalformedCoordinate {
                    folder: folder
                        .name
                        .clone()
                        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
                    item: name,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let color = pass
            .styles
            .resolve(placemark.style_url.as_deref())
            .map(ToString::to_string)
            .or_else(|| pass.options.city_color.clone());

        pass.report.cities.push(CityMarker {
            name,
            coordinate,
            color,
        });
    }
}
