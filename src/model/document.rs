use serde::Serialize;

/// A parsed KML document: its feature tree plus every style definition.
///
/// Text content is kept raw (colors, coordinates); interpreting it is the
/// job of the inventory pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KmlDocument {
    pub name: Option<String>,
    pub styles: Vec<StyleDef>,
    pub style_maps: Vec<StyleMapDef>,
    pub root: Folder,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Folder {
    pub name: Option<String>,
    pub children: Vec<Feature>,
    /// Children were dropped because the markup nested too deep to read.
    pub truncated: bool,
}

/// Child of a folder, in document order.
#[derive(Debug, Clone, Serialize)]
pub enum Feature {
    Folder(Folder),
    Placemark(Placemark),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Placemark {
    pub name: Option<String>,
    pub style_url: Option<String>,
    /// Every point and line, in document order (`MultiGeometry` flattened).
    pub geometries: Vec<Geometry>,
}

/// Raw geometry text exactly as found in `<coordinates>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Geometry {
    Point(String),
    LineString(String),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StyleDef {
    pub id: String,
    pub line_color: Option<String>,
    pub icon_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StyleMapDef {
    pub id: String,
    /// `styleUrl` of the `normal` pair.
    pub normal: Option<String>,
}

impl Folder {
    /// Direct sub-folders in document order.
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.children.iter().filter_map(|c| match c {
            Feature::Folder(f) => Some(f),
            Feature::Placemark(_) => None,
        })
    }

    /// Direct placemarks in document order.
    pub fn placemarks(&self) -> impl Iterator<Item = &Placemark> {
        self.children.iter().filter_map(|c| match c {
            Feature::Placemark(p) => Some(p),
            Feature::Folder(_) => None,
        })
    }
}

impl Placemark {
    /// Raw coordinates of each line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.geometries.iter().filter_map(|g| match g {
            Geometry::LineString(raw) => Some(raw.as_str()),
            Geometry::Point(_) => None,
        })
    }

    /// Raw coordinates when the placemark is exactly one point.
    #[must_use]
    pub fn point(&self) -> Option<&str> {
        match self.geometries.as_slice() {
            [Geometry::Point(raw)] => Some(raw),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_geometry(&self) -> bool {
        !self.geometries.is_empty()
    }
}
