use crate::error::ParseError;
use crate::model::{Feature, Folder, Geometry, KmlDocument, Placemark, StyleDef, StyleMapDef};
use roxmltree::Node;
use std::path::Path;

// Folders below this depth are kept empty and flagged `truncated`.
const MAX_NESTING: usize = 512;

/// Parses a KML file into a [`KmlDocument`] tree.
///
/// Only the structure is read here: folders (and nested `Document`
/// containers), placemarks with their point or line geometry, and style
/// definitions. Colors and coordinates are kept as raw text.
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read.
/// Returns [`ParseError::InvalidXml`] if the markup is malformed.
/// Returns [`ParseError::MissingDocument`] if there is no container to walk.
///
/// # Example
///
/// ```no_run
/// use kml_inventory::parser::parse_kml_file;
///
/// let document = parse_kml_file("rede.kml")?;
/// println!("{} styles", document.styles.len());
/// # Ok::<(), kml_inventory::error::ParseError>(())
/// ```
pub fn parse_kml_file<P: AsRef<Path>>(path: P) -> Result<KmlDocument, ParseError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    parse_kml_str(&content)
}

/// Parses KML text already held in memory.
pub fn parse_kml_str(content: &str) -> Result<KmlDocument, ParseError> {
    let xml = roxmltree::Document::parse(content).map_err(|e| ParseError::InvalidXml {
        message: e.to_string(),
    })?;

    let root = xml.root_element();
    let container = if is_container(root) {
        root
    } else {
        root.children()
            .find(|n| is_container(*n))
            .ok_or(ParseError::MissingDocument)?
    };

    let root_folder = build_folder(container, 0);

    Ok(KmlDocument {
        name: root_folder.name.clone(),
        styles: extract_styles(&xml),
        style_maps: extract_style_maps(&xml),
        root: root_folder,
    })
}

fn is_container(node: Node) -> bool {
    node.is_element() && matches!(node.tag_name().name(), "Document" | "Folder")
}

fn build_folder(node: Node, depth: usize) -> Folder {
    let name = child_text(node, "name");
    // Too deep to read safely: keep the folder, drop its contents.
    if depth >= MAX_NESTING {
        return Folder {
            name,
            children: Vec::new(),
            truncated: true,
        };
    }

    let mut children = Vec::new();
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "Document" | "Folder" => children.push(Feature::Folder(build_folder(child, depth + 1))),
            "Placemark" => children.push(Feature::Placemark(build_placemark(child))),
            _ => {}
        }
    }

    Folder {
        name,
        children,
        truncated: false,
    }
}

fn build_placemark(node: Node) -> Placemark {
    // MultiGeometry wrappers are looked through.
    let geometries = node
        .descendants()
        .filter(|n| n.is_element())
        .filter_map(|g| {
            let coords = || child_text(g, "coordinates").unwrap_or_default();
            match g.tag_name().name() {
                "Point" => Some(Geometry::Point(coords())),
                "LineString" => Some(Geometry::LineString(coords())),
                _ => None,
            }
        })
        .collect();

    Placemark {
        name: child_text(node, "name"),
        style_url: child_text(node, "styleUrl"),
        geometries,
    }
}

fn extract_styles(xml: &roxmltree::Document) -> Vec<StyleDef> {
    xml.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "Style")
        .filter_map(|style| {
            let id = style.attribute("id")?;
            Some(StyleDef {
                id: id.to_string(),
                line_color: child_element(style, "LineStyle").and_then(|s| child_text(s, "color")),
                icon_color: child_element(style, "IconStyle").and_then(|s| child_text(s, "color")),
            })
        })
        .collect()
}

fn extract_style_maps(xml: &roxmltree::Document) -> Vec<StyleMapDef> {
    xml.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "StyleMap")
        .filter_map(|map| {
            let id = map.attribute("id")?;
            let normal = map
                .children()
                .filter(|n| n.is_element() && n.tag_name().name() == "Pair")
                .find(|pair| child_text(*pair, "key").as_deref() == Some("normal"))
                .and_then(|pair| child_text(pair, "styleUrl"));
            Some(StyleMapDef {
                id: id.to_string(),
                normal,
            })
        })
        .collect()
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Trimmed text of a direct child element, `None` when absent or blank.
fn child_text(node: Node, name: &str) -> Option<String> {
    child_element(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
