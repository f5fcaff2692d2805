//! Style lookup: KML `aabbggrr` colors to display `#RRGGBB`.

use crate::error::Warning;
use crate::model::KmlDocument;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::warn;

/// A KML color, stored in display (RGBA) byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbgrColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl AbgrColor {
    /// Parses the 8-hex-digit `aabbggrr` form. Anything else is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let abgr = u32::from_str_radix(raw, 16).ok()?;
        Some(Self::from_rgba(reorder(abgr)))
    }

    fn from_rgba(rgba: u32) -> Self {
        let [red, green, blue, alpha] = rgba.to_be_bytes();
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    fn to_rgba(self) -> u32 {
        u32::from_be_bytes([self.red, self.green, self.blue, self.alpha])
    }

    /// Back to the KML `AABBGGRR` text form.
    #[must_use]
    pub fn to_kml(self) -> String {
        format!("{:08X}", reorder(self.to_rgba()))
    }
}

/// `#RRGGBB`, alpha dropped.
impl fmt::Display for AbgrColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// ABGR <-> RGBA. Its own inverse.
#[must_use]
pub fn reorder(packed: u32) -> u32 {
    packed.swap_bytes()
}

/// Style id to display color, built once per document.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    colors: HashMap<String, String>,
}

impl StyleTable {
    /// Collects every style color; malformed colors are reported in `warnings` and left out.
    pub fn from_document(document: &KmlDocument, warnings: &mut Vec<Warning>) -> Self {
        let mut colors = HashMap::new();

        for style in &document.styles {
            let Some(raw) = style.line_color.as_ref().or(style.icon_color.as_ref()) else {
                continue;
            };
            match AbgrColor::parse(raw) {
                Some(color) => {
                    colors.insert(style.id.clone(), color.to_string());
                }
                None => {
                    warn!(style = %style.id, value = %raw, "malformed style color");
                    warnings.push(Warning::MalformedColor {
                        style: style.id.clone(),
                        value: raw.clone(),
                    });
                }
            }
        }

        // A StyleMap's "normal" pair may name a plain style or another map.
        let links: HashMap<&str, &str> = document
            .style_maps
            .iter()
            .filter_map(|map| Some((map.id.as_str(), strip_hash(map.normal.as_deref()?))))
            .collect();
        for map in &document.style_maps {
            let Some(color) = follow_map(&links, &colors, &map.id) else {
                continue;
            };
            colors.entry(map.id.clone()).or_insert(color);
        }

        Self { colors }
    }

    /// Color for a `styleUrl` (`#id`) or bare style id.
    #[must_use]
    pub fn resolve(&self, style_url: Option<&str>) -> Option<&str> {
        style_url
            .and_then(|url| self.colors.get(strip_hash(url)))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Follows map-to-map links from `id` until a plain style color; `None` on a
/// dangling link or a cycle.
fn follow_map(
    links: &HashMap<&str, &str>,
    colors: &HashMap<String, String>,
    id: &str,
) -> Option<String> {
    let mut visited = HashSet::new();
    let mut current = id;
    while visited.insert(current) {
        let next = *links.get(current)?;
        if let Some(color) = colors.get(next) {
            return Some(color.clone());
        }
        current = next;
    }
    None
}

fn strip_hash(url: &str) -> &str {
    url.strip_prefix('#').unwrap_or(url)
}
