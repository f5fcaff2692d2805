//! Folder categories by name pattern.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TrunkRoute,
    PartnerRoute,
    CityGroup,
    DistributionHub,
    CabinetGroup,
    InProgress,
    Completed,
    Unclassified,
}

/// Ordered (pattern, category) table. First substring match wins, so more
/// specific patterns must come before the ones they contain.
const RULES: &[(&str, Category)] = &[
    ("LINK PARCEIROS", Category::PartnerRoute),
    ("LINK", Category::TrunkRoute),
    ("CIDADES", Category::CityGroup),
    ("GPON", Category::DistributionHub),
    ("CTO'S", Category::CabinetGroup),
    ("EM ANDAMENTO", Category::InProgress),
    ("CONCLUÍDO", Category::Completed),
    ("CONCLUIDO", Category::Completed),
];

// Default line colors of trunk folders, checked in order.
const TRUNK_COLORS: &[(&str, &str)] = &[("AMARELO", "#FFFF00"), ("VERDE", "#00FF00")];

/// Classifies a folder by its display name, case-insensitively.
#[must_use]
pub fn classify(name: &str) -> Category {
    let upper = name.to_uppercase();
    RULES
        .iter()
        .find(|(pattern, _)| upper.contains(pattern))
        .map_or(Category::Unclassified, |(_, category)| *category)
}

/// Default line color for a trunk folder: the name's color word, else `fallback`.
#[must_use]
pub fn trunk_default_color<'a>(name: &str, fallback: &'a str) -> &'a str {
    let upper = name.to_uppercase();
    TRUNK_COLORS
        .iter()
        .find(|(word, _)| upper.contains(word))
        .map_or(fallback, |(_, color)| *color)
}
