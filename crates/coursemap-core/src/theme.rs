//! Department color assignment.
//!
//! The color map is a pure function of the department list, computed once
//! per render pass and passed explicitly. Building it from the tranche
//! tables in declaration order keeps assignments stable across passes no
//! matter which departments actually appear in the data.

use indexmap::IndexMap;

use crate::classify::TRANCHE_TABLES;

/// Fill for departments absent from the color map.
pub const FALLBACK_COLOR: &str = "#999";

/// First-year seminars are pinned to a dark gray so they read as a distinct
/// category rather than one pastel among many.
const FYSE_COLOR: &str = "#4a4a4a";

/// d3 schemePastel1 (first eight entries) followed by schemePastel2.
const PALETTE: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc", "#cccccc",
];

/// Assigns palette colors to departments in the order given, skipping
/// duplicates. FYSE keeps its pinned color but still consumes a palette
/// slot, so the departments after it keep their historical colors.
pub fn build_color_map<'a>(departments: impl IntoIterator<Item = &'a str>) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    let mut palette_index = 0usize;
    for department in departments {
        if map.contains_key(department) {
            continue;
        }
        let color = if department == "FYSE" {
            FYSE_COLOR
        } else {
            PALETTE[palette_index % PALETTE.len()]
        };
        map.insert(department.to_string(), color.to_string());
        palette_index += 1;
    }
    map
}

/// Color map over every department in the tranche tables, in table order.
pub fn default_color_map() -> IndexMap<String, String> {
    build_color_map(
        TRANCHE_TABLES
            .iter()
            .flat_map(|(_, members)| members.iter().copied()),
    )
}

/// Lookup with the fixed fallback for unmapped departments.
pub fn color_for<'a>(map: &'a IndexMap<String, String>, department: &str) -> &'a str {
    map.get(department).map(String::as_str).unwrap_or(FALLBACK_COLOR)
}
