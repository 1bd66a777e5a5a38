//! Department legend: entries in color-map order plus grid placement.

use coursemap_core::classify::classify;
use coursemap_core::geom::point;
use indexmap::IndexMap;

use crate::model::{LegendBox, LegendCell, LegendEntry};

/// One legend entry per department in the color map, in map (insertion)
/// order, each carrying its tranche shape.
pub fn legend_entries(color_map: &IndexMap<String, String>) -> Vec<LegendEntry> {
    color_map
        .iter()
        .map(|(department, color)| LegendEntry {
            department: department.clone(),
            color: color.clone(),
            shape: classify(department).shape,
        })
        .collect()
}

/// Grid placement for `entry_count` entries: column-major fill — entries
/// run down each column before wrapping to the next — with origins relative
/// to the legend's top-left corner.
pub fn legend_cells(entry_count: usize, legend: &LegendBox) -> Vec<LegendCell> {
    let columns = legend.columns.max(1);
    let rows = entry_count.div_ceil(columns).max(1);
    (0..entry_count)
        .map(|i| {
            let row = i % rows;
            let column = i / rows;
            LegendCell {
                row,
                column,
                origin: point(
                    column as f64 * legend.item_width,
                    row as f64 * legend.item_height,
                ),
            }
        })
        .collect()
}
