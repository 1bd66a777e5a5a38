//! Viewport layout planning: maps the data extent into the screen area left
//! over after reserving space for the legend and the title/footer chrome.

use crate::model::{Extent, FontScale, LayoutPlan, LegendBox, LegendSpec, LinearScale, Viewport};
use crate::{Error, Result};

/// Fraction of the data extent added as margin on each axis so nodes do not
/// render flush against the legend or the screen edge.
const DATA_MARGIN_FRACTION: f64 = 0.05;

const LEGEND_ITEM_HEIGHT: f64 = 25.0;
/// Above this width the legend switches to fewer, narrower columns.
const WIDE_LEGEND_BREAKPOINT: f64 = 1600.0;

/// Title space shrinks as the viewport widens; clamped so wide screens keep
/// a sliver and narrow screens are not all chrome.
const TOP_PADDING_BASE: f64 = 270.0;
const TOP_PADDING_PER_WIDTH: f64 = 0.15;
const TOP_PADDING_MIN: f64 = 40.0;

const BOTTOM_PADDING_BASE: f64 = 200.0;
const BOTTOM_PADDING_PER_WIDTH: f64 = 0.07;
const BOTTOM_PADDING_MIN: f64 = 24.0;

const FONT_MIN_WIDTH: f64 = 800.0;
const FONT_MAX_WIDTH: f64 = 1920.0;
const FONT_MIN_FACTOR: f64 = 0.5;
const FONT_MAX_FACTOR: f64 = 1.0;

fn legend_columns(viewport_width: f64) -> (usize, f64) {
    if viewport_width > WIDE_LEGEND_BREAKPOINT {
        (2, 90.0)
    } else {
        (3, 100.0)
    }
}

/// Legend geometry for the given entry count at the given viewport width.
pub fn legend_box(entry_count: usize, viewport_width: f64) -> LegendBox {
    let (columns, item_width) = legend_columns(viewport_width);
    let rows = entry_count.div_ceil(columns);
    LegendBox {
        columns,
        item_width,
        item_height: LEGEND_ITEM_HEIGHT,
        width: item_width * columns as f64 + 0.02 * viewport_width,
        height: rows as f64 * LEGEND_ITEM_HEIGHT + viewport_width * viewport_width * 1e-5,
    }
}

/// Plans scales, legend placement, chrome padding, and font scaling for one
/// render pass. Recomputed by the host on every resize and legend toggle.
pub fn plan_layout(extent: Extent, viewport: Viewport, legend: &LegendSpec) -> Result<LayoutPlan> {
    if !viewport.width.is_finite()
        || !viewport.height.is_finite()
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        return Err(Error::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if !extent.is_finite() {
        return Err(Error::InvalidExtent {
            x_min: extent.x_min,
            x_max: extent.x_max,
            y_min: extent.y_min,
            y_max: extent.y_max,
        });
    }

    let legend_box = legend_box(legend.entry_count, viewport.width);

    let top_padding = (TOP_PADDING_BASE - TOP_PADDING_PER_WIDTH * viewport.width)
        .clamp(TOP_PADDING_MIN, TOP_PADDING_BASE);
    let bottom_padding = (BOTTOM_PADDING_BASE - BOTTOM_PADDING_PER_WIDTH * viewport.width)
        .clamp(BOTTOM_PADDING_MIN, BOTTOM_PADDING_BASE);
    let left_padding = if legend.collapsed { 0.0 } else { legend_box.width };
    let right_padding = 0.0;

    let x_margin = (extent.x_max - extent.x_min) * DATA_MARGIN_FRACTION;
    let y_margin = (extent.y_max - extent.y_min) * DATA_MARGIN_FRACTION;

    let x_scale = LinearScale::new(
        (extent.x_min - x_margin, extent.x_max + x_margin),
        (left_padding, viewport.width - right_padding),
    );
    let y_scale = LinearScale::new(
        (extent.y_min - y_margin, extent.y_max + y_margin),
        (top_padding, viewport.height - bottom_padding),
    );

    Ok(LayoutPlan {
        x_scale,
        y_scale,
        legend: legend_box,
        font: FontScale::new(
            FONT_MIN_WIDTH,
            FONT_MAX_WIDTH,
            FONT_MIN_FACTOR,
            FONT_MAX_FACTOR,
            viewport.width,
        ),
        top_padding,
        bottom_padding,
        left_padding,
        right_padding,
    })
}
