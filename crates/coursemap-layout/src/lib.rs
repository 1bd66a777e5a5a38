#![forbid(unsafe_code)]

//! Headless layout planning for course-embedding scenes.
//!
//! Pure functions from node extents, viewport dimensions, and legend state
//! to screen-space scales, legend geometry, and per-node styling. The host
//! re-invokes `plan_layout` on every viewport resize and legend toggle;
//! there is no retained state.

pub mod legend;
pub mod model;
pub mod style;
pub mod viewport;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid viewport: {width}x{height} (dimensions must be positive and finite)")]
    InvalidViewport { width: f64, height: f64 },
    #[error("invalid node extent: [{x_min}, {x_max}] x [{y_min}, {y_max}] (bounds must be finite)")]
    InvalidExtent {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

pub use legend::{legend_cells, legend_entries};
pub use model::{
    DepartmentShare, Extent, FontScale, LayoutPlan, LegendBox, LegendCell, LegendEntry,
    LegendSpec, LinearScale, NodeStyle, Viewport,
};
pub use style::{department_shares, node_fill, node_style};
pub use viewport::{legend_box, plan_layout};
