use coursemap_core::classify::Shape;
use coursemap_core::geom::Point;
use serde::Serialize;

/// Data-space bounding box of the merged nodes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// Extent of an (x, y) sequence. `None` when the sequence is empty.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let mut extent = Extent {
            x_min: x0,
            x_max: x0,
            y_min: y0,
            y_max: y0,
        };
        for (x, y) in iter {
            extent.x_min = extent.x_min.min(x);
            extent.x_max = extent.x_max.max(x);
            extent.y_min = extent.y_min.min(y);
            extent.y_max = extent.y_max.max(y);
        }
        Some(extent)
    }

    pub fn is_finite(&self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendSpec {
    pub entry_count: usize,
    /// Collapsed legends reserve no screen space; the data area reclaims it.
    pub collapsed: bool,
}

/// Computed legend geometry: column layout plus the reserved box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendBox {
    pub columns: usize,
    pub item_width: f64,
    pub item_height: f64,
    pub width: f64,
    pub height: f64,
}

/// Affine mapping from a data-space interval to a screen-space interval.
/// A degenerate domain maps every value to the range start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        let t = (value - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }
}

/// Width-driven font scaling with the interpolation constants fixed at
/// construction, so per-call scaling is a clamp and a multiply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub min_width: f64,
    pub max_width: f64,
    pub min_factor: f64,
    pub max_factor: f64,
    factor: f64,
}

impl FontScale {
    pub fn new(min_width: f64, max_width: f64, min_factor: f64, max_factor: f64, width: f64) -> Self {
        let factor = if width <= min_width {
            min_factor
        } else if width >= max_width {
            max_factor
        } else {
            min_factor + (max_factor - min_factor) * ((width - min_width) / (max_width - min_width))
        };
        Self {
            min_width,
            max_width,
            min_factor,
            max_factor,
            factor,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn scale(&self, base_size: f64) -> f64 {
        base_size * self.factor
    }
}

/// Everything a renderer needs to place the scene on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub legend: LegendBox,
    pub font: FontScale,
    pub top_padding: f64,
    pub bottom_padding: f64,
    pub left_padding: f64,
    pub right_padding: f64,
}

impl LayoutPlan {
    /// Screen position for a data-space coordinate.
    pub fn project(&self, x: f64, y: f64) -> Point {
        coursemap_core::geom::point(self.x_scale.scale(x), self.y_scale.scale(y))
    }
}

/// Marker size and paint intensity for one node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeStyle {
    pub radius: f64,
    pub opacity: f64,
    /// Multiplier applied to non-circular markers so squares, triangles,
    /// and stars occupy roughly the same visual area as circles.
    pub shape_scale: f64,
}

/// One pie slice of a multi-code node, weighted by department multiplicity.
/// Angles are degrees clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentShare {
    pub department: String,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub department: String,
    pub color: String,
    pub shape: Shape,
}

/// Grid placement of one legend entry, relative to the legend origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendCell {
    pub row: usize,
    pub column: usize,
    pub origin: Point,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_and_midpoint() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(scale.scale(0.0), 100.0);
        assert_eq!(scale.scale(10.0), 200.0);
        assert_eq!(scale.scale(5.0), 150.0);
        // Extrapolates outside the domain, like d3.scaleLinear.
        assert_eq!(scale.scale(-5.0), 50.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((3.0, 3.0), (100.0, 200.0));
        assert_eq!(scale.scale(3.0), 100.0);
        assert_eq!(scale.scale(999.0), 100.0);
    }

    #[test]
    fn font_scale_clamps_outside_reference_widths() {
        let narrow = FontScale::new(800.0, 1920.0, 0.5, 1.0, 320.0);
        assert_eq!(narrow.factor(), 0.5);
        let wide = FontScale::new(800.0, 1920.0, 0.5, 1.0, 2560.0);
        assert_eq!(wide.factor(), 1.0);
        let mid = FontScale::new(800.0, 1920.0, 0.5, 1.0, 1360.0);
        assert!((mid.factor() - 0.75).abs() < 1e-12);
        assert!((mid.scale(12.0) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn extent_from_points_tracks_bounds() {
        let extent =
            Extent::from_points([(1.0, -2.0), (3.0, 4.0), (-1.0, 0.0)]).expect("non-empty");
        assert_eq!(extent.x_min, -1.0);
        assert_eq!(extent.x_max, 3.0);
        assert_eq!(extent.y_min, -2.0);
        assert_eq!(extent.y_max, 4.0);
        assert!(Extent::from_points([]).is_none());
    }
}
