#![forbid(unsafe_code)]

//! End-to-end course-embedding pipeline.
//!
//! Takes raw embedding points, catalog records, and the host's selection
//! state, and produces a render-ready scene: merged and annotated nodes in
//! z-order with screen positions and styles, the department legend, and the
//! viewport layout plan. The whole pass is a pure function of its input;
//! hosts re-run it on every data, selection, view-mode, or viewport change
//! and discard the previous scene.

pub use coursemap_core::*;

pub mod layout {
    //! Viewport planning, legend geometry, and per-node styling.
    pub use coursemap_layout::*;
}

pub use coursemap_layout::{LayoutPlan, LegendEntry, NodeStyle, Viewport};

use coursemap_core::geom::Point;
use coursemap_layout::model::{DepartmentShare, Extent, LegendSpec};
use coursemap_layout::{
    department_shares, legend_entries, node_fill, node_style, plan_layout,
};
use rustc_hash::FxHashSet;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] coursemap_core::Error),
    #[error(transparent)]
    Layout(#[from] coursemap_layout::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Everything one pass needs. All collections are borrowed; the pipeline
/// never mutates caller state.
#[derive(Debug, Clone, Copy)]
pub struct GraphInput<'a> {
    pub points: &'a [EmbeddingPoint],
    pub course_details: &'a [CourseRecord],
    /// Caller-maintained selection, literal codes or slash-joined
    /// composites.
    pub highlighted: &'a FxHashSet<String>,
    /// Externally computed scheduling conflicts, treated as opaque.
    pub conflicted: &'a FxHashSet<String>,
    pub conflict_filter_enabled: bool,
    pub user_history: &'a FxHashSet<CourseInstance>,
    pub view_mode: ViewMode,
    pub viewport: Viewport,
    pub legend_collapsed: bool,
}

/// One node, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub node: AnnotatedNode,
    pub position: Point,
    pub style: NodeStyle,
    pub fill: String,
    /// Pie segments for multi-code nodes; a single full slice otherwise.
    pub shares: Vec<DepartmentShare>,
}

/// A fully processed render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphScene {
    /// Nodes in z-order: highlighted nodes last, on top.
    pub nodes: Vec<SceneNode>,
    pub plan: LayoutPlan,
    pub legend: Vec<LegendEntry>,
}

/// Runs the full pass: history pre-filtering (History view only),
/// coordinate aggregation, conflict/highlight annotation, z-ordering,
/// styling, and viewport planning.
///
/// An input that yields no surviving nodes produces an empty scene with a
/// degenerate-extent plan, not an error.
pub fn process(input: &GraphInput<'_>) -> Result<GraphScene> {
    let filtered_points;
    let points: &[EmbeddingPoint] = match input.view_mode {
        ViewMode::History => {
            filtered_points = filter_history_points(input.points, input.user_history);
            &filtered_points
        }
        ViewMode::SingleSemester => input.points,
    };

    let merged = aggregate(points, input.course_details)?;

    let ctx = AnnotateContext {
        highlighted: input.highlighted,
        conflicted: input.conflicted,
        conflict_filter_enabled: input.conflict_filter_enabled,
        user_history: input.user_history,
        view_mode: input.view_mode,
    };
    let annotated = order_for_render(annotate_all(&merged, &ctx), input.view_mode);

    let color_map = default_color_map();
    let legend = legend_entries(&color_map);

    let extent = Extent::from_points(annotated.iter().map(|n| (n.node.x, n.node.y)))
        .unwrap_or_default();
    let plan = plan_layout(
        extent,
        input.viewport,
        &LegendSpec {
            entry_count: legend.len(),
            collapsed: input.legend_collapsed,
        },
    )?;

    let nodes = annotated
        .into_iter()
        .map(|annotated_node| {
            let base_color =
                coursemap_core::color_for(&color_map, &annotated_node.node.department);
            let fill = node_fill(base_color, &annotated_node, input.view_mode);
            SceneNode {
                position: plan.project(annotated_node.node.x, annotated_node.node.y),
                style: node_style(&annotated_node, input.view_mode),
                shares: department_shares(&annotated_node.node),
                fill,
                node: annotated_node,
            }
        })
        .collect();

    Ok(GraphScene { nodes, plan, legend })
}
