//! Highlight/conflict annotation: decides node visibility, selection state,
//! and history membership for one merged node under the current view.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::model::{CourseInstance, MergedNode};

/// Which tab the host is showing. Conflicts are a single-semester planning
/// concept; the History view computes them but never drops nodes for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    SingleSemester,
    History,
}

/// Externally supplied selection state. The conflicted set is computed by a
/// remote scheduling service and treated as opaque here.
#[derive(Debug, Clone, Copy)]
pub struct AnnotateContext<'a> {
    pub highlighted: &'a FxHashSet<String>,
    pub conflicted: &'a FxHashSet<String>,
    pub conflict_filter_enabled: bool,
    pub user_history: &'a FxHashSet<CourseInstance>,
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedNode {
    /// The merged node, with conflicted codes removed when the filter
    /// applied. `primary_code` and department stay first-seen even if the
    /// primary code itself was filtered; labels should use `all_codes`.
    pub node: MergedNode,
    pub highlighted: bool,
    /// Number of surviving codes matched by the highlighted set. Drives
    /// emphasis intensity for multi-code nodes.
    pub highlight_count: usize,
    pub history_highlighted: bool,
    /// With the conflict filter active, surviving nodes are conflict-free
    /// by construction and this is always false.
    pub conflicted: bool,
}

/// A highlighted-set entry matches a code either literally or as a
/// slash-joined composite (`"MATH-111/STAT-111"`). Some UI flows store a
/// multi-cross-listed selection as one joined string; both representations
/// must work transparently.
fn matches_highlight(code: &str, highlighted: &FxHashSet<String>) -> bool {
    if highlighted.contains(code) {
        return true;
    }
    highlighted
        .iter()
        .filter(|entry| entry.contains('/'))
        .any(|entry| entry.split('/').any(|part| part == code))
}

/// Annotates one node, or returns `None` when conflict elimination removes
/// every code it carries. Conflict elimination hides a fully conflicted
/// node outright; a node with surviving codes is kept, using only those
/// codes for highlight and label purposes.
pub fn annotate(node: &MergedNode, ctx: &AnnotateContext<'_>) -> Option<AnnotatedNode> {
    let had_conflict = node
        .all_codes
        .iter()
        .any(|code| ctx.conflicted.contains(code));
    let filter_active = ctx.view_mode == ViewMode::SingleSemester && ctx.conflict_filter_enabled;

    let mut node = node.clone();
    if filter_active && had_conflict {
        node.all_codes.retain(|code| !ctx.conflicted.contains(code));
        if node.all_codes.is_empty() {
            debug!(
                primary_code = %node.primary_code,
                "dropping fully conflicted node"
            );
            return None;
        }
        node.courses_at_point
            .retain(|instance| !ctx.conflicted.contains(&instance.code));
    }

    let highlight_count = node
        .all_codes
        .iter()
        .filter(|code| matches_highlight(code, ctx.highlighted))
        .count();
    let history_highlighted = node
        .courses_at_point
        .iter()
        .any(|instance| ctx.user_history.contains(instance));

    Some(AnnotatedNode {
        highlighted: highlight_count > 0,
        highlight_count,
        history_highlighted,
        conflicted: !filter_active && had_conflict,
        node,
    })
}

/// Annotates a whole pass worth of nodes, dropping the fully conflicted
/// ones.
pub fn annotate_all(nodes: &[MergedNode], ctx: &AnnotateContext<'_>) -> Vec<AnnotatedNode> {
    nodes.iter().filter_map(|node| annotate(node, ctx)).collect()
}

/// Z-order: highlighted nodes render last, on top of the rest. The History
/// view partitions on history membership, the single-semester view on
/// search highlighting. Relative order within each partition is preserved.
pub fn order_for_render(nodes: Vec<AnnotatedNode>, view_mode: ViewMode) -> Vec<AnnotatedNode> {
    let on_top = |node: &AnnotatedNode| match view_mode {
        ViewMode::History => node.history_highlighted,
        ViewMode::SingleSemester => node.highlighted,
    };
    let (rest, top): (Vec<_>, Vec<_>) = nodes.into_iter().partition(|node| !on_top(node));
    rest.into_iter().chain(top).collect()
}
