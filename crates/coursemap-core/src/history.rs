//! History-view pre-filtering.
//!
//! First-year seminars are cohort-bound: every student takes exactly one,
//! in one semester. Showing every FYSE offering across a multi-semester
//! history view buries the rest of the map, so FYSE points are kept only
//! for semesters in which the user actually took one.

use rustc_hash::FxHashSet;

use crate::model::{CourseInstance, EmbeddingPoint};

const FYSE_PREFIX: &str = "FYSE-";

/// Drops FYSE embedding points for semesters where `user_history` records
/// no FYSE course. Points without FYSE codes pass through untouched. The
/// caller applies this only in History view.
pub fn filter_history_points(
    points: &[EmbeddingPoint],
    user_history: &FxHashSet<CourseInstance>,
) -> Vec<EmbeddingPoint> {
    let fyse_semesters: FxHashSet<&str> = user_history
        .iter()
        .filter(|instance| instance.code.starts_with(FYSE_PREFIX))
        .map(|instance| instance.semester.as_str())
        .collect();

    points
        .iter()
        .filter(|point| {
            let has_fyse = point.codes.iter().any(|code| code.starts_with(FYSE_PREFIX));
            !has_fyse || fyse_semesters.contains(point.semester.as_str())
        })
        .cloned()
        .collect()
}
