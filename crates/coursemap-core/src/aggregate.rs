//! Coordinate aggregation: folds embedding points that share an exact
//! (x, y) coordinate into a single [`MergedNode`].
//!
//! Coordinates come from a shared precomputation, so co-located entries are
//! bit-identical; the merge key is exact bit equality, not a tolerance.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::debug;

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::model::{CourseInstance, CourseRecord, EmbeddingPoint, MergedNode, department_of};

/// Bit-exact coordinate key. NaN coordinates never reach this type: the
/// aggregator skips non-finite points before keying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CoordKey {
    x_bits: u64,
    y_bits: u64,
}

impl CoordKey {
    fn new(x: f64, y: f64) -> Self {
        Self {
            x_bits: x.to_bits(),
            y_bits: y.to_bits(),
        }
    }
}

/// Merges `points` by exact coordinate into one node per (x, y).
///
/// Points are consumed in input order: the first point at a coordinate
/// fixes the node's `primary_code`, department, and semester; later points
/// only union codes and append new (code, semester) instances. Codes with a
/// resolvable record in `course_details` contribute a [`CourseInstance`];
/// unresolved codes stay in `all_codes` but carry no catalog metadata.
///
/// Skipped without error: points with non-finite coordinates and points
/// whose code list is empty after normalization. A `CourseRecord` with no
/// codes at all is unrepairable and surfaces as [`Error::InvalidInput`].
///
/// Runs in O(points + records): one hashed code index built per call, one
/// hashed node map keyed by coordinate.
pub fn aggregate(
    points: &[EmbeddingPoint],
    course_details: &[CourseRecord],
) -> Result<Vec<MergedNode>> {
    let record_index = build_record_index(course_details)?;

    let mut nodes: IndexMap<CoordKey, MergedNode> = IndexMap::new();
    for point in points {
        if !point.x.is_finite() || !point.y.is_finite() {
            debug!(
                x = point.x,
                y = point.y,
                semester = %point.semester,
                "skipping embedding point with non-finite coordinates"
            );
            continue;
        }

        let codes: Vec<&str> = point
            .codes
            .iter()
            .map(String::as_str)
            .filter(|code| !code.is_empty())
            .collect();
        if codes.is_empty() {
            continue;
        }

        let key = CoordKey::new(point.x, point.y);
        let node = nodes.entry(key).or_insert_with(|| {
            let primary_code = codes[0].to_string();
            let department = department_of(&primary_code).to_string();
            let classification = classify(&department);
            MergedNode {
                primary_code,
                x: point.x,
                y: point.y,
                all_codes: Vec::new(),
                courses_at_point: Vec::new(),
                department,
                tranche: classification.tranche,
                shape: classification.shape,
                semester: point.semester.clone(),
            }
        });

        for code in codes {
            if !node.all_codes.iter().any(|existing| existing == code) {
                node.all_codes.push(code.to_string());
            }
            if record_index.contains_key(code) {
                let already_present = node
                    .courses_at_point
                    .iter()
                    .any(|instance| instance.code == code && instance.semester == point.semester);
                if !already_present {
                    node.courses_at_point
                        .push(CourseInstance::new(code, point.semester.clone()));
                }
            }
        }
    }

    Ok(nodes.into_values().collect())
}

/// Code -> record index, first record wins for codes listed in several
/// records.
fn build_record_index<'a>(
    course_details: &'a [CourseRecord],
) -> Result<FxHashMap<&'a str, &'a CourseRecord>> {
    let mut index: FxHashMap<&str, &CourseRecord> = FxHashMap::default();
    for record in course_details {
        if record.course_codes.iter().all(|code| code.is_empty()) {
            return Err(Error::InvalidInput {
                message: "course record has no course codes".to_string(),
                record: serde_json::to_value(record).unwrap_or(Value::Null),
            });
        }
        for code in &record.course_codes {
            if code.is_empty() {
                continue;
            }
            index.entry(code.as_str()).or_insert(record);
        }
    }
    Ok(index)
}
