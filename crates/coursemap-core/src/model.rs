use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::{Shape, Tranche};

/// Accepts either a bare string or a list of strings. Some upstream data
/// files store single-code entries unwrapped; the core only ever sees a
/// canonical `Vec<String>`.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(code) => vec![code],
        OneOrMany::Many(codes) => codes,
    })
}

/// A catalog entry, possibly cross-listed under several course codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(deserialize_with = "one_or_many")]
    pub course_codes: Vec<String>,
    #[serde(default, alias = "course_title")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
}

/// A precomputed 2D embedding coordinate for one course (or a group of
/// cross-listed courses) in one semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingPoint {
    #[serde(deserialize_with = "one_or_many")]
    pub codes: Vec<String>,
    pub x: f64,
    pub y: f64,
    pub semester: String,
}

/// One offering of one course code. Equality is exact on both fields; a
/// user who took the same code in a different semester does not match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseInstance {
    pub code: String,
    pub semester: String,
}

impl CourseInstance {
    pub fn new(code: impl Into<String>, semester: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            semester: semester.into(),
        }
    }
}

/// A visual node: every course code whose embedding landed on the same
/// exact (x, y) coordinate, merged. Rebuilt on every aggregation pass;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedNode {
    /// First code encountered at this coordinate. Never overwritten by
    /// later merges, even if they contribute codes from other departments.
    pub primary_code: String,
    pub x: f64,
    pub y: f64,
    /// Union of all codes merged into this point, in first-seen order.
    pub all_codes: Vec<String>,
    /// Every (code, semester) instance with a resolved catalog record.
    pub courses_at_point: Vec<CourseInstance>,
    /// Department prefix of `primary_code` (text before the first `-`).
    pub department: String,
    pub tranche: Tranche,
    pub shape: Shape,
    /// Semester of the point that created this node.
    pub semester: String,
}

impl MergedNode {
    /// Whether the node carries more than one course code (cross-listed or
    /// co-located offerings).
    pub fn is_multi_code(&self) -> bool {
        self.all_codes.len() > 1
    }
}

/// Department prefix of a course code: the text before the first `-`
/// (`"MATH-111"` -> `"MATH"`). Codes without a dash are their own
/// department.
pub fn department_of(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}
