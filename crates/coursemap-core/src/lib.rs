#![forbid(unsafe_code)]

//! Course-embedding semantic model (headless).
//!
//! Pure, synchronous transformations over precomputed course-embedding
//! data: coordinate aggregation into merged nodes, department/tranche
//! classification, view-dependent highlight/conflict annotation, and
//! deterministic color assignment. No I/O, no rendering; hosts feed
//! already-resolved in-memory data and re-run the pass on every input
//! change.

pub mod aggregate;
pub mod annotate;
pub mod classify;
pub mod error;
pub mod geom;
pub mod history;
pub mod model;
pub mod theme;

pub use aggregate::aggregate;
pub use annotate::{AnnotateContext, AnnotatedNode, ViewMode, annotate, annotate_all, order_for_render};
pub use classify::{Classification, Shape, Tranche, classify, normalize_department};
pub use error::{Error, Result};
pub use history::filter_history_points;
pub use model::{CourseInstance, CourseRecord, EmbeddingPoint, MergedNode, department_of};
pub use theme::{build_color_map, color_for, default_color_map};
