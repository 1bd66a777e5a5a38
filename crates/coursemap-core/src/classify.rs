//! Department classification: maps a department code to a coarse academic
//! division ("tranche") and the marker shape used to draw it.
//!
//! The membership tables are a fixed institutional fact, not derived data;
//! they change only when the catalog adds or retires a department.

use serde::Serialize;

/// Coarse academic division used for shape encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tranche {
    Arts,
    Humanities,
    Sciences,
    SocialSciences,
    FirstYearSeminar,
    Other,
}

impl Tranche {
    pub fn label(self) -> &'static str {
        match self {
            Tranche::Arts => "Arts",
            Tranche::Humanities => "Humanities",
            Tranche::Sciences => "Sciences",
            Tranche::SocialSciences => "Social Sciences",
            Tranche::FirstYearSeminar => "First Year Seminar",
            Tranche::Other => "Other",
        }
    }

    /// Marker shape for this tranche. First-year seminars always draw as a
    /// double circle regardless of any other membership.
    pub fn shape(self) -> Shape {
        match self {
            Tranche::Arts => Shape::Circle,
            Tranche::Humanities => Shape::Square,
            Tranche::Sciences => Shape::Triangle,
            Tranche::SocialSciences => Shape::Star,
            Tranche::FirstYearSeminar => Shape::DoubleCircle,
            Tranche::Other => Shape::Circle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Star,
    DoubleCircle,
}

impl Shape {
    /// Whether the marker is drawn from circle primitives. Non-circular
    /// markers are shrunk by a shape-dependent factor when rendered.
    pub fn is_circular(self) -> bool {
        matches!(self, Shape::Circle | Shape::DoubleCircle)
    }
}

/// Tranche membership, in declaration order. The order is load-bearing for
/// deterministic color assignment (see `theme::build_color_map`).
pub const TRANCHE_TABLES: &[(Tranche, &[&str])] = &[
    (Tranche::Arts, &["ARCH", "ARHA", "MUSI", "MUSL", "THDA"]),
    (
        Tranche::Humanities,
        &[
            "AAPI", "AMST", "ARAB", "ASLC", "BLST", "CHIN", "CLAS", "COLQ", "EDST", "ENGL",
            "ENST", "EUST", "FAMS", "FREN", "GERM", "GREE", "HIST", "JAPA", "LATI", "LJST",
            "LLAS", "PHIL", "RELI", "RUSS", "SPAN", "SWAG", "WAGS",
        ],
    ),
    (
        Tranche::Sciences,
        &[
            "ASTR", "BCBP", "BIOL", "CHEM", "COSC", "GEOL", "MATH", "NEUR", "PHYS", "STAT",
        ],
    ),
    (
        Tranche::SocialSciences,
        &["ANTH", "ECON", "POSC", "PSYC", "SOCI"],
    ),
    (Tranche::FirstYearSeminar, &["FYSE"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub tranche: Tranche,
    pub shape: Shape,
}

/// Canonicalizes known department aliases before any table lookup. The
/// gender-studies department was renamed from WAGS to SWAG; old data files
/// still carry the former.
pub fn normalize_department(department: &str) -> &str {
    match department {
        "WAGS" => "SWAG",
        other => other,
    }
}

/// Total classification: a department absent from every tranche table is
/// `Other` with a plain circle marker.
pub fn classify(department: &str) -> Classification {
    let department = normalize_department(department);
    for (tranche, members) in TRANCHE_TABLES {
        if members.contains(&department) {
            return Classification {
                tranche: *tranche,
                shape: tranche.shape(),
            };
        }
    }
    Classification {
        tranche: Tranche::Other,
        shape: Shape::Circle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_departments_classify_by_table() {
        assert_eq!(classify("ARHA").tranche, Tranche::Arts);
        assert_eq!(classify("ARHA").shape, Shape::Circle);
        assert_eq!(classify("ENGL").shape, Shape::Square);
        assert_eq!(classify("MATH").shape, Shape::Triangle);
        assert_eq!(classify("ECON").shape, Shape::Star);
        assert_eq!(classify("ECON").tranche.label(), "Social Sciences");
    }

    #[test]
    fn first_year_seminar_is_always_double_circle() {
        let fyse = classify("FYSE");
        assert_eq!(fyse.tranche, Tranche::FirstYearSeminar);
        assert_eq!(fyse.shape, Shape::DoubleCircle);
    }

    #[test]
    fn wags_alias_classifies_as_swag() {
        assert_eq!(normalize_department("WAGS"), "SWAG");
        assert_eq!(classify("WAGS"), classify("SWAG"));
        assert_eq!(classify("WAGS").tranche, Tranche::Humanities);
    }

    #[test]
    fn unknown_department_is_total_default() {
        let unknown = classify("XYZZY");
        assert_eq!(unknown.tranche, Tranche::Other);
        assert_eq!(unknown.shape, Shape::Circle);
        // Empty input is still defined.
        assert_eq!(classify("").tranche, Tranche::Other);
    }
}
