use coursemap_core::{CourseRecord, EmbeddingPoint, aggregate};
use std::collections::BTreeSet;

fn record(codes: &[&str]) -> CourseRecord {
    CourseRecord {
        course_codes: codes.iter().map(|c| c.to_string()).collect(),
        title: Some("A Course".to_string()),
        description: None,
        semester: None,
    }
}

fn point(codes: &[&str], x: f64, y: f64, semester: &str) -> EmbeddingPoint {
    EmbeddingPoint {
        codes: codes.iter().map(|c| c.to_string()).collect(),
        x,
        y,
        semester: semester.to_string(),
    }
}

fn sample_records() -> Vec<CourseRecord> {
    vec![
        record(&["MATH-111"]),
        record(&["STAT-111"]),
        record(&["BIOL-181"]),
        record(&["SWAG-200", "ENGL-210"]),
    ]
}

#[test]
fn co_located_points_merge_into_one_node() {
    let points = [
        point(&["MATH-111"], 1.0, 1.0, "2324F"),
        point(&["STAT-111"], 1.0, 1.0, "2324F"),
    ];
    let nodes = aggregate(&points, &sample_records()).unwrap();

    assert_eq!(nodes.len(), 1);
    let node = &nodes[0];
    assert_eq!(node.primary_code, "MATH-111");
    assert_eq!(node.department, "MATH");
    assert_eq!(node.all_codes, vec!["MATH-111", "STAT-111"]);
    assert_eq!(node.courses_at_point.len(), 2);
}

#[test]
fn no_two_nodes_share_a_coordinate() {
    let points = [
        point(&["MATH-111"], 1.0, 1.0, "2324F"),
        point(&["STAT-111"], 1.0, 1.0, "2324F"),
        point(&["BIOL-181"], 2.0, 1.0, "2324F"),
        point(&["SWAG-200"], 1.0, 2.0, "2324F"),
        point(&["ENGL-210"], 1.0, 2.0, "2324F"),
    ];
    let nodes = aggregate(&points, &sample_records()).unwrap();

    let keys: BTreeSet<(u64, u64)> = nodes
        .iter()
        .map(|n| (n.x.to_bits(), n.y.to_bits()))
        .collect();
    assert_eq!(keys.len(), nodes.len());
}

#[test]
fn every_input_code_lands_in_exactly_one_node() {
    let points = [
        point(&["MATH-111"], 1.0, 1.0, "2324F"),
        point(&["STAT-111"], 1.0, 1.0, "2324F"),
        point(&["BIOL-181"], 2.0, 1.0, "2324F"),
        point(&["SWAG-200", "ENGL-210"], 1.0, 2.0, "2324F"),
    ];
    let nodes = aggregate(&points, &sample_records()).unwrap();

    let mut seen: Vec<&str> = Vec::new();
    for node in &nodes {
        for code in &node.all_codes {
            assert!(!seen.contains(&code.as_str()), "{code} appears twice");
            seen.push(code);
        }
    }
    for code in ["MATH-111", "STAT-111", "BIOL-181", "SWAG-200", "ENGL-210"] {
        assert!(seen.contains(&code), "{code} missing from output");
    }
}

#[test]
fn aggregation_is_idempotent_and_order_independent() {
    let forward = [
        point(&["MATH-111"], 1.0, 1.0, "2324F"),
        point(&["STAT-111"], 1.0, 1.0, "2324F"),
        point(&["BIOL-181"], 2.0, 1.0, "2324F"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let records = sample_records();
    let a = aggregate(&forward, &records).unwrap();
    let b = aggregate(&forward, &records).unwrap();
    let c = aggregate(&reversed, &records).unwrap();

    assert_eq!(a, b);

    // Order independence is set-equality: same coordinates, same code sets,
    // same instance sets. Primary codes may differ with input order.
    assert_eq!(a.len(), c.len());
    for node in &a {
        let twin = c
            .iter()
            .find(|n| n.x == node.x && n.y == node.y)
            .expect("coordinate present in both runs");
        let codes_a: BTreeSet<&str> = node.all_codes.iter().map(String::as_str).collect();
        let codes_c: BTreeSet<&str> = twin.all_codes.iter().map(String::as_str).collect();
        assert_eq!(codes_a, codes_c);
        let inst_a: BTreeSet<(&str, &str)> = node
            .courses_at_point
            .iter()
            .map(|i| (i.code.as_str(), i.semester.as_str()))
            .collect();
        let inst_c: BTreeSet<(&str, &str)> = twin
            .courses_at_point
            .iter()
            .map(|i| (i.code.as_str(), i.semester.as_str()))
            .collect();
        assert_eq!(inst_a, inst_c);
    }
}

#[test]
fn duplicate_instances_dedup_but_semesters_stay_distinct() {
    // The same coordinate recurring across semesters keeps one instance per
    // exact (code, semester) pair.
    let points = [
        point(&["MATH-111"], 1.0, 1.0, "2324F"),
        point(&["MATH-111"], 1.0, 1.0, "2324F"),
        point(&["MATH-111"], 1.0, 1.0, "2324S"),
    ];
    let nodes = aggregate(&points, &sample_records()).unwrap();

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].all_codes, vec!["MATH-111"]);
    assert_eq!(nodes[0].courses_at_point.len(), 2);
    assert_eq!(nodes[0].semester, "2324F");
}

#[test]
fn primary_code_and_department_are_first_seen() {
    let points = [
        point(&["STAT-111"], 1.0, 1.0, "2324F"),
        point(&["MATH-111"], 1.0, 1.0, "2324F"),
    ];
    let nodes = aggregate(&points, &sample_records()).unwrap();
    assert_eq!(nodes[0].primary_code, "STAT-111");
    assert_eq!(nodes[0].department, "STAT");
}

#[test]
fn empty_inputs_produce_empty_output() {
    assert!(aggregate(&[], &[]).unwrap().is_empty());
    assert!(aggregate(&[], &sample_records()).unwrap().is_empty());
}

#[test]
fn classification_flows_from_primary_code() {
    use coursemap_core::{Shape, Tranche};

    let points = [point(&["SWAG-200", "ENGL-210"], 3.0, 3.0, "2324F")];
    let nodes = aggregate(&points, &sample_records()).unwrap();
    assert_eq!(nodes[0].tranche, Tranche::Humanities);
    assert_eq!(nodes[0].shape, Shape::Square);
}
