//! Integration tests for Lo Shu grid construction and classification.

use chrono::NaiveDate;
use numen_base::{
    ArrowDirection, ArrowKind, Element, Plane, PlaneStrength, lo_shu_grid, remedy,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn determination_only_grid() {
    // "1" + "5" + "9000": digits 1, 5, 9 once each
    let g = lo_shu_grid(date(9000, 5, 1));
    assert_eq!(g.present, vec![1, 5, 9]);
    assert!(g.repeated.is_empty());
    assert!(g.has_arrow(ArrowKind::Determination));
    let determination = g
        .arrows
        .iter()
        .find(|a| a.kind == ArrowKind::Determination)
        .unwrap();
    assert_eq!(determination.direction, ArrowDirection::Positive);
    // only the middle column is populated
    assert_eq!(g.grid, [[0, 1, 0], [0, 1, 0], [0, 1, 0]]);
    assert_eq!(g.plane(Plane::Will).strength, PlaneStrength::Balanced);
    assert_eq!(g.plane(Plane::Thought).strength, PlaneStrength::Empty);
    assert_eq!(g.plane(Plane::Action).strength, PlaneStrength::Empty);
    for row in [Plane::Mental, Plane::Emotional, Plane::Practical] {
        assert_eq!(g.plane(row).strength, PlaneStrength::Weak);
    }
}

#[test]
fn negative_arrows_for_sparse_date() {
    // "1" + "1" + "2000": digits 1, 1, 2
    let g = lo_shu_grid(date(2000, 1, 1));
    assert_eq!(g.count(1), 2);
    assert_eq!(g.count(2), 1);
    let negatives: Vec<ArrowKind> = g
        .arrows
        .iter()
        .filter(|a| a.direction == ArrowDirection::Negative)
        .map(|a| a.kind)
        .collect();
    // 3-5-7 and 4-5-6 fully absent; 1-5-9 only partly
    assert_eq!(
        negatives,
        vec![ArrowKind::Frustration, ArrowKind::Disappointment]
    );
    // practical row 8-1-6: single digit repeated twice
    assert_eq!(g.plane(Plane::Practical).strength, PlaneStrength::Balanced);
    // fire 2 vs earth 1 vs water 2: fire wins the tie
    assert_eq!(g.dominant_element, Element::Fire);
}

#[test]
fn dominant_plane_and_strengths() {
    // "15" + "5" + "1990"
    let g = lo_shu_grid(date(1990, 5, 15));
    let will = g.plane(Plane::Will);
    assert_eq!(will.total, 6);
    assert_eq!(will.present, 3);
    assert_eq!(will.strength, PlaneStrength::Dominant);
    assert!(g.analysis.strengths.contains(&will.meaning));
    assert_eq!(g.dominant_element, Element::Fire);
}

#[test]
fn recommendations_follow_missing_digits() {
    let g = lo_shu_grid(date(1985, 12, 25));
    let expected: Vec<&str> = g
        .missing
        .iter()
        .map(|&d| remedy(d).unwrap().description)
        .collect();
    assert_eq!(g.analysis.recommendations, expected);
}

#[test]
fn remedy_table_values() {
    let r = remedy(1).unwrap();
    assert_eq!(r.colors, &["#FF0000", "#FFCC00"]);
    assert_eq!(r.mantras, &["Om Hreem Surya Namaha"]);
    assert_eq!(r.days, &["Sunday"]);
    assert_eq!(remedy(4).unwrap().element, "Air");
    assert_eq!(remedy(8).unwrap().direction, "West");
}
