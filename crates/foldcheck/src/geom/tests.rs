use super::*;
use crate::rational::Rational;

fn v(x: i64, y: i64) -> Vertex {
    Vertex::int(x, y)
}

fn e(a: (i64, i64), b: (i64, i64)) -> Edge {
    Edge::new(v(a.0, a.1), v(b.0, b.1))
}

fn unit_square_ccw() -> Polygon {
    Polygon::new(vec![v(0, 0), v(1, 0), v(1, 1), v(0, 1)])
}

#[test]
fn cross_product_sign_follows_ccw() {
    assert_eq!(cross_product(&v(1, 0), &v(0, 1)), Rational::one());
    assert_eq!(cross_product(&v(0, 1), &v(1, 0)), Rational::from_integer(-1));
    assert!(cross_product(&v(2, 2), &v(1, 1)).is_zero());
}

#[test]
fn unit_square_orientation_and_area() {
    let sq = unit_square_ccw();
    assert!(sq.orientation_is_positive());
    assert_eq!(sq.area(), Rational::one());

    let cw = Polygon::new(vec![v(0, 0), v(0, 1), v(1, 1), v(1, 0)]);
    assert!(!cw.orientation_is_positive());
    // Fan areas are unsigned.
    assert_eq!(cw.area(), Rational::one());
}

#[test]
fn orientation_sum_skips_closing_pair() {
    // Clockwise square starting at (1,0): every consecutive term vanishes and
    // the only non-zero term is the omitted wrap pair, so the test reports
    // a non-negative sum.
    let cw = Polygon::new(vec![v(1, 0), v(0, 0), v(0, 1), v(1, 1)]);
    assert!(cw.orientation_sum().is_zero());
    assert!(cw.orientation_is_positive());
}

#[test]
fn triangulation_is_a_fan_from_vertex_zero() {
    assert!(Polygon::new(vec![v(0, 0), v(1, 0)]).triangulate().is_empty());
    assert!(Polygon::default().triangulate().is_empty());
    assert_eq!(Polygon::new(vec![v(0, 0)]).area(), Rational::zero());

    let ts = unit_square_ccw().triangulate();
    assert_eq!(ts.len(), 2);
    assert_eq!(ts[0], Triangle { v1: v(0, 0), v2: v(1, 0), v3: v(1, 1) });
    assert_eq!(ts[1], Triangle { v1: v(0, 0), v2: v(1, 1), v3: v(0, 1) });
}

#[test]
fn triangle_area_with_fractions() {
    let t = Triangle {
        v1: v(0, 0),
        v2: Vertex::frac(1, 2, 0, 1),
        v3: Vertex::frac(0, 1, 1, 3),
    };
    assert_eq!(t.area(), Rational::new(1, 12));
}

#[test]
fn polygon_edges_are_open() {
    let sq = unit_square_ccw();
    assert_eq!(sq.edges().len(), 3);
    assert_eq!(sq.closed_edges().len(), 4);
    assert_eq!(sq.closed_edges()[3], e((0, 1), (0, 0)));
    assert!(Polygon::new(vec![v(0, 0)]).edges().is_empty());
    assert!(Polygon::new(vec![v(0, 0)]).closed_edges().is_empty());
}

#[test]
fn zero_length_edges() {
    let degenerate = Polygon::new(vec![v(0, 0), v(0, 0), v(1, 0)]);
    assert!(degenerate.has_length_zero_edges());
    assert!(!unit_square_ccw().has_length_zero_edges());

    // Repeated first/last vertex only shows up on the wrap edge.
    let wrapped = Polygon::new(vec![v(0, 0), v(1, 0), v(1, 1), v(0, 0)]);
    assert!(!wrapped.has_length_zero_edges());
    assert!(wrapped.closed_edges().iter().any(Edge::is_length_zero));
}

#[test]
fn vertex_on_edge_excludes_endpoints() {
    let base = e((0, 0), (2, 0));
    assert!(is_vertex_on_edge(&base, &v(1, 0)));
    assert!(!is_vertex_on_edge(&base, &v(0, 0)));
    assert!(!is_vertex_on_edge(&base, &v(2, 0)));
    assert!(!is_vertex_on_edge(&base, &v(1, 1)));
    // Collinearity is with the supporting line.
    assert!(is_vertex_on_edge(&base, &v(5, 0)));
    // Fractional midpoint of a diagonal.
    let diag = e((0, 0), (1, 1));
    assert!(is_vertex_on_edge(&diag, &Vertex::frac(1, 3, 1, 3)));
}

#[test]
fn right_of_edge_is_strict() {
    let base = e((0, 0), (1, 0));
    assert!(is_vertex_right_of_edge(&base, &v(1, -1)));
    assert!(!is_vertex_right_of_edge(&base, &v(1, 1)));
    assert!(!is_vertex_right_of_edge(&base, &v(3, 0)));
}

#[test]
fn touch_or_cross_is_directional() {
    let left = e((0, 0), (0, 1));
    let right = e((1, 0), (1, 1));
    // Both endpoints of `right` are right of the upward edge at x = 0.
    assert!(edges_touch_or_cross(&left, &right));
    assert!(!edges_touch_or_cross(&right, &left));
}

#[test]
fn touch_or_cross_detects_collinear_touch() {
    let base = e((0, 0), (2, 0));
    let stem = e((1, 0), (1, 1));
    assert!(edges_touch_or_cross(&base, &stem));
    // Sharing an endpoint alone is not a touch.
    let adjacent = e((2, 0), (2, 1));
    assert!(!edges_touch_or_cross(&base, &adjacent));
}

#[test]
fn touch_or_cross_misses_proper_x_crossing() {
    let a = e((0, 0), (1, 1));
    let b = e((0, 1), (1, 0));
    assert!(!edges_touch_or_cross(&a, &b));
    assert!(!edges_touch_or_cross(&b, &a));
    assert!(segments_intersect(&a, &b));
}

#[test]
fn segments_intersect_cases() {
    let base = e((0, 0), (2, 0));
    // Shared endpoint only.
    assert!(!segments_intersect(&base, &e((2, 0), (3, 1))));
    // T-touch from either side of the call.
    assert!(segments_intersect(&base, &e((1, 0), (1, 1))));
    assert!(segments_intersect(&e((1, 0), (1, 1)), &base));
    // Collinear overlap, with and without a shared endpoint.
    assert!(segments_intersect(&base, &e((1, 0), (3, 0))));
    assert!(segments_intersect(&base, &e((2, 0), (1, 0))));
    // Collinear but disjoint.
    assert!(!segments_intersect(&base, &e((3, 0), (4, 0))));
    // Same segment, reversed.
    assert!(segments_intersect(&base, &e((2, 0), (0, 0))));
    // Parallel.
    assert!(!segments_intersect(&e((0, 0), (0, 1)), &e((1, 0), (1, 1))));
}

#[test]
fn convex_hull_drops_interior_and_collinear_points() {
    let pts = vec![
        v(1, 1),
        v(0, 0),
        Vertex::frac(1, 2, 0, 1),
        v(1, 0),
        Vertex::frac(1, 2, 1, 2),
        v(0, 1),
        v(0, 0),
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull, unit_square_ccw());
    assert!(hull.orientation_is_positive());
    assert_eq!(hull.area(), Rational::one());
    assert!(convex_hull(&[v(0, 0), v(1, 1), v(2, 2)]).is_none());
}
