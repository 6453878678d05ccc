use super::*;
use approx::assert_relative_eq;

#[test]
fn test_general_line_through_two_points() {
    let result = compute_line(1.0, 2.0, 3.0, 4.0);
    assert_eq!(
        result,
        LineResult::GeneralLine {
            slope: 1.0,
            intercept: 1.0
        }
    );
}

#[test]
fn test_vertical_line_when_x_matches() {
    assert_eq!(
        compute_line(2.0, 5.0, 2.0, 9.0),
        LineResult::VerticalLine { x: 2.0 }
    );
}

#[test]
fn test_identical_points() {
    assert_eq!(
        compute_line(4.0, 7.0, 4.0, 7.0),
        LineResult::IdenticalPoints {
            point: Point::new(4.0, 7.0)
        }
    );
}

#[test]
fn test_horizontal_line_has_zero_slope() {
    assert_eq!(
        compute_line(0.0, 3.0, 6.0, 3.0),
        LineResult::GeneralLine {
            slope: 0.0,
            intercept: 3.0
        }
    );
}

#[test]
fn test_identical_points_for_many_values() {
    for &(x, y) in &[(0.0, 0.0), (-1.5, 2.25), (1e9, -1e-9), (-0.0, 0.0)] {
        assert!(matches!(
            compute_line(x, y, x, y),
            LineResult::IdenticalPoints { .. }
        ));
    }
}

#[test]
fn test_vertical_line_for_many_values() {
    for &(x, y1, y2) in &[(0.0, 1.0, 2.0), (-3.5, 10.0, -10.0), (7.25, 0.0, 0.001)] {
        assert_eq!(compute_line(x, y1, x, y2), LineResult::VerticalLine { x });
    }
}

#[test]
fn test_general_line_passes_through_both_points() {
    let cases = [
        (1.0, 2.0, 3.0, 4.0),
        (-2.5, 7.0, 4.0, -1.25),
        (0.1, 0.2, 0.3, 0.7),
        (100.0, -50.0, -20.0, 33.3),
    ];

    for &(x1, y1, x2, y2) in &cases {
        let result = compute_line(x1, y1, x2, y2);
        let (Some(at_first), Some(at_second)) = (result.y_at(x1), result.y_at(x2)) else {
            panic!("Allgemeine Gerade erwartet: {result:?}");
        };
        assert_relative_eq!(at_first, y1, epsilon = 1e-9);
        assert_relative_eq!(at_second, y2, epsilon = 1e-9);
    }
}

#[test]
fn test_negative_slope_and_intercept() {
    let LineResult::GeneralLine { slope, intercept } = compute_line(0.0, -2.0, 2.0, -6.0) else {
        panic!("Allgemeine Gerade erwartet");
    };
    assert_relative_eq!(slope, -2.0);
    assert_relative_eq!(intercept, -2.0);
}

#[test]
fn test_non_finite_coordinates_are_invalid() {
    assert_eq!(
        compute_line(f64::NAN, 1.0, 2.0, 3.0),
        LineResult::InvalidInput
    );
    assert_eq!(
        compute_line(1.0, f64::INFINITY, 2.0, 3.0),
        LineResult::InvalidInput
    );
    assert_eq!(
        compute_line(1.0, 1.0, f64::NEG_INFINITY, 3.0),
        LineResult::InvalidInput
    );
}

#[test]
fn test_overflowing_slope_is_invalid() {
    assert_eq!(
        compute_line(0.0, -f64::MAX, 1e-300, f64::MAX),
        LineResult::InvalidInput
    );
}

#[test]
fn test_error_classification() {
    assert!(LineResult::InvalidInput.is_error());
    assert!(compute_line(1.0, 1.0, 1.0, 1.0).is_error());
    assert!(!compute_line(1.0, 1.0, 1.0, 2.0).is_error());
    assert!(!compute_line(1.0, 1.0, 2.0, 2.0).is_error());
    assert_eq!(compute_line(1.0, 1.0, 1.0, 2.0).kind_name(), "vertical-line");
}
