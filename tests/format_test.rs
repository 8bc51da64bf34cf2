//! Tests for report number rendering

use rstest::rstest;

use trigon::domain::entities::DecimalPlaces;
use trigon::domain::format::{format_number, truncate};

fn places(count: i64) -> DecimalPlaces {
    DecimalPlaces::new(count).unwrap()
}

#[rstest]
#[case(3.14159, 2, 3.14)]
#[case(-3.14159, 2, -3.14)]
#[case(2.999, 0, 2.0)]
#[case(0.00003, 2, 0.0)]
#[case(12.0, 3, 12.0)]
#[case(1234.56789, 4, 1234.5678)]
fn given_value_when_truncating_then_digits_cut_not_rounded(
    #[case] value: f64,
    #[case] count: i64,
    #[case] expected: f64,
) {
    assert_eq!(truncate(value, places(count)), expected);
}

#[test]
fn given_any_value_when_truncating_then_magnitude_never_grows() {
    for value in [0.0, -0.0, 5.4321, -5.4321, 0.001, -0.001, 999.999, 1e-9, -1e-9] {
        for count in [0i64, 1, 2, 6, 12] {
            let truncated = truncate(value, places(count));
            assert!(
                truncated.abs() <= value.abs(),
                "truncate({value}, {count}) = {truncated}"
            );
            assert!(truncated == 0.0 || truncated.is_sign_positive() == value.is_sign_positive());
        }
    }
}

#[rstest]
#[case(12.0, 2, "12.00")]
#[case(6.0, 2, "6.00")]
#[case(2.4, 2, "2.40")]
#[case(3.605551275463989, 2, "3.60")]
#[case(12.0, 0, "12")]
#[case(12.0, 3, "12.000")]
#[case(0.5, 3, "0.500")]
#[case(0.00003, 2, "3.0e-05 (auto modified)")]
#[case(-0.00003, 2, "-3.0e-05 (auto modified)")]
#[case(-0.001, 1, "-1.0e-03 (auto modified)")]
#[case(0.0, 2, "0e+00")]
fn given_value_when_formatting_then_report_text_matches(
    #[case] value: f64,
    #[case] count: i64,
    #[case] expected: &str,
) {
    assert_eq!(format_number(value, places(count)), expected);
}

#[test]
fn given_nonzero_value_when_formatting_then_never_a_bare_zero() {
    // A tiny nonzero quantity must fall back to scientific notation
    // instead of printing as 0 at the requested precision.
    for value in [0.00003, 1e-9, -4.2e-7] {
        for count in [0i64, 2, 6] {
            let text = format_number(value, places(count));
            let all_zero = text
                .chars()
                .all(|ch| ch == '0' || ch == '.' || ch == '-');
            assert!(!all_zero, "format_number({value}, {count}) = {text:?}");
        }
    }
}
