//! Property tests for page bounds and clamping

use labelkit_core::units::{A4_HEIGHT_PT, A4_WIDTH_PT};
use labelkit_core::{clamp, mm_to_points, PageSize, MM_TO_POINTS};
use proptest::prelude::*;

proptest! {
    #[test]
    fn a4_accepts_every_footprint_inside_the_page(
        w in 0.001f64..210.0,
        h in 0.001f64..297.0,
    ) {
        prop_assume!(w * MM_TO_POINTS <= A4_WIDTH_PT);
        prop_assume!(h * MM_TO_POINTS <= A4_HEIGHT_PT);
        prop_assert!(PageSize::A4.contains_mm(w, h));
    }

    #[test]
    fn a4_rejects_any_footprint_exceeding_a_bound(
        w in 0.001f64..1000.0,
        h in 0.001f64..1000.0,
    ) {
        let fits = mm_to_points(w) <= A4_WIDTH_PT && mm_to_points(h) <= A4_HEIGHT_PT;
        prop_assert_eq!(PageSize::A4.contains_mm(w, h), fits);
    }

    #[test]
    fn clamp_stays_in_range(value in -1000.0f64..1000.0, min in -100.0f64..0.0, max in 0.0f64..100.0) {
        let clamped = clamp(value, min, max);
        prop_assert!(clamped >= min && clamped <= max);
        if value >= min && value <= max {
            prop_assert_eq!(clamped, value);
        }
    }
}

#[test]
fn a4_exact_edges() {
    let max_w = A4_WIDTH_PT / MM_TO_POINTS;
    let max_h = A4_HEIGHT_PT / MM_TO_POINTS;
    assert!(PageSize::A4.contains_mm(max_w.floor(), max_h.floor()));
    assert!(!PageSize::A4.contains_mm(max_w + 0.01, 10.0));
    assert!(!PageSize::A4.contains_mm(10.0, max_h + 0.01));
}

#[test]
fn a4_nominal_height_is_outside_the_page() {
    assert!(mm_to_points(297.0) > A4_HEIGHT_PT);
    assert!(!PageSize::A4.contains_mm(210.0, 297.0));
    assert!(PageSize::A4.contains_mm(210.0, 296.99));
}
