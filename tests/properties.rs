//! Property-based checks over document building.

use agrdoc::prelude::*;
use proptest::prelude::*;

fn finite_points() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-1e6..1e6f64, -1e6..1e6f64), 1..40)
}

fn build(points: &[(f64, f64)]) -> Page {
    let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
    let mut page = Page::new();
    // attachment cannot fail for equal-length finite arrays
    page.panel_mut(0).plot_xy(&x, &y).unwrap();
    page
}

proptest! {
    /// The same input always serializes to byte-identical text.
    #[test]
    fn prop_render_deterministic(points in finite_points()) {
        let a = build(&points).render().unwrap();
        let b = build(&points).render().unwrap();
        prop_assert_eq!(a, b);
    }

    /// Resolved limits always bracket the data on linear axes.
    #[test]
    fn prop_limits_bracket_data(points in finite_points()) {
        let mut page = build(&points);
        page.finalize().unwrap();
        let (xmin, xmax) = page.panel(0).x_axis().limits().unwrap();
        let (ymin, ymax) = page.panel(0).y_axis().limits().unwrap();
        for &(x, y) in &points {
            prop_assert!(xmin <= x && x <= xmax);
            prop_assert!(ymin <= y && y <= ymax);
        }
        prop_assert!(xmin < xmax && ymin < ymax);
    }

    /// Scaling every coordinate by a positive constant scales the resolved
    /// linear limits by the same constant.
    #[test]
    fn prop_linear_autoscale_is_scale_invariant(
        points in prop::collection::vec((-1e3..1e3f64, -1e3..1e3f64), 2..30),
        k in 0.1..100.0f64,
    ) {
        let scaled: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (x * k, y * k)).collect();
        let mut base = build(&points);
        let mut big = build(&scaled);
        base.finalize().unwrap();
        big.finalize().unwrap();
        let (a_min, a_max) = base.panel(0).x_axis().limits().unwrap();
        let (b_min, b_max) = big.panel(0).x_axis().limits().unwrap();
        // padding is proportional to the span, so limits scale linearly;
        // the degenerate-span epsilon path is not scale-proportional
        let span: f64 = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max)
            - points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        prop_assume!(span > 1e-6);
        prop_assert!((b_min - a_min * k).abs() <= 1e-6 * a_min.abs().max(1.0) * k);
        prop_assert!((b_max - a_max * k).abs() <= 1e-6 * a_max.abs().max(1.0) * k);
    }

    /// Finalizing twice changes nothing.
    #[test]
    fn prop_finalize_idempotent(points in finite_points()) {
        let mut page = build(&points);
        page.finalize().unwrap();
        let once = Serializer::new().serialize(&page);
        page.finalize().unwrap();
        let twice = Serializer::new().serialize(&page);
        prop_assert_eq!(once, twice);
    }

    /// Pinned bounds survive autoscale untouched.
    #[test]
    fn prop_pinned_limits_kept(points in finite_points(),
                               lo in -1e3..0.0f64, hi in 1.0..1e3f64) {
        let mut page = build(&points);
        page.panel_mut(0).set_ylim(lo, hi).unwrap();
        page.finalize().unwrap();
        prop_assert_eq!(page.panel(0).y_axis().limits(), Some((lo, hi)));
    }

    /// Every data section is terminated and every dataset is numbered by
    /// enumeration order.
    #[test]
    fn prop_data_sections_well_formed(sets in prop::collection::vec(finite_points(), 1..5)) {
        let mut page = Page::new();
        for points in &sets {
            let (x, y): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
            page.panel_mut(0).plot_xy(&x, &y).unwrap();
        }
        let text = page.render().unwrap();
        prop_assert_eq!(text.matches("@target").count(), sets.len());
        prop_assert_eq!(text.matches('&').count(), sets.len());
        for i in 0..sets.len() {
            let needle = format!("@target G0.S{}", i);
            prop_assert!(text.contains(&needle));
        }
    }
}
