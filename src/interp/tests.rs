use super::linear::{interp_monotonic, lerp_clamped};
use super::*;
use ndarray::Array2;
use num_complex::Complex64;

// ======================== Linear (clamped) ========================

#[test]
fn lerp_basic() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0];
    let ys = [0.0, 1.0, 0.0, 1.0];
    assert!((lerp_clamped(&xs, &ys, 0.5) - 0.5).abs() < 1e-14);
    assert!((lerp_clamped(&xs, &ys, 1.5) - 0.5).abs() < 1e-14);
    assert!((lerp_clamped(&xs, &ys, 2.25) - 0.25).abs() < 1e-14);
    assert_eq!(lerp_clamped(&xs, &ys, 1.0), 1.0);
    assert_eq!(lerp_clamped(&xs, &ys, 2.0), 0.0);
}

#[test]
fn lerp_clamps_instead_of_extrapolating() {
    let xs = [1.0_f64, 2.0, 3.0];
    let ys = [1.0, 3.0, 2.0];
    assert_eq!(lerp_clamped(&xs, &ys, 0.0), 1.0);
    assert_eq!(lerp_clamped(&xs, &ys, 1.0), 1.0);
    assert_eq!(lerp_clamped(&xs, &ys, 3.0), 2.0);
    assert_eq!(lerp_clamped(&xs, &ys, 40.0), 2.0);
}

#[test]
fn lerp_non_uniform() {
    let xs = [0.0_f64, 0.1, 1.0, 10.0];
    let ys = [0.0, 1.0, 2.0, 3.0];
    assert!((lerp_clamped(&xs, &ys, 0.55) - 1.5).abs() < 1e-14);
    assert!((lerp_clamped(&xs, &ys, 5.5) - 2.5).abs() < 1e-14);
}

#[test]
fn lerp_single_knot() {
    assert_eq!(lerp_clamped(&[2.0_f64], &[7.0], 1.0), 7.0);
    assert_eq!(lerp_clamped(&[2.0_f64], &[7.0], 2.0), 7.0);
    assert_eq!(lerp_clamped(&[2.0_f64], &[7.0], 3.0), 7.0);
}

#[test]
fn single_knot_nan_query() {
    assert_eq!(lerp_clamped(&[2.0_f64], &[7.0], f64::NAN), 7.0);
    assert_eq!(interp_monotonic(&[2.0_f64], &[7.0], f64::NAN), 7.0);
}

#[test]
fn lerp_repeated_knot() {
    // step discontinuity at x = 1
    let xs = [0.0_f64, 1.0, 1.0, 2.0];
    let ys = [0.0, 1.0, 5.0, 6.0];
    assert!((lerp_clamped(&xs, &ys, 0.5) - 0.5).abs() < 1e-14);
    assert!((lerp_clamped(&xs, &ys, 1.5) - 5.5).abs() < 1e-14);
    assert!(lerp_clamped(&xs, &ys, 1.0).is_finite());
}

#[test]
fn lerp_complex_values() {
    let xs = [0.0_f64, 2.0];
    let ys = [Complex64::new(0.0, 2.0), Complex64::new(4.0, 0.0)];
    let v = lerp_clamped(&xs, &ys, 0.5);
    assert!((v - Complex64::new(1.0, 1.5)).norm() < 1e-14);
}

#[test]
fn lerp_f32() {
    let v = lerp_clamped(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 1.0, 4.0], 1.5);
    assert!((v - 2.5).abs() < 1e-6);
}

#[test]
fn monotonic_increasing() {
    let xp = [0.0_f64, 1.0, 4.0, 9.0];
    let fp = [0.0, 1.0, 2.0, 3.0];
    assert!((interp_monotonic(&xp, &fp, 2.5) - 1.5).abs() < 1e-14);
    assert_eq!(interp_monotonic(&xp, &fp, -3.0), 0.0);
    assert_eq!(interp_monotonic(&xp, &fp, 30.0), 3.0);
}

#[test]
fn monotonic_decreasing() {
    let xp = [9.0_f64, 4.0, 1.0, 0.0];
    let fp = [0.0, 1.0, 2.0, 3.0];
    assert!((interp_monotonic(&xp, &fp, 2.5) - 1.5).abs() < 1e-14);
    assert!((interp_monotonic(&xp, &fp, 6.5) - 0.5).abs() < 1e-14);
    assert_eq!(interp_monotonic(&xp, &fp, 4.0), 1.0);
    assert_eq!(interp_monotonic(&xp, &fp, 10.0), 0.0);
    assert_eq!(interp_monotonic(&xp, &fp, -1.0), 3.0);
}

// ======================== Not-a-knot spline ========================

#[test]
fn slopes_degenerate_counts() {
    assert!(knot_slopes::<f64>(&[], &[]).is_empty());
    assert_eq!(knot_slopes(&[1.0_f64], &[5.0]), vec![0.0]);
    assert_eq!(knot_slopes(&[0.0_f64, 2.0], &[1.0, 5.0]), vec![2.0, 2.0]);
}

#[test]
fn slopes_three_points_parabola() {
    // y = x² on non-uniform knots
    let xs = [0.0_f64, 1.0, 3.0];
    let ys = [0.0, 1.0, 9.0];
    let s = knot_slopes(&xs, &ys);
    for (si, xi) in s.iter().zip(xs.iter()) {
        assert!((si - 2.0 * xi).abs() < 1e-12, "slope {} at {}", si, xi);
    }
}

#[test]
fn slopes_cubic_exact() {
    // not-a-knot reproduces any cubic: y = x³ - 2x, y' = 3x² - 2
    let xs = [-1.0_f64, 0.0, 0.5, 2.0, 2.5, 4.0];
    let ys: Vec<f64> = xs.iter().map(|x| x * x * x - 2.0 * x).collect();
    let s = knot_slopes(&xs, &ys);
    for (si, xi) in s.iter().zip(xs.iter()) {
        assert!((si - (3.0 * xi * xi - 2.0)).abs() < 1e-10);
    }
}

#[test]
fn spline_knot_values() {
    let xs = vec![0.0_f64, 1.0, 2.0, 3.0, 4.0];
    let ys = vec![2.0, 3.0, 5.0, 4.0, 1.0];
    let spline = DynSpline::new(xs.clone(), ys.clone()).unwrap();
    for (x, y) in xs.iter().zip(ys.iter()) {
        assert!((spline.eval(*x) - y).abs() < 1e-12);
    }
}

#[test]
fn spline_cubic_between_knots() {
    let xs = vec![0.0_f64, 0.7, 1.5, 2.0, 3.1];
    let f = |x: f64| 0.5 * x * x * x - x * x + 3.0;
    let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
    let spline = DynSpline::new(xs, ys).unwrap();
    for &x in &[0.1, 0.9, 1.77, 2.5, 3.0] {
        assert!((spline.eval(x) - f(x)).abs() < 1e-10);
    }
    // extrapolation keeps the boundary cubic
    assert!((spline.eval(-0.5) - f(-0.5)).abs() < 1e-9);
    assert!((spline.eval(3.5) - f(3.5)).abs() < 1e-9);
}

#[test]
fn spline_derivative() {
    let xs = vec![0.0_f64, 1.0, 2.0, 3.0];
    let ys: Vec<f64> = xs.iter().map(|x| x * x * x).collect();
    let spline = DynSpline::new(xs, ys).unwrap();
    let (v, d) = spline.eval_derivative(1.5);
    assert!((v - 3.375).abs() < 1e-12);
    assert!((d - 6.75).abs() < 1e-12);
}

#[test]
fn spline_two_points_is_linear() {
    let spline = DynSpline::new(vec![0.0_f64, 2.0], vec![1.0, 5.0]).unwrap();
    assert!((spline.eval(0.5) - 2.0).abs() < 1e-14);
    assert!((spline.eval(3.0) - 7.0).abs() < 1e-14);
}

#[test]
fn spline_errors() {
    assert_eq!(
        DynSpline::new(vec![0.0_f64], vec![1.0]).unwrap_err(),
        InterpError::TooFewPoints
    );
    assert_eq!(
        DynSpline::new(vec![0.0_f64, 1.0], vec![1.0]).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(
        DynSpline::new(vec![0.0_f64, 1.0, 1.0], vec![1.0, 2.0, 3.0]).unwrap_err(),
        InterpError::NotSorted
    );
}

// ======================== Bivariate spline ========================

fn grid(xs: &[f64], ys: &[f64], f: impl Fn(f64, f64) -> f64) -> Array2<f64> {
    Array2::from_shape_fn((xs.len(), ys.len()), |(i, j)| f(xs[i], ys[j]))
}

#[test]
fn bispline_two_by_two_is_bilinear() {
    let xs = vec![0.0_f64, 1.0];
    let ys = vec![0.0, 1.0];
    let z = ndarray::array![[0.0, 0.0], [0.0, 4.0]];
    let s = RectBivariateSpline::new(xs, ys, z.view()).unwrap();
    assert!((s.eval(1.0, 1.0) - 4.0).abs() < 1e-14);
    assert!((s.eval(0.0, 1.0)).abs() < 1e-14);
    assert!((s.eval(0.5, 0.5) - 1.0).abs() < 1e-14);
    assert!((s.eval(0.25, 1.0) - 1.0).abs() < 1e-14);
}

#[test]
fn bispline_grid_points() {
    let xs = vec![0.0_f64, 0.5, 1.5, 2.0, 3.0];
    let ys = vec![-1.0_f64, 0.0, 1.0, 2.5];
    let z = grid(&xs, &ys, |x, y| (x * y).sin() + x);
    let s = RectBivariateSpline::new(xs.clone(), ys.clone(), z.view()).unwrap();
    for (i, &x) in xs.iter().enumerate() {
        for (j, &y) in ys.iter().enumerate() {
            assert!((s.eval(x, y) - z[[i, j]]).abs() < 1e-12);
        }
    }
}

#[test]
fn bispline_reproduces_bicubic() {
    let xs = vec![0.0_f64, 0.4, 1.0, 1.7, 2.0, 3.0];
    let ys = vec![-2.0_f64, -1.0, 0.5, 1.0, 2.0];
    let f = |x: f64, y: f64| x * x * x * y - 2.0 * x * y * y * y + x * y + 1.0;
    let z = grid(&xs, &ys, f);
    let s = RectBivariateSpline::new(xs, ys, z.view()).unwrap();
    for &(x, y) in &[(0.2, -1.5), (1.3, 0.7), (2.9, 1.9), (0.05, 0.0)] {
        assert!((s.eval(x, y) - f(x, y)).abs() < 1e-9, "at ({}, {})", x, y);
    }
    // extrapolation through the boundary cell
    assert!((s.eval(3.2, 2.1) - f(3.2, 2.1)).abs() < 1e-8);
}

#[test]
fn bispline_mixed_degrees() {
    // 3 x-knots (quadratic), 2 y-knots (linear)
    let xs = vec![0.0_f64, 1.0, 2.0];
    let ys = vec![0.0_f64, 1.0];
    let f = |x: f64, y: f64| x * x * (1.0 + y);
    let z = grid(&xs, &ys, f);
    let s = RectBivariateSpline::new(xs, ys, z.view()).unwrap();
    assert!((s.eval(1.5, 0.5) - f(1.5, 0.5)).abs() < 1e-12);
}

#[test]
fn bispline_single_row() {
    let xs = vec![3.0_f64];
    let ys = vec![0.0_f64, 1.0, 2.0];
    let z = ndarray::array![[0.0, 1.0, 4.0]];
    let s = RectBivariateSpline::new(xs, ys, z.view()).unwrap();
    // constant along x, parabola along y
    assert!((s.eval(-10.0, 1.5) - 2.25).abs() < 1e-12);
    assert!((s.eval(3.0, 1.5) - 2.25).abs() < 1e-12);
}

#[test]
fn bispline_errors() {
    let z = Array2::<f64>::zeros((2, 2));
    assert_eq!(
        RectBivariateSpline::new(vec![], vec![0.0, 1.0], Array2::<f64>::zeros((0, 2)).view())
            .unwrap_err(),
        InterpError::TooFewPoints
    );
    assert_eq!(
        RectBivariateSpline::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0], z.view()).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(
        RectBivariateSpline::new(vec![0.0, 0.0], vec![0.0, 1.0], z.view()).unwrap_err(),
        InterpError::NotSorted
    );
    assert_eq!(
        RectBivariateSpline::new(vec![0.0, 1.0], vec![1.0, 0.0], z.view()).unwrap_err(),
        InterpError::NotSorted
    );
}

// ======================== Error display ========================

#[test]
fn error_display() {
    assert!(InterpError::TooFewPoints.to_string().contains("not enough"));
    assert!(InterpError::NotSorted.to_string().contains("strictly increasing"));
    assert!(InterpError::LengthMismatch.to_string().contains("same length"));
}

// ======================== find_interval ========================

#[test]
fn find_interval_basic() {
    let xs = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
    assert_eq!(find_interval(&xs, 0.5), 0);
    assert_eq!(find_interval(&xs, 1.5), 1);
    assert_eq!(find_interval(&xs, 2.5), 2);
    assert_eq!(find_interval(&xs, 3.5), 3);
    // At knots
    assert_eq!(find_interval(&xs, 0.0), 0);
    assert_eq!(find_interval(&xs, 1.0), 1);
    assert_eq!(find_interval(&xs, 4.0), 3); // clamped to last segment
    // Out of bounds
    assert_eq!(find_interval(&xs, -1.0), 0);
    assert_eq!(find_interval(&xs, 5.0), 3);
}
