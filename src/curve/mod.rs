//! The static illustrative salary-growth curve.
//!
//! `salary(exp) = 15000 + 5000*exp + 300*exp^1.5` for exp in [0, 20].
//!
//! This curve is display-only: it is unrelated to the trained model and
//! rendering it never triggers a prediction.

/// Default upper end of the displayed experience range (years).
pub const MAX_EXPERIENCE_YEARS: u32 = 20;

/// Evaluate the curve at a (possibly fractional) experience value.
pub fn illustrative_salary(years: f64) -> f64 {
    15_000.0 + 5_000.0 * years + 300.0 * years.powf(1.5)
}

/// Integer table of the curve at whole-year steps, 0..=max_years.
///
/// Values are truncated to integers, matching the reference table.
pub fn curve_points(max_years: u32) -> Vec<(u32, i64)> {
    (0..=max_years)
        .map(|exp| (exp, illustrative_salary(f64::from(exp)) as i64))
        .collect()
}

/// Dense `(experience, salary)` grid for smooth chart rendering.
pub fn curve_grid(max_years: u32, n: usize) -> Vec<(f64, f64)> {
    let n = n.max(2);
    let t1 = f64::from(max_years);
    (0..n)
        .map(|i| {
            let u = i as f64 / (n as f64 - 1.0);
            let t = u * t1;
            (t, illustrative_salary(t))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_endpoints() {
        assert_eq!(illustrative_salary(0.0), 15_000.0);
        // exp=4: 15000 + 20000 + 300*8 = 37400 (4^1.5 = 8).
        assert!((illustrative_salary(4.0) - 37_400.0).abs() < 1e-9);
    }

    #[test]
    fn table_truncates_to_integer() {
        let points = curve_points(2);
        assert_eq!(points[0], (0, 15_000));
        // exp=2: 15000 + 10000 + 300*2.828427... = 25848.52... → 25848
        assert_eq!(points[2], (2, 25_848));
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn curve_is_strictly_increasing() {
        let points = curve_points(MAX_EXPERIENCE_YEARS);
        for pair in points.windows(2) {
            assert!(pair[1].1 > pair[0].1);
        }
    }

    #[test]
    fn grid_spans_requested_range() {
        let grid = curve_grid(20, 101);
        assert_eq!(grid.len(), 101);
        assert_eq!(grid[0].0, 0.0);
        assert_eq!(grid[100].0, 20.0);
        assert!(grid.iter().all(|&(_, y)| y.is_finite()));
    }
}
