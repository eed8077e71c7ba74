//! Sufficient statistics for simple linear regression.
//!
//! The four running sums below are all the closed-form OLS solution needs.
//! They form a commutative monoid under element-wise addition with
//! [`SufficientStats::default`] (all zeros) as the identity, so partial sums
//! computed over any partition of a point set can be combined into the total.

use super::point::Point;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Accumulated sums Σx, Σy, Σxy and Σx² over a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SufficientStats {
    /// Σx
    pub sum_x: f64,
    /// Σy
    pub sum_y: f64,
    /// Σxy
    pub sum_xy: f64,
    /// Σx²
    pub sum_x2: f64,
}

impl SufficientStats {
    /// The identity element: all sums zero.
    pub const ZERO: Self = Self {
        sum_x: 0.0,
        sum_y: 0.0,
        sum_xy: 0.0,
        sum_x2: 0.0,
    };

    /// Create statistics from explicit sums.
    pub const fn new(sum_x: f64, sum_y: f64, sum_xy: f64, sum_x2: f64) -> Self {
        Self {
            sum_x,
            sum_y,
            sum_xy,
            sum_x2,
        }
    }

    /// Incorporate one point into the running sums.
    #[inline]
    pub fn push(&mut self, p: Point) {
        self.sum_x += p.x;
        self.sum_y += p.y;
        self.sum_xy += p.x * p.y;
        self.sum_x2 += p.x * p.x;
    }

    /// Scan `points` once, in order, and return their sums.
    ///
    /// The accumulation order is the slice order, so identical input always
    /// yields bit-identical output.
    pub fn from_points(points: &[Point]) -> Self {
        let mut acc = Self::ZERO;
        for &p in points {
            acc.push(p);
        }
        acc
    }

    /// Element-wise sum of two partial results.
    #[inline]
    pub fn combine(self, other: Self) -> Self {
        Self {
            sum_x: self.sum_x + other.sum_x,
            sum_y: self.sum_y + other.sum_y,
            sum_xy: self.sum_xy + other.sum_xy,
            sum_x2: self.sum_x2 + other.sum_x2,
        }
    }

    /// Returns true if every sum is finite.
    pub fn is_finite(&self) -> bool {
        self.sum_x.is_finite()
            && self.sum_y.is_finite()
            && self.sum_xy.is_finite()
            && self.sum_x2.is_finite()
    }

    /// Regression denominator `n·Σx² − (Σx)²` for `n` observations.
    pub fn denominator(&self, n: usize) -> f64 {
        let n = n as f64;
        n * self.sum_x2 - self.sum_x * self.sum_x
    }
}

impl Add for SufficientStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

impl AddAssign for SufficientStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Sum for SufficientStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::combine)
    }
}

impl<'a> Sum<&'a SufficientStats> for SufficientStats {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn stats_approx(a: SufficientStats, b: SufficientStats) -> bool {
        approx(a.sum_x, b.sum_x)
            && approx(a.sum_y, b.sum_y)
            && approx(a.sum_xy, b.sum_xy)
            && approx(a.sum_x2, b.sum_x2)
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(SufficientStats::default(), SufficientStats::ZERO);
    }

    #[test]
    fn test_push() {
        let mut s = SufficientStats::default();
        s.push(Point::new(2.0, 3.0));
        s.push(Point::new(4.0, 5.0));

        assert_eq!(s, SufficientStats::new(6.0, 8.0, 26.0, 20.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert_eq!(SufficientStats::from_points(&[]), SufficientStats::ZERO);
    }

    #[test]
    fn test_identity() {
        let s = SufficientStats::new(1.5, -2.0, 3.25, 7.0);
        assert_eq!(s + SufficientStats::ZERO, s);
        assert_eq!(SufficientStats::ZERO + s, s);
    }

    #[test]
    fn test_commutative_and_associative() {
        let a = SufficientStats::new(0.1, 0.2, 0.3, 0.4);
        let b = SufficientStats::new(1e6, -3.5, 2.25, 1e12);
        let c = SufficientStats::new(-7.0, 11.0, 0.125, 49.0);

        assert!(stats_approx(a + b, b + a));
        assert!(stats_approx((a + b) + c, a + (b + c)));
    }

    #[test]
    fn test_sum_iterator() {
        let parts = [
            SufficientStats::new(1.0, 2.0, 3.0, 4.0),
            SufficientStats::new(5.0, 6.0, 7.0, 8.0),
        ];
        let total: SufficientStats = parts.iter().sum();
        assert_eq!(total, SufficientStats::new(6.0, 8.0, 10.0, 12.0));

        let mut acc = SufficientStats::ZERO;
        acc += parts[0];
        acc += parts[1];
        assert_eq!(acc, total);
    }

    #[test]
    fn test_split_matches_full_scan() {
        let points: Vec<Point> = (0..25)
            .map(|i| Point::new(i as f64 * 0.5, 3.0 - i as f64))
            .collect();

        let full = SufficientStats::from_points(&points);
        let (left, right) = points.split_at(11);
        let split = SufficientStats::from_points(left) + SufficientStats::from_points(right);

        assert!(stats_approx(full, split));
    }

    #[test]
    fn test_is_finite() {
        assert!(SufficientStats::new(1.0, 2.0, 3.0, 4.0).is_finite());
        assert!(!SufficientStats::new(1.0, f64::NAN, 3.0, 4.0).is_finite());

        let mut overflow = SufficientStats::ZERO;
        overflow.push(Point::new(1e200, 1.0));
        assert!(!overflow.is_finite());
    }

    #[test]
    fn test_denominator() {
        // x = 1, 2, 3: n·Σx² − (Σx)² = 3·14 − 36 = 6
        let s = SufficientStats::from_points(&[
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ]);
        assert_eq!(s.denominator(3), 6.0);
        assert_eq!(SufficientStats::ZERO.denominator(0), 0.0);
    }
}
