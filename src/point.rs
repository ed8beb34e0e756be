/*
 * Point Module
 *
 * This module defines Point2D, the position type shared by agents and the
 * spatial tree. Besides ordinary vector arithmetic it knows how to measure
 * displacements on a toroidal plane, where every edge wraps to the opposite
 * edge and the shortest path between two points may cross the seam.
 */

use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length2(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    // Signed displacement from `self` to `other`, each axis folded onto the
    // shorter way around the torus, i.e. into (-dim/2, dim/2]
    #[inline]
    pub fn toroidal_offset(self, other: Point2D, width: f32, height: f32) -> Point2D {
        Point2D {
            x: fold_axis(other.x - self.x, width),
            y: fold_axis(other.y - self.y, height),
        }
    }

    #[inline]
    pub fn toroidal_distance2(self, other: Point2D, width: f32, height: f32) -> f32 {
        self.toroidal_offset(other, width, height).length2()
    }

    // Wrap a position back into [0, width) x [0, height)
    pub fn wrapped(self, width: f32, height: f32) -> Point2D {
        Point2D {
            x: wrap_axis(self.x, width),
            y: wrap_axis(self.y, height),
        }
    }
}

// Degenerate dimensions (zero, negative or NaN) leave the value untouched so
// callers never divide by or take the remainder of a bad extent.
#[inline]
fn fold_axis(delta: f32, dim: f32) -> f32 {
    if !(dim > 0.0) {
        return delta;
    }

    let half = dim / 2.0;
    if delta > -half && delta <= half {
        return delta;
    }

    let folded = delta.rem_euclid(dim);
    if folded > half {
        folded - dim
    } else {
        folded
    }
}

#[inline]
fn wrap_axis(value: f32, dim: f32) -> f32 {
    if !(dim > 0.0) {
        return value;
    }
    if (0.0..dim).contains(&value) {
        return value;
    }

    let wrapped = value.rem_euclid(dim);
    // rem_euclid can round up to `dim` for tiny negative inputs
    if wrapped >= dim {
        0.0
    } else {
        wrapped
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f32) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn offset_takes_the_short_way_across_the_seam() {
        let a = Point2D::new(0.1, 5.0);
        let b = Point2D::new(9.9, 5.0);

        let ab = a.toroidal_offset(b, 10.0, 10.0);
        assert!((ab.x + 0.2).abs() < EPS, "got {:?}", ab);
        assert!(ab.y.abs() < EPS);

        let ba = b.toroidal_offset(a, 10.0, 10.0);
        assert!((ba.x - 0.2).abs() < EPS, "got {:?}", ba);
    }

    #[test]
    fn toroidal_distance_never_exceeds_euclidean() {
        let (w, h) = (37.0, 23.0);
        let samples = [
            (Point2D::new(0.0, 0.0), Point2D::new(36.5, 22.5)),
            (Point2D::new(18.0, 11.0), Point2D::new(18.5, 11.5)),
            (Point2D::new(1.0, 20.0), Point2D::new(30.0, 2.0)),
            (Point2D::new(12.3, 4.5), Point2D::new(12.3, 4.5)),
            (Point2D::new(5.0, 5.0), Point2D::new(23.5, 16.5)),
        ];

        for (p, q) in samples {
            let toroidal = p.toroidal_distance2(q, w, h);
            let euclidean = (q - p).length2();
            assert!(toroidal <= euclidean + EPS, "{:?} {:?}", p, q);
        }
    }

    #[test]
    fn toroidal_distance_is_invariant_under_domain_translation() {
        let (w, h) = (40.0, 25.0);
        let p = Point2D::new(3.0, 21.0);
        let q = Point2D::new(37.5, 1.5);
        let base = p.toroidal_distance2(q, w, h);

        for shift in [
            Point2D::new(w, 0.0),
            Point2D::new(-w, 0.0),
            Point2D::new(0.0, h),
            Point2D::new(0.0, -h),
        ] {
            let moved = p + shift;
            assert!((moved.toroidal_distance2(q, w, h) - base).abs() < EPS);
        }
    }

    #[test]
    fn half_domain_difference_folds_to_positive_side() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(5.0, 0.0);
        assert_eq!(a.toroidal_offset(b, 10.0, 10.0).x, 5.0);
        assert_eq!(b.toroidal_offset(a, 10.0, 10.0).x, 5.0);
    }

    #[test]
    fn degenerate_domain_does_not_fold() {
        let a = Point2D::new(1.0, 1.0);
        let b = Point2D::new(4.0, -3.0);
        assert_eq!(a.toroidal_offset(b, 0.0, -2.0), Point2D::new(3.0, -4.0));
        assert_eq!(b.wrapped(0.0, f32::NAN), b);
    }

    #[test]
    fn wrapped_brings_points_back_inside() {
        let p = Point2D::new(-0.5, 10.25).wrapped(10.0, 10.0);
        assert!((p.x - 9.5).abs() < EPS);
        assert!((p.y - 0.25).abs() < EPS);

        let tiny = Point2D::new(-1e-9, 0.0).wrapped(10.0, 10.0);
        assert!(tiny.x >= 0.0 && tiny.x < 10.0);
    }
}
