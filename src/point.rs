use std::ops::{Add, Mul, Sub};

use crate::traits::{ApproxEq, Scalar};

/// Represents a 2D point in the input vector.
#[derive(Clone, Copy, PartialEq)]
pub struct Point<T: Scalar> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar + std::fmt::Debug> std::fmt::Debug for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{:?}, {:?}]", self.x, self.y)
    }
}

impl<T: Scalar> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// The square of the length of `self`.
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Returns a `Point` that is equal to `self` rotated by 90 degrees.
    pub fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// The perpendicular dot product of `self` and `other`.
    pub fn perp_dot(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// The square of the distance between `self` and `p`.
    pub fn distance_squared(self, p: Self) -> T {
        (self - p).length_squared()
    }

    fn circumdelta(self, b: Self, c: Self) -> Self {
        let d = b - self;
        let e = c - self;

        let bl = d.length_squared();
        let cl = e.length_squared();
        let k: T = T::from(0.5) / d.perp_dot(e);

        (d * cl - e * bl).perp() * k
    }

    /// The square of the radius of the circumcircle of `self`, `b`, and `c`.
    pub fn circumradius_squared(self, b: Self, c: Self) -> T {
        self.circumdelta(b, c).length_squared()
    }

    /// The center of the circumcircle of `self`, `b`, and `c`.
    pub fn circumcenter(self, b: Self, c: Self) -> Self {
        self + self.circumdelta(b, c)
    }

    pub fn nearly_equals(self, p: Self) -> bool
    where
        T: ApproxEq,
    {
        self.x.approx_eq(p.x) && self.y.approx_eq(p.y)
    }
}

impl<T: Scalar> Add<Point<T>> for Point<T> {
    type Output = Point<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> Sub<Point<T>> for Point<T> {
    type Output = Point<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> Mul<T> for Point<T> {
    type Output = Point<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
