//! Plain value types for the 2D world: displacements, positions and grid cells.
//!
//! All arithmetic follows IEEE-754. In particular [`Vector2::recip`] never
//! traps: a zero component turns into an infinity, which the DDA relies on to
//! never pick an axis the ray runs parallel to.

use crate::scalar::Scalar;
use glam::{DVec2, Vec2};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Floating-point displacement.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// rotate counter-clockwise by `angle` radians
    pub fn rotate(self, angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// elementwise `1 / v`; zero components become infinite
    pub fn recip(self) -> Self {
        Self::new(self.x.recip(), self.y.recip())
    }

    pub fn x_projection(self) -> Self {
        Self::new(self.x, T::zero())
    }

    pub fn y_projection(self) -> Self {
        Self::new(T::zero(), self.y)
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product
    pub fn perp_dot(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// signed angle from `self` to `other`, in `(-π, π]`
    pub fn angle_to(self, other: Self) -> T {
        self.perp_dot(other).atan2(self.dot(other))
    }

    pub fn length(self) -> T {
        self.dot(self).sqrt()
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Floating-point position in grid units.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// cell containing this point, truncating toward zero
    pub fn to_location(self) -> GridLocation {
        GridLocation::new(self.x.trunc_i32(), self.y.trunc_i32())
    }

    pub fn to_vector(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Self;

    fn add(self, rhs: Vector2<T>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub<Vector2<T>> for Point2<T> {
    type Output = Self;

    fn sub(self, rhs: Vector2<T>) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;

    fn sub(self, rhs: Self) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> AddAssign<Vector2<T>> for Point2<T> {
    fn add_assign(&mut self, rhs: Vector2<T>) {
        *self = *self + rhs;
    }
}

/// Integer cell coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct GridLocation {
    pub x: i32,
    pub y: i32,
}

impl GridLocation {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_vector<T: Scalar>(self) -> Vector2<T> {
        Vector2::new(T::from_i32(self.x), T::from_i32(self.y))
    }

    /// move by `offset`, going through float and truncating back
    pub fn step<T: Scalar>(self, offset: Vector2<T>) -> Self {
        let moved = self.to_vector() + offset;
        Self::new(moved.x.trunc_i32(), moved.y.trunc_i32())
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Vec2> for Vector2<f32> {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f32>> for Vec2 {
    fn from(v: Vector2<f32>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2<f64> {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2<f64>> for DVec2 {
    fn from(v: Vector2<f64>) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Point2<f32> {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2<f32>> for Vec2 {
    fn from(p: Point2<f32>) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point2<f64> {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2<f64>> for DVec2 {
    fn from(p: Point2<f64>) -> Self {
        DVec2::new(p.x, p.y)
    }
}
