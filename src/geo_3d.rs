use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
};
use std::fmt;

/// A point in 3D space.
/// Contains the coordinates of the point.
/// Has basic math support for adding and subtracting vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point{x, y, z}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Get the distance between two points.
    pub fn distance(&self, other: &Point) -> f64 {
        (*other - *self).norm()
    }
}
impl Add<GeoVector> for Point {
    type Output = Point;
    fn add(self, other: GeoVector) -> Point {
        Point{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl AddAssign<GeoVector> for Point {
    fn add_assign(&mut self, other: GeoVector) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}
impl Sub<GeoVector> for Point {
    type Output = Point;
    fn sub(self, other: GeoVector) -> Point {
        Point{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl SubAssign<GeoVector> for Point {
    fn sub_assign(&mut self, other: GeoVector) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;
    fn sub(self, other: Point) -> GeoVector {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A vector in 3D space.
/// Used for the axis direction and the radius vector of the primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        GeoVector{x, y, z}
    }

    /// Create a new zero vector.
    pub fn zero() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 0.0}
    }

    /// Normalize and return a new vector.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Get the cross product of two vectors.
    pub fn cross(&self, other: &GeoVector) -> GeoVector {
        GeoVector{
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Construct an xhat vector.
    pub fn xhat() -> Self {
        GeoVector{x: 1.0, y: 0.0, z: 0.0}
    }

    /// Construct a yhat vector.
    pub fn yhat() -> Self {
        GeoVector{x: 0.0, y: 1.0, z: 0.0}
    }

    /// Construct a zhat vector.
    pub fn zhat() -> Self {
        GeoVector{x: 0.0, y: 0.0, z: 1.0}
    }
}
impl Add for GeoVector {
    type Output = GeoVector;
    fn add(self, other: GeoVector) -> GeoVector {
        GeoVector{
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}
impl AddAssign for GeoVector {
    fn add_assign(&mut self, other: GeoVector) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}
impl Sub for GeoVector {
    type Output = GeoVector;
    fn sub(self, other: GeoVector) -> GeoVector {
        GeoVector{
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
impl SubAssign for GeoVector {
    fn sub_assign(&mut self, other: GeoVector) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}
impl Mul<f64> for GeoVector {
    type Output = GeoVector;
    fn mul(self, scalar: f64) -> GeoVector {
        GeoVector{
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}
impl MulAssign<f64> for GeoVector {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}
impl Div<f64> for GeoVector {
    type Output = GeoVector;
    fn div(self, scalar: f64) -> GeoVector {
        GeoVector{
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
impl DivAssign<f64> for GeoVector {
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}
impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
