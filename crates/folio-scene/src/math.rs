#![forbid(unsafe_code)]

//! Minimal 3D vector math for the background scene.

use std::ops::{Add, Mul, Sub};

/// A point or direction in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point on a sphere of radius `r` from polar angle `phi` and azimuth `theta`.
    #[must_use]
    pub fn from_spherical(r: f32, theta: f32, phi: f32) -> Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        Self::new(r * sin_phi * cos_theta, r * sin_phi * sin_theta, r * cos_phi)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f32::EPSILON {
            Self::ZERO
        } else {
            self * (1.0 / len)
        }
    }

    /// Rotate by Euler angles applied in X, then Y, then Z intrinsic order
    /// (the matrix `Rx · Ry · Rz`).
    #[must_use]
    pub fn rotate_euler(self, angles: Self) -> Self {
        let (sz, cz) = angles.z.sin_cos();
        let v = Self::new(self.x * cz - self.y * sz, self.x * sz + self.y * cz, self.z);
        let (sy, cy) = angles.y.sin_cos();
        let v = Self::new(v.x * cy + v.z * sy, v.y, -v.x * sy + v.z * cy);
        let (sx, cx) = angles.x.sin_cos();
        Self::new(v.x, v.y * cx - v.z * sx, v.y * sx + v.z * cx)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
