use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::Deserialize;

/// A 3D point or direction in world units.
///
/// Y is elevation; the plan view only uses X and Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Apply a rotation (or any linear map) to this vector.
    pub fn rotate(&self, matrix: &Matrix3) -> Self {
        *matrix * *self
    }

    pub fn component_min(&self, other: &Vector3) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    pub fn component_max(&self, other: &Vector3) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    pub fn approx_eq(&self, other: &Vector3, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Row-major 3×3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub rows: [[f64; 3]; 3],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    pub fn approx_eq(&self, other: &Matrix3, tolerance: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Matrix3 { rows }
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        let r = &self.rows;
        Vector3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }
}

/// Builds rotation matrices from Euler angles in radians.
pub struct RotationBuilder;

impl RotationBuilder {
    pub fn rotation_x(angle: f64) -> Matrix3 {
        let (s, c) = angle.sin_cos();
        Matrix3::from_rows([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    pub fn rotation_y(angle: f64) -> Matrix3 {
        let (s, c) = angle.sin_cos();
        Matrix3::from_rows([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    pub fn rotation_z(angle: f64) -> Matrix3 {
        let (s, c) = angle.sin_cos();
        Matrix3::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Compose `Rx · Ry · Rz`. Angles are used as given, never wrapped.
    pub fn from_euler(rx: f64, ry: f64, rz: f64) -> Matrix3 {
        Self::rotation_x(rx) * Self::rotation_y(ry) * Self::rotation_z(rz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_vector_add() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 10.0);
        assert_eq!(a + b, Vector3::new(-3.0, 2.5, 13.0));
    }

    #[test]
    fn test_identity_rotation() {
        let m = RotationBuilder::from_euler(0.0, 0.0, 0.0);
        assert!(m.approx_eq(&Matrix3::IDENTITY, 1e-12));
        let v = Vector3::new(3.5, -2.0, 7.25);
        assert!(v.rotate(&m).approx_eq(&v, 1e-12));
    }

    #[test]
    fn test_composition_order_is_x_y_z() {
        let (rx, ry, rz): (f64, f64, f64) = (0.3, -1.1, 2.4);
        let (sx, cx) = rx.sin_cos();
        let (sy, cy) = ry.sin_cos();
        let (sz, cz) = rz.sin_cos();
        let mx = [[1.0, 0.0, 0.0], [0.0, cx, -sx], [0.0, sx, cx]];
        let my = [[cy, 0.0, sy], [0.0, 1.0, 0.0], [-sy, 0.0, cy]];
        let mz = [[cz, -sz, 0.0], [sz, cz, 0.0], [0.0, 0.0, 1.0]];

        let multiply = |a: [[f64; 3]; 3], b: [[f64; 3]; 3]| {
            let mut out = [[0.0; 3]; 3];
            for i in 0..3 {
                for j in 0..3 {
                    for k in 0..3 {
                        out[i][j] += a[i][k] * b[k][j];
                    }
                }
            }
            out
        };
        let expected = Matrix3::from_rows(multiply(multiply(mx, my), mz));
        let commuted = Matrix3::from_rows(multiply(multiply(mz, my), mx));

        let built = RotationBuilder::from_euler(rx, ry, rz);
        assert!(built.approx_eq(&expected, 1e-12));
        assert!(!built.approx_eq(&commuted, 1e-6));
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let m = RotationBuilder::from_euler(0.0, FRAC_PI_2, 0.0);
        let v = Vector3::new(1.0, 0.0, 0.0).rotate(&m);
        assert!(v.approx_eq(&Vector3::new(0.0, 0.0, -1.0), 1e-12));
    }

    #[test]
    fn test_out_of_range_angles_accepted() {
        let wrapped = RotationBuilder::from_euler(0.0, 0.5, 0.0);
        let unwrapped = RotationBuilder::from_euler(0.0, 0.5 + 4.0 * std::f64::consts::PI, 0.0);
        assert!(wrapped.approx_eq(&unwrapped, 1e-9));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }
}
