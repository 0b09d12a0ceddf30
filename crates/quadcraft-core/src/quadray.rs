//! The [`Quadray`] coordinate type and its arithmetic, conversions, and metrics.
//!
//! A quadray `(a, b, c, d)` locates a point as a non-negative combination of
//! four basis vectors pointing from the centre of a regular tetrahedron to its
//! vertices. The four basis vectors sum to zero, so adding the same constant
//! to every component names the same point. [`Quadray::normalized`] picks the
//! canonical representative (smallest component zero); it is applied to every
//! result that gets compared, stored, or keyed.

use crate::key::QuadKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Scale of the quadray-to-Cartesian linear map: `1/√2`.
const CARTESIAN_SCALE: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// A four-component tetrahedral coordinate.
///
/// Values are immutable: every operation returns a new `Quadray`. Equality
/// (`PartialEq`) is exact and component-wise on the stored representation;
/// use [`approx_eq`](Self::approx_eq) or [`to_key`](Self::to_key) to compare
/// points up to the uniform-offset redundancy.
///
/// # Examples
///
/// ```
/// use quadcraft_core::Quadray;
///
/// let p = Quadray::new(2.0, 1.0, 1.0, 1.0).normalized();
/// assert_eq!(p, Quadray::A);
///
/// let [x, y, z] = Quadray::ORIGIN.to_cartesian();
/// assert_eq!((x, y, z), (0.0, 0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Quadray {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quadray {
    /// The origin `(0, 0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Basis vector `(1, 0, 0, 0)`.
    pub const A: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Basis vector `(0, 1, 0, 0)`.
    pub const B: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Basis vector `(0, 0, 1, 0)`.
    pub const C: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Basis vector `(0, 0, 0, 1)`.
    pub const D: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// The four basis vectors in `A, B, C, D` order.
    pub const BASIS: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Create a quadray from literal components. No normalization is applied.
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Create a quadray from a `[a, b, c, d]` array.
    pub const fn from_components(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Create a quadray from integer grid components.
    pub fn from_cell(cell: [i32; 4]) -> Self {
        Self::new(
            f64::from(cell[0]),
            f64::from(cell[1]),
            f64::from(cell[2]),
            f64::from(cell[3]),
        )
    }

    /// First component.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Second component.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Third component.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Fourth component.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// All four components as `[a, b, c, d]`.
    pub fn components(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Integer components, if every component is a whole number that fits `i32`.
    pub fn to_cell(&self) -> Option<[i32; 4]> {
        let mut out = [0i32; 4];
        for (slot, v) in out.iter_mut().zip(self.components()) {
            if !v.is_finite() || v.fract() != 0.0 || v < f64::from(i32::MIN) || v > f64::from(i32::MAX)
            {
                return None;
            }
            *slot = v as i32;
        }
        Some(out)
    }

    /// Zero-minimum normalization: subtract `min(a, b, c, d)` from every component.
    pub fn normalized(&self) -> Self {
        let m = self.a.min(self.b).min(self.c).min(self.d);
        Self::new(self.a - m, self.b - m, self.c - m, self.d - m)
    }

    /// Whether this is already the canonical representative (minimum component zero).
    pub fn is_normalized(&self) -> bool {
        self.a.min(self.b).min(self.c).min(self.d) == 0.0
    }

    /// Component-wise multiply by `k`. Not normalized.
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.a * k, self.b * k, self.c * k, self.d * k)
    }

    /// Convert to Cartesian `[x, y, z]`.
    ///
    /// `x = (a − b − c + d)/√2`, `y = (a − b + c − d)/√2`,
    /// `z = (a + b − c − d)/√2`. The map ignores uniform offsets, so
    /// normalization never changes the result.
    pub fn to_cartesian(&self) -> [f64; 3] {
        let s = CARTESIAN_SCALE;
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        [
            s * (a - b - c + d),
            s * (a - b + c - d),
            s * (a + b - c - d),
        ]
    }

    /// Convert a Cartesian point to a normalized quadray.
    ///
    /// Inverse of [`to_cartesian`](Self::to_cartesian) up to floating-point
    /// error: `from_cartesian(q.to_cartesian())` recovers `q.normalized()`.
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Self {
        let s = CARTESIAN_SCALE;
        let pos = |v: f64| v.max(0.0);
        let neg = |v: f64| (-v).max(0.0);
        Self::new(
            s * (pos(x) + pos(y) + pos(z)),
            s * (neg(x) + neg(y) + pos(z)),
            s * (neg(x) + pos(y) + neg(z)),
            s * (pos(x) + neg(y) + neg(z)),
        )
        .normalized()
    }

    /// Quadray-native length `√((a² + b² + c² + d²) / 2)`.
    pub fn length(&self) -> f64 {
        let [a, b, c, d] = self.components();
        ((a * a + b * b + c * c + d * d) / 2.0).sqrt()
    }

    /// Length of the raw component difference `self − other`.
    ///
    /// Both operands must share an offset class; normalize both first when
    /// they may not.
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Angle in degrees to `other`, measured in Cartesian space.
    pub fn angle_to(&self, other: &Self) -> f64 {
        angle_between(self, other)
    }

    /// Equality after normalization, within `epsilon` per component.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let p = self.normalized().components();
        let q = other.normalized().components();
        p.iter().zip(q.iter()).all(|(x, y)| (x - y).abs() < epsilon)
    }

    /// Canonical key of the normalized coordinate.
    pub fn to_key(&self) -> QuadKey {
        QuadKey::from_quadray(self)
    }
}

/// Normalized component-wise sum.
impl Add for Quadray {
    type Output = Quadray;

    fn add(self, rhs: Quadray) -> Quadray {
        Quadray::new(
            self.a + rhs.a,
            self.b + rhs.b,
            self.c + rhs.c,
            self.d + rhs.d,
        )
        .normalized()
    }
}

/// Raw component-wise difference. Not normalized.
impl Sub for Quadray {
    type Output = Quadray;

    fn sub(self, rhs: Quadray) -> Quadray {
        Quadray::new(
            self.a - rhs.a,
            self.b - rhs.b,
            self.c - rhs.c,
            self.d - rhs.d,
        )
    }
}

impl Mul<f64> for Quadray {
    type Output = Quadray;

    fn mul(self, k: f64) -> Quadray {
        self.scale(k)
    }
}

impl From<[f64; 4]> for Quadray {
    fn from(q: [f64; 4]) -> Self {
        Self::from_components(q)
    }
}

impl From<[i32; 4]> for Quadray {
    fn from(cell: [i32; 4]) -> Self {
        Self::from_cell(cell)
    }
}

impl fmt::Display for Quadray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.a, self.b, self.c, self.d
        )
    }
}

/// The four unit basis quadrays.
pub fn basis_vectors() -> [Quadray; 4] {
    Quadray::BASIS
}

/// Quadray distance `length(p − q)`.
pub fn distance(p: &Quadray, q: &Quadray) -> f64 {
    p.distance(q)
}

/// Angle in degrees between `u` and `v` in Cartesian space.
///
/// Returns `0.0` when either vector maps to the Cartesian zero vector.
pub fn angle_between(u: &Quadray, v: &Quadray) -> f64 {
    let [x1, y1, z1] = u.to_cartesian();
    let [x2, y2, z2] = v.to_cartesian();
    let dot = x1 * x2 + y1 * y2 + z1 * z2;
    let mag1 = (x1 * x1 + y1 * y1 + z1 * z1).sqrt();
    let mag2 = (x2 * x2 + y2 * y2 + z2 * z2).sqrt();
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }
    (dot / (mag1 * mag2)).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Manhattan distance over the four raw components.
pub fn manhattan(p: &Quadray, q: &Quadray) -> f64 {
    p.components()
        .iter()
        .zip(q.components().iter())
        .map(|(x, y)| (x - y).abs())
        .sum()
}

/// Euclidean distance over the four raw components (not via Cartesian space).
pub fn euclidean_4d(p: &Quadray, q: &Quadray) -> f64 {
    p.components()
        .iter()
        .zip(q.components().iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
