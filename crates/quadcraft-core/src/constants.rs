//! Isotropic Vector Matrix (Synergetics) constants.
//!
//! Volumes are expressed in *tetravolumes*: the regular tetrahedron with
//! unit edge has volume 1. Converting between cubic (XYZ) volume and
//! tetravolume goes through [`S3`].

/// `√2`, the edge-to-basis scaling factor of the quadray embedding.
pub const ROOT2: f64 = std::f64::consts::SQRT_2;

/// `√(9/8)`, the XYZ-to-IVM volume conversion factor.
pub const S3: f64 = 1.060_660_171_779_821_2;

/// Angle in degrees between any two quadray basis vectors: `arccos(-1/3)`.
pub const TETRAHEDRAL_ANGLE_DEG: f64 = 109.471_220_634_490_69;

/// Quadray length of each basis vector: `1/√2`.
pub const BASIS_LENGTH: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Regular tetrahedron volume (tetravolumes).
pub const TETRA_VOLUME: u32 = 1;

/// Regular octahedron volume (tetravolumes).
pub const OCTA_VOLUME: u32 = 4;

/// Cuboctahedron (vector equilibrium) volume (tetravolumes).
pub const CUBO_VOLUME: u32 = 20;

/// Rhombic dodecahedron volume, the space-filling partner (tetravolumes).
pub const RHOMBIC_DODECA_VOLUME: u32 = 6;

/// Icosahedron volume (tetravolumes), `≈ 5√2 φ²`.
pub const ICOSA_VOLUME: f64 = 18.512_296;

/// Number of equal spheres touching one sphere in the close packing.
pub const KISSING_NUMBER: usize = 12;

/// Packing density of the face-centred cubic close packing, `π / (3√2)`.
pub const SPHERE_PACKING_DENSITY: f64 = 0.740_480_489_693_061;

/// Convert a cubic (XYZ) volume to tetravolumes.
pub fn volume_xyz_to_ivm(xyz_volume: f64) -> f64 {
    xyz_volume * S3
}

/// Convert a tetravolume to cubic (XYZ) volume.
pub fn volume_ivm_to_xyz(ivm_volume: f64) -> f64 {
    ivm_volume / S3
}
