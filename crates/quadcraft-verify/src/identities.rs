//! The eight-check geometric identity battery and the round-trip probe.

use crate::report::{CheckResult, VerificationReport};
use quadcraft_core::constants::{
    BASIS_LENGTH, CUBO_VOLUME, OCTA_VOLUME, S3, TETRAHEDRAL_ANGLE_DEG, TETRA_VOLUME,
};
use quadcraft_core::{angle_between, Quadray};

/// Default tolerance for length, origin and round-trip checks.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Points exercised by the round-trip check: the basis plus two composites.
pub const ROUND_TRIP_POINTS: [Quadray; 6] = [
    Quadray::A,
    Quadray::B,
    Quadray::C,
    Quadray::D,
    Quadray::new(2.0, 1.0, 0.0, 1.0),
    Quadray::new(3.0, 2.0, 1.0, 0.0),
];

/// Angles are compared in degrees against a looser band.
const ANGLE_TOLERANCE_DEG: f64 = 1.0;

/// Result of a quadray → Cartesian → quadray conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundTrip {
    /// `error < tolerance`.
    pub passed: bool,
    /// Quadray distance between the normalized input and the recovered point.
    pub error: f64,
}

/// Round-trip `q` through Cartesian space with [`DEFAULT_TOLERANCE`].
pub fn verify_round_trip(q: &Quadray) -> RoundTrip {
    verify_round_trip_with(q, DEFAULT_TOLERANCE)
}

/// Round-trip `q` through Cartesian space with an explicit tolerance.
pub fn verify_round_trip_with(q: &Quadray, tolerance: f64) -> RoundTrip {
    let [x, y, z] = q.to_cartesian();
    let recovered = Quadray::from_cartesian(x, y, z);
    let error = q.normalized().distance(&recovered.normalized());
    RoundTrip {
        passed: error < tolerance,
        error,
    }
}

/// Run all eight checks with [`DEFAULT_TOLERANCE`].
pub fn verify_geometric_identities() -> VerificationReport {
    verify_geometric_identities_with(DEFAULT_TOLERANCE)
}

/// Run all eight checks with an explicit tolerance.
///
/// Checks, in order:
///
/// 1. Basis vector lengths are `1/√2`.
/// 2. All six basis pairs meet at the tetrahedral angle.
/// 3. The origin maps to Cartesian `(0, 0, 0)`.
/// 4. [`ROUND_TRIP_POINTS`] survive a Cartesian round trip.
/// 5. Distance is symmetric.
/// 6. Distance obeys the triangle inequality.
/// 7. `S3 = √(9/8)`.
/// 8. Tetra : octa : cubo volumes are `1 : 4 : 20`.
///
/// Logs the pass count at `info` and each failure at `warn`.
pub fn verify_geometric_identities_with(tolerance: f64) -> VerificationReport {
    let mut report = VerificationReport::new();
    report.checks.extend([
        basis_lengths(tolerance),
        tetrahedral_symmetry(),
        origin_identity(tolerance),
        round_trip_conversion(tolerance),
        distance_symmetry(),
        triangle_inequality(tolerance),
        s3_constant(),
        volume_ratios(),
    ]);

    log::info!(
        "geometric verification: {}/{} checks passed",
        report.pass_count(),
        report.checks.len()
    );
    for check in report.failed() {
        log::warn!(
            "geometric check '{}' failed: expected {}, got {}",
            check.name,
            check.expected,
            check.actual
        );
    }
    report
}

// ── Individual checks ────────────────────────────────────────────

fn basis_lengths(tolerance: f64) -> CheckResult {
    let lengths = Quadray::BASIS.map(|b| b.length());
    let actual: Vec<String> = lengths.iter().map(|l| format!("{l:.4}")).collect();
    CheckResult::new(
        "Basis Vector Lengths",
        format!("All 4 basis vectors have length {BASIS_LENGTH:.4}"),
        format!("{BASIS_LENGTH:.4}"),
        format!("[{}]", actual.join(", ")),
        lengths.iter().all(|l| (l - BASIS_LENGTH).abs() < tolerance),
    )
}

fn tetrahedral_symmetry() -> CheckResult {
    const LABELS: [&str; 4] = ["A", "B", "C", "D"];
    let mut angles = Vec::with_capacity(6);
    for i in 0..4 {
        for j in (i + 1)..4 {
            let angle = angle_between(&Quadray::BASIS[i], &Quadray::BASIS[j]);
            angles.push((format!("{}-{}", LABELS[i], LABELS[j]), angle));
        }
    }
    let actual: Vec<String> = angles.iter().map(|(p, a)| format!("{p}: {a:.2}")).collect();
    CheckResult::new(
        "Tetrahedral Symmetry",
        format!("All basis pairs form {TETRAHEDRAL_ANGLE_DEG:.2}° angles"),
        format!("{TETRAHEDRAL_ANGLE_DEG:.2}"),
        format!("[{}]", actual.join(", ")),
        angles
            .iter()
            .all(|(_, a)| (a - TETRAHEDRAL_ANGLE_DEG).abs() < ANGLE_TOLERANCE_DEG),
    )
}

fn origin_identity(tolerance: f64) -> CheckResult {
    let [x, y, z] = Quadray::ORIGIN.to_cartesian();
    CheckResult::new(
        "Origin Identity",
        "Quadray (0,0,0,0) maps to Cartesian (0,0,0)",
        "(0, 0, 0)",
        format!("({x:.4}, {y:.4}, {z:.4})"),
        [x, y, z].iter().all(|v| v.abs() < tolerance),
    )
}

fn round_trip_conversion(tolerance: f64) -> CheckResult {
    let results = ROUND_TRIP_POINTS.map(|q| verify_round_trip_with(&q, tolerance));
    let actual: Vec<String> = results.iter().map(|r| format!("{:.6}", r.error)).collect();
    CheckResult::new(
        "Round-Trip Conversion",
        "Quadray to Cartesian to Quadray recovers the original position",
        format!("all errors < {tolerance}"),
        format!("[{}]", actual.join(", ")),
        results.iter().all(|r| r.passed),
    )
}

fn distance_symmetry() -> CheckResult {
    let (a, b) = (Quadray::A, Quadray::B);
    let d1 = a.distance(&b);
    let d2 = b.distance(&a);
    CheckResult::new(
        "Distance Symmetry",
        "distance(A, B) == distance(B, A)",
        "d1 == d2",
        format!("d1={d1:.6}, d2={d2:.6}"),
        (d1 - d2).abs() < 1e-4,
    )
}

fn triangle_inequality(tolerance: f64) -> CheckResult {
    let (a, b, c) = (Quadray::A, Quadray::B, Quadray::C);
    let ab = a.distance(&b);
    let bc = b.distance(&c);
    let ac = a.distance(&c);
    CheckResult::new(
        "Triangle Inequality",
        "d(A, B) + d(B, C) >= d(A, C)",
        format!("{ab:.4} + {bc:.4} >= {ac:.4}"),
        format!("{:.4} >= {ac:.4}", ab + bc),
        ab + bc >= ac - tolerance,
    )
}

fn s3_constant() -> CheckResult {
    let expected = (9.0f64 / 8.0).sqrt();
    CheckResult::new(
        "S3 Constant Validation",
        "S3 = √(9/8) ≈ 1.0607",
        format!("{expected:.6}"),
        format!("{S3:.6}"),
        (S3 - expected).abs() < 1e-4,
    )
}

fn volume_ratios() -> CheckResult {
    CheckResult::new(
        "Volume Ratios",
        "Tetra : Octa : Cubo = 1 : 4 : 20",
        "1:4:20",
        format!("{TETRA_VOLUME}:{OCTA_VOLUME}:{CUBO_VOLUME}"),
        OCTA_VOLUME / TETRA_VOLUME == 4 && CUBO_VOLUME / TETRA_VOLUME == 20,
    )
}
