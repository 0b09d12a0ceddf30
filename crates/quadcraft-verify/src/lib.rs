//! Geometric self-verification for QuadCraft coordinates.
//!
//! A pure battery of checks asserting the identities the coordinate math
//! must satisfy. Boards run it once at construction as a structural
//! sanity gate; test suites call it directly. Failures are reported as
//! data ([`CheckResult::passed`] is `false`), never as panics or errors.
//!
//! ```
//! let report = quadcraft_verify::verify_geometric_identities();
//! assert_eq!(report.checks.len(), 8);
//! assert!(report.all_passed());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod identities;
pub mod report;

pub use identities::{
    verify_geometric_identities, verify_geometric_identities_with, verify_round_trip,
    verify_round_trip_with, RoundTrip, DEFAULT_TOLERANCE, ROUND_TRIP_POINTS,
};
pub use report::{CheckResult, VerificationReport};
