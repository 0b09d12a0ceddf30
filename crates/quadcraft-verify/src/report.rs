//! Structured verification results.

use std::fmt;
use std::time::SystemTime;

/// Outcome of one named check.
///
/// `expected` and `actual` are human-readable renderings for logs and
/// HUDs, not values to compare programmatically; use `passed` for that.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckResult {
    /// Short title, e.g. `"Origin Identity"`.
    pub name: String,
    /// What the check asserts.
    pub description: String,
    /// Rendering of the expected value.
    pub expected: String,
    /// Rendering of the observed value.
    pub actual: String,
    /// Whether the observed value met the expectation.
    pub passed: bool,
}

impl CheckResult {
    pub(crate) fn new(
        name: &str,
        description: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        passed: bool,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.into(),
            expected: expected.into(),
            actual: actual.into(),
            passed,
        }
    }
}

/// The full battery of checks plus the time it ran.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationReport {
    /// When the battery ran.
    pub timestamp: SystemTime,
    /// Individual results, in execution order.
    pub checks: Vec<CheckResult>,
}

impl VerificationReport {
    /// Empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            timestamp: SystemTime::now(),
            checks: Vec::new(),
        }
    }

    /// Whether every check passed. An empty report passes.
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Number of passing checks.
    pub fn pass_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// The failing checks, in order.
    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Multi-line summary: a header, one line per check, and a result line.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Geometric Verification Report".to_string(),
            "-".repeat(45),
        ];
        for c in &self.checks {
            let mark = if c.passed { "PASS" } else { "FAIL" };
            lines.push(format!("  [{mark}] {}", c.name));
        }
        let status = if self.all_passed() {
            "ALL PASSED".to_string()
        } else {
            format!("{}/{} passed", self.pass_count(), self.checks.len())
        };
        lines.push(format!("Result: {status}"));
        lines.join("\n")
    }
}

impl Default for VerificationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
