//! Run the geometric verification suite and print the report.
//!
//! Usage: `quadcraft-verify [tolerance]`. Exits 1 when any check fails
//! and 2 on a malformed tolerance. Set `RUST_LOG=info` for the log line.

use quadcraft::verify::{verify_geometric_identities_with, DEFAULT_TOLERANCE};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let tolerance = match args.get(1).map(|s| s.parse::<f64>()) {
        None => DEFAULT_TOLERANCE,
        Some(Ok(t)) if t.is_finite() && t > 0.0 => t,
        Some(_) => {
            eprintln!("Usage: quadcraft-verify [tolerance]\n\ntolerance must be a positive number");
            std::process::exit(2);
        }
    };

    log::info!("running geometric verification with tolerance {tolerance}");
    let report = verify_geometric_identities_with(tolerance);
    println!("{report}");
    for check in report.failed() {
        println!("  {}: expected {}, got {}", check.name, check.expected, check.actual);
    }
    if !report.all_passed() {
        std::process::exit(1);
    }
}
