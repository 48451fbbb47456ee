//! Pareto-analysis walkthrough: cumulative defect shares plus an auto-ranged
//! percentage axis, printed as a small text chart.
//!
//! Run with `cargo run --example pareto` (set `RUST_LOG=info` for the axis
//! log line).

use anyhow::Result;
use chartdata::{cumulative_percentages, KeyedValueList, Range};

fn main() -> Result<()> {
    env_logger::init();

    let defects: KeyedValueList = [
        ("scratches", 58.0),
        ("dents", 23.0),
        ("misprints", 12.0),
        ("warping", 5.0),
        ("other", 2.0),
    ]
    .into_iter()
    .collect();

    let shares = cumulative_percentages(&defects)?;

    // Auto-range the axis over the computed shares, anchored at zero.
    let mut axis = Range::new(0.0, 0.0)?;
    for (_, share) in shares.iter() {
        axis = Range::expand_to_include(Some(axis), share);
    }
    log::info!("pareto axis range: {axis}, midpoint {}", axis.central_value());

    for (key, share) in shares.iter() {
        let width = (axis.constrain(share) * 40.0).round() as usize;
        println!("{key:>10} │{} {:5.1}%", "█".repeat(width), share * 100.0);
    }

    Ok(())
}
