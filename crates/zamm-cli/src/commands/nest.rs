use anyhow::{bail, Result};
use serde::Serialize;

use zamm_core::{PrimitiveTimingFraction, PrimitiveTimingMs};

#[derive(Serialize)]
struct NestReport {
    fraction: PrimitiveTimingFraction,
    unnested: PrimitiveTimingMs,
}

fn interval(values: &[f64], what: &str) -> Result<PrimitiveTimingMs> {
    let [start, end] = values else {
        bail!("{} needs exactly a start and an end", what);
    };
    Ok(PrimitiveTimingMs::from_start_end(*start, *end)?)
}

pub fn run(child: &[f64], parent: &[f64], json: bool) -> Result<()> {
    let child = interval(child, "--child")?;
    let parent = interval(parent, "--parent")?;

    let fraction = child.nest_inside(&parent)?.round();
    let unnested = fraction.unnest_from(&parent)?.round();

    if json {
        let report = NestReport { fraction, unnested };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}-{} ms inside {}-{} ms is {:.6}-{:.6}",
        child.start_ms(),
        child.end_ms(),
        parent.start_ms(),
        parent.end_ms(),
        fraction.start_fraction(),
        fraction.end_fraction()
    );
    if !parent.contains(&child) {
        println!("  note: child extends outside the parent");
    }
    println!(
        "  unnested again: {}-{} ms",
        unnested.start_ms(),
        unnested.end_ms()
    );

    Ok(())
}
