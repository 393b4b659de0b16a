use anyhow::Result;

use zamm_core::{AppConfig, TransitionTiming};

pub fn run(config: &AppConfig, total: Option<f64>, spacing: Option<f64>, json: bool) -> Result<()> {
    let total = total.unwrap_or(config.transition.total_duration_ms);
    let spacing = spacing.unwrap_or(config.transition.spacing_fraction);

    let timing = config.preferences.transition_timing(total, spacing)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&timing)?);
        return Ok(());
    }

    println!("{}", heading(&timing, spacing));
    println!("  each phase lasts   {:.1} ms", timing.duration);
    println!("  second phase after {:.1} ms", timing.delay);
    if !config.preferences.animations_on {
        println!("  (animations are off)");
    }

    Ok(())
}

/// Header line; the total shown is the one actually split, after speed scaling
fn heading(timing: &TransitionTiming, spacing: f64) -> String {
    let kind = if spacing > 0.0 {
        "gap"
    } else if spacing < 0.0 {
        "overlap"
    } else {
        "back to back"
    };
    format!(
        "Page transition ({} ms, spacing {} - {}):",
        timing.total_ms(),
        spacing,
        kind
    )
}
