use anyhow::{bail, Result};
use tracing::info;

use zamm_core::AppConfig;

/// An explicit `--speed` must be usable as is; only configured values get clamped
fn checked_speed(speed: f64) -> Result<f64> {
    if !speed.is_finite() || speed <= 0.0 {
        bail!("--speed must be a positive number, got {}", speed);
    }
    Ok(speed)
}

pub fn run(config: &AppConfig, pre_delay: f64, speed: Option<f64>, json: bool) -> Result<()> {
    let mut prefs = config.preferences.clone();
    if let Some(speed) = speed {
        prefs.animation_speed = checked_speed(speed)?;
    }

    let Some(timing) = prefs.animation_timing(pre_delay)? else {
        info!("Animations are disabled in preferences");
        println!("Animations are off; every duration is 0 ms.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&timing)?);
        return Ok(());
    }

    println!(
        "Info box timing (speed x{}, pre-delay {} ms):\n",
        prefs.speed_scale_factor(),
        pre_delay
    );
    for (name, phase) in timing.phases() {
        println!(
            "  {:<20} {:>9.1} -> {:>9.1} ms  ({:.1} ms)",
            name,
            phase.start_ms(),
            phase.end_ms(),
            phase.duration_ms()
        );
    }

    let grow_x = timing.border_box.grow_x().round();
    let grow_y = timing.border_box.grow_y().round();
    let typewriter = timing.title.typewriter().round();
    let cursor = timing.title.cursor_fade().round();
    println!("\nWithin each group:");
    println!(
        "  border_box  grow_x {:.4}-{:.4}, grow_y {:.4}-{:.4}",
        grow_x.start_fraction(),
        grow_x.end_fraction(),
        grow_y.start_fraction(),
        grow_y.end_fraction()
    );
    println!(
        "  title       typewriter {:.4}-{:.4}, cursor_fade {:.4}-{:.4}",
        typewriter.start_fraction(),
        typewriter.end_fraction(),
        cursor.start_fraction(),
        cursor.end_fraction()
    );
    println!("\nFinished after {:.1} ms.", timing.end_ms());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_speed_must_be_positive() {
        assert!(checked_speed(0.0).is_err());
        assert!(checked_speed(-2.0).is_err());
        assert!(checked_speed(f64::NAN).is_err());
        assert_eq!(checked_speed(0.5).unwrap(), 0.5);
    }

    #[test]
    fn test_rejects_zero_speed_before_clamping() {
        assert!(run(&AppConfig::default(), 0.0, Some(0.0), true).is_err());
    }
}
