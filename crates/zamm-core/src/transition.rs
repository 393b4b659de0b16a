//! Page transition timing
//!
//! A page transition is two phases of equal length (old page out, new page in).
//! The second phase starts `delay` after the first, and the pair spans exactly
//! the requested total.
//!
//! Sign convention for `spacing_fraction`, as a fraction of one phase's
//! duration:
//! - positive: a gap between the phases, so the delay grows
//! - zero: back to back
//! - negative: the phases overlap, so the delay shrinks (-1 runs them together)

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Duration of each phase and delay before the second one starts, in ms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionTiming {
    pub duration: f64,
    pub delay: f64,
}

impl TransitionTiming {
    /// End of the second phase; always the requested total
    pub fn total_ms(&self) -> f64 {
        self.delay + self.duration
    }
}

/// Split `total_duration_ms` into a phase duration and a delay
///
/// Solves `delay = duration * (1 + spacing_fraction)` with
/// `duration + delay = total_duration_ms`. Fails for a negative total or for
/// `spacing_fraction <= -2`.
pub fn get_transition_timing(
    total_duration_ms: f64,
    spacing_fraction: f64,
) -> Result<TransitionTiming> {
    if !total_duration_ms.is_finite() {
        return Err(Error::NonFinite("total_duration_ms"));
    }
    if total_duration_ms < 0.0 {
        return Err(Error::NegativeDuration {
            start: 0.0,
            end: total_duration_ms,
        });
    }
    if !spacing_fraction.is_finite() {
        return Err(Error::NonFinite("spacing_fraction"));
    }

    // At -2 the denominator vanishes; below it the phase duration turns negative.
    let denominator = 2.0 + spacing_fraction;
    if denominator <= 0.0 {
        return Err(Error::DegenerateTransition(spacing_fraction));
    }

    // The larger part comes from the division and the smaller one from the
    // subtraction, which keeps the subtraction exact.
    let (duration, delay) = if spacing_fraction > 0.0 {
        let delay = total_duration_ms * (1.0 + spacing_fraction) / denominator;
        (total_duration_ms - delay, delay)
    } else {
        let duration = total_duration_ms / denominator;
        (duration, total_duration_ms - duration)
    };

    tracing::debug!(
        total_duration_ms,
        spacing_fraction,
        duration,
        delay,
        "Split page transition"
    );

    Ok(TransitionTiming { duration, delay })
}
