//! Pure interpolation helpers shared by the timing types
//!
//! Everything here works on plain milliseconds/fractions so callers driving a
//! frame loop can reuse it without building timing values.

/// Decimal places kept by [`round_to_precision`]
pub const ROUNDING_DECIMALS: i32 = 6;

/// Round a timing value to the precision used for comparisons
///
/// Every `round()` on the timing types goes through here, so chained
/// arithmetic (nest then unnest, scale, group) lands on the same value.
#[inline]
pub fn round_to_precision(value: f64) -> f64 {
    let factor = 10f64.powi(ROUNDING_DECIMALS);
    (value * factor).round() / factor
}

/// Linear interpolation between two values
///
/// `t` is not clamped: values outside [0, 1] extrapolate.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Progress (0.0 to 1.0) of an interval at `now_ms`
///
/// # Arguments
/// * `start_ms` - Interval start on the parent clock
/// * `duration_ms` - Interval length
/// * `now_ms` - Current time on the parent clock
///
/// # Returns
/// Progress clamped to [0.0, 1.0]. A zero-length interval jumps straight to
/// 1.0 once it has started.
#[inline]
pub fn progress(start_ms: f64, duration_ms: f64, now_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return if now_ms >= start_ms { 1.0 } else { 0.0 };
    }
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0)
}
