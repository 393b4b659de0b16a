//! Primitive timing intervals
//!
//! An interval is either absolute ([`PrimitiveTimingMs`], milliseconds on some
//! parent clock) or relative ([`PrimitiveTimingFraction`], fractions of an
//! enclosing interval). Both accept a start/end pair or a delay/duration pair
//! and normalize to start/end, so equality is structural.

use serde::{Deserialize, Serialize};

use super::interpolate::{lerp, progress, round_to_precision};
use crate::{Error, Result};

fn check_finite(value: f64, name: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite(name))
    }
}

fn check_order(start: f64, end: f64) -> Result<()> {
    if end < start {
        return Err(Error::NegativeDuration { start, end });
    }
    Ok(())
}

/// An interval in absolute milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimingMs")]
pub struct PrimitiveTimingMs {
    start_ms: f64,
    end_ms: f64,
}

impl PrimitiveTimingMs {
    pub fn from_start_end(start_ms: f64, end_ms: f64) -> Result<Self> {
        check_finite(start_ms, "start_ms")?;
        check_finite(end_ms, "end_ms")?;
        check_order(start_ms, end_ms)?;
        Ok(Self { start_ms, end_ms })
    }

    pub fn from_delay_duration(delay_ms: f64, duration_ms: f64) -> Result<Self> {
        check_finite(delay_ms, "delay_ms")?;
        check_finite(duration_ms, "duration_ms")?;
        if duration_ms < 0.0 {
            return Err(Error::NegativeDuration {
                start: delay_ms,
                end: delay_ms + duration_ms,
            });
        }
        Self::from_start_end(delay_ms, delay_ms + duration_ms)
    }

    #[inline]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    #[inline]
    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    #[inline]
    pub fn delay_ms(&self) -> f64 {
        self.start_ms
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// Express this interval as fractions of `overall`
    ///
    /// No clamping: a child starting before `overall` gets a negative start
    /// fraction. Fails on a zero-duration `overall`.
    pub fn nest_inside(&self, overall: &PrimitiveTimingMs) -> Result<PrimitiveTimingFraction> {
        let parent_duration = overall.duration_ms();
        if parent_duration == 0.0 {
            return Err(Error::DegenerateParent(overall.start_ms));
        }
        PrimitiveTimingFraction::from_start_end(
            (self.start_ms - overall.start_ms) / parent_duration,
            (self.end_ms - overall.start_ms) / parent_duration,
        )
    }

    /// Multiply both ends by `factor`
    ///
    /// The origin stays fixed, so delays scale along with durations.
    pub fn scale(&self, factor: f64) -> Result<Self> {
        check_finite(factor, "scale factor")?;
        Self::from_start_end(self.start_ms * factor, self.end_ms * factor)
    }

    /// Shift the whole interval later by `delay_ms` (earlier if negative)
    pub fn delay_by(&self, delay_ms: f64) -> Result<Self> {
        check_finite(delay_ms, "delay_ms")?;
        Self::from_start_end(self.start_ms + delay_ms, self.end_ms + delay_ms)
    }

    /// Whether `other` lies entirely within this interval
    pub fn contains(&self, other: &PrimitiveTimingMs) -> bool {
        other.start_ms >= self.start_ms && other.end_ms <= self.end_ms
    }

    /// Progress (0.0 to 1.0) of this interval at `now_ms` on the parent clock
    pub fn progress_at(&self, now_ms: f64) -> f64 {
        progress(self.start_ms, self.duration_ms(), now_ms)
    }

    pub fn round(&self) -> Self {
        Self {
            start_ms: round_to_precision(self.start_ms),
            end_ms: round_to_precision(self.end_ms),
        }
    }
}

/// Either shape accepted for a millisecond interval
///
/// Exactly one pair must be supplied: `start_ms` + `end_ms`, or `delay_ms` +
/// `duration_ms`. This is also the serde input form of [`PrimitiveTimingMs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimingMs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

impl TryFrom<RawTimingMs> for PrimitiveTimingMs {
    type Error = Error;

    fn try_from(raw: RawTimingMs) -> Result<Self> {
        match raw {
            RawTimingMs {
                start_ms: Some(start),
                end_ms: Some(end),
                delay_ms: None,
                duration_ms: None,
            } => Self::from_start_end(start, end),
            RawTimingMs {
                start_ms: None,
                end_ms: None,
                delay_ms: Some(delay),
                duration_ms: Some(duration),
            } => Self::from_delay_duration(delay, duration),
            _ => Err(Error::MalformedTiming(format!(
                "expected either start_ms/end_ms or delay_ms/duration_ms, got {:?}",
                raw
            ))),
        }
    }
}

/// An interval expressed as fractions of an enclosing interval
///
/// Values are nominally in [0, 1] but never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimingFraction")]
pub struct PrimitiveTimingFraction {
    start_fraction: f64,
    end_fraction: f64,
}

impl PrimitiveTimingFraction {
    pub fn from_start_end(start_fraction: f64, end_fraction: f64) -> Result<Self> {
        check_finite(start_fraction, "start_fraction")?;
        check_finite(end_fraction, "end_fraction")?;
        check_order(start_fraction, end_fraction)?;
        Ok(Self {
            start_fraction,
            end_fraction,
        })
    }

    pub fn from_delay_duration(delay_fraction: f64, duration_fraction: f64) -> Result<Self> {
        check_finite(delay_fraction, "delay_fraction")?;
        check_finite(duration_fraction, "duration_fraction")?;
        if duration_fraction < 0.0 {
            return Err(Error::NegativeDuration {
                start: delay_fraction,
                end: delay_fraction + duration_fraction,
            });
        }
        Self::from_start_end(delay_fraction, delay_fraction + duration_fraction)
    }

    #[inline]
    pub fn start_fraction(&self) -> f64 {
        self.start_fraction
    }

    #[inline]
    pub fn end_fraction(&self) -> f64 {
        self.end_fraction
    }

    #[inline]
    pub fn delay_fraction(&self) -> f64 {
        self.start_fraction
    }

    #[inline]
    pub fn duration_fraction(&self) -> f64 {
        self.end_fraction - self.start_fraction
    }

    /// Map this fraction back to absolute milliseconds within `overall`
    pub fn unnest_from(&self, overall: &PrimitiveTimingMs) -> Result<PrimitiveTimingMs> {
        if overall.duration_ms() == 0.0 {
            return Err(Error::DegenerateParent(overall.start_ms()));
        }
        PrimitiveTimingMs::from_start_end(
            lerp(overall.start_ms(), overall.end_ms(), self.start_fraction),
            lerp(overall.start_ms(), overall.end_ms(), self.end_fraction),
        )
    }

    pub fn round(&self) -> Self {
        Self {
            start_fraction: round_to_precision(self.start_fraction),
            end_fraction: round_to_precision(self.end_fraction),
        }
    }
}

/// Either shape accepted for a fractional interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTimingFraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_fraction: Option<f64>,
}

impl TryFrom<RawTimingFraction> for PrimitiveTimingFraction {
    type Error = Error;

    fn try_from(raw: RawTimingFraction) -> Result<Self> {
        match raw {
            RawTimingFraction {
                start_fraction: Some(start),
                end_fraction: Some(end),
                delay_fraction: None,
                duration_fraction: None,
            } => Self::from_start_end(start, end),
            RawTimingFraction {
                start_fraction: None,
                end_fraction: None,
                delay_fraction: Some(delay),
                duration_fraction: Some(duration),
            } => Self::from_delay_duration(delay, duration),
            _ => Err(Error::MalformedTiming(format!(
                "expected either start_fraction/end_fraction or \
                 delay_fraction/duration_fraction, got {:?}",
                raw
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(start: f64, end: f64) -> PrimitiveTimingMs {
        PrimitiveTimingMs::from_start_end(start, end).unwrap()
    }

    fn fraction(start: f64, end: f64) -> PrimitiveTimingFraction {
        PrimitiveTimingFraction::from_start_end(start, end).unwrap()
    }

    #[test]
    fn test_ms_construction_forms_are_equal() {
        let by_bounds = ms(100.0, 300.0);
        let by_delay = PrimitiveTimingMs::from_delay_duration(100.0, 200.0).unwrap();
        assert_eq!(by_bounds, by_delay);
        assert_eq!(by_delay.start_ms(), 100.0);
        assert_eq!(by_delay.end_ms(), 300.0);
        assert_eq!(by_bounds.delay_ms(), 100.0);
        assert_eq!(by_bounds.duration_ms(), 200.0);
    }

    #[test]
    fn test_fraction_construction_forms_are_equal() {
        let by_bounds = fraction(0.2, 0.7);
        let by_delay = PrimitiveTimingFraction::from_delay_duration(0.2, 0.5).unwrap();
        assert_eq!(by_bounds.round(), by_delay.round());
    }

    #[test]
    fn test_zero_length_is_allowed() {
        let instant = ms(250.0, 250.0);
        assert_eq!(instant.duration_ms(), 0.0);
    }

    #[test]
    fn test_negative_duration_rejected() {
        assert!(matches!(
            PrimitiveTimingMs::from_start_end(300.0, 100.0),
            Err(Error::NegativeDuration { .. })
        ));
        assert!(matches!(
            PrimitiveTimingMs::from_delay_duration(100.0, -1.0),
            Err(Error::NegativeDuration { .. })
        ));
        assert!(matches!(
            PrimitiveTimingFraction::from_start_end(0.6, 0.2),
            Err(Error::NegativeDuration { .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            PrimitiveTimingMs::from_start_end(f64::NAN, 1.0),
            Err(Error::NonFinite("start_ms"))
        ));
        assert!(matches!(
            PrimitiveTimingFraction::from_delay_duration(0.0, f64::INFINITY),
            Err(Error::NonFinite("duration_fraction"))
        ));
    }

    #[test]
    fn test_delay_duration_overflow_rejected() {
        assert!(matches!(
            PrimitiveTimingMs::from_delay_duration(1e308, 1e308),
            Err(Error::NonFinite("end_ms"))
        ));
        assert!(matches!(
            PrimitiveTimingFraction::from_delay_duration(f64::MAX, f64::MAX),
            Err(Error::NonFinite("end_fraction"))
        ));
    }

    #[test]
    fn test_nest_and_unnest() {
        let child = ms(200.0, 400.0);
        let overall = ms(100.0, 600.0);
        let expected = fraction(0.2, 0.6);

        assert_eq!(child.nest_inside(&overall).unwrap().round(), expected.round());
        assert_eq!(expected.unnest_from(&overall).unwrap().round(), child);
    }

    #[test]
    fn test_nest_outside_parent_is_not_clamped() {
        let child = ms(0.0, 700.0);
        let overall = ms(100.0, 600.0);
        let nested = child.nest_inside(&overall).unwrap().round();
        assert_eq!(nested, fraction(-0.2, 1.2));
    }

    #[test]
    fn test_nest_inside_zero_duration_parent() {
        let overall = ms(100.0, 100.0);
        assert!(matches!(
            ms(100.0, 100.0).nest_inside(&overall),
            Err(Error::DegenerateParent(_))
        ));
        assert!(matches!(
            fraction(0.0, 1.0).unnest_from(&overall),
            Err(Error::DegenerateParent(_))
        ));
    }

    #[test]
    fn test_scale_and_delay() {
        let timing = ms(20.0, 200.0);
        assert_eq!(timing.scale(10.0).unwrap(), ms(200.0, 2000.0));
        assert_eq!(timing.delay_by(100.0).unwrap(), ms(120.0, 300.0));
        assert!(timing.scale(-1.0).is_err());
        // original is untouched
        assert_eq!(timing, ms(20.0, 200.0));
    }

    #[test]
    fn test_contains() {
        let overall = ms(100.0, 600.0);
        assert!(overall.contains(&ms(100.0, 600.0)));
        assert!(overall.contains(&ms(200.0, 400.0)));
        assert!(!overall.contains(&ms(50.0, 400.0)));
    }

    #[test]
    fn test_progress_at() {
        let timing = ms(100.0, 300.0);
        assert_eq!(timing.progress_at(0.0), 0.0);
        assert_eq!(timing.progress_at(150.0), 0.25);
        assert_eq!(timing.progress_at(400.0), 1.0);
    }

    #[test]
    fn test_raw_shapes() {
        let from_bounds: PrimitiveTimingMs =
            serde_json::from_str(r#"{"start_ms": 100, "end_ms": 300}"#).unwrap();
        let from_delay: PrimitiveTimingMs =
            serde_json::from_str(r#"{"delay_ms": 100, "duration_ms": 200}"#).unwrap();
        assert_eq!(from_bounds, from_delay);

        let fraction: PrimitiveTimingFraction =
            serde_json::from_str(r#"{"delay_fraction": 0.25, "duration_fraction": 0.5}"#)
                .unwrap();
        assert_eq!(fraction.end_fraction(), 0.75);
    }

    #[test]
    fn test_malformed_raw_shapes() {
        let neither = RawTimingMs::default();
        assert!(matches!(
            PrimitiveTimingMs::try_from(neither),
            Err(Error::MalformedTiming(_))
        ));

        let mixed = RawTimingMs {
            start_ms: Some(0.0),
            duration_ms: Some(10.0),
            ..Default::default()
        };
        assert!(matches!(
            PrimitiveTimingMs::try_from(mixed),
            Err(Error::MalformedTiming(_))
        ));

        let both = RawTimingFraction {
            start_fraction: Some(0.0),
            end_fraction: Some(1.0),
            delay_fraction: Some(0.0),
            duration_fraction: Some(1.0),
        };
        assert!(matches!(
            PrimitiveTimingFraction::try_from(both),
            Err(Error::MalformedTiming(_))
        ));

        assert!(serde_json::from_str::<PrimitiveTimingMs>(r#"{"start_ms": 1}"#).is_err());
    }

    #[test]
    fn test_serializes_normalized_bounds() {
        let timing = PrimitiveTimingMs::from_delay_duration(100.0, 200.0).unwrap();
        let json = serde_json::to_string(&timing).unwrap();
        assert_eq!(json, r#"{"start_ms":100.0,"end_ms":300.0}"#);
    }
}
