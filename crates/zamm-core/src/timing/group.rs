//! Groups of sibling sub-animations
//!
//! A group can be viewed two ways: as a collection of absolute intervals, or as
//! one overall interval with each sibling expressed as a fraction of it.

use serde::Serialize;

use super::interpolate::round_to_precision;
use super::primitive::{PrimitiveTimingFraction, PrimitiveTimingMs};
use crate::{Error, Result};

/// Sibling sub-animations, each with its own absolute timing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TimingGroupAsCollection {
    timings: Vec<PrimitiveTimingMs>,
}

impl TimingGroupAsCollection {
    /// Fails with [`Error::EmptyGroup`] when `timings` is empty.
    pub fn new(timings: Vec<PrimitiveTimingMs>) -> Result<Self> {
        if timings.is_empty() {
            return Err(Error::EmptyGroup);
        }
        Ok(Self { timings })
    }

    pub fn timings(&self) -> &[PrimitiveTimingMs] {
        &self.timings
    }

    pub fn len(&self) -> usize {
        self.timings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timings.is_empty()
    }

    /// Tight bounding span: earliest start to latest end
    pub fn overall(&self) -> Result<PrimitiveTimingMs> {
        let mut members = self.timings.iter();
        let first = members.next().ok_or(Error::EmptyGroup)?;
        let (start, end) = members.fold((first.start_ms(), first.end_ms()), |(start, end), t| {
            (start.min(t.start_ms()), end.max(t.end_ms()))
        });
        PrimitiveTimingMs::from_start_end(start, end)
    }

    /// Convert to one overall interval plus fractional children, preserving order
    pub fn as_individual(&self) -> Result<TimingGroupAsIndividual> {
        let overall = self.overall()?;
        let children = self
            .timings
            .iter()
            .map(|timing| timing.nest_inside(&overall))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            members = children.len(),
            start_ms = overall.start_ms(),
            end_ms = overall.end_ms(),
            "Combined timing group"
        );

        Ok(TimingGroupAsIndividual { overall, children })
    }

    pub fn round(&self) -> Self {
        Self {
            timings: self.timings.iter().map(PrimitiveTimingMs::round).collect(),
        }
    }
}

/// Sibling sub-animations as fractions of a shared overall interval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingGroupAsIndividual {
    overall: PrimitiveTimingMs,
    children: Vec<PrimitiveTimingFraction>,
}

impl TimingGroupAsIndividual {
    /// `overall` need not be the tight span of `children`; see [`Self::is_tight`].
    pub fn new(overall: PrimitiveTimingMs, children: Vec<PrimitiveTimingFraction>) -> Result<Self> {
        if children.is_empty() {
            return Err(Error::EmptyGroup);
        }
        Ok(Self { overall, children })
    }

    pub fn overall(&self) -> &PrimitiveTimingMs {
        &self.overall
    }

    pub fn children(&self) -> &[PrimitiveTimingFraction] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&PrimitiveTimingFraction> {
        self.children.get(index)
    }

    /// Whether some child touches each boundary of `overall`
    ///
    /// Only tight groups survive `as_collection().as_individual()` unchanged;
    /// otherwise the round trip shrinks `overall` to the children's span.
    pub fn is_tight(&self) -> bool {
        let earliest = self
            .children
            .iter()
            .map(|c| c.start_fraction())
            .fold(f64::INFINITY, f64::min);
        let latest = self
            .children
            .iter()
            .map(|c| c.end_fraction())
            .fold(f64::NEG_INFINITY, f64::max);
        round_to_precision(earliest) == 0.0 && round_to_precision(latest) == 1.0
    }

    /// Unnest every child from `overall`, preserving order
    pub fn as_collection(&self) -> Result<TimingGroupAsCollection> {
        let timings = self
            .children
            .iter()
            .map(|child| child.unnest_from(&self.overall))
            .collect::<Result<Vec<_>>>()?;
        TimingGroupAsCollection::new(timings)
    }

    pub fn round(&self) -> Self {
        Self {
            overall: self.overall.round(),
            children: self
                .children
                .iter()
                .map(PrimitiveTimingFraction::round)
                .collect(),
        }
    }
}
