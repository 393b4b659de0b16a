//! Info box entrance choreography
//!
//! The border box grows (x then y), the title types itself out and its cursor
//! fades, then the content fades in. Base values are at speed 1 with no
//! pre-delay; every absolute value is `base * speed_scale_factor + pre_delay_ms`.

use serde::Serialize;

use super::group::{TimingGroupAsCollection, TimingGroupAsIndividual};
use super::primitive::{PrimitiveTimingFraction, PrimitiveTimingMs};
use crate::{Error, Result};

/// Base (start, end) in ms at speed 1
const BORDER_GROW_X_MS: (f64, f64) = (0.0, 200.0);
const BORDER_GROW_Y_MS: (f64, f64) = (180.0, 330.0);
const TITLE_TYPEWRITER_MS: (f64, f64) = (20.0, 200.0);
const TITLE_CURSOR_FADE_MS: (f64, f64) = (240.0, 330.0);
const INFO_BOX_FADE_MS: (f64, f64) = (280.0, 380.0);

/// A group of sub-animations kept in both views at once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedPhase {
    collection: TimingGroupAsCollection,
    individual: TimingGroupAsIndividual,
}

impl GroupedPhase {
    pub fn from_collection(collection: TimingGroupAsCollection) -> Result<Self> {
        let individual = collection.as_individual()?;
        Ok(Self {
            collection,
            individual,
        })
    }

    pub fn as_collection(&self) -> &TimingGroupAsCollection {
        &self.collection
    }

    pub fn as_individual(&self) -> &TimingGroupAsIndividual {
        &self.individual
    }

    pub fn overall(&self) -> &PrimitiveTimingMs {
        self.individual.overall()
    }

    // Both views are built from the same members, so `index` is valid for either.
    fn fraction(&self, index: usize) -> PrimitiveTimingFraction {
        self.individual.children()[index]
    }

    fn absolute(&self, index: usize) -> PrimitiveTimingMs {
        self.collection.timings()[index]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BorderBoxTiming(GroupedPhase);

impl BorderBoxTiming {
    const GROW_X: usize = 0;
    const GROW_Y: usize = 1;

    pub fn grow_x(&self) -> PrimitiveTimingFraction {
        self.0.fraction(Self::GROW_X)
    }

    pub fn grow_y(&self) -> PrimitiveTimingFraction {
        self.0.fraction(Self::GROW_Y)
    }

    pub fn grow_x_ms(&self) -> PrimitiveTimingMs {
        self.0.absolute(Self::GROW_X)
    }

    pub fn grow_y_ms(&self) -> PrimitiveTimingMs {
        self.0.absolute(Self::GROW_Y)
    }

    pub fn overall(&self) -> &PrimitiveTimingMs {
        self.0.overall()
    }

    pub fn as_collection(&self) -> &TimingGroupAsCollection {
        self.0.as_collection()
    }

    pub fn as_individual(&self) -> &TimingGroupAsIndividual {
        self.0.as_individual()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TitleTiming(GroupedPhase);

impl TitleTiming {
    const TYPEWRITER: usize = 0;
    const CURSOR_FADE: usize = 1;

    pub fn typewriter(&self) -> PrimitiveTimingFraction {
        self.0.fraction(Self::TYPEWRITER)
    }

    pub fn cursor_fade(&self) -> PrimitiveTimingFraction {
        self.0.fraction(Self::CURSOR_FADE)
    }

    pub fn typewriter_ms(&self) -> PrimitiveTimingMs {
        self.0.absolute(Self::TYPEWRITER)
    }

    pub fn cursor_fade_ms(&self) -> PrimitiveTimingMs {
        self.0.absolute(Self::CURSOR_FADE)
    }

    pub fn overall(&self) -> &PrimitiveTimingMs {
        self.0.overall()
    }

    pub fn as_collection(&self) -> &TimingGroupAsCollection {
        self.0.as_collection()
    }

    pub fn as_individual(&self) -> &TimingGroupAsIndividual {
        self.0.as_individual()
    }
}

/// Full timing tree for one info box entrance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationTiming {
    pub border_box: BorderBoxTiming,
    pub title: TitleTiming,
    pub info_box: PrimitiveTimingMs,
}

impl AnimationTiming {
    /// Every absolute sub-animation in choreography order, with a display name
    pub fn phases(&self) -> [(&'static str, PrimitiveTimingMs); 5] {
        [
            ("border_box.grow_x", self.border_box.grow_x_ms()),
            ("border_box.grow_y", self.border_box.grow_y_ms()),
            ("title.typewriter", self.title.typewriter_ms()),
            ("title.cursor_fade", self.title.cursor_fade_ms()),
            ("info_box", self.info_box),
        ]
    }

    /// Time at which the last sub-animation finishes
    pub fn end_ms(&self) -> f64 {
        self.phases()
            .iter()
            .map(|(_, timing)| timing.end_ms())
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Build the choreography for a given pre-delay and global speed
///
/// # Arguments
/// * `pre_delay_ms` - Fixed offset added to every start and end, not scaled
/// * `speed_scale_factor` - Multiplier on the base choreography; larger is slower
pub fn get_animation_timing(pre_delay_ms: f64, speed_scale_factor: f64) -> Result<AnimationTiming> {
    if !speed_scale_factor.is_finite() || speed_scale_factor <= 0.0 {
        return Err(Error::InvalidScaleFactor(speed_scale_factor));
    }

    let place = |(start, end): (f64, f64)| -> Result<PrimitiveTimingMs> {
        PrimitiveTimingMs::from_start_end(start, end)?
            .scale(speed_scale_factor)?
            .delay_by(pre_delay_ms)
    };

    let border_box = BorderBoxTiming(GroupedPhase::from_collection(
        TimingGroupAsCollection::new(vec![place(BORDER_GROW_X_MS)?, place(BORDER_GROW_Y_MS)?])?,
    )?);
    let title = TitleTiming(GroupedPhase::from_collection(TimingGroupAsCollection::new(
        vec![place(TITLE_TYPEWRITER_MS)?, place(TITLE_CURSOR_FADE_MS)?],
    )?)?);
    let info_box = place(INFO_BOX_FADE_MS)?;

    tracing::debug!(
        pre_delay_ms,
        speed_scale_factor,
        info_box_end_ms = info_box.end_ms(),
        "Assembled info box animation timing"
    );

    Ok(AnimationTiming {
        border_box,
        title,
        info_box,
    })
}
