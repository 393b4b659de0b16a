//! Animation timing model
//!
//! - `interpolate` - Pure helpers (rounding, lerp, progress)
//! - `primitive` - Millisecond and fractional intervals, nesting between them
//! - `group` - Sibling sub-animations as a collection or as one overall interval
//! - `choreography` - The info box entrance built from the above

pub mod choreography;
pub mod group;
pub mod interpolate;
pub mod primitive;

pub use choreography::{
    get_animation_timing, AnimationTiming, BorderBoxTiming, GroupedPhase, TitleTiming,
};
pub use group::{TimingGroupAsCollection, TimingGroupAsIndividual};
pub use interpolate::{lerp, progress, round_to_precision};
pub use primitive::{PrimitiveTimingFraction, PrimitiveTimingMs, RawTimingFraction, RawTimingMs};
