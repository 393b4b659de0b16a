pub mod config;
pub mod error;
pub mod preferences;
pub mod timing;
pub mod transition;

pub use config::{AppConfig, TransitionConfig};
pub use error::{Error, Result};
pub use preferences::{AnimationPreferences, PreferencesPatch};
pub use timing::{
    get_animation_timing, AnimationTiming, PrimitiveTimingFraction, PrimitiveTimingMs,
    TimingGroupAsCollection, TimingGroupAsIndividual,
};
pub use transition::{get_transition_timing, TransitionTiming};
