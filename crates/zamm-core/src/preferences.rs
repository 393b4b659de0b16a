//! Snapshot of the user's animation and sound preferences
//!
//! The app reads these once when an animation or sound is triggered and passes
//! them in by value; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::timing::{get_animation_timing, AnimationTiming};
use crate::transition::{get_transition_timing, TransitionTiming};
use crate::Result;

/// Smallest allowed speed scale; anything below it (or non-finite) is clamped up to it
pub const MIN_ANIMATION_SPEED: f64 = 0.01;

/// Upper bound of the volume scale
pub const MAX_VOLUME: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationPreferences {
    /// When false, callers treat every duration as zero
    #[serde(default = "default_true")]
    pub animations_on: bool,
    /// Keep background animations running instead of stopping after a while
    #[serde(default)]
    pub unceasing_animations: bool,
    /// Global speed scale factor (larger is slower)
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f64,
    #[serde(default = "default_true")]
    pub sound_on: bool,
    /// Sound effect volume, 0-100
    #[serde(default = "default_volume")]
    pub volume: f64,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            animations_on: default_true(),
            unceasing_animations: false,
            animation_speed: default_animation_speed(),
            sound_on: default_true(),
            volume: default_volume(),
        }
    }
}

impl AnimationPreferences {
    /// Speed scale factor safe to feed into the timing model
    pub fn speed_scale_factor(&self) -> f64 {
        if self.animation_speed.is_finite() && self.animation_speed >= MIN_ANIMATION_SPEED {
            self.animation_speed
        } else {
            tracing::warn!(
                animation_speed = self.animation_speed,
                "Animation speed out of range, clamping"
            );
            MIN_ANIMATION_SPEED
        }
    }

    /// Playback volume for sound effects in [0, 1]; 0 when sound is off
    pub fn sound_effect_volume(&self) -> f64 {
        if !self.sound_on {
            return 0.0;
        }
        if self.volume.is_nan() {
            return 1.0;
        }
        self.volume.clamp(0.0, MAX_VOLUME) / MAX_VOLUME
    }

    /// Info box timing at the preferred speed, or `None` when animations are off
    pub fn animation_timing(&self, pre_delay_ms: f64) -> Result<Option<AnimationTiming>> {
        if !self.animations_on {
            return Ok(None);
        }
        get_animation_timing(pre_delay_ms, self.speed_scale_factor()).map(Some)
    }

    /// Page transition split, with the total scaled by the preferred speed
    ///
    /// When animations are off both parts are zero.
    pub fn transition_timing(
        &self,
        total_duration_ms: f64,
        spacing_fraction: f64,
    ) -> Result<TransitionTiming> {
        let total = if self.animations_on {
            total_duration_ms * self.speed_scale_factor()
        } else {
            0.0
        };
        get_transition_timing(total, spacing_fraction)
    }

    /// Apply the fields set in `patch`
    pub fn merge(&mut self, patch: &PreferencesPatch) {
        if let Some(animations_on) = patch.animations_on {
            self.animations_on = animations_on;
        }
        if let Some(unceasing) = patch.unceasing_animations {
            self.unceasing_animations = unceasing;
        }
        if let Some(speed) = patch.animation_speed {
            self.animation_speed = speed;
        }
        if let Some(sound_on) = patch.sound_on {
            self.sound_on = sound_on;
        }
        if let Some(volume) = patch.volume {
            self.volume = volume;
        }
    }
}

/// Partial update; unset fields leave the current value alone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations_on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unceasing_animations: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_on: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

fn default_true() -> bool {
    true
}

fn default_animation_speed() -> f64 {
    1.0
}

fn default_volume() -> f64 {
    100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = AnimationPreferences::default();
        assert!(prefs.animations_on);
        assert!(!prefs.unceasing_animations);
        assert_eq!(prefs.animation_speed, 1.0);
        assert!(prefs.sound_on);
        assert_eq!(prefs.volume, 100.0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut prefs = AnimationPreferences::default();
        prefs.animation_speed = 0.0;
        assert_eq!(prefs.speed_scale_factor(), MIN_ANIMATION_SPEED);
        prefs.animation_speed = f64::NAN;
        assert_eq!(prefs.speed_scale_factor(), MIN_ANIMATION_SPEED);
        prefs.animation_speed = 4.0;
        assert_eq!(prefs.speed_scale_factor(), 4.0);
    }

    #[test]
    fn test_sound_effect_volume() {
        let mut prefs = AnimationPreferences {
            volume: 50.0,
            ..Default::default()
        };
        assert_eq!(prefs.sound_effect_volume(), 0.5);

        prefs.volume = 250.0;
        assert_eq!(prefs.sound_effect_volume(), 1.0);

        prefs.sound_on = false;
        assert_eq!(prefs.sound_effect_volume(), 0.0);
    }

    #[test]
    fn test_animation_timing_respects_toggle() {
        let mut prefs = AnimationPreferences {
            animation_speed: 2.0,
            ..Default::default()
        };
        let timing = prefs.animation_timing(0.0).unwrap().unwrap();
        assert_eq!(timing.info_box.end_ms(), 760.0);

        prefs.animations_on = false;
        assert!(prefs.animation_timing(0.0).unwrap().is_none());
    }

    #[test]
    fn test_transition_timing_scales_and_disables() {
        let mut prefs = AnimationPreferences {
            animation_speed: 2.0,
            ..Default::default()
        };
        let timing = prefs.transition_timing(100.0, 0.0).unwrap();
        assert_eq!(timing.duration, 100.0);
        assert_eq!(timing.delay, 100.0);

        prefs.animations_on = false;
        let timing = prefs.transition_timing(100.0, 0.0).unwrap();
        assert_eq!(timing.duration, 0.0);
        assert_eq!(timing.delay, 0.0);
    }

    #[test]
    fn test_merge_patch() {
        let mut prefs = AnimationPreferences::default();
        let patch = PreferencesPatch {
            sound_on: Some(false),
            volume: Some(20.0),
            ..Default::default()
        };
        prefs.merge(&patch);
        assert!(!prefs.sound_on);
        assert_eq!(prefs.volume, 20.0);
        assert!(prefs.animations_on);
        assert_eq!(prefs.animation_speed, 1.0);
    }
}
